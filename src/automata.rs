use log::{debug, info};

use crate::cell::{CellCoord, FaceDims};
use crate::error::CubeError;
use crate::rule::Rule;
use crate::topology::Topology;

struct DoubleBuffer {
    buffers: [Vec<bool>; 2],
    i: usize,
}

impl DoubleBuffer {
    fn new(len: usize) -> Self {
        Self {
            buffers: [vec![false; len], vec![false; len]],
            i: 0,
        }
    }

    fn read(&self) -> &[bool] {
        &self.buffers[self.i]
    }

    fn read_mut(&mut self) -> &mut [bool] {
        &mut self.buffers[self.i]
    }

    /// The current generation alongside the buffer the next one goes into.
    fn split(&mut self) -> (&[bool], &mut [bool]) {
        let [first, second] = &mut self.buffers;
        if self.i == 0 {
            (&first[..], &mut second[..])
        } else {
            (&second[..], &mut first[..])
        }
    }

    fn next(&mut self) {
        self.i = (self.i + 1) % 2;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub generation: u64,
    pub births: usize,
    pub deaths: usize,
    pub alive: usize,
}

/// Life on the cube surface.
pub struct Automata {
    topology: Topology,
    rule: Rule,
    buffer: DoubleBuffer,
    generation: u64,
}

impl Automata {
    pub fn new(topology: Topology, rule: Rule) -> Self {
        let buffer = DoubleBuffer::new(topology.len());
        Self {
            topology,
            rule,
            buffer,
            generation: 0,
        }
    }

    pub fn dims(&self) -> &FaceDims {
        self.topology.dims()
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn rule_mut(&mut self) -> &mut Rule {
        &mut self.rule
    }

    /// The current generation, one flag per cell in flat index order.
    pub fn state(&self) -> &[bool] {
        self.buffer.read()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Which of the two buffers currently holds the live generation.
    pub fn front(&self) -> usize {
        self.buffer.i
    }

    pub fn is_alive(&self, cell: &CellCoord) -> bool {
        self.state()[self.dims().index(cell)]
    }

    pub fn set(&mut self, cell: &CellCoord, alive: bool) {
        let index = self.dims().index(cell);
        self.buffer.read_mut()[index] = alive;
    }

    pub fn toggle(&mut self, cell: &CellCoord) -> bool {
        let index = self.dims().index(cell);
        let state = self.buffer.read_mut();
        state[index] = !state[index];
        state[index]
    }

    pub fn seed(&mut self, cells: &[CellCoord]) -> Result<(), CubeError> {
        let dims = *self.dims();
        let indices = cells
            .iter()
            .map(|cell| dims.checked_index(cell))
            .collect::<Result<Vec<_>, _>>()?;
        let state = self.buffer.read_mut();
        for index in indices {
            state[index] = true;
        }
        debug!("Seeded {} cells", cells.len());
        Ok(())
    }

    /// Replaces the current generation with random noise, each cell alive
    /// with probability `p`.
    pub fn randomize(&mut self, p: f32) {
        for cell in self.buffer.read_mut() {
            *cell = rand::random::<f32>() <= p;
        }
        info!("Randomized cube with p = {}: {} alive", p, self.population());
    }

    pub fn clear(&mut self) {
        self.buffer.read_mut().fill(false);
    }

    pub fn population(&self) -> usize {
        self.state().iter().filter(|&&alive| alive).count()
    }

    pub fn step(&mut self) -> StepStats {
        let mut stats = StepStats {
            generation: self.generation + 1,
            ..StepStats::default()
        };

        let (current, next) = self.buffer.split();
        for (i, cell) in next.iter_mut().enumerate() {
            let neighbors = self
                .topology
                .neighbors(i)
                .iter()
                .filter(|&&n| current[n])
                .count();
            *cell = self.rule.next(current[i], neighbors);

            match (current[i], *cell) {
                (false, true) => stats.births += 1,
                (true, false) => stats.deaths += 1,
                _ => {}
            }
            stats.alive += *cell as usize;
        }

        self.buffer.next();
        self.generation = stats.generation;
        debug!("{:?}", stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automata(size: usize) -> Automata {
        let dims = FaceDims::new(size, size).unwrap();
        Automata::new(Topology::build(dims), Rule::conway())
    }

    #[test]
    fn dead_cube_stays_dead() {
        let mut automata = automata(6);
        let stats = automata.step();
        assert_eq!(stats.alive, 0);
        assert!(automata.state().iter().all(|&alive| !alive));
    }

    #[test]
    fn stepping_is_deterministic() {
        let mut a = automata(8);
        a.randomize(0.3);
        let mut b = automata(8);
        for face in 0..6 {
            for y in 0..8 {
                for x in 0..8 {
                    let cell = CellCoord::new(face, x, y);
                    b.set(&cell, a.is_alive(&cell));
                }
            }
        }
        a.step();
        b.step();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn buffers_alternate() {
        let mut automata = automata(4);
        let start = automata.front();
        for n in 1..=5u64 {
            automata.step();
            assert_eq!(automata.generation(), n);
            assert_eq!(automata.front() == start, n % 2 == 0);
        }
    }

    #[test]
    fn step_reads_only_the_previous_generation() {
        // A lone vertical blinker: an in-place update would let the newly
        // born cells feed into their neighbors within the same step.
        let mut automata = automata(8);
        let cells = [CellCoord::new(3, 4, 3), CellCoord::new(3, 4, 4), CellCoord::new(3, 4, 5)];
        automata.seed(&cells).unwrap();

        let stats = automata.step();
        assert_eq!((stats.births, stats.deaths, stats.alive), (2, 2, 3));
        for x in 3..=5 {
            assert!(automata.is_alive(&CellCoord::new(3, x, 4)));
        }

        automata.step();
        for cell in &cells {
            assert!(automata.is_alive(cell));
        }
        assert_eq!(automata.population(), 3);
    }

    #[test]
    fn seed_rejects_cells_off_the_cube() {
        let mut automata = automata(4);
        assert!(automata.seed(&[CellCoord::new(0, 4, 0)]).is_err());
        assert_eq!(automata.population(), 0);
    }

    #[test]
    fn toggle_and_clear() {
        let mut automata = automata(4);
        let cell = CellCoord::new(2, 1, 3);
        assert!(automata.toggle(&cell));
        assert!(automata.is_alive(&cell));
        assert!(!automata.toggle(&cell));
        automata.set(&cell, true);
        automata.clear();
        assert_eq!(automata.population(), 0);
    }

    #[test]
    fn rule_table_is_data() {
        let mut automata = automata(5);
        *automata.rule_mut() = "B1/S".parse().unwrap();
        automata.set(&CellCoord::new(0, 2, 2), true);
        let stats = automata.step();
        assert_eq!(stats.births, 8);
        assert_eq!(stats.deaths, 1);
    }
}
