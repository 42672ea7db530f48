use log::{debug, info};

use crate::automata::Automata;
use crate::cell::FaceDims;
use crate::clock::GenerationClock;
use crate::config::{check_probability, CubeConfig, Seed};
use crate::cursor::Cursor;
use crate::error::CubeError;
use crate::sync::{Color, SyncBridge};
use crate::topology::Topology;

/// Everything the input layer asks for in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub dx: isize,
    pub dy: isize,
    pub dface: isize,
    pub toggle_pause: bool,
    pub toggle_highlight: bool,
    /// Flip the cell under the cursor.
    pub toggle_cell: bool,
    pub randomize: bool,
    pub clear: bool,
}

/// Owns the whole simulation and runs it one display frame at a time.
pub struct Simulation {
    automata: Automata,
    cursor: Cursor,
    clock: GenerationClock,
    bridge: SyncBridge,
    paused: bool,
    highlight: bool,
    random_p: f32,
}

impl Simulation {
    pub fn new(config: CubeConfig) -> Result<Self, CubeError> {
        let dims = FaceDims::new(config.face_width, config.face_height)?;
        let clock = GenerationClock::new(config.ticks_per_generation)?;
        let mut automata = Automata::new(Topology::build(dims), config.rule);

        let random_p = match config.seed {
            Seed::Cells(ref cells) => {
                automata.seed(cells)?;
                0.1
            }
            Seed::Random(p) => {
                let p = check_probability("seed", p)?;
                automata.randomize(p);
                p
            }
        };

        info!(
            "Simulation ready: {} cells, {} alive",
            dims.cell_count(),
            automata.population()
        );

        let mut simulation = Self {
            automata,
            cursor: Cursor::new(dims),
            clock,
            bridge: SyncBridge::new(&dims, config.palette),
            paused: false,
            highlight: config.highlight,
            random_p,
        };
        simulation.sync();
        Ok(simulation)
    }

    pub fn automata(&self) -> &Automata {
        &self.automata
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    pub fn colors(&self) -> &[Color] {
        self.bridge.colors()
    }

    /// Input, then the clock (and a step when one is due), then the color
    /// table.
    pub fn frame(&mut self, input: &FrameInput) -> &[Color] {
        self.handle_input(input);

        if !self.paused && self.clock.tick() {
            self.automata.step();
        }

        self.sync()
    }

    fn handle_input(&mut self, input: &FrameInput) {
        if input.dx != 0 || input.dy != 0 || input.dface != 0 {
            self.cursor.move_by(input.dx, input.dy, input.dface);
            debug!("Cursor at {:?}", self.cursor.cell());
        }
        if input.toggle_pause {
            self.paused = !self.paused;
            self.clock.reset();
            info!("{}", if self.paused { "Paused" } else { "Resumed" });
        }
        if input.toggle_highlight {
            self.highlight = !self.highlight;
        }
        if input.clear {
            self.automata.clear();
        }
        if input.randomize {
            self.automata.randomize(self.random_p);
        }
        if input.toggle_cell {
            let cell = self.cursor.cell();
            let alive = self.automata.toggle(&cell);
            debug!("Painted {:?} {}", cell, if alive { "alive" } else { "dead" });
        }
    }

    fn sync(&mut self) -> &[Color] {
        let cursor = self.cursor.cell();
        self.bridge.sync(
            self.automata.topology(),
            self.automata.state(),
            &cursor,
            self.highlight,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellCoord;

    fn config(ticks: u32, seed: Vec<CellCoord>) -> CubeConfig {
        CubeConfig {
            face_width: 6,
            face_height: 6,
            ticks_per_generation: ticks,
            seed: Seed::Cells(seed),
            ..CubeConfig::default()
        }
    }

    #[test]
    fn rejects_bad_configuration() {
        let mut bad = config(1, vec![]);
        bad.face_width = 0;
        assert!(Simulation::new(bad).is_err());
        assert!(Simulation::new(config(0, vec![])).is_err());
        assert!(Simulation::new(config(1, vec![CellCoord::new(6, 0, 0)])).is_err());
    }

    #[test]
    fn rejects_fill_probability_outside_unit_range() {
        for p in [2.0, -0.5, f32::NAN] {
            let bad = CubeConfig {
                seed: Seed::Random(p),
                ..CubeConfig::default()
            };
            assert!(Simulation::new(bad).is_err(), "{} accepted", p);
        }
        let full = CubeConfig {
            face_width: 3,
            face_height: 3,
            seed: Seed::Random(1.0),
            ..CubeConfig::default()
        };
        assert_eq!(Simulation::new(full).unwrap().automata().population(), 54);
    }

    #[test]
    fn steps_on_the_clock() {
        let blinker = vec![CellCoord::new(2, 2, 1), CellCoord::new(2, 2, 2), CellCoord::new(2, 2, 3)];
        let mut simulation = Simulation::new(config(2, blinker)).unwrap();
        simulation.frame(&FrameInput::default());
        assert_eq!(simulation.automata().generation(), 0);
        simulation.frame(&FrameInput::default());
        assert_eq!(simulation.automata().generation(), 1);
        assert!(simulation.automata().is_alive(&CellCoord::new(2, 1, 2)));
    }

    #[test]
    fn paused_simulation_never_steps() {
        let mut simulation = Simulation::new(config(1, vec![])).unwrap();
        let pause = FrameInput {
            toggle_pause: true,
            ..FrameInput::default()
        };
        simulation.frame(&pause);
        assert!(simulation.paused());
        for _ in 0..5 {
            simulation.frame(&FrameInput::default());
        }
        assert_eq!(simulation.automata().generation(), 0);

        simulation.frame(&pause);
        assert_eq!(simulation.automata().generation(), 1);
    }

    #[test]
    fn painting_shows_up_in_the_same_frame() {
        let mut simulation = Simulation::new(CubeConfig {
            ticks_per_generation: 100,
            seed: Seed::Cells(vec![]),
            ..CubeConfig::default()
        })
        .unwrap();
        let alive = simulation.bridge.palette().alive;
        let input = FrameInput {
            dx: 3,
            dy: 4,
            dface: 2,
            toggle_cell: true,
            ..FrameInput::default()
        };
        let cell = CellCoord::new(2, 3, 4);
        let index = simulation.automata().dims().index(&cell);
        let colors = simulation.frame(&input);
        assert_eq!(colors[index], alive);
        assert_eq!(simulation.cursor().cell(), cell);
    }

    #[test]
    fn highlight_toggle() {
        let mut simulation = Simulation::new(config(50, vec![])).unwrap();
        assert!(simulation.highlight());
        let active = simulation.bridge.palette().active;
        assert!(simulation.colors().contains(&active));

        simulation.frame(&FrameInput {
            toggle_highlight: true,
            ..FrameInput::default()
        });
        assert!(!simulation.colors().contains(&active));
    }
}
