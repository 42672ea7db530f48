use crate::error::CubeError;

/// Counts display frames down to the next generation.
#[derive(Clone, Copy, Debug)]
pub struct GenerationClock {
    countdown: u32,
    ticks_per_generation: u32,
}

impl GenerationClock {
    pub fn new(ticks_per_generation: u32) -> Result<Self, CubeError> {
        if ticks_per_generation == 0 {
            return Err(CubeError::InvalidTickRate);
        }
        Ok(Self {
            countdown: ticks_per_generation,
            ticks_per_generation,
        })
    }

    /// Returns true when a generation is due.
    pub fn tick(&mut self) -> bool {
        self.countdown -= 1;
        if self.countdown == 0 {
            self.reset();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.countdown = self.ticks_per_generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_every_n_ticks() {
        let mut clock = GenerationClock::new(3).unwrap();
        let fired: Vec<bool> = (0..7).map(|_| clock.tick()).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn one_tick_fires_every_frame() {
        let mut clock = GenerationClock::new(1).unwrap();
        assert!((0..4).all(|_| clock.tick()));
    }

    #[test]
    fn zero_ticks_is_rejected() {
        assert_eq!(GenerationClock::new(0).unwrap_err(), CubeError::InvalidTickRate);
    }
}
