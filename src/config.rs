use std::env;

use log::info;

use crate::cell::CellCoord;
use crate::error::CubeError;
use crate::rule::Rule;
use crate::sync::Palette;

pub const FACE_SIZE_VAR: &str = "LIFECUBE_FACE_SIZE";
pub const RULE_VAR: &str = "LIFECUBE_RULE";
pub const TICKS_VAR: &str = "LIFECUBE_TICKS";
pub const RANDOM_VAR: &str = "LIFECUBE_RANDOM";

/// How the cube is populated at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    Cells(Vec<CellCoord>),
    /// Every cell alive with the given probability.
    Random(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CubeConfig {
    pub face_width: usize,
    pub face_height: usize,
    pub ticks_per_generation: u32,
    pub rule: Rule,
    pub seed: Seed,
    pub highlight: bool,
    pub palette: Palette,
}

/// A glider on face 0 heading for the seam with face 5, plus a blinker
/// sitting across the seam between faces 4 and 5.
pub fn default_seed() -> Vec<CellCoord> {
    vec![
        CellCoord::new(0, 14, 10),
        CellCoord::new(0, 15, 9),
        CellCoord::new(0, 13, 8),
        CellCoord::new(0, 14, 8),
        CellCoord::new(0, 15, 8),
        CellCoord::new(4, 19, 5),
        CellCoord::new(4, 19, 6),
        CellCoord::new(4, 19, 7),
    ]
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            face_width: 20,
            face_height: 20,
            ticks_per_generation: 10,
            rule: Rule::conway(),
            seed: Seed::Cells(default_seed()),
            highlight: true,
            palette: Palette::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CubeError> {
    value.trim().parse().map_err(|_| CubeError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Fill probabilities must lie in `0..=1`.
pub(crate) fn check_probability(key: &str, p: f32) -> Result<f32, CubeError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(CubeError::InvalidConfig {
            key: key.to_string(),
            value: p.to_string(),
        })
    }
}

impl CubeConfig {
    /// Applies overrides from a key lookup. Unset keys keep their current
    /// values.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, CubeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(FACE_SIZE_VAR) {
            let size: usize = parse_var(FACE_SIZE_VAR, &value)?;
            self.face_width = size;
            self.face_height = size;
        }
        if let Some(value) = lookup(RULE_VAR) {
            self.rule = value.parse()?;
        }
        if let Some(value) = lookup(TICKS_VAR) {
            self.ticks_per_generation = parse_var(TICKS_VAR, &value)?;
        }
        if let Some(value) = lookup(RANDOM_VAR) {
            let p = parse_var(RANDOM_VAR, &value)?;
            self.seed = Seed::Random(check_probability(RANDOM_VAR, p)?);
        }
        Ok(self)
    }

    pub fn from_env() -> Result<Self, CubeError> {
        let config = Self::default().with_overrides(|key| env::var(key).ok())?;
        info!(
            "Cube {}x{}, rule {}, {} ticks per generation",
            config.face_width, config.face_height, config.rule, config.ticks_per_generation
        );
        Ok(config)
    }
}
