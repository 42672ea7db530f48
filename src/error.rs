use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[fail(display = "invalid face dimensions {}x{}", width, height)]
    InvalidDimensions { width: usize, height: usize },

    #[fail(display = "invalid rule {:?}: {}", rule, reason)]
    InvalidRule { rule: String, reason: String },

    #[fail(display = "seed cell (face {}, x {}, y {}) is outside the cube", face, x, y)]
    SeedOutOfBounds { face: usize, x: usize, y: usize },

    #[fail(display = "ticks per generation must be at least 1")]
    InvalidTickRate,

    #[fail(display = "invalid value {:?} for {}", value, key)]
    InvalidConfig { key: String, value: String },
}

impl CubeError {
    pub(crate) fn rule(rule: &str, reason: impl Into<String>) -> Self {
        CubeError::InvalidRule {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}
