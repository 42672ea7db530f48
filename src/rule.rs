use std::fmt;
use std::str::FromStr;

use crate::automata_dsl::{conways_game_of_life, highlife, Env, Statement};
use crate::error::CubeError;

pub const MAX_NEIGHBORS: usize = 8;

/// `table[alive][neighbors]` is whether the cell is alive next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    table: [[bool; MAX_NEIGHBORS + 1]; 2],
}

impl Rule {
    pub fn dead() -> Self {
        Self {
            table: [[false; MAX_NEIGHBORS + 1]; 2],
        }
    }

    pub fn from_birth_survive(birth: &[usize], survive: &[usize]) -> Result<Self, CubeError> {
        let mut rule = Self::dead();
        for (alive, counts) in [(false, birth), (true, survive)] {
            for &count in counts {
                if count > MAX_NEIGHBORS {
                    return Err(CubeError::rule(
                        &format!("{:?}/{:?}", birth, survive),
                        format!("neighbor count {} is above {}", count, MAX_NEIGHBORS),
                    ));
                }
                rule.set(alive, count, true);
            }
        }
        Ok(rule)
    }

    pub fn conway() -> Self {
        let mut rule = Self::dead();
        rule.set(false, 3, true);
        rule.set(true, 2, true);
        rule.set(true, 3, true);
        rule
    }

    /// Evaluates `statement` for every `(alive, neighbors)` pair.
    pub fn from_statement(statement: &Statement) -> Self {
        let mut rule = Self::dead();
        for alive in [false, true] {
            for count in 0..=MAX_NEIGHBORS {
                let env = Env {
                    alive,
                    neighbors: count as u32,
                };
                rule.set(alive, count, statement.eval(&env));
            }
        }
        rule
    }

    /// Rules selectable by name, each written as a DSL statement.
    pub fn named(name: &str) -> Option<Self> {
        let statement = match name.trim().to_ascii_lowercase().as_str() {
            "conway" => conways_game_of_life(),
            "highlife" => highlife(),
            _ => return None,
        };
        Some(Self::from_statement(&statement))
    }

    pub fn next(&self, alive: bool, neighbors: usize) -> bool {
        assert!(
            neighbors <= MAX_NEIGHBORS,
            "a cube cell cannot have {} live neighbors",
            neighbors
        );
        self.table[alive as usize][neighbors]
    }

    pub fn set(&mut self, alive: bool, neighbors: usize, next: bool) {
        assert!(neighbors <= MAX_NEIGHBORS);
        self.table[alive as usize][neighbors] = next;
    }

    fn counts(&self, alive: bool) -> impl Iterator<Item = usize> + '_ {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.table[alive as usize][n])
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "B")?;
        for n in self.counts(false) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in self.counts(true) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Parses a rule name (see [`Rule::named`]) or `B3/S23` style notation. The
/// halves may come in either order and either list may be empty.
impl FromStr for Rule {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rule) = Self::named(s) {
            return Ok(rule);
        }

        let mut birth = None;
        let mut survive = None;

        for part in s.trim().split('/') {
            let mut chars = part.trim().chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(CubeError::rule(s, format!("unexpected section {:?}", part))),
            };
            if slot.is_some() {
                return Err(CubeError::rule(s, "section given twice"));
            }
            let counts = chars
                .map(|c| match c.to_digit(10) {
                    Some(n) if n as usize <= MAX_NEIGHBORS => Ok(n as usize),
                    _ => Err(CubeError::rule(s, format!("bad neighbor count {:?}", c))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            *slot = Some(counts);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Self::from_birth_survive(&birth, &survive),
            _ => Err(CubeError::rule(s, "expected both a B and an S section")),
        }
    }
}
