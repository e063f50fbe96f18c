use std::fmt::Display;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Side {
    Musketeer,
    Guard,
}

impl Side {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Side::Musketeer => Side::Guard,
            Side::Guard => Side::Musketeer,
        }
    }

    /// Single letter used on the rendered board and in side prompts.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Side::Musketeer => 'M',
            Side::Guard => 'G',
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Musketeer => write!(f, "MUSKETEER"),
            Side::Guard => write!(f, "GUARD"),
        }
    }
}
