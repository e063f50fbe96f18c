use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// A single relocation from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

impl Move {
    #[must_use]
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Same endpoints, opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    #[must_use]
    pub fn is_inverse_of(self, other: Move) -> bool {
        self.reversed() == other
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_swaps_endpoints() {
        let mv = Move::new(Cell(0), Cell(1));
        assert_eq!(mv.reversed(), Move::new(Cell(1), Cell(0)));
        assert!(mv.is_inverse_of(mv.reversed()));
        assert!(!mv.is_inverse_of(mv));
        assert_eq!(mv.to_string(), "A1 -> B1");
    }

    #[test]
    fn cells_serialize_as_labels() {
        let mv = Move::new(Cell(12), Cell(7));
        let text = ron::to_string(&mv).unwrap();
        assert!(text.contains("\"C3\""), "{text}");
        assert!(text.contains("\"C2\""), "{text}");
        assert_eq!(ron::from_str::<Move>(&text).unwrap(), mv);
        assert!(ron::from_str::<Move>("(from:\"C3\",to:\"Z2\")").is_err());
    }
}
