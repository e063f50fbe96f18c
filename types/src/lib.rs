pub mod bitboard;
pub mod cell;
pub mod gamemove;
pub mod side;

pub use bitboard::*;
pub use cell::*;
pub use gamemove::*;
pub use side::*;
