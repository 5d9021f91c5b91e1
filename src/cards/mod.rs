pub mod basic;
pub mod hands;

pub use basic::{Card, Rank, Suit};
pub use hands::{Hand, HandError, Kind, TwoPairRule};
