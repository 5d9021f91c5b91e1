//! Five-card poker hand classification.
//!
//! A [`Hand`] holds exactly five [`Card`]s and classifies itself into one of
//! the nine [`Kind`] categories, from high card up to straight flush. Two
//! hands order by category alone via [`Hand::compare`]; tie-breaking within
//! a category (e.g. between two flushes) is deliberately out of scope.
//!
//! ```
//! use pokerhand::{Hand, Kind};
//! use std::cmp::Ordering;
//!
//! let full_house = Hand::from_string("TD TC TH 7C 7D").unwrap();
//! assert_eq!(full_house.kind(), Kind::FullHouse);
//!
//! let flush = Hand::from_string("2H 5H 9H JH KH").unwrap();
//! assert_eq!(flush.compare(&full_house), Ordering::Less);
//! ```
//!
//! Two documented loosenesses: duplicate cards within a hand are not
//! rejected, and two-pair detection is disabled by default (see
//! [`TwoPairRule`]), so two-pair hands classify as [`Kind::Pair`] unless
//! detection is opted into.

pub mod cards;

pub use cards::{Card, Hand, HandError, Kind, Rank, Suit, TwoPairRule};
