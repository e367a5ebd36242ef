//! Rock-paper-scissors rules.
//!
//! Everything here is pure: no clocks, no I/O, no shared state.
//!
//! ## Types
//!
//! - [`Gesture`]: Rock, Paper, or Scissors. Absence is `Option::None`.
//! - [`Outcome`]: Win, Lose, or Tie from the player's point of view.
//!
//! ## Rules
//!
//! - [`resolve`]: The winner rule over possibly-absent gestures
//! - [`Gesture::sample`]: The computer's uniform choice
mod gesture;
mod outcome;

pub use gesture::*;
pub use outcome::*;
