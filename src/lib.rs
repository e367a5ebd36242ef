//! Rock-paper-scissors against the computer.
//!
//! Facade over the workspace crates:
//!
//! - [`rps_core`]: shared aliases, IDs, tunable constants, logging
//! - [`rps_gameplay`]: gestures, outcomes, the winner rule
//! - [`rps_records`]: round records, the tally, session history
//! - [`rps_gameroom`]: the round state machine and its async room
//! - [`rps_players`]: gesture oracles and the computer opponent
//!
//! With the `cli` feature, [`Console`] renders a room to the terminal.
pub use rps_core::*;
pub use rps_gameplay::*;
pub use rps_gameroom::*;
pub use rps_players::*;
pub use rps_records::*;

#[cfg(feature = "cli")]
mod console;
#[cfg(feature = "cli")]
pub use console::*;
