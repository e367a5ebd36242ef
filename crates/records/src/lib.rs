//! Session history and scoring.
//!
//! Everything a session remembers lives here, owned by a single [`Ledger`].
//! Nothing is persisted; a ledger lives and dies with its room.
//!
//! ## Core Types
//!
//! - [`Record`]: One completed round: both gestures, outcome, timestamp
//! - [`Tally`]: Running win/loss/tie counters
//! - [`Ledger`]: Owner of the tally and the most-recent-first history
mod ledger;
mod record;
mod tally;

pub use ledger::*;
pub use record::*;
pub use tally::*;
