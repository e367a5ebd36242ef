//! Async runtime for a rock-paper-scissors session.
//!
//! A single [`Room`] task owns every piece of mutable session state and
//! drives rounds forward. Front ends talk to it through a [`Control`]
//! handle and observe it through a [`Viewer`].
//!
//! ## Architecture
//!
//! - [`Room`]: Imperative shell: command loop, timer, capture, recording
//! - [`Round`]: Functional core: the per-round state machine
//! - [`Timer`]: Single-shot countdown deadline tagged with a round epoch
//! - [`Control`]: Cloneable handle that enqueues [`Command`]s
//!
//! ## Collaborators
//!
//! - [`Oracle`]: Supplies the player's gesture (mock, prompt, landmarks)
//! - [`Opponent`]: Supplies the computer's gesture
//! - [`Viewer`]: Renders read-only [`View`]s and surfaces alerts
mod command;
mod oracle;
mod phase;
mod room;
mod round;
mod timer;
mod viewer;

pub use command::*;
pub use oracle::*;
pub use phase::*;
pub use room::*;
pub use round::*;
pub use timer::*;
pub use viewer::*;
