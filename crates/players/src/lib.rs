//! Gesture sources for the game room.
//!
//! Concrete types implementing [`Oracle`](rps_gameroom::Oracle) (the player's
//! side) and [`Opponent`](rps_gameroom::Opponent) (the computer's side).
//!
//! ## Oracles
//!
//! - [`Mock`]: Uniformly random gesture, standing in for a camera
//! - [`Human`]: Interactive terminal prompt (requires `cli` feature)
//! - [`Landmark`]: Finger-extension heuristic over pose-estimator output
//!
//! ## Pose Estimation
//!
//! - [`Landmarks`]: 21-point hand skeleton and its gesture classification
//! - [`Estimator`]: Black-box hand detector feeding [`Landmark`]
//! - [`Replay`]: Estimator replaying recorded frames from JSON
//!
//! ## Opponents
//!
//! - [`Uniform`]: The computer: uniform choice, optionally seeded
#[cfg(feature = "cli")]
mod human;
mod estimator;
mod landmarks;
mod mock;
mod replay;
mod uniform;

#[cfg(feature = "cli")]
pub use human::*;
pub use estimator::*;
pub use landmarks::*;
pub use mock::*;
pub use replay::*;
pub use uniform::*;
