use rps_core::*;
use rps_gameplay::*;

/// Running win/loss/tie counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    wins: Count,
    losses: Count,
    ties: Count,
}

impl Tally {
    pub fn new(wins: Count, losses: Count, ties: Count) -> Self {
        Self { wins, losses, ties }
    }
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn losses(&self) -> Count {
        self.losses
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    pub fn total(&self) -> Count {
        self.wins + self.losses + self.ties
    }
    /// Share of counted rounds won. None before any round is counted.
    pub fn win_rate(&self) -> Option<Probability> {
        match self.total() {
            0 => None,
            n => Some(self.wins as Probability / n as Probability),
        }
    }
    /// Bumps exactly one bucket. Undetermined outcomes bump none.
    pub fn add(&mut self, outcome: Option<Outcome>) {
        match outcome {
            Some(Outcome::Win) => self.wins += 1,
            Some(Outcome::Lose) => self.losses += 1,
            Some(Outcome::Tie) => self.ties += 1,
            None => log::debug!("[tally] undetermined outcome not counted"),
        }
    }
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
