use super::*;
use rps_core::*;
use rps_gameplay::*;
use rps_records::*;

/// Functional core of a single round.
///
/// Synchronous and I/O free. The Room feeds it starts, ticks, captures and
/// resets; it answers with [`Step`]s and, once per round, a [`Record`].
///
/// Idle → Counting(N) → … → Counting(0) → Resolved
///   ↑________________ reset ____________________|
#[derive(Debug, Clone)]
pub struct Round {
    epoch: Epoch,
    countdown: Tick,
    phase: Phase,
}

impl Round {
    pub fn new(countdown: Tick) -> Self {
        Self {
            epoch: 0,
            countdown,
            phase: Phase::Idle,
        }
    }
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    /// Current round number. Bumped on every start, so it identifies which
    /// round an armed tick belongs to.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    pub fn countdown(&self) -> Tick {
        self.countdown
    }
    /// Begin a fresh round from any phase, discarding whatever the
    /// previous round captured.
    pub fn start(&mut self) -> Epoch {
        self.epoch += 1;
        self.phase = Phase::Counting(self.countdown);
        self.epoch
    }
    /// Advance the countdown by one step.
    pub fn tick(&mut self) -> Step {
        match self.phase {
            Phase::Counting(0) => Step::Capture,
            Phase::Counting(n) => {
                self.phase = Phase::Counting(n - 1);
                match n - 1 {
                    0 => Step::Capture,
                    n => Step::Count(n),
                }
            }
            _ => Step::Stale,
        }
    }
    /// Settle the round. Legal only once the countdown has reached zero;
    /// anything else is a bug in the caller.
    pub fn resolve(&mut self, player: Option<Gesture>, computer: Gesture) -> Record {
        match self.phase {
            Phase::Counting(0) => {
                let record = Record::new(self.epoch, player, Some(computer));
                self.phase = Phase::Resolved(record.clone());
                record
            }
            ref phase => panic!("resolve called in wrong phase: {}", phase),
        }
    }
    /// Back to Idle from anywhere.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(COUNTDOWN)
    }
}
