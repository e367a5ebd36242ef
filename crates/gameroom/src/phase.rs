use rps_core::*;
use rps_records::*;

/// Where the current round stands.
///
/// - `Idle`: Waiting for a start
/// - `Counting(n)`: `n` ticks left before capture; `Counting(0)` awaits resolution
/// - `Resolved(record)`: Round complete, record already handed to the ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Counting(Tick),
    Resolved(Record),
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
    /// The settled record, if resolved.
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Resolved(record) => Some(record),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Counting(n) => write!(f, "counting {}", n),
            Self::Resolved(record) => write!(f, "resolved {}", record),
        }
    }
}

/// What a countdown tick asks the Room to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still counting; re-arm the timer.
    Count(Tick),
    /// Countdown hit zero; capture and resolve.
    Capture,
    /// Tick arrived outside a countdown; ignore it.
    Stale,
}
