use tokio::sync::mpsc::UnboundedSender;

/// User intent forwarded from a front end to the Room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a new round, abandoning any round in progress.
    Start,
    /// Return to Idle, cancelling any pending tick.
    Reset,
    /// Zero the score. History is kept.
    ResetTally,
    /// Stop the room loop.
    Quit,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Reset => write!(f, "reset"),
            Self::ResetTally => write!(f, "reset tally"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Cloneable write capability into a Room.
///
/// Sends never block. They fail only when the room has shut down, which is
/// reported as `false`.
#[derive(Debug, Clone)]
pub struct Control(UnboundedSender<Command>);

impl From<UnboundedSender<Command>> for Control {
    fn from(tx: UnboundedSender<Command>) -> Self {
        Self(tx)
    }
}

impl Control {
    pub fn start(&self) -> bool {
        self.send(Command::Start)
    }
    pub fn reset(&self) -> bool {
        self.send(Command::Reset)
    }
    pub fn reset_tally(&self) -> bool {
        self.send(Command::ResetTally)
    }
    pub fn quit(&self) -> bool {
        self.send(Command::Quit)
    }
    pub fn send(&self, command: Command) -> bool {
        self.0.send(command).is_ok()
    }
    /// True once the room has stopped listening.
    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }
}
