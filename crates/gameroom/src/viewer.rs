use super::*;
use rps_records::*;

/// Read-only projection of a room, handed to viewers after every change.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    phase: &'a Phase,
    ledger: &'a Ledger,
}

impl<'a> View<'a> {
    pub fn new(phase: &'a Phase, ledger: &'a Ledger) -> Self {
        Self { phase, ledger }
    }
    pub fn phase(&self) -> &'a Phase {
        self.phase
    }
    pub fn tally(&self) -> &'a Tally {
        self.ledger.tally()
    }
    pub fn history(&self) -> impl Iterator<Item = &'a Record> {
        self.ledger.history()
    }
    /// Most recently completed round, whether or not it is still on screen.
    pub fn latest(&self) -> Option<&'a Record> {
        self.ledger.latest()
    }
    pub fn ledger(&self) -> &'a Ledger {
        self.ledger
    }
}

/// Presentation layer. Receives views, never mutates the room directly;
/// user intent goes back through a [`Control`].
pub trait Viewer: Send {
    fn render(&mut self, view: &View<'_>);
    /// Surface a failure the user needs to see, e.g. a missing camera.
    fn alert(&mut self, message: &str);
}

/// Viewer that discards everything. Useful for headless sessions.
#[derive(Debug, Default)]
pub struct Blind;

impl Viewer for Blind {
    fn render(&mut self, _: &View<'_>) {}
    fn alert(&mut self, _: &str) {}
}
