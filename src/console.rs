use colored::Colorize;
use rps_core::*;
use rps_gameplay::*;
use rps_gameroom::*;
use rps_records::*;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

const BAR: usize = 20;

/// What the console reports back to whoever is driving the room.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Idle,
    Resolved(Record),
    Alert(String),
}

/// Latest rendering of the history panel, newest first.
/// Shared with the menu so it can be shown on demand.
#[derive(Debug, Clone, Default)]
pub struct Panel(Arc<Mutex<Vec<String>>>);

impl Panel {
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
    fn replace(&self, lines: Vec<String>) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = lines;
    }
}

/// Terminal viewer. Prints each phase once, keeps the history panel
/// current, and signals when a round settles.
pub struct Console {
    shown: Option<Phase>,
    panel: Panel,
    signals: UnboundedSender<Signal>,
}

impl Console {
    pub fn new(signals: UnboundedSender<Signal>) -> Self {
        Self {
            shown: None,
            panel: Panel::default(),
            signals,
        }
    }
    pub fn panel(&self) -> Panel {
        self.panel.clone()
    }
    fn signal(&self, signal: Signal) {
        if self.signals.send(signal).is_err() {
            log::trace!("[console] nobody listening");
        }
    }
    fn line(record: &Record) -> String {
        format!("{}  {}", record.clock(), record)
    }
    fn headline(outcome: Option<Outcome>) -> String {
        match outcome {
            Some(o @ Outcome::Win) => o.headline().green().bold().to_string(),
            Some(o @ Outcome::Lose) => o.headline().red().bold().to_string(),
            Some(o @ Outcome::Tie) => o.headline().yellow().bold().to_string(),
            None => "No result".dimmed().to_string(),
        }
    }
    fn hand(gesture: Option<Gesture>) -> String {
        match gesture {
            Some(g) => format!("{} {}", g.emoji(), g),
            None => String::from("? nothing"),
        }
    }
    /// Win rate as a fixed-width bar. Empty before anything is counted.
    fn bar(rate: Option<Probability>) -> String {
        match rate {
            None => format!("[{}]  --", ".".repeat(BAR)),
            Some(p) => {
                let filled = (p * BAR as Probability).round() as usize;
                format!(
                    "[{}{}] {:>3.0}%",
                    "#".repeat(filled),
                    ".".repeat(BAR - filled.min(BAR)),
                    p * 100.
                )
            }
        }
    }
    fn settle(&self, record: &Record, tally: &Tally) {
        println!();
        println!(
            "  You: {:<14} Computer: {}",
            Self::hand(record.player()),
            Self::hand(record.computer())
        );
        println!("  {}", Self::headline(record.outcome()));
        if let Some(outcome) = record.outcome() {
            println!("  {}", outcome.tagline());
        }
        println!("  {}", tally);
        println!("  {}", Self::bar(tally.win_rate()));
        println!();
    }
}

impl Viewer for Console {
    fn render(&mut self, view: &View<'_>) {
        self.panel.replace(view.history().map(Self::line).collect());
        if self.shown.as_ref() == Some(view.phase()) {
            return;
        }
        self.shown = Some(view.phase().clone());
        match view.phase() {
            Phase::Idle => self.signal(Signal::Idle),
            Phase::Counting(0) => println!("  {}", "Shoot!".bold()),
            Phase::Counting(n) => println!("  Get ready... {}", n),
            Phase::Resolved(record) => {
                self.settle(record, view.tally());
                self.signal(Signal::Resolved(record.clone()));
            }
        }
    }
    fn alert(&mut self, message: &str) {
        eprintln!("  {}", message.red());
        self.signal(Signal::Alert(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    fn record(round: Epoch, player: Option<Gesture>) -> Record {
        Record::new(round, player, Some(Gesture::Scissors))
    }

    #[test]
    fn each_phase_signals_once() {
        let (tx, mut rx) = unbounded_channel();
        let mut console = Console::new(tx);
        let mut ledger = Ledger::default();
        console.render(&View::new(&Phase::Idle, &ledger));
        console.render(&View::new(&Phase::Idle, &ledger));
        console.render(&View::new(&Phase::Counting(2), &ledger));
        let won = record(1, Some(Gesture::Rock));
        ledger.record(won.clone());
        let phase = Phase::Resolved(won.clone());
        console.render(&View::new(&phase, &ledger));
        ledger.reset_tally();
        console.render(&View::new(&phase, &ledger));
        assert_eq!(rx.try_recv().ok(), Some(Signal::Idle));
        assert_eq!(rx.try_recv().ok(), Some(Signal::Resolved(won)));
        assert!(rx.try_recv().is_err());
    }
    #[test]
    fn alert_is_forwarded() {
        let (tx, mut rx) = unbounded_channel();
        let mut console = Console::new(tx);
        console.alert("gesture oracle unavailable: no camera");
        assert_eq!(
            rx.try_recv().ok(),
            Some(Signal::Alert(String::from("gesture oracle unavailable: no camera")))
        );
    }
    #[test]
    fn panel_follows_history_newest_first() {
        let (tx, _rx) = unbounded_channel();
        let mut console = Console::new(tx);
        let panel = console.panel();
        let mut ledger = Ledger::default();
        ledger.record(record(1, Some(Gesture::Rock)));
        ledger.record(record(2, None));
        console.render(&View::new(&Phase::Idle, &ledger));
        let lines = panel.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("#2"));
        assert!(lines[0].contains("unknown"));
        assert!(lines[1].contains("#1"));
    }
    #[test]
    fn bar_scales_with_win_rate() {
        assert_eq!(Console::bar(None), format!("[{}]  --", ".".repeat(BAR)));
        assert_eq!(Console::bar(Some(1.)), format!("[{}] 100%", "#".repeat(BAR)));
        assert_eq!(
            Console::bar(Some(0.5)),
            format!("[{}{}]  50%", "#".repeat(BAR / 2), ".".repeat(BAR / 2))
        );
    }
}
