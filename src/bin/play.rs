//! Play Binary
//!
//! Rock-paper-scissors against the computer in the terminal.
//! Interactive menu by default; `--rounds N` plays N rounds unattended.
//!
//! Options: --oracle, --frames, --countdown, --interval, --rounds, --seed, --json

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use dialoguer::Select;
use roshambo::*;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;

const MENU: [&str; 4] = ["Play", "History", "Reset score", "Quit"];

/// Where the player's gesture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Random gesture, as if a camera saw one
    Mock,
    /// Pick from a terminal prompt
    Human,
    /// Classify hands from a recorded landmark file
    Replay,
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Rock-paper-scissors against the computer")]
struct Args {
    /// Gesture source for the player
    #[arg(long, value_enum, default_value_t = Source::Human)]
    oracle: Source,
    /// Landmark recording (JSON) for the replay oracle
    #[arg(long)]
    frames: Option<PathBuf>,
    /// Countdown ticks before capture
    #[arg(long, default_value_t = COUNTDOWN)]
    countdown: Tick,
    /// Milliseconds between ticks
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64)]
    interval: u64,
    /// Play this many rounds, then exit
    #[arg(long)]
    rounds: Option<usize>,
    /// Seed the computer (and the mock oracle) for a repeatable session
    #[arg(long)]
    seed: Option<u64>,
    /// Print the session ledger as JSON on exit
    #[arg(long)]
    json: bool,
    /// Terminal log level
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    log: log::LevelFilter,
    /// Also write DEBUG logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> RoundConfig {
        RoundConfig {
            countdown: self.countdown,
            interval: Duration::from_millis(self.interval),
        }
    }
    fn oracle(&self) -> anyhow::Result<Box<dyn Oracle>> {
        let oracle: Box<dyn Oracle> = match (self.oracle, self.seed) {
            (Source::Human, _) => Box::new(Human),
            (Source::Mock, Some(seed)) => Box::new(Mock::seeded(seed.wrapping_add(1))),
            (Source::Mock, None) => Box::new(Mock::default()),
            (Source::Replay, _) => self
                .frames
                .as_ref()
                .map(|path| Box::new(Landmark::new(Replay::open(path))))
                .context("--frames is required for the replay oracle")?,
        };
        Ok(oracle)
    }
    fn opponent(&self) -> Box<dyn Opponent> {
        match self.seed {
            Some(seed) => Box::new(Uniform::seeded(seed)),
            None => Box::new(Uniform::default()),
        }
    }
}

/// Start one round, wait for it to settle, then clear the table for the
/// next one. None once the room stops or refuses to play.
async fn round(control: &Control, signals: &mut UnboundedReceiver<Signal>) -> Option<Record> {
    while signals.try_recv().is_ok() {}
    if !control.start() {
        return None;
    }
    let record = loop {
        match signals.recv().await {
            Some(Signal::Resolved(record)) => break record,
            Some(Signal::Idle) => continue,
            Some(Signal::Alert(_)) | None => return None,
        }
    };
    again(control, signals).await.then_some(record)
}

/// Play again: send the room back to Idle and wait until it gets there.
async fn again(control: &Control, signals: &mut UnboundedReceiver<Signal>) -> bool {
    if !control.reset() {
        return false;
    }
    loop {
        match signals.recv().await {
            Some(Signal::Idle) => return true,
            Some(_) => continue,
            None => return false,
        }
    }
}

async fn autoplay(control: &Control, signals: &mut UnboundedReceiver<Signal>, rounds: usize) {
    for _ in 0..rounds {
        if round(control, signals).await.is_none() {
            break;
        }
    }
}

async fn menu(
    control: &Control,
    signals: &mut UnboundedReceiver<Signal>,
    panel: &Panel,
) -> anyhow::Result<()> {
    loop {
        let choice = tokio::task::spawn_blocking(|| {
            Select::new()
                .with_prompt("Rock Paper Scissors")
                .items(&MENU)
                .default(0)
                .interact_opt()
        })
        .await??;
        match choice {
            Some(0) => {
                round(control, signals).await;
            }
            Some(1) => match panel.lines() {
                lines if lines.is_empty() => println!("  No rounds played yet"),
                lines => lines.iter().for_each(|line| println!("  {}", line)),
            },
            Some(2) => {
                control.reset_tally();
                println!("  Score reset");
            }
            _ => return Ok(()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log, args.log_file.as_deref());
    kys();
    let (tx, mut signals) = unbounded_channel();
    let console = Console::new(tx);
    let panel = console.panel();
    let (room, control) = Room::new(
        args.config(),
        args.oracle()?,
        args.opponent(),
        Box::new(console),
    );
    let session = tokio::spawn(room.run());
    match args.rounds {
        Some(n) => autoplay(&control, &mut signals, n).await,
        None => menu(&control, &mut signals, &panel).await?,
    }
    control.quit();
    let ledger = session.await.context("room task failed")?;
    println!("  Final score: {}", ledger.tally());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&ledger)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::JoinHandle;

    fn session(
        oracle: Box<dyn Oracle>,
    ) -> (JoinHandle<Ledger>, Control, UnboundedReceiver<Signal>) {
        let (tx, rx) = unbounded_channel();
        let config = RoundConfig {
            countdown: 2,
            interval: Duration::from_millis(100),
        };
        let (room, control) = Room::new(
            config,
            oracle,
            Box::new(Uniform::seeded(7)),
            Box::new(Console::new(tx)),
        );
        (tokio::spawn(room.run()), control, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn each_round_settles_then_returns_to_idle() {
        let (room, control, mut signals) = session(Box::new(Mock::seeded(1)));
        let first = round(&control, &mut signals).await.unwrap();
        assert_eq!(first.round(), 1);
        assert!(signals.try_recv().is_err());
        let second = round(&control, &mut signals).await.unwrap();
        assert_eq!(second.round(), 2);
        control.quit();
        let ledger = room.await.unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.latest(), Some(&second));
    }
    #[tokio::test(start_paused = true)]
    async fn again_clears_a_settled_round() {
        let (room, control, mut signals) = session(Box::new(Mock::seeded(2)));
        control.start();
        loop {
            if let Some(Signal::Resolved(_)) = signals.recv().await {
                break;
            }
        }
        assert!(again(&control, &mut signals).await);
        control.quit();
        assert_eq!(room.await.unwrap().len(), 1);
        assert!(!again(&control, &mut signals).await);
    }
    #[tokio::test(start_paused = true)]
    async fn unavailable_oracle_ends_the_round() {
        let oracle = Landmark::new(Replay::open("/nonexistent/recording.json"));
        let (room, control, mut signals) = session(Box::new(oracle));
        assert!(round(&control, &mut signals).await.is_none());
        control.quit();
        assert!(room.await.unwrap().is_empty());
    }
    #[tokio::test(start_paused = true)]
    async fn autoplay_plays_the_requested_rounds() {
        let (room, control, mut signals) = session(Box::new(Mock::seeded(3)));
        autoplay(&control, &mut signals, 3).await;
        control.quit();
        let ledger = room.await.unwrap();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.tally().total(), 3);
    }
}
