use super::*;
use rps_records::*;
use tokio::sync::mpsc::*;

/// Live session coordinator.
///
/// Imperative shell around [`Round`] (the functional core). Owns the timer,
/// the oracle, the opponent, the viewer and the [`Ledger`], and is the only
/// writer of any of them. Runs as one task. Commands and timer expiries are
/// serialized through a single select loop; a reset lands either wholly
/// before or wholly after a tick.
pub struct Room {
    round: Round,
    timer: Timer,
    ledger: Ledger,
    oracle: Box<dyn Oracle>,
    opponent: Box<dyn Opponent>,
    viewer: Box<dyn Viewer>,
    commands: UnboundedReceiver<Command>,
}

impl Room {
    pub fn new(
        config: RoundConfig,
        oracle: Box<dyn Oracle>,
        opponent: Box<dyn Opponent>,
        viewer: Box<dyn Viewer>,
    ) -> (Self, Control) {
        let (tx, rx) = unbounded_channel();
        let room = Self {
            round: Round::new(config.countdown),
            timer: Timer::new(config.interval),
            ledger: Ledger::default(),
            oracle,
            opponent,
            viewer,
            commands: rx,
        };
        (room, Control::from(tx))
    }
    pub fn phase(&self) -> &Phase {
        self.round.phase()
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl Room {
    /// Serve commands until told to quit or every [`Control`] is dropped.
    /// Hands the session's ledger back on the way out.
    pub async fn run(mut self) -> Ledger {
        log::info!("[room] open");
        self.render();
        loop {
            tokio::select! {
                biased;
                command = self.commands.recv() => match command {
                    Some(Command::Quit) | None => break,
                    Some(command) => self.handle(command).await,
                },
                _ = self.timer.wait() => self.tick().await,
            }
        }
        self.timer.clear();
        log::info!("[room] closed after {} rounds", self.ledger.len());
        self.ledger
    }
    async fn handle(&mut self, command: Command) {
        log::debug!("[room {}] {}", self.round.epoch(), command);
        match command {
            Command::Start => self.start().await,
            Command::Reset => self.reset(),
            Command::ResetTally => self.reset_tally(),
            Command::Quit => unreachable!("quit is handled by the run loop"),
        }
    }
    async fn start(&mut self) {
        self.timer.clear();
        if let Err(e) = self.oracle.ready().await {
            log::warn!("[room] gesture oracle unavailable: {:#}", e);
            self.round.reset();
            self.viewer.alert(&format!("gesture oracle unavailable: {:#}", e));
            self.render();
            return;
        }
        let epoch = self.round.start();
        log::debug!("[room {}] counting {}", epoch, self.round.countdown());
        self.render();
        match self.round.countdown() {
            0 => self.conclude().await,
            _ => self.timer.arm(epoch),
        }
    }
    async fn tick(&mut self) {
        let Some(epoch) = self.timer.fire() else {
            return;
        };
        if epoch != self.round.epoch() {
            log::trace!("[room {}] dropping tick armed for {}", self.round.epoch(), epoch);
            return;
        }
        match self.round.tick() {
            Step::Count(n) => {
                log::trace!("[room {}] counting {}", epoch, n);
                self.timer.arm(epoch);
                self.render();
            }
            Step::Capture => {
                self.render();
                self.conclude().await;
            }
            Step::Stale => log::trace!("[room {}] stale tick in {}", epoch, self.round.phase()),
        }
    }
    async fn conclude(&mut self) {
        self.timer.clear();
        let player = self.oracle.capture().await;
        let computer = self.opponent.choose();
        log::debug!(
            "[room {}] captured {} against {}",
            self.round.epoch(),
            player.map(|g| g.label()).unwrap_or("nothing"),
            computer
        );
        let record = self.round.resolve(player, computer);
        log::info!("[room {}] {}", record.round(), record);
        self.ledger.record(record);
        self.render();
    }
    fn reset(&mut self) {
        self.timer.clear();
        self.round.reset();
        self.render();
    }
    fn reset_tally(&mut self) {
        self.ledger.reset_tally();
        self.render();
    }
    fn render(&mut self) {
        self.viewer
            .render(&View::new(self.round.phase(), &self.ledger));
    }
}
