use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;
use rps_core::*;
use rps_gameplay::*;

/// One completed round.
///
/// The outcome is derived from the two gestures at construction and has
/// no setter.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Record {
    round: Epoch,
    player: Option<Gesture>,
    computer: Option<Gesture>,
    outcome: Option<Outcome>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    captured_at: DateTime<Utc>,
}

impl Record {
    pub fn new(round: Epoch, player: Option<Gesture>, computer: Option<Gesture>) -> Self {
        Self::at(round, player, computer, Utc::now())
    }
    pub fn at(
        round: Epoch,
        player: Option<Gesture>,
        computer: Option<Gesture>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            round,
            player,
            computer,
            outcome: resolve(player, computer),
            captured_at,
        }
    }
    pub fn round(&self) -> Epoch {
        self.round
    }
    pub fn player(&self) -> Option<Gesture> {
        self.player
    }
    pub fn computer(&self) -> Option<Gesture> {
        self.computer
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn is_determined(&self) -> bool {
        self.outcome.is_some()
    }
    /// Capture time as `HH:MM` on the local clock.
    pub fn clock(&self) -> String {
        self.clock_in(&Local)
    }
    /// Capture time as `HH:MM` in the given zone.
    pub fn clock_in<Z>(&self, zone: &Z) -> String
    where
        Z: TimeZone,
        Z::Offset: std::fmt::Display,
    {
        self.captured_at
            .with_timezone(zone)
            .format("%H:%M")
            .to_string()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} vs {} {}",
            self.round,
            Gesture::glyph(self.player),
            Gesture::glyph(self.computer),
            self.outcome.map(|o| o.label()).unwrap_or("unknown")
        )
    }
}
