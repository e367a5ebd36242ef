use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rps_core::Arbitrary;

/// A hand shape thrown in a round.
///
/// Absence (no detection, or not thrown yet) is `Option<Gesture>::None`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// Closed fist. Beats Scissors, loses to Paper.
    Rock,
    /// Flat hand. Beats Rock, loses to Scissors.
    Paper,
    /// Index and middle finger. Beats Paper, loses to Rock.
    Scissors,
}

impl Gesture {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The gesture this one defeats.
    pub const fn prey(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The gesture that defeats this one.
    pub const fn predator(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == *other
    }
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Rock => "✊",
            Self::Paper => "✋",
            Self::Scissors => "✌️",
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
    /// Glyph for a possibly-absent gesture.
    pub fn glyph(gesture: Option<Self>) -> &'static str {
        gesture.as_ref().map(Self::emoji).unwrap_or("?")
    }
    /// Sample uniformly from a caller-supplied generator.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random()
    }
}

impl Distribution<Gesture> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gesture {
        match rng.random_range(0..3) {
            0 => Gesture::Rock,
            1 => Gesture::Paper,
            _ => Gesture::Scissors,
        }
    }
}

/// The computer's choice: uniform over all three, never absent.
impl Arbitrary for Gesture {
    fn random() -> Self {
        rand::random()
    }
}

impl TryFrom<&str> for Gesture {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("invalid gesture: {}", other)),
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
