use rand::SeedableRng;
use rand::rngs::SmallRng;
use rps_gameplay::*;
use rps_gameroom::*;

/// The computer player: a uniform pick among the three gestures, with no
/// memory of earlier rounds.
pub struct Uniform(SmallRng);

impl Uniform {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Opponent for Uniform {
    fn choose(&mut self) -> Gesture {
        Gesture::sample(&mut self.0)
    }
}
