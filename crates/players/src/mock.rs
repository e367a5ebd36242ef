use rand::SeedableRng;
use rand::rngs::SmallRng;
use rps_gameplay::*;
use rps_gameroom::*;

/// Stand-in for a camera: throws a uniformly random gesture every round.
/// Always ready, never absent.
pub struct Mock(SmallRng);

impl Mock {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Mock {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

#[async_trait::async_trait]
impl Oracle for Mock {
    async fn capture(&mut self) -> Option<Gesture> {
        Some(Gesture::sample(&mut self.0))
    }
}
