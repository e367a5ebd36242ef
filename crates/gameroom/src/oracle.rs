use rps_gameplay::*;

/// Source of the player's gesture.
///
/// Implementations may roll dice, prompt a human, or run pose estimation on
/// a camera frame. The Room doesn't care which: it awaits exactly one
/// `capture` per round and records whatever comes back.
#[async_trait::async_trait]
pub trait Oracle: Send {
    /// Prepare the capture device or model before a round starts.
    /// An error here means the oracle is unavailable and the round
    /// does not start. Called on every start; implementations should
    /// cache whatever they load.
    async fn ready(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
    /// Best-effort capture. `None` means nothing was detected; it is not
    /// an error and is never retried.
    async fn capture(&mut self) -> Option<Gesture>;
}

/// Source of the computer's gesture. Never absent.
pub trait Opponent: Send {
    fn choose(&mut self) -> Gesture;
}
