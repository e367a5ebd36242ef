use super::*;
use rps_gameplay::*;
use rps_gameroom::*;

/// Black-box hand pose estimator: grabs a frame from its source and reports
/// every hand it finds.
#[async_trait::async_trait]
pub trait Estimator: Send {
    /// Load the model and open the frame source.
    async fn load(&mut self) -> anyhow::Result<()>;
    /// Detect hands in the next frame. An empty list means no hand in view.
    async fn estimate(&mut self) -> anyhow::Result<Vec<Landmarks>>;
}

/// Oracle that classifies the first detected hand with the
/// finger-extension heuristic.
pub struct Landmark<E> {
    estimator: E,
    loaded: bool,
}

impl<E> Landmark<E>
where
    E: Estimator,
{
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            loaded: false,
        }
    }
}

#[async_trait::async_trait]
impl<E> Oracle for Landmark<E>
where
    E: Estimator,
{
    async fn ready(&mut self) -> anyhow::Result<()> {
        if !self.loaded {
            log::info!("[landmark] loading estimator");
            self.estimator.load().await?;
            self.loaded = true;
        }
        Ok(())
    }
    async fn capture(&mut self) -> Option<Gesture> {
        match self.estimator.estimate().await {
            Ok(hands) => {
                log::debug!("[landmark] {} hands in frame", hands.len());
                hands.first().and_then(Landmarks::gesture)
            }
            Err(e) => {
                log::warn!("[landmark] estimation failed: {:#}", e);
                None
            }
        }
    }
}
