use dialoguer::Select;
use rps_gameplay::*;
use rps_gameroom::*;

/// Player throwing gestures from the terminal instead of a camera.
/// A cancelled or failed prompt counts as no gesture.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn selection() -> Option<Gesture> {
        let labels = Gesture::all().map(|g| format!("{} {}", g.emoji(), g));
        Select::new()
            .with_prompt("Throw")
            .report(false)
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| log::warn!("[human] prompt failed: {}", e))
            .ok()
            .flatten()
            .map(|i| Gesture::all()[i])
    }
}

#[async_trait::async_trait]
impl Oracle for Human {
    async fn capture(&mut self) -> Option<Gesture> {
        tokio::task::spawn_blocking(Self::selection)
            .await
            .unwrap_or_else(|e| {
                log::warn!("[human] prompt task failed: {}", e);
                None
            })
    }
}
