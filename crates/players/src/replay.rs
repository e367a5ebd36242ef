use super::*;
use anyhow::Context;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Estimator that plays back pre-recorded landmark frames.
///
/// The source is a JSON array of frames; each frame is an array of hands,
/// each hand an array of 21 `[x, y]` or `[x, y, z]` points. One frame is
/// consumed per estimate. Once the recording runs out, no hands are seen.
#[derive(Debug, Default)]
pub struct Replay {
    path: Option<PathBuf>,
    frames: VecDeque<Vec<Landmarks>>,
}

impl Replay {
    /// Frames will be read from `path` on load.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
            frames: VecDeque::new(),
        }
    }
    /// Frames parsed from an in-memory JSON document.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let frames = serde_json::from_str::<Vec<Vec<Landmarks>>>(json)
            .context("malformed landmark recording")?;
        Ok(Self::from(frames))
    }
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl From<Vec<Vec<Landmarks>>> for Replay {
    fn from(frames: Vec<Vec<Landmarks>>) -> Self {
        Self {
            path: None,
            frames: frames.into(),
        }
    }
}

#[async_trait::async_trait]
impl Estimator for Replay {
    async fn load(&mut self) -> anyhow::Result<()> {
        if let Some(ref path) = self.path {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("cannot read {}", path.display()))?;
            self.frames = Self::parse(&json)?.frames;
            log::info!("[replay] {} frames from {}", self.frames.len(), path.display());
        }
        Ok(())
    }
    async fn estimate(&mut self) -> anyhow::Result<Vec<Landmarks>> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
