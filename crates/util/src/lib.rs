//! Core type aliases, traits, and constants for roshambo.
//!
//! This crate provides the foundational types and tuning parameters
//! shared by every crate in the workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, loss, and tie counters.
pub type Count = u32;
/// Remaining countdown steps before a capture.
pub type Tick = u8;
/// Sequential round number within a session. Doubles as a cancellation epoch.
pub type Epoch = u64;
/// Landmark coordinates and distances, in whatever unit the estimator reports.
pub type Distance = f32;
/// Win rates and sampling frequencies.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for gameplay and Monte Carlo testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ROUND PARAMETERS
// ============================================================================
/// Countdown steps between pressing start and capturing the gesture.
pub const COUNTDOWN: Tick = 3;
/// Wall-clock length of a single countdown step.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// LANDMARK HEURISTIC
// Finger extension is judged by comparing tip-to-base distance against
// joint-to-base distance, scaled by a fixed ratio.
// ============================================================================
/// Points per detected hand in the 21-landmark hand model.
pub const LANDMARKS: usize = 21;
/// A finger counts as extended when its tip is this much farther from the
/// base than its last joint is.
pub const EXTENSION_RATIO: Distance = 1.2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, plus a file sink when a path is given.
/// The file always records DEBUG; the terminal records `level`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut sinks = vec![term as Box<dyn simplelog::SharedLogger>];
    if let Some(path) = file {
        match std::fs::File::create(path) {
            Ok(handle) => sinks.push(simplelog::WriteLogger::new(
                log::LevelFilter::Debug,
                config.clone(),
                handle,
            )),
            Err(e) => eprintln!("cannot open log file {}: {}", path.display(), e),
        }
    }
    simplelog::CombinedLogger::init(sinks).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Must be called from within a tokio runtime.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
