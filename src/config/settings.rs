//! Runtime settings for the expense tracker
//!
//! Settings are assembled from command line flags and the environment at
//! startup. Nothing here is persisted.

use std::time::Duration;

use super::paths::TrackerPaths;

/// Number of dots printed by the save/delete/load feedback
pub const DEFAULT_ANIMATION_STEPS: u32 = 3;

/// Pause between two feedback dots
pub const DEFAULT_ANIMATION_INTERVAL: Duration = Duration::from_millis(500);

/// Settings for one interactive session
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the expense document lives
    pub paths: TrackerPaths,

    /// Whether save/delete/load feedback pauses are shown
    pub animations: bool,

    /// Dots printed per feedback message
    pub animation_steps: u32,

    /// Delay between feedback dots
    pub animation_interval: Duration,
}

impl Settings {
    /// Settings for the given paths with default feedback behaviour
    pub fn new(paths: TrackerPaths) -> Self {
        Self {
            paths,
            animations: true,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            animation_interval: DEFAULT_ANIMATION_INTERVAL,
        }
    }

    /// Turn the cosmetic pauses off
    pub fn without_animations(mut self) -> Self {
        self.animations = false;
        self
    }
}
