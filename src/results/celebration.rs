//! Celebration for top grades
//!
//! The effect is decoration. The view carries a `celebrate` flag, a latch
//! makes sure the cue plays at most once per view, and a failing cue (for
//! example a blocked autoplay) is logged and otherwise ignored.

use thiserror::Error;

use super::view::ResultsView;

/// Path of the celebratory audio clip
pub const CELEBRATION_AUDIO_PATH: &str = "/celebration.mp3";

/// The cue could not be played
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Audio play failed: {0}")]
pub struct CueError(pub String);

/// Something that plays the celebratory cue
pub trait CelebrationCue {
    fn play(&self) -> Result<(), CueError>;
}

/// Cue that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl CelebrationCue for SilentCue {
    fn play(&self) -> Result<(), CueError> {
        Ok(())
    }
}

/// Fires the celebration at most once
#[derive(Debug, Clone, Default)]
pub struct CelebrationLatch {
    fired: bool,
}

impl CelebrationLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Start the celebration if the view earns it and it has not run yet
    ///
    /// Returns whether the effect started. Cue failures never propagate.
    pub fn fire(&mut self, view: &ResultsView, cue: &dyn CelebrationCue) -> bool {
        if !view.celebrate || self.fired {
            return false;
        }
        self.fired = true;

        if let Err(e) = cue.play() {
            tracing::warn!(student_id = view.student_id, error = %e, "Celebration cue failed");
        }

        true
    }
}
