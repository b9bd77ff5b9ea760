//! Celebration audio
//!
//! Plays `/celebration.mp3` through an `HtmlAudioElement`. Browsers may
//! reject playback (autoplay policy, missing file); the rejection arrives
//! asynchronously and is only logged.

use eagle_results::results::{CelebrationCue, CueError, CELEBRATION_AUDIO_PATH};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Cue backed by the page's audio element
pub struct AudioCue;

impl CelebrationCue for AudioCue {
    fn play(&self) -> Result<(), CueError> {
        let audio = HtmlAudioElement::new_with_src(CELEBRATION_AUDIO_PATH)
            .map_err(|e| CueError(format!("{:?}", e)))?;

        let promise: js_sys::Promise = audio.play().map_err(|e| CueError(format!("{:?}", e)))?;

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                web_sys::console::log_1(&format!("Audio play failed: {:?}", e).into());
            }
        });

        Ok(())
    }
}
