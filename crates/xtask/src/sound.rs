//! Stand-in sound service that reports clips instead of playing them.

use std::sync::atomic::{AtomicUsize, Ordering};

use combat_core::{AudioError, SoundClip, SoundService};

#[derive(Debug, Default)]
pub struct LogSound {
    played: AtomicUsize,
}

impl LogSound {
    pub fn played(&self) -> usize {
        self.played.load(Ordering::Relaxed)
    }
}

impl SoundService for LogSound {
    fn play_sound(&self, clip: &SoundClip) -> Result<(), AudioError> {
        self.played.fetch_add(1, Ordering::Relaxed);
        tracing::info!(clip = %clip, "♪ play");
        Ok(())
    }
}
