//! Seam to the external sound subsystem.
//!
//! The combat core never plays audio itself. Weapons hold an optional
//! [`SoundService`] handle and ask it to play a clip when they reload, gated by
//! [`AudioSettings::sound_enabled`] which the caller passes in at call time.

use std::borrow::Cow;
use std::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Preferences that gate sound playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AudioSettings {
    pub sound_enabled: bool,
}

impl AudioSettings {
    pub const ENABLED: Self = Self {
        sound_enabled: true,
    };
    pub const MUTED: Self = Self {
        sound_enabled: false,
    };
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Identifier of a sound clip understood by the host's audio service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SoundClip(Cow<'static, str>);

impl SoundClip {
    /// Clip played by every built-in weapon on reload.
    pub const RELOAD: Self = Self::from_static("reload");

    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SoundClip {
    fn default() -> Self {
        Self::RELOAD
    }
}

impl fmt::Display for SoundClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failures reported by a [`SoundService`].
///
/// Callers inside the core swallow these after logging; a broken audio device
/// must never corrupt combat state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    /// No output device is available.
    #[error("audio device unavailable")]
    DeviceUnavailable,

    /// The service does not know the requested clip.
    #[error("unknown sound clip `{0}`")]
    UnknownClip(String),
}

impl GameError for AudioError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DeviceUnavailable => "AUDIO_DEVICE_UNAVAILABLE",
            Self::UnknownClip(_) => "AUDIO_UNKNOWN_CLIP",
        }
    }
}

/// Capability to play a sound clip.
///
/// Implementations live outside the combat core (a real mixer, a logging stub,
/// a recording fake in tests).
pub trait SoundService: Send + Sync {
    fn play_sound(&self, clip: &SoundClip) -> Result<(), AudioError>;
}

/// Plays `clip` on `service` when sound is enabled, degrading silently on failure.
///
/// Returns `true` if the service accepted the clip.
pub(crate) fn play_if_enabled(
    service: Option<&dyn SoundService>,
    settings: &AudioSettings,
    clip: &SoundClip,
) -> bool {
    if !settings.sound_enabled {
        return false;
    }
    let Some(service) = service else {
        return false;
    };

    match service.play_sound(clip) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(clip = %clip, code = err.error_code(), "sound playback failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        played: Mutex<Vec<String>>,
    }

    impl SoundService for Recorder {
        fn play_sound(&self, clip: &SoundClip) -> Result<(), AudioError> {
            self.played.lock().unwrap().push(clip.as_str().to_owned());
            Ok(())
        }
    }

    struct Broken;

    impl SoundService for Broken {
        fn play_sound(&self, _clip: &SoundClip) -> Result<(), AudioError> {
            Err(AudioError::DeviceUnavailable)
        }
    }

    #[test]
    fn plays_when_enabled() {
        let recorder = Recorder::default();
        assert!(play_if_enabled(
            Some(&recorder),
            &AudioSettings::ENABLED,
            &SoundClip::RELOAD
        ));
        assert_eq!(*recorder.played.lock().unwrap(), vec!["reload".to_owned()]);
    }

    #[test]
    fn muted_skips_service() {
        let recorder = Recorder::default();
        assert!(!play_if_enabled(
            Some(&recorder),
            &AudioSettings::MUTED,
            &SoundClip::RELOAD
        ));
        assert!(recorder.played.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_service_is_not_an_error() {
        assert!(!play_if_enabled(
            None,
            &AudioSettings::ENABLED,
            &SoundClip::RELOAD
        ));
    }

    #[test]
    fn failing_service_degrades_silently() {
        assert!(!play_if_enabled(
            Some(&Broken),
            &AudioSettings::ENABLED,
            &SoundClip::new("shotgun_pump")
        ));
    }

    #[test]
    fn clip_display_and_default() {
        assert_eq!(SoundClip::default(), SoundClip::RELOAD);
        assert_eq!(SoundClip::new("click").to_string(), "click");
    }
}
