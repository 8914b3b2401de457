use crate::errors::CoreError;
use crate::models::alert::Alert;

/// One synthesized tone of the alert cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f64,
    pub duration_ms: u64,
}

/// The audio cue played when an alert fires: a short rising three-tone chime.
///
/// The core only describes the sound; the sink owns the audio device and is
/// expected to acquire it per playback rather than holding it open.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneCue {
    pub tones: Vec<Tone>,
}

impl Default for ToneCue {
    fn default() -> Self {
        Self {
            tones: vec![
                Tone {
                    frequency_hz: 523.25,
                    duration_ms: 150,
                },
                Tone {
                    frequency_hz: 659.25,
                    duration_ms: 150,
                },
                Tone {
                    frequency_hz: 783.99,
                    duration_ms: 250,
                },
            ],
        }
    }
}

/// Delivery side of a fired alert. Implemented by the embedding frontend
/// (audio output, desktop notifications); the engine treats every call as
/// best-effort and swallows failures after logging them.
pub trait AlertSink: Send + Sync {
    /// Play the audio cue. Called only when sound is enabled.
    fn play_cue(&mut self, cue: &ToneCue) -> Result<(), CoreError>;

    /// Whether the user previously granted notification permission.
    /// When `false`, `notify` is never called.
    fn notifications_permitted(&self) -> bool;

    /// Show a desktop notification for the triggered alert.
    fn notify(&mut self, alert: &Alert) -> Result<(), CoreError>;
}

/// Sink that delivers nothing. Headless use and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl AlertSink for NullSink {
    fn play_cue(&mut self, _cue: &ToneCue) -> Result<(), CoreError> {
        Ok(())
    }

    fn notifications_permitted(&self) -> bool {
        false
    }

    fn notify(&mut self, _alert: &Alert) -> Result<(), CoreError> {
        Ok(())
    }
}
