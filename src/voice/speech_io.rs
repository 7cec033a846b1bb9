use async_trait::async_trait;
use std::env;
use std::sync::Arc;
use strum_macros::Display;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Fixed synthesis configuration applied to every utterance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UtteranceConfig {
    pub(crate) pitch: f32,
    pub(crate) rate: f32,
}

impl Default for UtteranceConfig {
    fn default() -> Self { Self { pitch: 1.1, rate: 1.0 } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum RecognitionError {
    NoSpeech,
    Aborted,
}

/// Terminating event of one listen activation. At most one transcript is
/// produced per activation; every variant ends the listening state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListenOutcome {
    Transcript(String),
    Error(RecognitionError),
    /// Recognition ended for good; no further activations will produce input.
    Ended,
}

/// Platform speech binding: one-shot recognition plus utterance playback.
/// Playback calls are independent; ordering and overlap are left to the
/// underlying mechanism.
#[async_trait]
pub(crate) trait SpeechBackend: Send + Sync {
    async fn listen_once(&self) -> ListenOutcome;
    async fn speak(&self, text: &str);
}

/// Speech capability resolved exactly once at startup. Callers treat
/// `Unavailable` as inert: listening never activates and `speak` is a no-op.
#[derive(Clone)]
pub(crate) enum SpeechCapability {
    Available(Arc<dyn SpeechBackend>),
    Unavailable,
}

impl SpeechCapability {
    /// Probes the platform once. `AEROAI_SPEECH=off` forces the unavailable
    /// path, otherwise the console backend stands in for platform speech.
    pub(crate) fn detect() -> Self {
        if env::var("AEROAI_SPEECH").is_ok_and(|v| v == "off") {
            Self::Unavailable
        } else {
            Self::Available(Arc::new(ConsoleSpeech::new()))
        }
    }

    pub(crate) fn backend(&self) -> Option<Arc<dyn SpeechBackend>> {
        match self {
            Self::Available(backend) => Some(Arc::clone(backend)),
            Self::Unavailable => None,
        }
    }

    /// Plays one utterance, silently dropped when the capability is absent.
    pub(crate) async fn speak(&self, text: &str) {
        if let Self::Available(backend) = self {
            backend.speak(text).await;
        }
    }
}

/// Console stand-in for platform speech: recognition reads one line from
/// stdin per activation, synthesis writes the utterance to stdout.
pub(crate) struct ConsoleSpeech {
    config: UtteranceConfig,
    stdin: Mutex<BufReader<Stdin>>,
}

impl ConsoleSpeech {
    pub(crate) fn new() -> Self {
        Self {
            config: UtteranceConfig::default(),
            stdin: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

#[async_trait]
impl SpeechBackend for ConsoleSpeech {
    async fn listen_once(&self) -> ListenOutcome {
        let mut line = String::new();
        match self.stdin.lock().await.read_line(&mut line).await {
            Ok(0) => ListenOutcome::Ended,
            Ok(_) => {
                let transcript = line.trim();
                if transcript.is_empty() {
                    ListenOutcome::Error(RecognitionError::NoSpeech)
                } else {
                    ListenOutcome::Transcript(transcript.to_string())
                }
            }
            Err(_) => ListenOutcome::Error(RecognitionError::Aborted),
        }
    }

    async fn speak(&self, text: &str) {
        println!(
            "\x1b[36m[VOICE][{}]\x1b[0m (pitch {:.1}, rate {:.1}) {text}",
            chrono::Utc::now().format("%H:%M:%S"),
            self.config.pitch,
            self.config.rate
        );
    }
}
