//! Voice command round trip: one-shot speech recognition, the assistant
//! backend exchange, and utterance playback. Recognition capability is
//! resolved once at startup; when absent the whole loop degrades to a no-op.

mod speech_io;
mod voice_client;
mod voice_session;
#[cfg(test)]
mod tests;

pub(crate) use speech_io::SpeechCapability;
pub(crate) use voice_client::{AssistantService, VoiceClient};
pub(crate) use voice_session::VoiceSession;
