/// Transient per-session voice state, display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VoiceSession {
    /// True only between a listen activation and its first terminating event
    /// (result, recognition error or recognition end).
    pub(crate) is_listening: bool,
    pub(crate) last_transcript: String,
    pub(crate) last_response: String,
}
