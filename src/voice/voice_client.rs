use super::speech_io::{ListenOutcome, SpeechBackend, SpeechCapability};
use crate::http_handler::{
    HTTPError, http_client::HTTPClient,
    http_request::{request_common::JSONBodyHTTPRequestType, voice_assistant_post::VoiceAssistantRequest},
};
use crate::prediction::Prediction;
use crate::store::StateStore;
use crate::telemetry::FlightState;
use crate::{error, event, log};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Shown and spoken verbatim when the assistant backend is unreachable; the
/// pilot always gets an acknowledgment.
pub(crate) const ASSISTANT_FALLBACK: &str =
    "Command received, but central intelligence is unreachable.";

/// Seam towards the assistant backend, mockable in tests.
#[async_trait]
pub(crate) trait AssistantApi: Send + Sync {
    async fn ask(
        &self,
        text: &str,
        flight: FlightState,
        prediction: Prediction,
    ) -> Result<String, HTTPError>;
}

/// Real backend binding via `POST /voice_assistant`.
pub(crate) struct AssistantService {
    client: Arc<HTTPClient>,
}

impl AssistantService {
    pub(crate) fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl AssistantApi for AssistantService {
    async fn ask(
        &self,
        text: &str,
        flight: FlightState,
        prediction: Prediction,
    ) -> Result<String, HTTPError> {
        let reply =
            VoiceAssistantRequest::new(text, flight, prediction).send_request(&self.client).await?;
        Ok(reply.into_response())
    }
}

/// Drives the voice command round trip: listen, relay the transcript with
/// the current flight/advisory context, then display and speak the reply.
/// One command is handled at a time; the loop does not re-listen while a
/// previous command is still being resolved.
pub(crate) struct VoiceClient {
    api: Arc<dyn AssistantApi>,
    store: Arc<StateStore>,
    speech: SpeechCapability,
}

impl VoiceClient {
    pub(crate) fn new(
        api: Arc<dyn AssistantApi>,
        store: Arc<StateStore>,
        speech: SpeechCapability,
    ) -> Self {
        Self { api, store, speech }
    }

    /// Listen/command loop. Returns immediately when the platform has no
    /// recognition capability, and when recognition ends for good.
    pub(crate) async fn run(&self, token: CancellationToken) {
        let Some(backend) = self.speech.backend() else {
            log!("Speech recognition unavailable, voice control disabled");
            return;
        };
        loop {
            let outcome = tokio::select! {
                () = token.cancelled() => break,
                outcome = self.listen_once(&backend) => outcome,
            };
            match outcome {
                ListenOutcome::Transcript(transcript) => self.handle_command(&transcript).await,
                ListenOutcome::Error(e) => event!("Recognition stopped: {e}"),
                ListenOutcome::Ended => break,
            }
        }
        log!("Voice client stopped");
    }

    /// One listen activation. Listening state is entered on activation and
    /// left on the first terminating event, whatever its kind.
    pub(crate) async fn listen_once(&self, backend: &Arc<dyn SpeechBackend>) -> ListenOutcome {
        self.store.set_listening(true).await;
        let outcome = backend.listen_once().await;
        self.store.set_listening(false).await;
        outcome
    }

    /// Relays one transcript to the assistant backend. A placeholder response
    /// is displayed before the request leaves; on failure the fixed fallback
    /// is both displayed and spoken.
    pub(crate) async fn handle_command(&self, transcript: &str) {
        self.store.set_transcript(transcript).await;
        self.store.set_assistant_response(&format!("Analyzing: \"{transcript}\"...")).await;
        let (flight, prediction) = self.store.context().await;
        match self.api.ask(transcript, flight, prediction).await {
            Ok(reply) => {
                self.store.set_assistant_response(&reply).await;
                self.speech.speak(&reply).await;
            }
            Err(e) => {
                error!("Assistant request failed: {e}");
                self.store.set_assistant_response(ASSISTANT_FALLBACK).await;
                self.speech.speak(ASSISTANT_FALLBACK).await;
            }
        }
    }
}
