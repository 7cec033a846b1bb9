use super::speech_io::{ListenOutcome, RecognitionError, SpeechBackend, SpeechCapability};
use super::voice_client::{ASSISTANT_FALLBACK, AssistantApi, VoiceClient};
use crate::http_handler::HTTPError;
use crate::http_handler::http_request::voice_assistant_post::VoiceAssistantRequest;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::prediction::Prediction;
use crate::store::StateStore;
use crate::telemetry::FlightState;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Speech double: scripted listen outcomes, recorded utterances.
struct ScriptedSpeech {
    outcomes: Mutex<Vec<ListenOutcome>>,
    utterances: Mutex<Vec<String>>,
}

impl ScriptedSpeech {
    fn new(outcomes: Vec<ListenOutcome>) -> Arc<Self> {
        Arc::new(Self { outcomes: Mutex::new(outcomes), utterances: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl SpeechBackend for ScriptedSpeech {
    async fn listen_once(&self) -> ListenOutcome {
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() { ListenOutcome::Ended } else { outcomes.remove(0) }
    }

    async fn speak(&self, text: &str) {
        self.utterances.lock().unwrap().push(text.to_string());
    }
}

struct FailingAssistant;

#[async_trait]
impl AssistantApi for FailingAssistant {
    async fn ask(
        &self,
        _text: &str,
        _flight: FlightState,
        _prediction: Prediction,
    ) -> Result<String, HTTPError> {
        Err(HTTPError::HTTPResponseError(ResponseError::NoConnection))
    }
}

struct FixedAssistant {
    reply: String,
}

#[async_trait]
impl AssistantApi for FixedAssistant {
    async fn ask(
        &self,
        _text: &str,
        _flight: FlightState,
        _prediction: Prediction,
    ) -> Result<String, HTTPError> {
        Ok(self.reply.clone())
    }
}

/// Captures what the dashboard displayed at the moment the request left.
struct CapturingAssistant {
    store: Arc<StateStore>,
    displayed_at_call: Mutex<Option<String>>,
}

#[async_trait]
impl AssistantApi for CapturingAssistant {
    async fn ask(
        &self,
        _text: &str,
        _flight: FlightState,
        _prediction: Prediction,
    ) -> Result<String, HTTPError> {
        let displayed = self.store.snapshot().await.voice.last_response;
        *self.displayed_at_call.lock().unwrap() = Some(displayed);
        Ok(String::from("Altitude is three five thousand feet."))
    }
}

#[tokio::test]
async fn recognition_error_stops_listening_without_transcript() {
    let speech = ScriptedSpeech::new(vec![ListenOutcome::Error(RecognitionError::NoSpeech)]);
    let store = Arc::new(StateStore::new());
    let client = VoiceClient::new(
        Arc::new(FailingAssistant),
        Arc::clone(&store),
        SpeechCapability::Available(Arc::clone(&speech) as Arc<dyn SpeechBackend>),
    );
    let backend = Arc::clone(&speech) as Arc<dyn SpeechBackend>;
    let outcome = client.listen_once(&backend).await;
    assert_eq!(outcome, ListenOutcome::Error(RecognitionError::NoSpeech));
    let voice = store.snapshot().await.voice;
    assert!(!voice.is_listening);
    assert!(voice.last_transcript.is_empty());
}

#[tokio::test]
async fn failed_command_displays_and_speaks_fallback() {
    let speech = ScriptedSpeech::new(vec![]);
    let store = Arc::new(StateStore::new());
    let client = VoiceClient::new(
        Arc::new(FailingAssistant),
        Arc::clone(&store),
        SpeechCapability::Available(Arc::clone(&speech) as Arc<dyn SpeechBackend>),
    );
    client.handle_command("what is my altitude").await;
    let voice = store.snapshot().await.voice;
    assert_eq!(voice.last_response, ASSISTANT_FALLBACK);
    let utterances = speech.utterances.lock().unwrap();
    assert_eq!(utterances.as_slice(), [ASSISTANT_FALLBACK.to_string()]);
}

#[tokio::test]
async fn successful_command_displays_and_speaks_reply() {
    let speech = ScriptedSpeech::new(vec![]);
    let store = Arc::new(StateStore::new());
    let client = VoiceClient::new(
        Arc::new(FixedAssistant { reply: String::from("Maintain heading zero niner zero.") }),
        Arc::clone(&store),
        SpeechCapability::Available(Arc::clone(&speech) as Arc<dyn SpeechBackend>),
    );
    client.handle_command("suggest a heading").await;
    let voice = store.snapshot().await.voice;
    assert_eq!(voice.last_transcript, "suggest a heading");
    assert_eq!(voice.last_response, "Maintain heading zero niner zero.");
    let utterances = speech.utterances.lock().unwrap();
    assert_eq!(utterances.as_slice(), ["Maintain heading zero niner zero.".to_string()]);
}

#[tokio::test]
async fn analyzing_placeholder_is_displayed_before_the_request_leaves() {
    let speech = ScriptedSpeech::new(vec![]);
    let store = Arc::new(StateStore::new());
    let api = Arc::new(CapturingAssistant {
        store: Arc::clone(&store),
        displayed_at_call: Mutex::new(None),
    });
    let client = VoiceClient::new(
        Arc::clone(&api) as Arc<dyn AssistantApi>,
        Arc::clone(&store),
        SpeechCapability::Available(Arc::clone(&speech) as Arc<dyn SpeechBackend>),
    );
    client.handle_command("what is my altitude").await;
    let displayed = api.displayed_at_call.lock().unwrap().clone();
    assert_eq!(displayed.as_deref(), Some("Analyzing: \"what is my altitude\"..."));
}

#[tokio::test]
async fn missing_capability_disables_voice_control() {
    let store = Arc::new(StateStore::new());
    let client =
        VoiceClient::new(Arc::new(FailingAssistant), Arc::clone(&store), SpeechCapability::Unavailable);
    // Returns immediately instead of waiting for input that can never come.
    client.run(CancellationToken::new()).await;
    assert!(!store.snapshot().await.voice.is_listening);
}

#[tokio::test]
async fn command_payload_merges_flight_and_advisory_context() {
    let request = VoiceAssistantRequest::new(
        "what is my altitude",
        FlightState::initial(),
        Prediction::initial(),
    );
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["text"], "what is my altitude");
    let context = &body["flight_context"];
    assert_eq!(context["altitude"], 35000.0);
    assert_eq!(context["risk_level"], "Low");
    assert_eq!(context["probability"], 12.5);
    assert_eq!(context["next_30_min"].as_array().unwrap().len(), 10);
}
