use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::assistant_reply::AssistantReplyResponse;
use crate::prediction::Prediction;
use crate::telemetry::FlightState;

/// Request type for the /voice_assistant endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct VoiceAssistantRequest {
    /// The transcript of the spoken command.
    text: String,
    /// Shallow merge of flight and prediction fields.
    flight_context: FlightContext,
}

/// Flight and advisory fields flattened into one context object, matching the
/// `{...flightData, ...prediction}` merge of the reference frontend.
#[derive(serde::Serialize, Debug)]
pub(crate) struct FlightContext {
    #[serde(flatten)]
    flight: FlightState,
    #[serde(flatten)]
    prediction: Prediction,
}

impl VoiceAssistantRequest {
    pub(crate) fn new(text: &str, flight: FlightState, prediction: Prediction) -> Self {
        Self {
            text: text.to_string(),
            flight_context: FlightContext { flight, prediction },
        }
    }
}

impl JSONBodyHTTPRequestType for VoiceAssistantRequest {
    /// The type of the json body.
    type Body = VoiceAssistantRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for VoiceAssistantRequest {
    /// Type of the expected response.
    type Response = AssistantReplyResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/voice_assistant" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
