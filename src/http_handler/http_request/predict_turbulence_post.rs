use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::turbulence_prediction::TurbulencePredictionResponse;
use crate::telemetry::FlightState;

/// Request type for the /predict_turbulence endpoint. The full current
/// telemetry snapshot is the request body.
#[derive(Debug)]
pub(crate) struct PredictTurbulenceRequest {
    pub(crate) flight: FlightState,
}

impl JSONBodyHTTPRequestType for PredictTurbulenceRequest {
    /// The type of the json body.
    type Body = FlightState;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { &self.flight }
}

impl HTTPRequestType for PredictTurbulenceRequest {
    /// Type of the expected response.
    type Response = TurbulencePredictionResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/predict_turbulence" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
