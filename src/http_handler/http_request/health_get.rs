use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::health::HealthCheckResponse;

/// Request type for the backend root endpoint, used once at startup to log
/// whether the backend is reachable.
#[derive(Debug)]
pub(crate) struct HealthCheckRequest {}

impl NoBodyHTTPRequestType for HealthCheckRequest {}

impl HTTPRequestType for HealthCheckRequest {
    /// Type of the expected response.
    type Response = HealthCheckResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
