use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the backend root endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct HealthCheckResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for HealthCheckResponse {}

impl HealthCheckResponse {
    pub(crate) fn message(&self) -> &str { self.message.as_str() }
}
