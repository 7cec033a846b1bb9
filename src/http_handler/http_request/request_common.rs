use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::HTTPResponseType;
use strum_macros::Display;

#[derive(Debug, Clone, Copy)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

#[derive(Debug, Display)]
pub(crate) enum RequestError {
    FailedRequestBuilding,
}

impl std::error::Error for RequestError {}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Additional request headers, none by default.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }

    /// Builds the bare request for this endpoint on `client`.
    fn prepare(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let url = format!("{}{}", client.url(), self.endpoint());
        let builder = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
            HTTPRequestMethod::Post => client.client().post(url),
        };
        builder.headers(self.header_params())
    }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    /// Sends the request with its JSON body and parses the typed response.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self
            .prepare(client)
            .json(self.body())
            .send()
            .await
            .map_err(map_send_error)?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Sends the request without a body and parses the typed response.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self.prepare(client).send().await.map_err(map_send_error)?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

fn map_send_error(error: reqwest::Error) -> HTTPError {
    if error.is_builder() {
        HTTPError::HTTPRequestError(RequestError::FailedRequestBuilding)
    } else {
        HTTPError::HTTPResponseError(error.into())
    }
}
