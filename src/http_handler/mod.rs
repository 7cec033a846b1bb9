//! Typed HTTP plumbing towards the AeroAI backend. Each endpoint is a request
//! type paired with a response type; `send_request` drives the exchange
//! through the shared [`http_client::HTTPClient`].

mod common;
pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;

pub(crate) use common::HTTPError;
