use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    health_get::HealthCheckRequest, request_common::NoBodyHTTPRequestType,
};
use crate::store::StateStore;
use crate::voice::SpeechCapability;
use crate::{info, warn};
use std::sync::Arc;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, the owned state store and the speech
/// capability resolved at startup.
#[derive(Clone)]
pub(crate) struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The single owned container of flight, prediction and voice state.
    store: Arc<StateStore>,
    /// Platform speech capability, probed exactly once.
    speech: SpeechCapability,
}

impl Keychain {
    /// Creates a new instance of `Keychain`.
    ///
    /// # Arguments
    /// - `url`: The base URL to initialize the HTTP client.
    ///
    /// # Returns
    /// A new instance of `Keychain` containing initialized subsystems.
    pub(crate) fn new(url: &str) -> Self {
        Self {
            client: Arc::new(HTTPClient::new(url)),
            store: Arc::new(StateStore::new()),
            speech: SpeechCapability::detect(),
        }
    }

    /// Provides a cloned reference to the HTTP client.
    pub(crate) fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the state store.
    pub(crate) fn store(&self) -> Arc<StateStore> { Arc::clone(&self.store) }

    /// Provides a clone of the speech capability.
    pub(crate) fn speech(&self) -> SpeechCapability { self.speech.clone() }

    /// Logs backend reachability once at startup. Non-fatal either way; the
    /// dashboard stays on its defaults until a prediction lands.
    pub(crate) async fn check_backend(&self) {
        match (HealthCheckRequest {}.send_request(&self.client).await) {
            Ok(health) => info!("Backend online: {}", health.message()),
            Err(e) => warn!("Backend unreachable at startup, advisory stays on defaults: {e}"),
        }
    }
}
