use super::prediction::Prediction;
use crate::http_handler::{
    HTTPError, http_client::HTTPClient,
    http_request::{predict_turbulence_post::PredictTurbulenceRequest, request_common::JSONBodyHTTPRequestType},
};
use crate::store::StateStore;
use crate::telemetry::FlightState;
use crate::{error, event, log};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;

/// Seam towards the turbulence prediction backend, mockable in tests.
#[async_trait]
pub(crate) trait PredictionApi: Send + Sync {
    async fn predict(&self, flight: FlightState) -> Result<Prediction, HTTPError>;
}

/// Real backend binding via `POST /predict_turbulence`.
pub(crate) struct TurbulenceService {
    client: Arc<HTTPClient>,
}

impl TurbulenceService {
    pub(crate) fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl PredictionApi for TurbulenceService {
    async fn predict(&self, flight: FlightState) -> Result<Prediction, HTTPError> {
        let response = PredictTurbulenceRequest { flight }.send_request(&self.client).await?;
        response.into_prediction().map_err(HTTPError::HTTPResponseError)
    }
}

/// Requests a fresh turbulence advisory whenever the altitude changes.
///
/// Requests are fired without awaiting each other, so a slow response can
/// arrive after a newer one was issued. Each request carries a generation;
/// a response may only land if no higher generation has been applied yet.
/// Failures keep the last known good advisory and are logged only.
pub(crate) struct PredictionClient {
    api: Arc<dyn PredictionApi>,
    store: Arc<StateStore>,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl PredictionClient {
    pub(crate) fn new(api: Arc<dyn PredictionApi>, store: Arc<StateStore>) -> Self {
        Self { api, store, issued: AtomicU64::new(0), applied: AtomicU64::new(0) }
    }

    /// Listens on the altitude watch until `token` is cancelled. Issues one
    /// initial request for the startup state, then one per altitude change.
    pub(crate) async fn run(self: Arc<Self>, token: CancellationToken) {
        let mut altitude_rx = self.store.altitude_watch();
        let mut last_requested = *altitude_rx.borrow_and_update();
        Self::dispatch(&self, self.store.flight().await);
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                changed = altitude_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
            let altitude = *altitude_rx.borrow_and_update();
            if (altitude - last_requested).abs() < f64::EPSILON {
                continue;
            }
            last_requested = altitude;
            Self::dispatch(&self, self.store.flight().await);
        }
        log!("Prediction client stopped");
    }

    /// Fires one request for `flight` without awaiting the response.
    fn dispatch(this: &Arc<Self>, flight: FlightState) {
        let generation = this.issued.fetch_add(1, Ordering::SeqCst) + 1;
        event!("Requesting turbulence advisory (generation {generation}) for altitude {:.0} ft", flight.altitude);
        let client = Arc::clone(this);
        tokio::spawn(async move {
            client.request_once(generation, flight).await;
        });
    }

    /// One full request/apply cycle. Kept separate from [`Self::dispatch`] so
    /// the failure and generation semantics are testable inline.
    pub(crate) async fn request_once(&self, generation: u64, flight: FlightState) {
        match self.api.predict(flight).await {
            Ok(prediction) => self.apply(generation, prediction).await,
            Err(e) => error!("Turbulence request failed, keeping last advisory: {e}"),
        }
    }

    async fn apply(&self, generation: u64, prediction: Prediction) {
        let newest = self.applied.fetch_max(generation, Ordering::SeqCst);
        if newest >= generation {
            log!("Discarding stale turbulence response (generation {generation}, newest {newest})");
            return;
        }
        self.store.set_prediction(prediction).await;
    }
}
