use crate::prediction::Prediction;
use crate::telemetry::FlightState;
use crate::voice::VoiceSession;
use tokio::sync::{RwLock, watch};

/// One full copy of everything the dashboard displays.
#[derive(Debug, Clone)]
pub(crate) struct DashboardState {
    pub(crate) flight: FlightState,
    pub(crate) prediction: Prediction,
    pub(crate) voice: VoiceSession,
}

/// The single owned state container of the core.
///
/// Every mutation goes through one of the explicit setters below; no caller
/// holds the lock across an await point. Altitude changes are re-published on
/// a dedicated watch channel, which is the only trigger input of the
/// prediction client. The revision channel bumps on every mutation and drives
/// HUD redraws.
pub(crate) struct StateStore {
    inner: RwLock<DashboardState>,
    altitude_tx: watch::Sender<f64>,
    revision_tx: watch::Sender<u64>,
}

impl StateStore {
    pub(crate) fn new() -> Self {
        let flight = FlightState::initial();
        Self {
            altitude_tx: watch::Sender::new(flight.altitude),
            revision_tx: watch::Sender::new(0),
            inner: RwLock::new(DashboardState {
                flight,
                prediction: Prediction::initial(),
                voice: VoiceSession::default(),
            }),
        }
    }

    /// Receiver that fires iff the altitude field actually changed.
    pub(crate) fn altitude_watch(&self) -> watch::Receiver<f64> {
        self.altitude_tx.subscribe()
    }

    /// Receiver that fires on every state mutation.
    pub(crate) fn revision_watch(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    pub(crate) async fn snapshot(&self) -> DashboardState {
        self.inner.read().await.clone()
    }

    pub(crate) async fn flight(&self) -> FlightState {
        self.inner.read().await.flight
    }

    pub(crate) async fn prediction(&self) -> Prediction {
        self.inner.read().await.prediction.clone()
    }

    /// Flight and prediction snapshot sent as assistant context.
    pub(crate) async fn context(&self) -> (FlightState, Prediction) {
        let state = self.inner.read().await;
        (state.flight, state.prediction.clone())
    }

    /// Overwrites the flight snapshot with the result of one simulator tick.
    pub(crate) async fn apply_tick(&self, next: FlightState) {
        self.inner.write().await.flight = next;
        self.altitude_tx.send_if_modified(|alt| {
            if (*alt - next.altitude).abs() > f64::EPSILON {
                *alt = next.altitude;
                true
            } else {
                false
            }
        });
        self.bump();
    }

    /// Full replacement of the turbulence advisory, no field merging.
    pub(crate) async fn set_prediction(&self, prediction: Prediction) {
        self.inner.write().await.prediction = prediction;
        self.bump();
    }

    pub(crate) async fn set_listening(&self, listening: bool) {
        self.inner.write().await.voice.is_listening = listening;
        self.bump();
    }

    pub(crate) async fn set_transcript(&self, transcript: &str) {
        self.inner.write().await.voice.last_transcript = transcript.to_string();
        self.bump();
    }

    pub(crate) async fn set_assistant_response(&self, response: &str) {
        self.inner.write().await.voice.last_response = response.to_string();
        self.bump();
    }

    fn bump(&self) {
        self.revision_tx.send_modify(|rev| *rev += 1);
    }
}
