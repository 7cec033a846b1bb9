use super::flight_state::FlightState;
use crate::store::StateStore;
use crate::{event, log};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Periodic sensor-drift generator.
///
/// Overwrites the shared [`FlightState`] once per tick until the owning view
/// cancels its token. The tick itself never fails.
pub(crate) struct TelemetrySimulator {
    store: Arc<StateStore>,
}

impl TelemetrySimulator {
    /// Fixed tick period of the telemetry walk.
    pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(5000);
    /// Altitude perturbation per tick in feet, sign drawn uniformly.
    const ALTITUDE_STEP: f64 = 10.0;
    /// Latitude/longitude increment per tick in degrees.
    const POSITION_DRIFT: f64 = 0.001;

    pub(crate) fn new(store: Arc<StateStore>) -> Self { Self { store } }

    /// Applies one tick to `prev`: altitude ±10 ft, position +0.001°/+0.001°,
    /// all environmental fields carried over unchanged.
    pub(crate) fn next_state(prev: &FlightState, rng: &mut impl Rng) -> FlightState {
        let step = if rng.random_bool(0.5) { Self::ALTITUDE_STEP } else { -Self::ALTITUDE_STEP };
        FlightState {
            altitude: prev.altitude + step,
            latitude: prev.latitude + Self::POSITION_DRIFT,
            longitude: prev.longitude + Self::POSITION_DRIFT,
            ..*prev
        }
    }

    /// Runs the tick loop until `token` is cancelled. One tick completes
    /// before the next can fire.
    pub(crate) async fn run(&self, token: CancellationToken) {
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                () = tokio::time::sleep(Self::TICK_INTERVAL) => {}
            }
            let prev = self.store.flight().await;
            let next = Self::next_state(&prev, &mut rand::rng());
            self.store.apply_tick(next).await;
            event!("Telemetry tick: altitude {:.0} ft at {:.4}N {:.4}E", next.altitude, next.latitude, next.longitude);
        }
        log!("Telemetry simulator stopped");
    }
}
