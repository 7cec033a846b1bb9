/// Snapshot of the simulated aircraft telemetry.
///
/// Field names double as the wire names of the `/predict_turbulence` request
/// body, so renaming a field here changes the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub(crate) struct FlightState {
    /// Barometric altitude in feet.
    pub(crate) altitude: f64,
    /// Position latitude in degrees.
    pub(crate) latitude: f64,
    /// Position longitude in degrees.
    pub(crate) longitude: f64,
    pub(crate) wind_speed: f64,
    pub(crate) pressure: f64,
    pub(crate) humidity: f64,
    pub(crate) temperature: f64,
}

impl FlightState {
    /// Fixed startup telemetry: cruise over the New York area.
    pub(crate) fn initial() -> Self {
        Self {
            altitude: 35000.0,
            latitude: 40.7128,
            longitude: -74.0060,
            wind_speed: 45.0,
            pressure: 1013.0,
            humidity: 20.0,
            temperature: -45.0,
        }
    }
}
