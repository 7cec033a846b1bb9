mod flight_state;
mod simulator;
#[cfg(test)]
mod tests;

pub(crate) use flight_state::FlightState;
pub(crate) use simulator::TelemetrySimulator;
