use super::{FlightState, TelemetrySimulator};
use rand::rng;

#[test]
fn first_tick_lands_on_expected_altitude_levels() {
    let initial = FlightState::initial();
    let next = TelemetrySimulator::next_state(&initial, &mut rng());
    assert!(next.altitude == 34990.0 || next.altitude == 35010.0);
}

#[test]
fn altitude_steps_by_ten_with_independently_drawn_sign() {
    let mut state = FlightState::initial();
    let mut rng = rng();
    let mut up = 0_u32;
    let mut down = 0_u32;
    for _ in 0..200 {
        let next = TelemetrySimulator::next_state(&state, &mut rng);
        let delta = next.altitude - state.altitude;
        assert_eq!(delta.abs(), 10.0);
        if delta > 0.0 { up += 1 } else { down += 1 }
        state = next;
    }
    // A monotonic walk over 200 ticks means the sign draw is broken.
    assert!(up > 0 && down > 0);
}

#[test]
fn position_drifts_by_fixed_increment_each_tick() {
    let mut state = FlightState::initial();
    let mut rng = rng();
    for _ in 0..50 {
        let next = TelemetrySimulator::next_state(&state, &mut rng);
        assert!((next.latitude - state.latitude - 0.001).abs() < 1e-9);
        assert!((next.longitude - state.longitude - 0.001).abs() < 1e-9);
        state = next;
    }
}

#[test]
fn environmental_fields_carry_over_unchanged() {
    let initial = FlightState::initial();
    let next = TelemetrySimulator::next_state(&initial, &mut rng());
    assert_eq!(next.wind_speed, initial.wind_speed);
    assert_eq!(next.pressure, initial.pressure);
    assert_eq!(next.humidity, initial.humidity);
    assert_eq!(next.temperature, initial.temperature);
}
