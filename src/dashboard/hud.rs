use crate::log;
use crate::prediction::{Prediction, RiskLevel};
use crate::store::{DashboardState, StateStore};
use std::fmt::Write;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Visual state of the risk indicator, the text analog of the reference
/// dashboard's color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndicatorState {
    Nominal,
    Caution,
    Alert,
}

pub(crate) fn risk_indicator(prediction: &Prediction) -> IndicatorState {
    match prediction.risk_level {
        RiskLevel::Low => IndicatorState::Nominal,
        RiskLevel::Medium => IndicatorState::Caution,
        RiskLevel::High => IndicatorState::Alert,
    }
}

/// Probability band of the trend bar: red above 70, amber above 40, blue
/// otherwise (reference thresholds).
pub(crate) fn probability_band(probability: f64) -> &'static str {
    if probability > 70.0 {
        "red"
    } else if probability > 40.0 {
        "amber"
    } else {
        "blue"
    }
}

const SPARK_LEVELS: [char; 8] = ['\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}'];

/// Renders a 0-100 trend as one block character per point.
pub(crate) fn trend_sparkline(points: &[f64]) -> String {
    points
        .iter()
        .map(|p| {
            let idx = ((p.clamp(0.0, 100.0) / 100.0) * 7.0).round() as usize;
            SPARK_LEVELS[idx]
        })
        .collect()
}

/// Formats one full HUD frame from a state snapshot. Pure display, no logic
/// beyond the mappings above.
pub(crate) fn render(state: &DashboardState) -> String {
    let mut out = String::new();
    let indicator = match risk_indicator(&state.prediction) {
        IndicatorState::Nominal => "NOMINAL",
        IndicatorState::Caution => "CAUTION",
        IndicatorState::Alert => "ALERT",
    };
    let _ = writeln!(
        out,
        "ALT {:>7.0} ft | POS {:.4}N {:.4}E | WIND {:.0} | PRESS {:.0} | HUM {:.0} | TEMP {:.0}",
        state.flight.altitude,
        state.flight.latitude,
        state.flight.longitude,
        state.flight.wind_speed,
        state.flight.pressure,
        state.flight.humidity,
        state.flight.temperature,
    );
    let _ = writeln!(
        out,
        "TURBULENCE {:>5.1}% [{}] {} | TREND {}",
        state.prediction.probability,
        probability_band(state.prediction.probability),
        indicator,
        trend_sparkline(&state.prediction.next_30_min),
    );
    let _ = writeln!(out, "ADVISORY  {}", state.prediction.suggestion);
    if state.voice.is_listening {
        let _ = writeln!(out, "SKYASSIST [listening]");
    } else if state.voice.last_response.is_empty() {
        let _ = writeln!(out, "SKYASSIST [standby]");
    } else {
        let _ = writeln!(out, "SKYASSIST {}", state.voice.last_response);
    }
    out
}

/// Redraws the text HUD whenever any store revision lands.
pub(crate) struct Hud {
    store: Arc<StateStore>,
}

impl Hud {
    pub(crate) fn new(store: Arc<StateStore>) -> Self { Self { store } }

    pub(crate) async fn run(&self, token: CancellationToken) {
        let mut revision_rx = self.store.revision_watch();
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                changed = revision_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
            revision_rx.borrow_and_update();
            print!("{}", render(&self.store.snapshot().await));
        }
        log!("HUD stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::RiskLevel;
    use crate::telemetry::FlightState;
    use crate::voice::VoiceSession;

    fn high_risk_prediction() -> Prediction {
        Prediction {
            probability: 85.0,
            risk_level: RiskLevel::High,
            suggestion: String::from("Severe turbulence ahead."),
            ..Prediction::initial()
        }
    }

    #[test]
    fn high_risk_maps_to_alert_indicator() {
        let prediction = high_risk_prediction();
        assert_eq!(risk_indicator(&prediction), IndicatorState::Alert);
        assert_eq!(probability_band(prediction.probability), "red");
    }

    #[test]
    fn probability_bands_follow_reference_thresholds() {
        assert_eq!(probability_band(12.5), "blue");
        assert_eq!(probability_band(40.0), "blue");
        assert_eq!(probability_band(55.0), "amber");
        assert_eq!(probability_band(70.0), "amber");
        assert_eq!(probability_band(70.1), "red");
    }

    #[test]
    fn sparkline_has_one_glyph_per_trend_point() {
        let spark = trend_sparkline(&Prediction::initial().next_30_min);
        assert_eq!(spark.chars().count(), 10);
    }

    #[test]
    fn hud_frame_shows_telemetry_and_listening_marker() {
        let state = DashboardState {
            flight: FlightState::initial(),
            prediction: high_risk_prediction(),
            voice: VoiceSession { is_listening: true, ..VoiceSession::default() },
        };
        let frame = render(&state);
        assert!(frame.contains("ALT   35000 ft"));
        assert!(frame.contains("ALERT"));
        assert!(frame.contains("[listening]"));
    }
}
