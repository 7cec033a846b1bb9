use strum_macros::Display;

/// Number of points in the 30-minute trend, one per 3 minutes. The display
/// consumes the trend positionally, so a response with any other count is
/// rejected before it reaches the store.
pub(crate) const TREND_POINTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
pub(crate) enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Turbulence advisory as returned by the prediction backend.
///
/// Replaced wholesale by a successful response and left untouched on failure;
/// prediction is advisory, never an error state on the dashboard.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub(crate) struct Prediction {
    /// Turbulence probability in percent, 0 to 100.
    pub(crate) probability: f64,
    pub(crate) risk_level: RiskLevel,
    /// One-sentence advisory shown and spoken to the pilot.
    pub(crate) suggestion: String,
    /// 30-minute probability trend, exactly [`TREND_POINTS`] entries.
    pub(crate) next_30_min: Vec<f64>,
}

impl Prediction {
    /// Startup default shown until the first backend response lands.
    pub(crate) fn initial() -> Self {
        Self {
            probability: 12.5,
            risk_level: RiskLevel::Low,
            suggestion: String::from(
                "Sky conditions are clear. Maintain current flight level for optimal fuel efficiency.",
            ),
            next_30_min: vec![10.0, 15.0, 12.0, 14.0, 18.0, 15.0, 12.0, 11.0, 10.0, 9.0],
        }
    }
}
