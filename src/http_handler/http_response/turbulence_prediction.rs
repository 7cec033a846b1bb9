use super::response_common::{ResponseError, SerdeJSONBodyHTTPResponseType};
use crate::prediction::{Prediction, RiskLevel, TREND_POINTS};

/// Response type for the /predict_turbulence endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct TurbulencePredictionResponse {
    /// Turbulence probability in percent.
    probability: f64,
    /// The predicted `RiskLevel` ("Low", "Medium" or "High").
    risk_level: RiskLevel,
    /// One-sentence advisory for the pilot.
    suggestion: String,
    /// Probability trend for the next 30 minutes.
    next_30_min: Vec<f64>,
}

impl SerdeJSONBodyHTTPResponseType for TurbulencePredictionResponse {}

impl TurbulencePredictionResponse {
    /// Converts the wire response into an advisory, rejecting any trend that
    /// does not hold exactly [`TREND_POINTS`] entries.
    pub(crate) fn into_prediction(self) -> Result<Prediction, ResponseError> {
        if self.next_30_min.len() != TREND_POINTS {
            return Err(ResponseError::Malformed);
        }
        Ok(Prediction {
            probability: self.probability,
            risk_level: self.risk_level,
            suggestion: self.suggestion,
            next_30_min: self.next_30_min,
        })
    }
}
