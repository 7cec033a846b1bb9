mod prediction;
mod prediction_client;

pub(crate) use prediction::{Prediction, RiskLevel, TREND_POINTS};
pub(crate) use prediction_client::{PredictionClient, TurbulenceService};
