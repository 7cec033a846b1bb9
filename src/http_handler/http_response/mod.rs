pub(crate) mod assistant_reply;
pub(crate) mod health;
pub(crate) mod response_common;
pub(crate) mod turbulence_prediction;
