pub(crate) mod health_get;
pub(crate) mod predict_turbulence_post;
pub(crate) mod request_common;
pub(crate) mod voice_assistant_post;
