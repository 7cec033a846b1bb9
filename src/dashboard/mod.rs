mod hud;

pub(crate) use hud::Hud;
