#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod dashboard;
mod http_handler;
mod keychain;
mod logger;
mod prediction;
mod store;
mod telemetry;
mod voice;

use crate::dashboard::Hud;
use crate::keychain::Keychain;
use crate::prediction::{PredictionClient, TurbulenceService};
use crate::telemetry::TelemetrySimulator;
use crate::voice::{AssistantService, VoiceClient};
use std::{env, sync::Arc};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let base_url_var = env::var("AEROAI_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("http://localhost:8000", |v| v.as_str());
    let keychain = Keychain::new(base_url);
    let token = CancellationToken::new();

    info!("AeroAI core starting, backend at {base_url}");
    keychain.check_backend().await;

    let simulator = TelemetrySimulator::new(keychain.store());
    let sim_token = token.clone();
    tokio::spawn(async move {
        simulator.run(sim_token).await;
    });

    let prediction_client = Arc::new(PredictionClient::new(
        Arc::new(TurbulenceService::new(keychain.client())),
        keychain.store(),
    ));
    let pred_token = token.clone();
    tokio::spawn(async move {
        prediction_client.run(pred_token).await;
    });

    let hud = Hud::new(keychain.store());
    let hud_token = token.clone();
    tokio::spawn(async move {
        hud.run(hud_token).await;
    });

    let voice_client = VoiceClient::new(
        Arc::new(AssistantService::new(keychain.client())),
        keychain.store(),
        keychain.speech(),
    );
    let voice_token = token.clone();
    tokio::spawn(async move {
        voice_client.run(voice_token).await;
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        fatal!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received, cancelling periodic tasks");
    token.cancel();
}
