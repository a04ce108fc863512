use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use phrasecheck::application::services::{CoverageScorer, DictationService};
use phrasecheck::infrastructure::audio::{
    FfmpegTranscoder, SpeechRecognizerFactory, check_ffmpeg_binary,
};
use phrasecheck::infrastructure::observability::{TracingConfig, init_tracing};
use phrasecheck::infrastructure::storage::LocalMediaStore;
use phrasecheck::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    if let Err(e) = check_ffmpeg_binary(&settings.transcoder.ffmpeg_binary).await {
        tracing::warn!(error = %e, "ffmpeg is not usable, audio checks will fail");
    }

    let media_store = Arc::new(
        LocalMediaStore::new(PathBuf::from(&settings.storage.scratch_path))
            .context("Failed to prepare scratch directory")?,
    );
    let transcoder = Arc::new(FfmpegTranscoder::new(
        settings.transcoder.ffmpeg_binary.clone(),
        settings.waveform_format(),
    ));
    let recognizer = SpeechRecognizerFactory::create(&settings.recognizer)
        .context("Failed to configure speech recognizer")?;

    tracing::info!(
        provider = ?settings.recognizer.provider,
        scratch_path = %media_store.base_path().display(),
        sample_rate_hz = settings.transcoder.sample_rate_hz,
        "Pipeline configured"
    );

    let dictation_service = Arc::new(DictationService::new(
        media_store,
        transcoder,
        recognizer,
        Arc::new(CoverageScorer),
        settings.stage_timeouts(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let router = create_router(AppState {
        dictation_service,
        settings,
    });

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
