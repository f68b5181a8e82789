use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use audio_prelabel::application::services::{
    MetadataStage, PredictionService, TempoStage, TranscriptionStage,
};
use audio_prelabel::infrastructure::audio::{TempoAnalyzerFactory, TranscriptionEngineFactory};
use audio_prelabel::infrastructure::metadata::MetadataReaderFactory;
use audio_prelabel::infrastructure::observability::{TracingConfig, init_tracing};
use audio_prelabel::infrastructure::storage::HttpAudioResolver;
use audio_prelabel::presentation::{AppState, Environment, Settings, create_router};

/// Annotation pre-labeling backend for audio tasks.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind, overrides `server.host`.
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to bind, overrides `server.port`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment).context("Failed to load settings")?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    init_tracing(&TracingConfig::from_settings(
        &settings.logging,
        environment.as_str(),
    ))
    .context("Failed to initialize tracing")?;

    let resolver = Arc::new(
        HttpAudioResolver::new(&settings.storage).context("Failed to configure audio resolver")?,
    );
    let engine = TranscriptionEngineFactory::create(&settings.transcription);
    if engine.is_none() {
        tracing::info!("No transcription credential configured; transcripts will be placeholders");
    }

    let prediction_service = Arc::new(PredictionService::new(
        resolver,
        TranscriptionStage::new(engine),
        TempoStage::new(TempoAnalyzerFactory::create(&settings.analysis)),
        MetadataStage::new(MetadataReaderFactory::create(&settings.analysis)),
    ));

    let state = AppState::new(prediction_service, settings.model_version.clone());
    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
