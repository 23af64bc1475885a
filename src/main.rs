//! Wiring & DI. Entry point: load config, bootstrap adapters, run once.
//! No business logic here; the run itself is delegated to DailyPostService.

use bsky_countdown::adapters::ai::OpenAiAdapter;
use bsky_countdown::adapters::bluesky::{XrpcAuthAdapter, XrpcPublisher};
use bsky_countdown::domain::RunOutcome;
use bsky_countdown::ports::{AuthPort, PublisherPort, TextGeneratorPort};
use bsky_countdown::shared::config::AppConfig;
use bsky_countdown::shared::http::build_client;
use bsky_countdown::usecases::DailyPostService;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Captured once; posts stamp their own createdAt at send time.
    let started_at = Utc::now();

    let env_loaded = if AppConfig::is_production() {
        None
    } else {
        Some(dotenv::dotenv())
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Some(Ok(path)) => info!(path = %path.display(), "loaded .env"),
        Some(Err(e)) => info!(error = %e, "no .env loaded, using process environment"),
        None => info!("production environment, skipping .env"),
    }

    let cfg = AppConfig::load().inspect_err(|e| error!(error = %e, "invalid configuration"))?;

    let schedule = cfg.schedule();
    if schedule.is_retired(started_at) {
        info!(retire_on = %schedule.retire_on, "bot retired, exiting");
        return Ok(());
    }

    let credentials = cfg
        .credentials()
        .inspect_err(|e| error!(error = %e, "missing credentials"))?;

    if let Some(t) = cfg.request_timeout() {
        info!(timeout_secs = t.as_secs(), "request timeout enabled");
    }
    let client = build_client(cfg.request_timeout())?;
    let service_url = cfg.bluesky_service_url_or_default();

    let generator: Arc<dyn TextGeneratorPort> = Arc::new(OpenAiAdapter::new(
        client.clone(),
        cfg.openai_api_url_or_default(),
        cfg.openai_api_key(),
        cfg.openai_model_or_default(),
    ));
    let auth: Arc<dyn AuthPort> = Arc::new(XrpcAuthAdapter::new(client.clone(), &service_url));
    let publisher: Arc<dyn PublisherPort> = Arc::new(XrpcPublisher::new(client, &service_url));

    let service = DailyPostService::new(generator, auth, publisher, schedule);
    match service.run(started_at, &credentials).await {
        Ok(RunOutcome::Posted { .. }) => {
            info!("message posted successfully");
            Ok(())
        }
        Ok(RunOutcome::Retired) => Ok(()),
        Err(e) => {
            error!(error = %e, "run failed");
            Err(e.into())
        }
    }
}
