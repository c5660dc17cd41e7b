use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use palavra_config::Config;
use palavra_core::settings::{
    COUNT_MAX, COUNT_MIN, LENGTH_MAX, LENGTH_MIN, Language, clamp,
};
use palavra_provider::{RandomWordClient, WordProvider};
use palavra_types::AppEvent;
use tokio::signal;

pub mod controller;
pub mod events;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "palavra", about = "Fetch batches of random words")]
struct Cli {
    /// Words per batch (1-10)
    #[arg(long)]
    count: Option<u8>,
    /// Letters per word (3-10)
    #[arg(long)]
    length: Option<u8>,
    /// Language code: pt-br, en, es, fr
    #[arg(long)]
    lang: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        let settings = &mut config.ui.initial_settings;
        if let Some(count) = self.count {
            settings.count = clamp(count, COUNT_MIN, COUNT_MAX);
        }
        if let Some(length) = self.length {
            settings.word_length = clamp(length, LENGTH_MIN, LENGTH_MAX);
        }
        if let Some(lang) = &self.lang {
            settings.language = Language::parse_or_default(lang);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let mut config = Config::new();
    Cli::parse().apply(&mut config);

    let provider: Arc<dyn WordProvider> = Arc::new(RandomWordClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_seconds),
    ));
    let channel_capacity = config.channel_capacity;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state), channel_capacity);
    let kickoff = controller.ui_sender();

    // The UI task is !Send, so the JoinSet spawns it via spawn_local,
    // which must run inside a LocalSet driven on this thread.
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let mut tasks = controller.spawn_tasks(provider);

            // Startup fetch with the initial settings, as if the user hit refresh
            kickoff.send(AppEvent::Refresh).await?;

            // Shutdown future (Ctrl+C)
            let shutdown = async {
                signal::ctrl_c().await.expect("failed to listen for ctrl+c");
            };

            tokio::select! {
                _ = shutdown => {
                    tracing::info!("Shutdown requested");
                }
                result = tasks.join_next() => {
                    match result {
                        Some(Ok(Ok(()))) => tracing::info!("task finished, shutting down"),
                        Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                        Some(Err(e)) => tracing::error!("task panicked: {e}"),
                        None => {}
                    }
                }
            }

            controller.shutdown();
            tasks.shutdown().await;

            Ok(())
        })
        .await
}
