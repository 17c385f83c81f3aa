use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gas_station_bot::bot::{Bot, BotError, BotStats, run_polling};
use gas_station_bot::cache::{CachedStationFinder, StationCache};
use gas_station_bot::config::{BotConfig, PlacesSource};
use gas_station_bot::places::{MockPlacesClient, PlacesClient, PlacesConfig, StationSource};
use gas_station_bot::telegram::{TelegramClient, TelegramConfig};
use gas_station_bot::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gas_station_bot=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "bot stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BotError> {
    let config = BotConfig::from_env()?;

    // Station source: live API or fixtures
    let source = match &config.places {
        PlacesSource::Google { api_key } => {
            StationSource::Live(PlacesClient::new(PlacesConfig::new(api_key))?)
        }
        PlacesSource::Mock { data_dir } => {
            let mock = MockPlacesClient::new(data_dir)?;
            warn!(
                dir = %data_dir.display(),
                zips = mock.available_zips().len(),
                "using mock station data"
            );
            StationSource::Mock(mock)
        }
    };
    let source_kind = source.kind();

    // Cached finder
    let cache = StationCache::new(&config.cache);
    let finder = Arc::new(CachedStationFinder::new(source, cache.clone()));
    let stats = Arc::new(BotStats::new());

    // Telegram client (fail fast on a bad token)
    let telegram_config =
        TelegramConfig::new(&config.telegram_token).with_poll_timeout(config.poll_timeout_secs);
    let telegram = TelegramClient::new(telegram_config)?;
    let me = telegram.get_me().await?;
    info!(
        bot = me.username.as_deref().unwrap_or(&me.first_name),
        source = source_kind,
        cache_ttl_secs = config.cache.ttl.as_secs(),
        "bot authenticated"
    );

    // Health/stats server
    let app = create_router(AppState::new(cache, stats.clone(), source_kind));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "health server listening");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "health server failed");
        }
    });

    let bot = Bot::new(telegram, finder, stats);
    info!("polling for updates");
    run_polling(&bot, shutdown_signal()).await?;

    info!("shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
