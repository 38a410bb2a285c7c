use config::ApiConfig;
use dotenv::dotenv;
use eedm::app::{self, AppError, AppProperties, AppResult};
use error_stack::ResultExt;
use error_stack::fmt::ColorMode;
use hr_routes::state::{ApiSettings, AppState};
use memory::MemoryEngine;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod config;
mod memory;

const SERVICE_NAME: &str = "hr-api";

#[tokio::main]
async fn main() {
    match try_main().await {
        Ok(_) => info!("hr api shutting down"),
        Err(e) => {
            error!("hr api exited with error: {e:?}");
        }
    }
}

fn init_logging() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env(config::HR_API_LOG))
        .init();
}

async fn try_main() -> AppResult<()> {
    let env_file = dotenv();
    init_logging();

    if let Err(e) = env_file {
        warn!("failed to load .env file: {e}");
    }

    let config = ApiConfig::from_env().change_context(AppError)?;
    debug!("loaded configuration: {config:?}");

    let metrics_handle = if config.metrics_enabled {
        Some(eedm::metrics::setup_recorder().change_context(AppError)?)
    } else {
        None
    };

    let app_state = AppState::new(
        MemoryEngine::seeded(),
        ApiSettings {
            include_link_self_headers: config.include_link_self_headers,
        },
    );

    debug!("building routes..");
    let routes = hr_routes::routes::build(app_state, metrics_handle);
    debug!("routes built");

    app::run(
        routes,
        AppProperties {
            service_name: SERVICE_NAME,
            port: config.port,
        },
    )
    .await
}
