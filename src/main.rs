use courier_switch::server::{config::Config, error::Error, model::app::AppState, router, startup};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let syrve_client = startup::build_syrve_client(&config)?;
    let state = AppState::new(
        syrve_client,
        config.api_login.clone(),
        config.command_status_delay,
    );

    let routes = router::routes().with_state(state);
    let app = match &config.valkey_url {
        Some(valkey_url) => routes.layer(startup::connect_to_session(valkey_url).await?),
        None => {
            tracing::warn!("VALKEY_URL not set, sessions will be kept in memory");
            routes.layer(startup::memory_session())
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
