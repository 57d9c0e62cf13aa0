//! Construction of the long-lived pieces the server needs before it binds.

use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer, SessionStore};
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{config::Config, error::Error, syrve::client::SyrveClient};

/// Build the Syrve API client from the configured host and timeout
pub fn build_syrve_client(config: &Config) -> Result<SyrveClient, Error> {
    let syrve_client = SyrveClient::new(&config.api_host, config.request_timeout)?;

    Ok(syrve_client)
}

/// Keep sessions in process memory, used when no Valkey URL is configured
pub fn memory_session() -> SessionManagerLayer<MemoryStore> {
    session_layer(MemoryStore::default())
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    valkey_url: &str,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use tower_sessions_redis_store::fred::prelude::{Config as RedisConfig, *};

    let redis_config = RedisConfig::from_url(valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(session_layer(RedisStore::new(pool)))
}

fn session_layer<S: SessionStore + Clone>(session_store: S) -> SessionManagerLayer<S> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
