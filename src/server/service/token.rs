//! Session-cached Syrve access token.

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::token::SessionSyrveToken,
    syrve::client::SyrveClient,
};

/// Provides the bearer token for the current session.
pub struct TokenService<'a> {
    syrve_client: &'a SyrveClient,
    api_login: &'a str,
}

impl<'a> TokenService<'a> {
    /// Creates a new instance of [`TokenService`]
    pub fn new(syrve_client: &'a SyrveClient, api_login: &'a str) -> Self {
        Self {
            syrve_client,
            api_login,
        }
    }

    /// Returns the session's bearer token, exchanging the apiLogin for one if none is cached
    ///
    /// The exchange happens at most once per session; the resulting token is reused until the
    /// session expires.
    ///
    /// # Returns
    /// - `Ok(String)` - Cached or freshly exchanged token
    /// - `Err(Error::AuthError)` - The exchange failed or returned no token
    /// - `Err(Error::SessionError)` - Reading or writing the session failed
    pub async fn get_token(&self, session: &Session) -> Result<String, Error> {
        if let Some(token) = SessionSyrveToken::get(session).await? {
            return Ok(token);
        }

        let token = self
            .syrve_client
            .access_token(self.api_login)
            .await
            .map_err(AuthError::TokenExchangeFailed)?
            .ok_or(AuthError::TokenMissing)?;

        SessionSyrveToken::insert(session, &token).await?;

        tracing::debug!("Cached new Syrve access token in session");

        Ok(token)
    }

    /// Drops the session's cached token so the next request exchanges the apiLogin again
    ///
    /// Called when the API rejects the cached token as unauthorized.
    pub async fn discard_token(&self, session: &Session) -> Result<(), Error> {
        if SessionSyrveToken::remove(session).await?.is_some() {
            tracing::debug!("Discarded rejected Syrve access token from session");
        }

        Ok(())
    }
}
