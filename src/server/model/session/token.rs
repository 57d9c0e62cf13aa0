//! Syrve bearer token session data.
//!
//! The bearer token obtained from the access-token exchange is cached in the visitor's
//! session so the exchange happens once per session. There is no refresh logic: the token
//! lives exactly as long as the session does.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for storing the Syrve bearer token.
pub const SESSION_SYRVE_TOKEN_KEY: &str = "courier_switch:syrve:token";

/// Session wrapper for the Syrve bearer token.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionSyrveToken(pub String);

impl SessionSyrveToken {
    /// Inserts the bearer token into the session.
    ///
    /// # Arguments
    /// - `session` - Visitor's session for storing the token
    /// - `token` - Bearer token returned by `/access_token`
    ///
    /// # Returns
    /// - `Ok(())` - Token stored in session
    /// - `Err(Error)` - Session storage failed
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_SYRVE_TOKEN_KEY, SessionSyrveToken(token.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the bearer token from the session.
    ///
    /// An empty stored token is reported as absent so a bad write can never short-circuit
    /// the exchange.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Token present
    /// - `Ok(None)` - No token cached for this session
    /// - `Err(Error)` - Session retrieval failed
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .get::<SessionSyrveToken>(SESSION_SYRVE_TOKEN_KEY)
            .await?
            .map(|SessionSyrveToken(token)| token)
            .filter(|token| !token.is_empty());

        Ok(token)
    }

    /// Removes and returns the bearer token from the session.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Token that was cached
    /// - `Ok(None)` - No token was cached
    /// - `Err(Error)` - Session removal failed
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .remove::<SessionSyrveToken>(SESSION_SYRVE_TOKEN_KEY)
            .await?
            .map(|SessionSyrveToken(token)| token);

        Ok(token)
    }
}
