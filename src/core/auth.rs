//! Admin login.
//!
//! The API has a single administrator identity, defined in the
//! [`Admin`](modelos_api_configuration::Admin) configuration section. When the
//! submitted credentials match, the [`Authenticator`] issues a signed session
//! token valid for [`SESSION_LIFETIME`].
//!
//! Tokens use the compact `JWT` form signed with `HS256`:
//!
//! ```text
//! base64url(header) . base64url(claims) . base64url(HMAC-SHA256(header.claims))
//! ```
//!
//! With these claims:
//!
//! Claim  | Sample data  | Description
//! ---|---|---
//! `sub`  | `admin`      | The admin username
//! `role` | `admin`      | Always `admin`
//! `iat`  | `1715342400` | Issued at, seconds since the Unix Epoch
//! `exp`  | `1715371200` | Expiration time, `iat` plus eight hours
//!
//! No endpoint requires the token yet. [`Authenticator::verify`] checks the
//! signature and the expiration time.
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use modelos_api_clock::clock::Time;
use modelos_api_configuration::Admin;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::debug;

use crate::CurrentClock;

type HmacSha256 = Hmac<Sha256>;

/// How long a session token is valid after being issued.
pub const SESSION_LIFETIME: Duration = Duration::from_secs(8 * 60 * 60);

/// The role granted to the administrator.
pub const ADMIN_ROLE: &str = "admin";

const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// The claims carried by a session token.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: u64,
    pub exp: u64,
}

/// A token issued after a successful login.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SessionToken {
    pub token: String,
    pub claims: Claims,
}

impl SessionToken {
    #[must_use]
    pub fn role(&self) -> &str {
        &self.claims.role
    }
}

/// It checks the admin credentials and issues session tokens.
pub struct Authenticator {
    username: String,
    password: String,
    secret: Vec<u8>,
}

impl Authenticator {
    #[must_use]
    pub fn new(config: &Admin) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            secret: config.token_secret.as_bytes().to_vec(),
        }
    }

    /// It issues a new session token if the credentials match the configured
    /// admin ones. Both fields are always compared.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidCredentials` if either the username or the
    /// password does not match.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionToken, Error> {
        let username_matches = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_matches = password.as_bytes().ct_eq(self.password.as_bytes());

        if !bool::from(username_matches & password_matches) {
            return Err(Error::InvalidCredentials {
                location: Location::caller(),
            });
        }

        let iat = CurrentClock::now().as_secs();

        let claims = Claims {
            sub: self.username.clone(),
            role: ADMIN_ROLE.to_string(),
            iat,
            exp: iat.saturating_add(SESSION_LIFETIME.as_secs()),
        };

        debug!("Issued session token for: {}, valid until: {}", claims.sub, claims.exp);

        Ok(SessionToken {
            token: self.sign(&claims)?,
            claims,
        })
    }

    /// It verifies a session token and returns its claims.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidToken` if the token is malformed or the
    /// signature does not match, and `Error::TokenExpired` if the expiration
    /// time has passed.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        let invalid = || Error::InvalidToken {
            location: Location::caller(),
        };

        let mut parts = token.split('.');

        let (Some(header), Some(claims), Some(signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let signature = URL_SAFE_NO_PAD.decode(signature).map_err(|_| invalid())?;

        self.mac_for(header, claims)?
            .verify_slice(&signature)
            .map_err(|_| invalid())?;

        let claims = URL_SAFE_NO_PAD.decode(claims).map_err(|_| invalid())?;
        let claims: Claims = serde_json::from_slice(&claims).map_err(|_| invalid())?;

        if claims.exp <= CurrentClock::now().as_secs() {
            return Err(Error::TokenExpired {
                location: Location::caller(),
            });
        }

        Ok(claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, Error> {
        let header = URL_SAFE_NO_PAD.encode(TOKEN_HEADER);

        let claims = serde_json::to_vec(claims).map_err(|err| Error::UnableToEncodeClaims { source: Arc::new(err) })?;
        let claims = URL_SAFE_NO_PAD.encode(claims);

        let signature = URL_SAFE_NO_PAD.encode(self.mac_for(&header, &claims)?.finalize().into_bytes());

        Ok(format!("{header}.{claims}.{signature}"))
    }

    fn mac_for(&self, header: &str, claims: &str) -> Result<HmacSha256, Error> {
        let mut mac = HmacSha256::new_from_slice(&self.secret).map_err(|_| Error::InvalidSecret {
            location: Location::caller(),
        })?;

        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(claims.as_bytes());

        Ok(mac)
    }
}

/// Error returned by the [`Authenticator`].
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("Invalid credentials, {location}")]
    InvalidCredentials { location: &'static Location<'static> },
    #[error("The session token is not valid, {location}")]
    InvalidToken { location: &'static Location<'static> },
    #[error("The session token has expired, {location}")]
    TokenExpired { location: &'static Location<'static> },
    #[error("The token secret cannot be used as an HMAC key, {location}")]
    InvalidSecret { location: &'static Location<'static> },
    #[error("Unable to encode the token claims: {source}")]
    UnableToEncodeClaims { source: Arc<serde_json::Error> },
}
