//! API resources for the [`login`](crate::servers::apis::v1::context::login) API context.
use serde::{Deserialize, Serialize};

use crate::core::auth::SessionToken;

/// A session token issued after a successful login.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: String,
}

impl From<SessionToken> for Session {
    fn from(session: SessionToken) -> Self {
        Session {
            role: session.role().to_owned(),
            token: session.token,
        }
    }
}

/// The body of the login error responses.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}
