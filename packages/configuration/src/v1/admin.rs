use serde::{Deserialize, Serialize};

/// The single administrator identity allowed to log in.
///
/// The login endpoint issues a signed session token when the submitted
/// credentials match these ones. The token is signed with `token_secret`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Admin {
    #[serde(default = "Admin::default_username")]
    pub username: String,

    #[serde(default = "Admin::default_password")]
    pub password: String,

    /// Secret key used to sign the session tokens.
    #[serde(default = "Admin::default_token_secret")]
    pub token_secret: String,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            username: Self::default_username(),
            password: Self::default_password(),
            token_secret: Self::default_token_secret(),
        }
    }
}

impl Admin {
    fn default_username() -> String {
        String::from("admin")
    }

    fn default_password() -> String {
        String::from("MyAdminPassword")
    }

    fn default_token_secret() -> String {
        String::from("MyTokenSecret")
    }

    pub fn mask_secrets(&mut self) {
        self.password = "***".to_string();
        self.token_secret = "***".to_string();
    }
}
