use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Opaque bearer credential proving a user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}
