use vodca::{AsRefln, Fromln};

/// PHC-formatted password hash. Never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}
