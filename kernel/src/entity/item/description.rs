use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ItemDescription(String);

impl ItemDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
