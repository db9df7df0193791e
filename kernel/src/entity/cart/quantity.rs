use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(quantity: impl Into<u32>) -> Self {
        Self(quantity.into())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(&self, other: &Quantity) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_sub(&self, other: &Quantity) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}
