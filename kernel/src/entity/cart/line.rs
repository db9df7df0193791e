use destructure::Destructure;
use vodca::References;

use crate::entity::{ItemId, Quantity};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CartLine {
    item_id: ItemId,
    quantity: Quantity,
}

impl CartLine {
    pub fn new(item_id: ItemId, quantity: Quantity) -> Self {
        Self { item_id, quantity }
    }
}
