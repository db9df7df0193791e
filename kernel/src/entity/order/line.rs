use destructure::Destructure;
use vodca::References;

use crate::entity::{Item, ItemId, ItemName, ItemPrice, Quantity};

/// One purchased item with the catalog name and unit price captured at submission.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct OrderLine {
    item_id: ItemId,
    name: ItemName,
    price: ItemPrice,
    quantity: Quantity,
}

impl OrderLine {
    pub fn new(item_id: ItemId, name: ItemName, price: ItemPrice, quantity: Quantity) -> Self {
        Self {
            item_id,
            name,
            price,
            quantity,
        }
    }

    pub fn snapshot(item: &Item, quantity: Quantity) -> Self {
        Self::new(*item.id(), item.name().clone(), *item.price(), quantity)
    }

    pub fn subtotal(&self) -> ItemPrice {
        self.price.times(&self.quantity)
    }
}
