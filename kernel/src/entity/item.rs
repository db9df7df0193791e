mod description;
mod id;
mod name;
mod price;

pub use self::{description::*, id::*, name::*, price::*};
use destructure::Destructure;
use vodca::References;

/// Catalog entry. Read-only for everything outside the store seed.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Item {
    id: ItemId,
    name: ItemName,
    price: ItemPrice,
    description: ItemDescription,
}

impl Item {
    pub fn new(id: ItemId, name: ItemName, price: ItemPrice, description: ItemDescription) -> Self {
        Self {
            id,
            name,
            price,
            description,
        }
    }
}
