use rust_decimal::Decimal;

use kernel::prelude::entity::{DestructItem, Item};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDto {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<Item> for ItemDto {
    fn from(value: Item) -> Self {
        let DestructItem {
            id,
            name,
            price,
            description,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

pub struct GetItemDto {
    pub id: i64,
}

pub struct FindItemsDto {
    pub name: String,
}
