use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructOrderLine, DestructUserOrder, OrderLine, User, UserOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDto {
    pub id: Uuid,
    pub user_id: i64,
    pub username: String,
    pub lines: Vec<OrderLineDto>,
    pub total: Decimal,
    pub created_at: OffsetDateTime,
}

impl OrderDto {
    pub fn new(user: &User, order: UserOrder) -> Self {
        let DestructUserOrder {
            id,
            user_id,
            lines,
            total,
            created_at,
        } = order.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            username: user.name().as_ref().clone(),
            lines: lines.into_iter().map(OrderLineDto::from).collect(),
            total: total.into(),
            created_at: created_at.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineDto {
    pub item_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<OrderLine> for OrderLineDto {
    fn from(value: OrderLine) -> Self {
        let DestructOrderLine {
            item_id,
            name,
            price,
            quantity,
        } = value.into_destruct();
        Self {
            item_id: item_id.into(),
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

pub struct SubmitOrderDto {
    pub username: String,
}

pub struct GetOrderHistoryDto {
    pub username: String,
}
