mod id;
mod line;

pub use self::{id::*, line::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::{CreatedAt, ItemPrice, UserId};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct UserOrder {
    id: OrderId,
    user_id: UserId,
    lines: Vec<OrderLine>,
    total: ItemPrice,
    created_at: CreatedAt<UserOrder>,
}

impl UserOrder {
    pub fn new(
        id: OrderId,
        user_id: UserId,
        lines: Vec<OrderLine>,
        total: ItemPrice,
        created_at: CreatedAt<UserOrder>,
    ) -> Self {
        Self {
            id,
            user_id,
            lines,
            total,
            created_at,
        }
    }

    /// Builds an order whose total is the sum of its line subtotals.
    pub fn place(
        id: OrderId,
        user_id: UserId,
        lines: Vec<OrderLine>,
        created_at: CreatedAt<UserOrder>,
    ) -> Self {
        let total = lines.iter().map(OrderLine::subtotal).sum();
        Self::new(id, user_id, lines, total, created_at)
    }
}
