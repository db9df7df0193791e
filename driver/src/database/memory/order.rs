use kernel::interface::query::OrderQuery;
use kernel::interface::update::OrderModifier;
use kernel::prelude::entity::{UserId, UserOrder};
use kernel::KernelError;

use crate::database::memory::{read, write, InMemoryTransaction, Undo};

pub struct InMemoryOrderRepository;

#[async_trait::async_trait]
impl OrderQuery for InMemoryOrderRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_user_id(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<UserOrder>, KernelError> {
        let orders = read(&con.store().orders)?;
        Ok(orders.get(user_id).cloned().unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl OrderModifier for InMemoryOrderRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        order: &UserOrder,
    ) -> error_stack::Result<(), KernelError> {
        let user_id = *order.user_id();
        write(&con.store().orders)?
            .entry(user_id)
            .or_default()
            .push(order.clone());
        con.record(Undo::AppendOrder(user_id));
        Ok(())
    }
}
