use kernel::interface::query::CartQuery;
use kernel::interface::update::CartModifier;
use kernel::prelude::entity::{Cart, UserId};
use kernel::KernelError;

use crate::database::memory::{read, write, InMemoryTransaction, Undo};

pub struct InMemoryCartRepository;

#[async_trait::async_trait]
impl CartQuery for InMemoryCartRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_user_id(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Cart>, KernelError> {
        let carts = read(&con.store().carts)?;
        Ok(carts.get(user_id).cloned())
    }
}

#[async_trait::async_trait]
impl CartModifier for InMemoryCartRepository {
    type Transaction = InMemoryTransaction;

    async fn save(
        &self,
        con: &mut InMemoryTransaction,
        cart: &Cart,
    ) -> error_stack::Result<(), KernelError> {
        let user_id = *cart.user_id();
        let previous = write(&con.store().carts)?.insert(user_id, cart.clone());
        con.record(Undo::WriteCart { user_id, previous });
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<(), KernelError> {
        let previous = write(&con.store().carts)?.remove(user_id);
        if previous.is_some() {
            con.record(Undo::WriteCart {
                user_id: *user_id,
                previous,
            });
        }
        Ok(())
    }
}
