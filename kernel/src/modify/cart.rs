use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Cart, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn save(
        &self,
        con: &mut Self::Transaction,
        cart: &Cart,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCartModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CartModifier: CartModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn cart_modifier(&self) -> &Self::CartModifier;
}
