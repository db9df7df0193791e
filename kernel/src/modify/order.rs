use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::UserOrder;
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Appends `order` to its owner's history.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        order: &UserOrder,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnOrderModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type OrderModifier: OrderModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn order_modifier(&self) -> &Self::OrderModifier;
}
