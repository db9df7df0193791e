use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Cart, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Cart>, KernelError>;
}

pub trait DependOnCartQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CartQuery: CartQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn cart_query(&self) -> &Self::CartQuery;
}
