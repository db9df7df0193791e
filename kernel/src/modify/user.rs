use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{PasswordHash, User, UserName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Stores a new user under the next free id. Fails with [`KernelError::Conflict`]
    /// when `name` is already taken; the check and the insert are atomic.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        name: &UserName,
        password: &PasswordHash,
    ) -> error_stack::Result<User, KernelError>;
}

pub trait DependOnUserModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type UserModifier: UserModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn user_modifier(&self) -> &Self::UserModifier;
}
