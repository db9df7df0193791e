use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{PasswordHash, User, UserId, UserName};
use kernel::KernelError;

use crate::database::memory::{read, write, InMemoryTransaction, Undo};

pub struct InMemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let users = read(&con.store().users)?;
        Ok(users.by_id.get(id).cloned())
    }

    async fn find_by_name(
        &self,
        con: &mut InMemoryTransaction,
        name: &UserName,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let users = read(&con.store().users)?;
        let found = users
            .by_name
            .get(name)
            .and_then(|id| users.by_id.get(id))
            .cloned();
        Ok(found)
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        name: &UserName,
        password: &PasswordHash,
    ) -> error_stack::Result<User, KernelError> {
        let user = {
            let mut users = write(&con.store().users)?;
            if users.by_name.contains_key(name) {
                return Err(Report::new(KernelError::Conflict)
                    .attach_printable(format!("User {:?} already exists", name.as_ref())));
            }
            let id = UserId::new(users.next_id);
            users.next_id += 1;
            let user = User::new(id, name.clone(), password.clone());
            users.by_name.insert(name.clone(), id);
            users.by_id.insert(id, user.clone());
            user
        };
        con.record(Undo::CreateUser(*user.id()));
        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{PasswordHash, UserId, UserName};
    use kernel::KernelError;

    use crate::database::{InMemoryDatabase, InMemoryUserRepository};

    #[tokio::test]
    async fn create_and_find() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let mut con = db.transact().await?;
        let hash = PasswordHash::new("hash");

        let alice = InMemoryUserRepository
            .create(&mut con, &UserName::new("alice"), &hash)
            .await?;
        let bob = InMemoryUserRepository
            .create(&mut con, &UserName::new("bob"), &hash)
            .await?;
        assert_eq!(alice.id(), &UserId::new(1));
        assert_eq!(bob.id(), &UserId::new(2));

        let found = InMemoryUserRepository
            .find_by_id(&mut con, &UserId::new(1))
            .await?;
        assert_eq!(found, Some(alice.clone()));

        let found = InMemoryUserRepository
            .find_by_name(&mut con, &UserName::new("alice"))
            .await?;
        assert_eq!(found, Some(alice));

        let found = InMemoryUserRepository
            .find_by_name(&mut con, &UserName::new("ali"))
            .await?;
        assert!(found.is_none());
        con.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let mut con = db.transact().await?;
        let name = UserName::new("alice");
        let hash = PasswordHash::new("hash");

        InMemoryUserRepository.create(&mut con, &name, &hash).await?;
        let second = InMemoryUserRepository.create(&mut con, &name, &hash).await;
        assert!(matches!(
            second,
            Err(ref report) if matches!(report.current_context(), KernelError::Conflict)
        ));
        con.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_user_frees_the_name() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let name = UserName::new("alice");
        let hash = PasswordHash::new("hash");

        let mut con = db.transact().await?;
        InMemoryUserRepository.create(&mut con, &name, &hash).await?;
        con.roll_back().await?;

        let mut con = db.transact().await?;
        let found = InMemoryUserRepository.find_by_name(&mut con, &name).await?;
        assert!(found.is_none());
        let created = InMemoryUserRepository.create(&mut con, &name, &hash).await?;
        // ids are never reused
        assert_eq!(created.id(), &UserId::new(2));
        con.commit().await?;
        Ok(())
    }
}
