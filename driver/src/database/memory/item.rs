use kernel::interface::query::ItemQuery;
use kernel::prelude::entity::{Item, ItemId, ItemName};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryItemRepository;

#[async_trait::async_trait]
impl ItemQuery for InMemoryItemRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &ItemId,
    ) -> error_stack::Result<Option<Item>, KernelError> {
        Ok(con.store().items.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        Ok(con.store().items.values().cloned().collect())
    }

    async fn find_by_name(
        &self,
        con: &mut InMemoryTransaction,
        name: &ItemName,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        let found = con
            .store()
            .items
            .values()
            .filter(|item| item.name() == name)
            .cloned()
            .collect();
        Ok(found)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ItemQuery;
    use kernel::prelude::entity::{ItemId, ItemName};
    use kernel::KernelError;

    use crate::database::{InMemoryDatabase, InMemoryItemRepository};

    #[tokio::test]
    async fn default_catalog() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let mut con = db.transact().await?;

        let all = InMemoryItemRepository.find_all(&mut con).await?;
        let ids = all.iter().map(|item| *item.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![ItemId::new(1), ItemId::new(2)]);

        let round = InMemoryItemRepository
            .find_by_id(&mut con, &ItemId::new(1))
            .await?;
        assert_eq!(
            round.map(|item| item.name().clone()),
            Some(ItemName::new("Round Widget"))
        );

        let missing = InMemoryItemRepository
            .find_by_id(&mut con, &ItemId::new(3))
            .await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn find_by_name_is_exact() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let mut con = db.transact().await?;

        let found = InMemoryItemRepository
            .find_by_name(&mut con, &ItemName::new("Square Widget"))
            .await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), &ItemId::new(2));

        let found = InMemoryItemRepository
            .find_by_name(&mut con, &ItemName::new("Widget"))
            .await?;
        assert!(found.is_empty());
        Ok(())
    }
}
