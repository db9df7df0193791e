use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnItemQuery, ItemQuery};
use kernel::prelude::entity::{ItemId, ItemName};
use kernel::KernelError;

use crate::transfer::{FindItemsDto, GetItemDto, ItemDto};

#[async_trait::async_trait]
pub trait Catalog: 'static + Sync + Send + DependOnItemQuery {
    async fn get_item(&self, dto: GetItemDto) -> error_stack::Result<ItemDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let item = self
            .item_query()
            .find_by_id(&mut connection, &ItemId::new(dto.id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Item {} not found", dto.id))
            })?;
        connection.commit().await?;

        Ok(ItemDto::from(item))
    }

    async fn list_items(&self) -> error_stack::Result<Vec<ItemDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let items = self.item_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(items.into_iter().map(ItemDto::from).collect())
    }

    /// Exact name match. An empty result is reported as [`KernelError::NotFound`].
    async fn find_items_by_name(
        &self,
        dto: FindItemsDto,
    ) -> error_stack::Result<Vec<ItemDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let items = self
            .item_query()
            .find_by_name(&mut connection, &ItemName::new(dto.name.clone()))
            .await?;
        connection.commit().await?;

        if items.is_empty() {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No item named {}", dto.name)));
        }
        Ok(items.into_iter().map(ItemDto::from).collect())
    }
}

impl<T> Catalog for T where T: DependOnItemQuery {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::Catalog;
    use crate::test::module;
    use crate::transfer::{FindItemsDto, GetItemDto};

    #[tokio::test]
    async fn browse_default_catalog() -> error_stack::Result<(), KernelError> {
        let module = module(InMemoryDatabase::default());

        let items = module.list_items().await?;
        assert_eq!(
            items.iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        let round = module.get_item(GetItemDto { id: 1 }).await?;
        assert_eq!(round.name, "Round Widget");

        let found = module
            .find_items_by_name(FindItemsDto {
                name: "Round Widget".to_string(),
            })
            .await?;
        assert_eq!(found, vec![round]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_items_are_not_found() {
        let module = module(InMemoryDatabase::default());

        let error = module
            .get_item(GetItemDto { id: 999 })
            .await
            .expect_err("unknown id");
        assert!(matches!(error.current_context(), KernelError::NotFound));

        let error = module
            .find_items_by_name(FindItemsDto {
                name: "Round".to_string(),
            })
            .await
            .expect_err("partial name");
        assert!(matches!(error.current_context(), KernelError::NotFound));
    }
}
