use tracing::info;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    CartQuery, DependOnCartQuery, DependOnItemQuery, DependOnOrderQuery, DependOnUserQuery,
    OrderQuery,
};
use kernel::interface::update::{
    CartModifier, DependOnCartModifier, DependOnOrderModifier, OrderModifier,
};
use kernel::prelude::entity::{CreatedAt, OrderId, OrderLine, UserOrder};
use kernel::KernelError;

use crate::service::cart::require_item;
use crate::service::user::locate_user;
use crate::transfer::{GetOrderHistoryDto, OrderDto, SubmitOrderDto};

#[async_trait::async_trait]
pub trait OrderBook:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnItemQuery
    + DependOnCartQuery
    + DependOnCartModifier
    + DependOnOrderQuery
    + DependOnOrderModifier
{
    /// Turns the user's current cart (possibly empty) into an order, appends it to
    /// their history and clears the cart. Nothing changes if any step fails.
    async fn submit(&self, dto: SubmitOrderDto) -> error_stack::Result<OrderDto, KernelError> {
        let user = locate_user(self, &dto.username).await?;
        let mut connection = self.database_connection().transact_for(user.id()).await?;

        let cart = self
            .cart_query()
            .find_by_user_id(&mut connection, user.id())
            .await?;
        let mut lines = Vec::new();
        for line in cart.iter().flat_map(|cart| cart.lines()) {
            let item = require_item(self, &mut connection, line.item_id()).await?;
            lines.push(OrderLine::snapshot(&item, *line.quantity()));
        }

        let order = UserOrder::place(
            OrderId::new(Uuid::new_v4()),
            *user.id(),
            lines,
            CreatedAt::now(),
        );
        self.order_modifier().create(&mut connection, &order).await?;
        self.cart_modifier()
            .delete(&mut connection, user.id())
            .await?;
        connection.commit().await?;

        info!(
            "Submitted order {} for {} with total {}",
            order.id().as_ref(),
            dto.username,
            order.total().as_ref()
        );
        Ok(OrderDto::new(&user, order))
    }

    async fn history(
        &self,
        dto: GetOrderHistoryDto,
    ) -> error_stack::Result<Vec<OrderDto>, KernelError> {
        let user = locate_user(self, &dto.username).await?;
        let mut connection = self.database_connection().transact_for(user.id()).await?;

        let orders = self
            .order_query()
            .find_by_user_id(&mut connection, user.id())
            .await?;
        connection.commit().await?;

        Ok(orders
            .into_iter()
            .map(|order| OrderDto::new(&user, order))
            .collect())
    }
}

impl<T> OrderBook for T where
    T: DependOnUserQuery
        + DependOnItemQuery
        + DependOnCartQuery
        + DependOnCartModifier
        + DependOnOrderQuery
        + DependOnOrderModifier
{
}
