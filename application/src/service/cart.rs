use error_stack::Report;
use tracing::debug;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    CartQuery, DependOnCartQuery, DependOnItemQuery, DependOnUserQuery, ItemQuery,
};
use kernel::interface::update::{CartModifier, DependOnCartModifier};
use kernel::prelude::entity::{Cart, Item, ItemId, ItemPrice, Quantity, User};
use kernel::KernelError;

use crate::service::user::locate_user;
use crate::transfer::{CartDto, CartLineDto, GetCartDto, ModifyCartDto};

#[async_trait::async_trait]
pub trait CartLedger:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnItemQuery
    + DependOnCartQuery
    + DependOnCartModifier
{
    async fn get_cart(&self, dto: GetCartDto) -> error_stack::Result<CartDto, KernelError> {
        let user = locate_user(self, &dto.username).await?;
        let mut connection = self.database_connection().transact_for(user.id()).await?;

        let cart = self
            .cart_query()
            .find_by_user_id(&mut connection, user.id())
            .await?
            .unwrap_or_else(|| Cart::empty(*user.id()));
        let dto = present_cart(self, &mut connection, &user, &cart).await?;
        connection.commit().await?;

        Ok(dto)
    }

    async fn add_to_cart(&self, dto: ModifyCartDto) -> error_stack::Result<CartDto, KernelError> {
        let quantity = parse_quantity(dto.quantity)?;
        let user = locate_user(self, &dto.username).await?;
        let mut connection = self.database_connection().transact_for(user.id()).await?;

        let item = require_item(self, &mut connection, &ItemId::new(dto.item_id)).await?;
        let mut cart = self
            .cart_query()
            .find_by_user_id(&mut connection, user.id())
            .await?
            .unwrap_or_else(|| Cart::empty(*user.id()));
        cart.add(*item.id(), quantity)?;
        self.cart_modifier().save(&mut connection, &cart).await?;

        let presented = present_cart(self, &mut connection, &user, &cart).await?;
        connection.commit().await?;

        debug!(
            "Added {} x item {} to cart of {}",
            quantity.as_ref(),
            dto.item_id,
            dto.username
        );
        Ok(presented)
    }

    /// Decrements the item's quantity, flooring at zero. Removing an item that is
    /// not in the cart leaves the cart as it is.
    async fn remove_from_cart(
        &self,
        dto: ModifyCartDto,
    ) -> error_stack::Result<CartDto, KernelError> {
        let quantity = parse_quantity(dto.quantity)?;
        let user = locate_user(self, &dto.username).await?;
        let mut connection = self.database_connection().transact_for(user.id()).await?;

        let item = require_item(self, &mut connection, &ItemId::new(dto.item_id)).await?;
        let mut cart = self
            .cart_query()
            .find_by_user_id(&mut connection, user.id())
            .await?
            .unwrap_or_else(|| Cart::empty(*user.id()));
        cart.remove(item.id(), &quantity);
        if cart.is_empty() {
            self.cart_modifier()
                .delete(&mut connection, user.id())
                .await?;
        } else {
            self.cart_modifier().save(&mut connection, &cart).await?;
        }

        let presented = present_cart(self, &mut connection, &user, &cart).await?;
        connection.commit().await?;

        debug!(
            "Removed {} x item {} from cart of {}",
            quantity.as_ref(),
            dto.item_id,
            dto.username
        );
        Ok(presented)
    }
}

impl<T> CartLedger for T where
    T: DependOnUserQuery + DependOnItemQuery + DependOnCartQuery + DependOnCartModifier
{
}

fn parse_quantity(quantity: i32) -> error_stack::Result<Quantity, KernelError> {
    match u32::try_from(quantity) {
        Ok(quantity) if quantity > 0 => Ok(Quantity::new(quantity)),
        _ => Err(Report::new(KernelError::Validation)
            .attach_printable(format!("Quantity must be positive, got {quantity}"))),
    }
}

pub(crate) async fn require_item<T>(
    module: &T,
    connection: &mut <T::DatabaseConnection as DatabaseConnection>::Transaction,
    id: &ItemId,
) -> error_stack::Result<Item, KernelError>
where
    T: DependOnItemQuery + ?Sized,
{
    module
        .item_query()
        .find_by_id(connection, id)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("Item {} not found", id.as_ref()))
        })
}

/// Prices every line from the catalog as it is now.
async fn present_cart<T>(
    module: &T,
    connection: &mut <T::DatabaseConnection as DatabaseConnection>::Transaction,
    user: &User,
    cart: &Cart,
) -> error_stack::Result<CartDto, KernelError>
where
    T: DependOnItemQuery + ?Sized,
{
    let mut lines = Vec::with_capacity(cart.lines().len());
    let mut total = ItemPrice::zero();
    for line in cart.lines() {
        let item = require_item(module, connection, line.item_id()).await?;
        let subtotal = item.price().times(line.quantity());
        total += subtotal;
        lines.push(CartLineDto {
            item_id: *line.item_id().as_ref(),
            name: item.name().as_ref().clone(),
            price: *item.price().as_ref(),
            quantity: *line.quantity().as_ref(),
        });
    }
    Ok(CartDto {
        user_id: *user.id().as_ref(),
        username: user.name().as_ref().clone(),
        lines,
        total: total.into(),
    })
}
