mod line;
mod quantity;

pub use self::{line::*, quantity::*};
use destructure::Destructure;
use error_stack::Report;
use vodca::References;

use crate::entity::{ItemId, UserId};
use crate::KernelError;

/// A user's in-progress selection. Lines keep the order in which each item was
/// first added and never hold a zero quantity.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Cart {
    user_id: UserId,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(user_id: UserId, lines: Vec<CartLine>) -> Self {
        Self { user_id, lines }
    }

    pub fn empty(user_id: UserId) -> Self {
        Self::new(user_id, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, item_id: &ItemId) -> Option<&Quantity> {
        self.lines
            .iter()
            .find(|line| line.item_id() == item_id)
            .map(CartLine::quantity)
    }

    pub fn add(
        &mut self,
        item_id: ItemId,
        quantity: Quantity,
    ) -> error_stack::Result<(), KernelError> {
        match self.lines.iter_mut().find(|line| line.item_id() == &item_id) {
            Some(line) => {
                let DestructCartLine {
                    item_id,
                    quantity: current,
                } = line.clone().into_destruct();
                let total = current.checked_add(&quantity).ok_or_else(|| {
                    Report::new(KernelError::Validation)
                        .attach_printable(format!("Quantity overflow for item {:?}", item_id))
                })?;
                *line = CartLine::new(item_id, total);
            }
            None if quantity.is_zero() => {}
            None => self.lines.push(CartLine::new(item_id, quantity)),
        }
        Ok(())
    }

    /// Decrements the line for `item_id`, floored at zero. The line is dropped when it
    /// reaches zero; removing an item that is not in the cart changes nothing.
    pub fn remove(&mut self, item_id: &ItemId, quantity: &Quantity) {
        let Some(position) = self.lines.iter().position(|line| line.item_id() == item_id) else {
            return;
        };
        let remaining = self.lines[position].quantity().saturating_sub(quantity);
        if remaining.is_zero() {
            self.lines.remove(position);
        } else {
            self.lines[position] = CartLine::new(*item_id, remaining);
        }
    }
}
