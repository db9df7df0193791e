mod cart;
mod item;
mod order;
mod user;

pub use self::{cart::*, item::*, order::*, user::*};
