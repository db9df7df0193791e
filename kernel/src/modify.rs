mod cart;
mod order;
mod user;

pub use self::{cart::*, order::*, user::*};
