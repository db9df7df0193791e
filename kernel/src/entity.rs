mod cart;
mod common;
mod item;
mod order;
mod token;
mod user;

pub use self::{cart::*, common::*, item::*, order::*, token::*, user::*};
