mod auth;
mod cart;
mod item;
mod order;
mod user;

pub use self::{auth::*, cart::*, item::*, order::*, user::*};
