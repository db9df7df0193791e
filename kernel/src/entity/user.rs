mod id;
mod name;
mod password;

pub use self::{id::*, name::*, password::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct User {
    id: UserId,
    name: UserName,
    password: PasswordHash,
}

impl User {
    pub fn new(id: UserId, name: UserName, password: PasswordHash) -> Self {
        Self { id, name, password }
    }
}
