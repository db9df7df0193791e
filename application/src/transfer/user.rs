use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser { id, name, .. } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub struct CreateUserDto {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct GetUserDto {
    pub id: i64,
}

pub struct GetUserByNameDto {
    pub name: String,
}

pub struct AuthenticateDto {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct TokenDto {
    pub token: String,
}
