use serde::Deserialize;

use application::transfer::{AuthenticateDto, CreateUserDto, GetUserByNameDto, GetUserDto};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    username: String,
    password: String,
    confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    username: String,
    password: String,
}

#[derive(Debug)]
pub struct GetUserRequest {
    id: i64,
}

impl GetUserRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetUserByNameRequest {
    username: String,
}

impl GetUserByNameRequest {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: CreateUserRequest) -> Self::To {
        CreateUserDto {
            name: input.username,
            password: input.password,
            confirm_password: input.confirm_password,
        }
    }
}

impl Intake<AuthenticateRequest> for UserTransformer {
    type To = AuthenticateDto;
    fn emit(&self, input: AuthenticateRequest) -> Self::To {
        AuthenticateDto {
            name: input.username,
            password: input.password,
        }
    }
}

impl Intake<GetUserRequest> for UserTransformer {
    type To = GetUserDto;
    fn emit(&self, input: GetUserRequest) -> Self::To {
        GetUserDto { id: input.id }
    }
}

impl Intake<GetUserByNameRequest> for UserTransformer {
    type To = GetUserByNameDto;
    fn emit(&self, input: GetUserByNameRequest) -> Self::To {
        GetUserByNameDto {
            name: input.username,
        }
    }
}
