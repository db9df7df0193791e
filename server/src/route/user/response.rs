use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::{TokenDto, UserDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: i64,
    username: String,
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    jwttoken: String,
}

impl IntoResponse for TokenResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = UserResponse;
    fn emit(&self, input: UserDto) -> Self::To {
        UserResponse {
            id: input.id,
            username: input.name,
        }
    }
}

impl Exhaust<TokenDto> for UserPresenter {
    type To = TokenResponse;
    fn emit(&self, input: TokenDto) -> Self::To {
        TokenResponse {
            jwttoken: input.token,
        }
    }
}
