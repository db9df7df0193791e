use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;

use application::transfer::{CartDto, CartLineDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    user_id: i64,
    username: String,
    items: Vec<CartLineResponse>,
    total: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    item_id: i64,
    name: String,
    price: Decimal,
    quantity: u32,
}

impl From<CartLineDto> for CartLineResponse {
    fn from(value: CartLineDto) -> Self {
        Self {
            item_id: value.item_id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

impl IntoResponse for CartResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct CartPresenter;

impl Exhaust<CartDto> for CartPresenter {
    type To = CartResponse;
    fn emit(&self, input: CartDto) -> Self::To {
        CartResponse {
            user_id: input.user_id,
            username: input.username,
            items: input.lines.into_iter().map(CartLineResponse::from).collect(),
            total: input.total,
        }
    }
}
