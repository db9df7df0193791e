use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;

use application::transfer::ItemDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    id: i64,
    name: String,
    price: Decimal,
    description: String,
}

impl From<ItemDto> for ItemResponse {
    fn from(value: ItemDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
        }
    }
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct ItemPresenter;

impl Exhaust<ItemDto> for ItemPresenter {
    type To = ItemResponse;
    fn emit(&self, input: ItemDto) -> Self::To {
        ItemResponse::from(input)
    }
}

impl Exhaust<Vec<ItemDto>> for ItemPresenter {
    type To = axum::Json<Vec<ItemResponse>>;
    fn emit(&self, input: Vec<ItemDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(ItemResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}
