use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{OrderDto, OrderLineDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    id: Uuid,
    user_id: i64,
    username: String,
    items: Vec<OrderLineResponse>,
    total: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    item_id: i64,
    name: String,
    price: Decimal,
    quantity: u32,
}

impl From<OrderLineDto> for OrderLineResponse {
    fn from(value: OrderLineDto) -> Self {
        Self {
            item_id: value.item_id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

impl From<OrderDto> for OrderResponse {
    fn from(value: OrderDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            username: value.username,
            items: value
                .lines
                .into_iter()
                .map(OrderLineResponse::from)
                .collect(),
            total: value.total,
            created_at: value.created_at,
        }
    }
}

impl IntoResponse for OrderResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct OrderPresenter;

impl Exhaust<OrderDto> for OrderPresenter {
    type To = OrderResponse;
    fn emit(&self, input: OrderDto) -> Self::To {
        OrderResponse::from(input)
    }
}

impl Exhaust<Vec<OrderDto>> for OrderPresenter {
    type To = axum::Json<Vec<OrderResponse>>;
    fn emit(&self, input: Vec<OrderDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(OrderResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}
