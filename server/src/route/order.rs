use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;

use application::service::OrderBook;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait OrderRouter {
    fn route_order(self) -> Self;
}

impl OrderRouter for Router<AppModule> {
    fn route_order(self) -> Self {
        self.route(
            "/api/order/submit/:username",
            post(
                |State(module): State<AppModule>, Path(username): Path<String>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .intake(SubmitOrderRequest::new(username))
                        .handle(|dto| module.submit(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/order/history/:username",
            get(
                |State(module): State<AppModule>, Path(username): Path<String>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .intake(OrderHistoryRequest::new(username))
                        .handle(|dto| module.history(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
