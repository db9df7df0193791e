use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use application::service::CartLedger;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait CartRouter {
    fn route_cart(self) -> Self;
}

impl CartRouter for Router<AppModule> {
    fn route_cart(self) -> Self {
        self.route(
            "/api/cart/:username",
            get(
                |State(module): State<AppModule>, Path(username): Path<String>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(GetCartRequest::new(username))
                        .handle(|dto| module.get_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/cart/addToCart",
            post(
                |State(module): State<AppModule>, Json(req): Json<ModifyCartRequest>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(req)
                        .handle(|dto| module.add_to_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/cart/removeFromCart",
            post(
                |State(module): State<AppModule>, Json(req): Json<ModifyCartRequest>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(req)
                        .handle(|dto| module.remove_from_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
