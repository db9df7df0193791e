use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use application::service::Catalog;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait ItemRouter {
    fn route_item(self) -> Self;
}

impl ItemRouter for Router<AppModule> {
    fn route_item(self) -> Self {
        self.route(
            "/api/item",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), ItemPresenter)
                    .bypass(|| module.list_items())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/api/item/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(ItemTransformer, ItemPresenter)
                        .intake(GetItemRequest::new(id))
                        .handle(|dto| module.get_item(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/item/name/:name",
            get(
                |State(module): State<AppModule>, Path(name): Path<String>| async move {
                    Controller::new(ItemTransformer, ItemPresenter)
                        .intake(FindItemsRequest::new(name))
                        .handle(|dto| module.find_items_by_name(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
