use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use application::service::{AuthenticationService, UserDirectory};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait UserRouter {
    /// Registration and login, reachable without a token.
    fn route_account(self) -> Self;
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_account(self) -> Self {
        self.route(
            "/api/user/create",
            post(
                |State(module): State<AppModule>, Json(req): Json<CreateUserRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| module.create_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/authenticate",
            post(
                |State(module): State<AppModule>, Json(req): Json<AuthenticateRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| module.authenticate(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }

    fn route_user(self) -> Self {
        self.route(
            "/api/user/id/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(GetUserRequest::new(id))
                        .handle(|dto| module.find_user_by_id(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/:username",
            get(
                |State(module): State<AppModule>, Path(username): Path<String>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(GetUserByNameRequest::new(username))
                        .handle(|dto| module.find_user_by_name(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
