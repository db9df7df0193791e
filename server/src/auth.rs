use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;

use application::service::AuthenticationService;
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

/// Rejects the request with 401 unless it carries a valid bearer token.
pub async fn require_token(
    State(module): State<AppModule>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request,
    next: Next,
) -> Result<Response, ErrorStatus> {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        return Err(Report::new(KernelError::Unauthorized)
            .attach_printable("Missing bearer token")
            .into());
    };
    let caller = module.validate(bearer.token())?;
    tracing::debug!("{} {} by {caller}", request.method(), request.uri().path());
    Ok(next.run(request).await)
}
