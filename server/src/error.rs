use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;

use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::Validation | KernelError::Conflict => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{status}: {:?}", self.0);
        }
        status.into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;

    use kernel::KernelError;

    use crate::error::ErrorStatus;

    fn status_of(error: KernelError) -> StatusCode {
        ErrorStatus::from(Report::new(error)).into_response().status()
    }

    #[test]
    fn maps_kernel_errors() {
        assert_eq!(status_of(KernelError::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(KernelError::Conflict), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(KernelError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(KernelError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(KernelError::Timeout), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            status_of(KernelError::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
