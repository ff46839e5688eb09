use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sgvrecycle_intake::{HandlerResult, IntakeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("Invalid form body: {0}")]
    Form(#[from] FormRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Intake(IntakeError::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Intake(IntakeError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Intake(IntakeError::Delivery(_)) => StatusCode::BAD_GATEWAY,
            AppError::Intake(IntakeError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Form(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Intake(err) => HandlerResult::from(err),
            AppError::Form(rejection) => {
                tracing::warn!(error = %rejection, "Rejected form body");
                HandlerResult::failed(rejection.body_text())
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(IntakeError::NotConfigured).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(IntakeError::Unexpected(anyhow::anyhow!("boom"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
