use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sgvrecycle_intake::{HandlerResult, IntakeForm, Outcome, SubmittedForm};

use crate::{error::AppError, routes::AppState};

/// Successful intake responses, discarded spam included, are plain 200s.
pub struct Accepted(pub Outcome);

impl IntoResponse for Accepted {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(HandlerResult::from(self.0))).into_response()
    }
}

/// POST /actions/{form} - Validate a form submission and notify the business
pub async fn submit<F: IntakeForm + 'static>(
    State(state): State<AppState>,
    form: Result<Form<SubmittedForm>, FormRejection>,
) -> Result<Accepted, AppError> {
    let Form(form) = form?;
    let outcome = state.intake.submit::<F>(&form).await?;

    Ok(Accepted(outcome))
}
