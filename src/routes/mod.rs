use axum::{
    Router,
    routing::{get, post},
};
use sgvrecycle_intake::{CollectionForm, ContactForm, Intake, PurchasingForm, ValuationForm};

pub mod actions;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    pub intake: Intake,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Form actions
        .route("/actions/contact", post(actions::submit::<ContactForm>))
        .route(
            "/actions/collection-request",
            post(actions::submit::<CollectionForm>),
        )
        .route(
            "/actions/purchasing-request",
            post(actions::submit::<PurchasingForm>),
        )
        .route(
            "/actions/valuation-request",
            post(actions::submit::<ValuationForm>),
        )
        .with_state(app_state)
}
