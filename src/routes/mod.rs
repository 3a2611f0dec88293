use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use folio_contact::ContactService;
use tower_http::cors::{Any, CorsLayer};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub contact: ContactService,
}

pub fn router(app_state: AppState) -> Router {
    // Public endpoint without credentials, any origin may post to it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let contact_routes = Router::new()
        .route(
            "/api/contact",
            post(contact::action).options(contact::preflight),
        )
        .layer(cors);

    Router::new()
        .route("/health", get(health::health))
        .merge(contact_routes)
        .with_state(app_state)
}
