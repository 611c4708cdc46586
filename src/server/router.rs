use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{controller::composer::composer_socket, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/composer/ws", get(composer_socket))
        .layer(TraceLayer::new_for_http())
}
