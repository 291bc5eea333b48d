//! HTTP handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use pagetally_core::{TallyError, HIT_COUNTER_KEY};

use crate::app_state::AppState;

/// `GET /` — count the visit and greet.
///
/// Success renders the greeting with the post-increment count; a store
/// failure renders the fixed 500 body. The process keeps serving either way.
pub async fn hit(State(app): State<AppState>) -> Response {
    match app.store().increment(HIT_COUNTER_KEY).await {
        Ok(count) => (StatusCode::OK, count.greeting()).into_response(),
        Err(e) => failure_response(&app, e),
    }
}

fn failure_response(app: &AppState, e: TallyError) -> Response {
    tracing::warn!(
        kind = e.kind(),
        host = %app.cfg().redis_host,
        error = %e,
        "visit counter increment failed"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, e.user_message()).into_response()
}
