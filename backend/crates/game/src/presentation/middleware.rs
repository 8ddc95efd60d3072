//! Game Middleware

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::PlayerId;
use platform::client::extract_player_id;

use crate::error::GameError;

/// Middleware that requires the gateway-supplied player header.
///
/// On success the `PlayerId` is available to handlers as an extension.
pub async fn require_player(mut req: Request<Body>, next: Next) -> Response {
    match extract_player_id(req.headers()) {
        Ok(uuid) => {
            req.extensions_mut().insert(PlayerId::from_uuid(uuid));
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting request without player identity");
            GameError::from(e).into_response()
        }
    }
}
