//! JWT Extractor
//!
//! Lets handlers take [`Identity`] as an argument

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::Identity;
use crate::auth::middleware::authenticate;
use crate::core::ServerState;

/// Reuses the identity stored by [`require_auth`](crate::auth::require_auth)
/// and validates the header itself when the middleware did not run.
impl FromRequestParts<ServerState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(identity.clone());
        }

        let identity = authenticate(&parts.headers, &parts.uri, &state.get_jwt_service())?;
        parts.extensions.insert(identity.clone());
        Ok(identity)
    }
}
