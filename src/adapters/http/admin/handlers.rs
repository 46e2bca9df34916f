//! Request handlers for the admin endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::{ErrorBody, GatewayState};
use crate::ports::{admin_claims, IdentityError};

use super::dto::{AdminClaimRequest, AdminClaimResponse};

/// Errors an admin endpoint can produce.
///
/// Identity provider failures always map to 500; only a bad request
/// body is the client's fault.
#[derive(Debug)]
pub enum AdminApiError {
    /// Request body failed validation; message is sent to the client.
    Validation(String),

    /// The identity provider failed the call.
    Provider(IdentityError),
}

impl AdminApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<IdentityError> for AdminApiError {
    fn from(error: IdentityError) -> Self {
        Self::Provider(error)
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            // Provider message passes through verbatim
            Self::Provider(error) => (StatusCode::INTERNAL_SERVER_ERROR, error.message),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// POST /set-admin-claim - grant the admin custom claim to a user.
///
/// Setting the claim is idempotent: repeating the call for the same uid
/// converges on the same claim state and the same 200 response.
pub async fn set_admin_claim(
    State(state): State<GatewayState>,
    payload: Result<Json<AdminClaimRequest>, JsonRejection>,
) -> Result<Json<AdminClaimResponse>, AdminApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected admin claim body");
        AdminApiError::validation(rejection.body_text())
    })?;

    let uid = request.validate().map_err(AdminApiError::validation)?;

    state
        .identity_provider
        .set_custom_claims(&uid, &admin_claims())
        .await?;

    tracing::info!(%uid, "Admin claim set");

    Ok(Json(AdminClaimResponse::for_uid(&uid)))
}
