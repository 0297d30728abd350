//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use backoffice_core::error::CoreError;
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;
use backoffice_db::navigation::resolver::resolve_permitted_ids;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated member extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(auth: AuthMember) -> AppResult<Json<()>> {
///     tracing::info!(member_id = auth.member_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// The member's internal database id (from `claims.sub`).
    pub member_id: DbId,
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthMember {
            member_id: claims.sub,
        })
    }
}

/// Authenticated member together with their permitted menu ids.
///
/// The set is resolved from storage on every request. A member without an
/// authorization group gets an empty set, not an error.
#[derive(Debug, Clone)]
pub struct MemberMenus {
    pub member_id: DbId,
    pub permitted: MenuIdSet,
}

impl FromRequestParts<AppState> for MemberMenus {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthMember::from_request_parts(parts, state).await?;
        let permitted = resolve_permitted_ids(state.identities.as_ref(), auth.member_id).await?;
        Ok(MemberMenus {
            member_id: auth.member_id,
            permitted,
        })
    }
}
