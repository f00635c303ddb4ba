//! Request identity.
//!
//! Callers present `Authorization: Bearer <session_token>`; the token is issued by
//! `GET /api/user/me` (or by an admin creating the account) and looked up per request.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::{users, Plan, User};
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated caller. Rejects with 401 when the token is missing or unknown.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub users::Model);

/// An authenticated caller whose role is `admin`. 401 without a valid token, 403 otherwise.
#[derive(Debug, Clone)]
pub struct AdminUser(pub users::Model);

/// Optional identity for public routes. A missing or unknown token is anonymous.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<users::Model>);

impl MaybeUser {
    /// Anonymous callers browse as Starter.
    pub fn plan(&self) -> Plan {
        self.0.as_ref().map(|user| user.plan).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(users::Model::is_admin)
    }
}

/// Extract the bearer token, if the header is present and well formed.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn find_by_token(
    db: &DatabaseConnection,
    token: &str,
) -> Result<Option<users::Model>, AppError> {
    let user = User::find()
        .filter(users::Column::SessionToken.eq(token))
        .one(db)
        .await?;
    Ok(user)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;

        match find_by_token(&state.db, token).await? {
            Some(user) => Ok(CurrentUser(user)),
            None => Err(AppError::Unauthorized("unknown session token".to_string())),
        }
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            tracing::warn!(user_id = user.id, "Non-admin attempted an admin route");
            return Err(AppError::Forbidden("admin role required".to_string()));
        }
        Ok(AdminUser(user))
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match bearer_token(&parts.headers) {
            Some(token) => Ok(MaybeUser(find_by_token(&state.db, token).await?)),
            None => Ok(MaybeUser(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn headers_with(header: Option<&str>) -> HeaderMap {
        let mut builder = Request::builder().uri("/api/user/me");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0.headers
    }

    #[test]
    fn reads_bearer_token() {
        let headers = headers_with(Some("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn ignores_other_schemes_and_empty_tokens() {
        assert_eq!(bearer_token(&headers_with(Some("Basic dXNlcjpwdw=="))), None);
        assert_eq!(bearer_token(&headers_with(Some("Bearer   "))), None);
        assert_eq!(bearer_token(&headers_with(None)), None);
    }

    #[test]
    fn anonymous_callers_browse_as_starter() {
        let anonymous = MaybeUser(None);
        assert_eq!(anonymous.plan(), Plan::Starter);
        assert!(!anonymous.is_admin());
    }
}
