use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::token_service::{Claims, TokenService};
use crate::error::{Error, Result};
use crate::helpers::thing_helpers::parse_id_part;
use crate::services::user_service::UserService;
use crate::{models::user::UserRecord, AppState};

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

#[derive(Debug, Clone)]
pub struct Ctx {
    pub user_id: String,
    pub user: UserRecord,
}

impl Ctx {
    pub fn new(user_id: String, user: UserRecord) -> Self {
        Self { user_id, user }
    }
}

pub async fn mw_auth(
    State(app_state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response> {
    let token = extract_token(req.headers()).ok_or(Error::AuthFailNoToken)?;

    let claims: Claims = TokenService::validate_token(token, &app_state.auth_config)?;

    let user_id = parse_id_part(&claims.sub).to_string();
    let user = UserService::find_user(&app_state.db, &user_id)
        .await?
        .ok_or_else(|| Error::AuthFailUserNotFound {
            user_id: user_id.clone(),
        })?;

    let ctx = Ctx::new(user_id, user);
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>`, falling back to `x-auth-token`.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|str| str.strip_prefix("Bearer "));

    bearer
        .or_else(|| {
            headers
                .get(AUTH_TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
        })
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("legacy"));
        assert_eq!(extract_token(&headers), Some("legacy"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_extract_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert_eq!(extract_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_token(&headers), None);
    }
}
