use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    // -- Config errors.
    ConfigMissingEnv(String),
    ConfigInvalid(String),
    Io(String),

    // -- Auth errors.
    AuthFailNoToken,
    AuthFailTokenInvalid,
    AuthFailUserNotFound { user_id: String },
    NotAuthorized,

    // -- Input errors.
    InvalidInput { reason: String },

    // -- Model errors.
    PostNotFound { id: String },
    PostAlreadyLiked { id: String },
    PostNotYetLiked { id: String },
    CommentNotFound { id: String },

    DbError(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, client_error) = self.client_status_and_error();

        if status_code.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("{self}");
        }

        let response_body = serde_json::json!({
            "error": client_error.as_ref(),
            "msg": self.client_message(),
        });

        (status_code, Json(response_body)).into_response()
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        match self {
            Self::AuthFailNoToken
            | Self::AuthFailTokenInvalid
            | Self::AuthFailUserNotFound { .. } => (StatusCode::UNAUTHORIZED, ClientError::NO_AUTH),

            Self::NotAuthorized => (StatusCode::UNAUTHORIZED, ClientError::NOT_AUTHORIZED),

            Self::InvalidInput { .. }
            | Self::PostAlreadyLiked { .. }
            | Self::PostNotYetLiked { .. } => (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS),

            Self::PostNotFound { .. } | Self::CommentNotFound { .. } => {
                (StatusCode::NOT_FOUND, ClientError::RESOURCE_NOT_FOUND)
            }

            Self::ConfigMissingEnv(_) | Self::ConfigInvalid(_) | Self::Io(_) | Self::DbError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }

    /// Message shown to the client. Internal details never leave the server.
    pub fn client_message(&self) -> String {
        match self {
            Self::AuthFailNoToken => "No token, authorization denied".to_string(),
            Self::AuthFailTokenInvalid | Self::AuthFailUserNotFound { .. } => {
                "Token is not valid".to_string()
            }
            Self::NotAuthorized => "User not authorized".to_string(),
            Self::InvalidInput { reason } => reason.clone(),
            Self::PostNotFound { .. } => "Post not found".to_string(),
            Self::PostAlreadyLiked { .. } => "Post already liked".to_string(),
            Self::PostNotYetLiked { .. } => "Post has not yet been liked".to_string(),
            Self::CommentNotFound { .. } => "Comment does not exist".to_string(),
            Self::ConfigMissingEnv(_)
            | Self::ConfigInvalid(_)
            | Self::Io(_)
            | Self::DbError(_) => "Server Error".to_string(),
        }
    }
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    NO_AUTH,
    NOT_AUTHORIZED,
    INVALID_PARAMS,
    SERVICE_ERROR,
    RESOURCE_NOT_FOUND,
}

impl From<surrealdb::Error> for Error {
    fn from(err: surrealdb::Error) -> Self {
        Error::DbError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!("token rejected: {err}");
        Error::AuthFailTokenInvalid
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
