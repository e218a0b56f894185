use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors a handler can fail with.
///
/// Each kind gets its own status code. Bodies are short plain text; storage
/// failures are logged in full but reported to the client generically.
#[derive(Debug)]
pub enum AppError {
    /// The request was well formed but its content is not acceptable.
    Validation(String),

    /// No todo with this id exists.
    NotFound(u64),

    /// The database failed to read, write or decode a row.
    Storage(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::NotFound(id) => write!(f, "todo {id} not found"),
            AppError::Storage(err) => write!(f, "storage error: {err:#}"),
        }
    }
}

impl std::error::Error for AppError {}

// Driver errors surface through `?` as storage failures
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Storage(_) => {
                tracing::error!(error = %self, "request failed");
                "internal server error".to_string()
            }
            _ => {
                tracing::warn!(error = %self, %status, "request rejected");
                self.to_string()
            }
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn status_per_kind() {
        assert_eq!(
            AppError::Validation("empty".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(anyhow::anyhow!("disk on fire")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_id() {
        assert_eq!(AppError::NotFound(12).to_string(), "todo 12 not found");
    }

    #[tokio::test]
    async fn storage_response_hides_cause() -> anyhow::Result<()> {
        let response = AppError::from(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = String::from_utf8(bytes.to_vec())?;
        assert_eq!(body, "internal server error");
        assert!(!body.contains("disk on fire"));
        Ok(())
    }

    #[tokio::test]
    async fn not_found_response_names_id() -> anyhow::Result<()> {
        let response = AppError::NotFound(5).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await?.to_bytes();
        assert_eq!(String::from_utf8(bytes.to_vec())?, "todo 5 not found");
        Ok(())
    }
}
