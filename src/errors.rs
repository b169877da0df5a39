use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AppError {
    #[error("無效的 json 格式: {0}")]
    InvalidJson(String),
    #[error("無效的 image id: {0}")]
    InvalidId(String),
    #[error("無效的 count: {0}")]
    InvalidCount(String),
    #[error("找不到 id 為 {0} 的 image")]
    ImageNotFound(i64),
    #[error("api not found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCount(_) => StatusCode::BAD_REQUEST,
            AppError::ImageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_message = self.to_string();

        tracing::warn!("{} {}", status_code, error_message);

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(
            AppError::InvalidJson("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidId("abc".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCount("-1".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_things_map_to_not_found() {
        assert_eq!(AppError::ImageNotFound(9).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn message_names_the_missing_id() {
        assert!(AppError::ImageNotFound(42).to_string().contains("42"));
    }
}
