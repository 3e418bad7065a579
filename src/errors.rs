use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::json;

/// Boundary error for the drinks API.
///
/// Serializes as the uniform failure envelope:
/// `{"success": false, "error": <status>, "message": <kind>}` with an
/// optional `description` on validation-class failures.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: &'static str,
    pub description: Option<String>,
}

impl ApiError {
    fn new(status_code: StatusCode, message: &'static str) -> Self {
        Self {
            status_code,
            message,
            description: None,
        }
    }

    /// Bad Request (400)
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad request")
    }

    /// Not Found (404)
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found")
    }

    /// Method Not Allowed (405)
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    }

    /// Unsupported Media Type (415)
    pub fn unsupported_media_type() -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported media type")
    }

    /// Unprocessable Entity (422)
    pub fn unprocessable() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
    }

    /// Unprocessable Entity (422) with a description of the rejected input
    pub fn unprocessable_with<S: ToString>(description: S) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Self::unprocessable()
        }
    }

    /// Internal Server Error (500). Never carries internal detail.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code;
        let mut body = json!({
            "success": false,
            "error": status_code.as_u16(),
            "message": self.message,
        });
        if let Some(description) = self.description {
            body["description"] = json!(description);
        }
        (status_code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::unsupported_media_type(),
            JsonRejection::JsonDataError(e) => Self::unprocessable_with(e.body_text()),
            JsonRejection::JsonSyntaxError(_) => Self::bad_request(),
            _ => Self::bad_request(),
        }
    }
}
