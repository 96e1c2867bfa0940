//! HTTP error responses.
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a matching status.

use salvo::{
    Scribe,
    http::StatusCode,
    oapi::{Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use stockroom::prelude::ValidationError;
use thiserror::Error;

/// Error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable reason
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        let message = match error {
            ValidationError::MissingRequiredFields => "Missing required fields",
            ValidationError::UnknownBrand(_) => "Invalid brand",
            ValidationError::UnknownSize(_) | ValidationError::SizeNotOffered { .. } => {
                "Invalid size"
            }
            ValidationError::UnknownCategory(_) => "Invalid category",
            ValidationError::InvalidQuantity(_) => "Invalid quantity",
            ValidationError::UnknownAction(_) => "Invalid action",
        };

        Self::bad_request(message)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse {
            error: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Missing or invalid fields"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage failure"),
        ] {
            operation.responses.insert(
                status.as_str(),
                salvo::oapi::Response::new(description).add_content(
                    "application/json",
                    Content::new(ErrorResponse::to_schema(components)),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn fails() -> Result<&'static str, ApiError> {
        Err(ValidationError::UnknownBrand("Acme".to_string()).into())
    }

    #[tokio::test]
    async fn renders_status_and_error_body() -> TestResult {
        let mut res = TestClient::get("http://example.com/fails")
            .send(&Service::new(Router::with_path("fails").get(fails)))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid brand");

        Ok(())
    }

    #[test]
    fn size_outside_category_is_an_invalid_size() {
        let error = ApiError::from(ValidationError::SizeNotOffered {
            size: stockroom::prelude::Size::Xl2,
            category: stockroom::prelude::Category::Youth,
        });

        assert_eq!(error, ApiError::bad_request("Invalid size"));
    }

    #[test]
    fn missing_fields_keep_their_message() {
        assert_eq!(
            ApiError::from(ValidationError::MissingRequiredFields),
            ApiError::bad_request("Missing required fields")
        );
    }
}
