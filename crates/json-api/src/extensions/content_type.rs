//! Content-Type guards.

use salvo::{
    http::header::CONTENT_TYPE,
    prelude::{Request, StatusError},
};

const APPLICATION_JSON: &str = "application/json";

/// Reject requests whose body is not declared as JSON.
pub(crate) trait RequestContentTypeExt {
    fn require_json(&self) -> Result<(), StatusError>;
}

impl RequestContentTypeExt for Request {
    fn require_json(&self) -> Result<(), StatusError> {
        let content_type = self
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        if content_type.is_some_and(is_json_media_type) {
            return Ok(());
        }

        Err(StatusError::unsupported_media_type().brief(format!(
            "Content-Type must be {APPLICATION_JSON}, got {}",
            content_type.unwrap_or("nothing")
        )))
    }
}

/// Only the bare media type is accepted. Parameters and other casings are not.
fn is_json_media_type(content_type: &str) -> bool {
    content_type == APPLICATION_JSON
}
