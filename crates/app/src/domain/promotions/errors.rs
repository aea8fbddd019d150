//! Promotions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("promotion not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage unavailable")]
    Unavailable(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if matches!(error, Error::PoolTimedOut | Error::PoolClosed | Error::Io(_)) {
            return Self::Unavailable(error);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

/// Promotion payload and query validation errors.
#[derive(Debug, Error)]
pub enum PromotionValidationError {
    #[error("Invalid promotion: body is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Invalid promotion: body must be a JSON object")]
    NotAnObject,

    #[error("Invalid promotion: {0}")]
    InvalidField(#[source] serde_json::Error),

    #[error("Invalid promotion: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid promotion: {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid promotion: {field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid promotion: {field} is not a valid date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("active must be \"true\" or \"false\", got {0:?}")]
    InvalidActiveFlag(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = PromotionsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, PromotionsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn pool_failures_map_to_unavailable() {
        for source in [Error::PoolTimedOut, Error::PoolClosed] {
            let error = PromotionsServiceError::from(source);

            assert!(
                matches!(error, PromotionsServiceError::Unavailable(_)),
                "expected Unavailable, got {error:?}"
            );
        }
    }

    #[test]
    fn other_errors_map_to_sql() {
        let error = PromotionsServiceError::from(Error::Protocol("unexpected".to_string()));

        assert!(
            matches!(error, PromotionsServiceError::Sql(_)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn missing_field_message_names_the_field() {
        let message = PromotionValidationError::MissingField("start_date").to_string();

        assert_eq!(message, "Invalid promotion: missing start_date");
    }
}
