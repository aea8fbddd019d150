//! Promotion Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use promotions_app::domain::promotions::{
    PromotionValidationError, PromotionsServiceError, records::PromotionId,
};

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::MissingRequiredData | PromotionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid promotion payload")
        }
        PromotionsServiceError::NotFound => {
            StatusError::not_found().brief("Promotion was not found.")
        }
        PromotionsServiceError::Unavailable(source) => {
            error!("promotion storage unavailable: {source}");

            StatusError::service_unavailable()
        }
        PromotionsServiceError::Sql(source) => {
            error!("failed to process promotion: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Error mapper for operations on a single promotion, naming it in 404 responses.
pub(crate) fn for_promotion(
    promotion: PromotionId,
) -> impl FnOnce(PromotionsServiceError) -> StatusError {
    move |error| match error {
        PromotionsServiceError::NotFound => not_found(promotion),
        error => into_status_error(error),
    }
}

pub(crate) fn not_found(promotion: PromotionId) -> StatusError {
    StatusError::not_found().brief(format!("Promotion with id '{promotion}' was not found."))
}

pub(crate) fn validation_error(error: PromotionValidationError) -> StatusError {
    warn!("rejected promotion: {error}");

    StatusError::bad_request().brief(error.to_string())
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_not_found_names_the_promotion() {
        let error = for_promotion(PromotionId::from_i64(7))(PromotionsServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Promotion with id '7' was not found.");
    }

    #[test]
    fn test_constraint_violations_map_to_bad_request() {
        let missing = into_status_error(PromotionsServiceError::MissingRequiredData);
        let invalid = into_status_error(PromotionsServiceError::InvalidData);

        assert_eq!(missing.code, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_carries_message() {
        let error = validation_error(PromotionValidationError::MissingField("title"));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Invalid promotion: missing title");
    }
}
