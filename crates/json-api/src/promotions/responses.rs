//! Promotion Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use promotions_app::domain::promotions::records::PromotionRecord;

/// Promotion representation returned by every promotion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    /// Storage-assigned identifier
    pub id: i64,

    /// Campaign title
    pub title: String,

    /// Free-form category label, e.g. `30%OFF`
    pub promotion_type: String,

    /// Start of the validity window (`YYYY-MM-DDTHH:MM:SS`)
    pub start_date: String,

    /// End of the validity window (`YYYY-MM-DDTHH:MM:SS`)
    pub end_date: String,

    /// Whether the promotion is currently running
    pub active: bool,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(promotion: PromotionRecord) -> Self {
        Self {
            id: promotion.id.into_i64(),
            title: promotion.title,
            promotion_type: promotion.promotion_type,
            start_date: promotion.start_date.to_string(),
            end_date: promotion.end_date.to_string(),
            active: promotion.active,
        }
    }
}
