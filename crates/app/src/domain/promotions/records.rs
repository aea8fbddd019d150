//! Promotions Records

use jiff::civil::DateTime;

use crate::ids::TypedId;

/// Promotion Id
pub type PromotionId = TypedId<PromotionRecord>;

/// Promotion Record
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRecord {
    pub id: PromotionId,
    pub title: String,
    pub promotion_type: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub active: bool,
}
