//! Test Helpers

use jiff::civil::date;

use crate::domain::promotions::data::NewPromotion;

/// A promotion running from 2021-11-01 to 2021-12-24.
pub(crate) fn new_promotion(title: &str, promotion_type: &str, active: bool) -> NewPromotion {
    NewPromotion {
        title: title.to_string(),
        promotion_type: promotion_type.to_string(),
        start_date: date(2021, 11, 1).at(0, 0, 0, 0),
        end_date: date(2021, 12, 24).at(0, 0, 0, 0),
        active,
    }
}
