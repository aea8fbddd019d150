//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use salvo::{affix_state::inject, prelude::*};
use serde_json::{Value, json};

use promotions_app::{
    context::AppContext,
    domain::promotions::{
        MockPromotionsService,
        records::{PromotionId, PromotionRecord},
    },
};

use crate::state::State;

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    let app = AppContext::new(Arc::new(promotions));

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

/// The "Winter Sale" promotion as stored under `id`.
pub(crate) fn make_promotion(id: i64, active: bool) -> PromotionRecord {
    PromotionRecord {
        id: PromotionId::from_i64(id),
        title: "Winter Sale".to_string(),
        promotion_type: "30%OFF".to_string(),
        start_date: date(2021, 11, 1).at(0, 0, 0, 0),
        end_date: date(2021, 12, 24).at(0, 0, 0, 0),
        active,
    }
}

/// Request body for the "Winter Sale" promotion, without `active`.
pub(crate) fn winter_sale_body() -> Value {
    json!({
        "title": "Winter Sale",
        "promotion_type": "30%OFF",
        "start_date": "2021-11-01",
        "end_date": "2021-12-24",
    })
}
