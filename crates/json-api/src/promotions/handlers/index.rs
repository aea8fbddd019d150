//! Promotion Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use promotions_app::domain::promotions::data::PromotionFilter;

use crate::{
    extensions::*,
    promotions::{
        errors::{into_status_error, validation_error},
        responses::PromotionResponse,
    },
};

/// Promotion Index Handler
///
/// Returns every promotion, or those matching the first query parameter
/// present out of `promotion_type`, `active`, `title` and `end_date`.
#[endpoint(
    tags("promotions"),
    summary = "List Promotions",
    responses(
        (status_code = StatusCode::OK, description = "Matching promotions"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unparseable filter value"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    promotion_type: QueryParam<String, false>,
    active: QueryParam<String, false>,
    title: QueryParam<String, false>,
    end_date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<PromotionResponse>>, StatusError> {
    let promotions = depot.promotions_or_500()?;

    let filter = PromotionFilter::from_query(
        promotion_type.into_inner(),
        active.into_inner(),
        title.into_inner(),
        end_date.into_inner(),
    )
    .map_err(validation_error)?;

    let found = promotions
        .list_promotions(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(found.into_iter().map(Into::into).collect()))
}
