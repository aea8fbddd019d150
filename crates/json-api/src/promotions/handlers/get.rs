//! Get Promotion Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::records::PromotionId;

use crate::{
    extensions::*,
    promotions::{errors::for_promotion, responses::PromotionResponse},
};

/// Get Promotion Handler
///
/// Returns a promotion.
#[endpoint(
    tags("promotions"),
    summary = "Get Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion found"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let promotions = depot.promotions_or_500()?;
    let id = PromotionId::from_i64(id.into_inner());

    let promotion = promotions
        .get_promotion(id)
        .await
        .map_err(for_promotion(id))?;

    Ok(Json(promotion.into()))
}
