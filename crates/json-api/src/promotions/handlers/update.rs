//! Update Promotion Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use promotions_app::domain::promotions::records::PromotionId;

use crate::{
    extensions::*,
    promotions::{
        errors::{for_promotion, validation_error},
        responses::PromotionResponse,
    },
};

use super::read_payload;

/// Promotion Update Handler
///
/// Replaces every mutable field of the promotion. The id never changes and an
/// omitted `active` keeps its stored value.
#[endpoint(
    tags("promotions"),
    summary = "Update Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid promotion payload"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "promotions.update",
    skip(id, req, depot),
    fields(promotion_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let promotions = depot.promotions_or_500()?;
    let id = PromotionId::from_i64(id.into_inner());

    tracing::Span::current().record("promotion_id", tracing::field::display(id));

    req.require_json()?;

    let existing = promotions
        .get_promotion(id)
        .await
        .map_err(for_promotion(id))?;

    let update = read_payload(req)
        .await?
        .apply_to(&existing)
        .map_err(validation_error)?;

    let promotion = promotions
        .update_promotion(id, update)
        .await
        .map_err(for_promotion(id))?;

    info!(promotion_id = %id, "updated promotion");

    Ok(Json(promotion.into()))
}
