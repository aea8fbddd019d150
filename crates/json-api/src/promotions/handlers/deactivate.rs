//! Deactivate Promotion Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::records::PromotionId;

use crate::{extensions::*, promotions::responses::PromotionResponse};

use super::set_active;

/// Deactivate Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Deactivate Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Content-Type is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    req.require_json()?;

    let promotion = set_active(depot, PromotionId::from_i64(id.into_inner()), false).await?;

    Ok(Json(promotion.into()))
}
