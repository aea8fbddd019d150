//! Delete Promotion Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use promotions_app::domain::promotions::records::PromotionId;

use crate::{extensions::*, promotions::errors::for_promotion};

/// Delete Promotion Handler
///
/// Deleting a promotion that does not exist still succeeds.
#[endpoint(
    tags("promotions"),
    summary = "Delete Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promotion deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "promotions.delete", skip(id, depot), err)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let promotions = depot.promotions_or_500()?;
    let id = PromotionId::from_i64(id.into_inner());

    let found = promotions
        .find_promotion(id)
        .await
        .map_err(for_promotion(id))?;

    if found.is_some() {
        promotions
            .delete_promotion(id)
            .await
            .map_err(for_promotion(id))?;

        info!(promotion_id = %id, "deleted promotion");
    }

    Ok(StatusCode::NO_CONTENT)
}
