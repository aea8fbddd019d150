//! Promotion Handlers

use salvo::prelude::{Depot, Request, StatusError};
use tracing::info;

use promotions_app::domain::promotions::{
    data::{PromotionPayload, PromotionUpdate},
    records::{PromotionId, PromotionRecord},
};

use crate::{
    extensions::*,
    promotions::errors::{for_promotion, validation_error},
};

pub(crate) mod activate;
pub(crate) mod create;
pub(crate) mod deactivate;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Read the request body as a promotion payload.
///
/// The content type must already have been checked with `require_json`.
async fn read_payload(req: &mut Request) -> Result<PromotionPayload, StatusError> {
    let body = req
        .payload()
        .await
        .or_400("could not read request body")?;

    PromotionPayload::from_json(body).map_err(validation_error)
}

/// Flip the `active` flag of a stored promotion, leaving every other field as is.
async fn set_active(
    depot: &Depot,
    id: PromotionId,
    active: bool,
) -> Result<PromotionRecord, StatusError> {
    let promotions = depot.promotions_or_500()?;

    let existing = promotions
        .get_promotion(id)
        .await
        .map_err(for_promotion(id))?;

    let promotion = promotions
        .update_promotion(id, PromotionUpdate::from(existing).with_active(active))
        .await
        .map_err(for_promotion(id))?;

    info!(promotion_id = %id, active, "changed promotion active flag");

    Ok(promotion)
}
