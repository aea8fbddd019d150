//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use promotions_app::domain::promotions::PromotionsService;

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The promotions gateway held by the injected [`State`].
    fn promotions_or_500(&self) -> Result<&Arc<dyn PromotionsService>, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("missing {} in depot", std::any::type_name::<T>());

            StatusError::internal_server_error()
        })
    }

    fn promotions_or_500(&self) -> Result<&Arc<dyn PromotionsService>, StatusError> {
        self.obtain_or_500::<Arc<State>>()
            .map(|state| &state.app.promotions)
    }
}
