//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::promotions::{PgPromotionsService, PromotionsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

/// Database connection options used to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub promotions: Arc<dyn PromotionsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(promotions: Arc<dyn PromotionsService>) -> Self {
        Self { promotions }
    }

    /// Build application context from database options.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database(options: &DatabaseOptions) -> Result<Self, AppInitError> {
        let pool = database::connect(&options.url, options.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migration)?;

            info!("database migrations applied");
        }

        Ok(Self::new(Arc::new(PgPromotionsService::new(Db::new(pool)))))
    }
}
