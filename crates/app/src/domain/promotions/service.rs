//! Promotions Service

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::promotions::{
        PromotionsServiceError,
        data::{NewPromotion, PromotionFilter, PromotionUpdate},
        records::{PromotionId, PromotionRecord},
        repository::PgPromotionsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    db: Db,
    repository: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPromotionsRepository::new(),
        }
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    async fn list_promotions(
        &self,
        filter: PromotionFilter,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let promotions = self.repository.list_promotions(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(promotions)
    }

    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let found = self.repository.find_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn get_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        self.find_promotion(promotion)
            .await?
            .ok_or(PromotionsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(promotion_type = %promotion.promotion_type),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        info!(promotion_id = %created.id, "created promotion");

        Ok(created)
    }

    #[tracing::instrument(
        name = "promotions.service.update_promotion",
        skip(self, update),
        fields(promotion_id = %promotion, active = update.active),
        err
    )]
    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionUpdate,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_promotion(&mut tx, promotion, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "promotions.service.delete_promotion",
        skip(self),
        fields(promotion_id = %promotion),
        err
    )]
    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            info!("promotion already absent");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Retrieves promotions, narrowed by at most one attribute filter.
    async fn list_promotions(
        &self,
        filter: PromotionFilter,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Looks up a promotion by id, returning `None` when it does not exist.
    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, PromotionsServiceError>;

    /// Retrieves a single promotion, failing with `NotFound` when it does not exist.
    async fn get_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Inserts a promotion; storage assigns its id.
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Overwrites every mutable field of an existing promotion.
    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionUpdate,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Deletes a promotion. Deleting an unknown id is not an error.
    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError>;
}
