//! Promotions Repository

use jiff::civil::DateTime;
use jiff_sqlx::DateTime as SqlxDateTime;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::promotions::{
    data::{NewPromotion, PromotionFilter, PromotionUpdate},
    records::{PromotionId, PromotionRecord},
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const LIST_PROMOTIONS_BY_PROMOTION_TYPE_SQL: &str =
    include_str!("sql/list_promotions_by_promotion_type.sql");
const LIST_PROMOTIONS_BY_ACTIVE_SQL: &str = include_str!("sql/list_promotions_by_active.sql");
const LIST_PROMOTIONS_BY_TITLE_SQL: &str = include_str!("sql/list_promotions_by_title.sql");
const LIST_PROMOTIONS_BY_END_DATE_SQL: &str = include_str!("sql/list_promotions_by_end_date.sql");
const FIND_PROMOTION_SQL: &str = include_str!("sql/find_promotion.sql");
const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionsRepository;

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &PromotionFilter,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        match filter {
            PromotionFilter::All => self.all(tx).await,
            PromotionFilter::PromotionType(promotion_type) => {
                self.find_by_promotion_type(tx, promotion_type).await
            }
            PromotionFilter::Active(active) => self.find_by_active(tx, *active).await,
            PromotionFilter::Title(title) => self.find_by_title(tx, title).await,
            PromotionFilter::EndDate(end_date) => self.find_by_end_date(tx, *end_date).await,
        }
    }

    pub(crate) async fn all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_promotion_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion_type: &str,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_BY_PROMOTION_TYPE_SQL)
            .bind(promotion_type)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        active: bool,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_BY_ACTIVE_SQL)
            .bind(active)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_title(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        title: &str,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_BY_TITLE_SQL)
            .bind(title)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_end_date(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        end_date: DateTime,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_BY_END_DATE_SQL)
            .bind(SqlxDateTime::from(end_date))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(FIND_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(CREATE_PROMOTION_SQL)
            .bind(promotion.title)
            .bind(promotion.promotion_type)
            .bind(SqlxDateTime::from(promotion.start_date))
            .bind(SqlxDateTime::from(promotion.end_date))
            .bind(promotion.active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
        update: PromotionUpdate,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(UPDATE_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .bind(update.title)
            .bind(update.promotion_type)
            .bind(SqlxDateTime::from(update.start_date))
            .bind(SqlxDateTime::from(update.end_date))
            .bind(update.active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PromotionId::from_i64(row.try_get("id")?),
            title: row.try_get("title")?,
            promotion_type: row.try_get("promotion_type")?,
            start_date: row.try_get::<SqlxDateTime, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDateTime, _>("end_date")?.to_jiff(),
            active: row.try_get("active")?,
        })
    }
}
