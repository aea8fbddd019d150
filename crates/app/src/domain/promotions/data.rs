//! Promotions Data

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::promotions::{errors::PromotionValidationError, records::PromotionRecord};

/// Maximum length, in characters, of `title` and `promotion_type`.
pub const MAX_TEXT_LENGTH: usize = 63;

/// New Promotion Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub title: String,
    pub promotion_type: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub active: bool,
}

/// Promotion Update Data
///
/// Full replacement of every mutable field of a stored promotion.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionUpdate {
    pub title: String,
    pub promotion_type: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub active: bool,
}

impl PromotionUpdate {
    #[must_use]
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }
}

impl From<PromotionRecord> for PromotionUpdate {
    fn from(record: PromotionRecord) -> Self {
        Self {
            title: record.title,
            promotion_type: record.promotion_type,
            start_date: record.start_date,
            end_date: record.end_date,
            active: record.active,
        }
    }
}

/// Promotion list filter.
///
/// At most one attribute filter is applied to a list query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PromotionFilter {
    #[default]
    All,
    PromotionType(String),
    Active(bool),
    Title(String),
    EndDate(DateTime),
}

impl PromotionFilter {
    /// Select the filter for a list query.
    ///
    /// Parameters are checked in the order `promotion_type`, `active`, `title`,
    /// `end_date`; only the first one present is honoured.
    ///
    /// # Errors
    ///
    /// Returns an error when the selected `active` or `end_date` value cannot be parsed.
    pub fn from_query(
        promotion_type: Option<String>,
        active: Option<String>,
        title: Option<String>,
        end_date: Option<String>,
    ) -> Result<Self, PromotionValidationError> {
        if let Some(promotion_type) = promotion_type {
            return Ok(Self::PromotionType(promotion_type));
        }

        if let Some(active) = active {
            return parse_active_flag(&active).map(Self::Active);
        }

        if let Some(title) = title {
            return Ok(Self::Title(title));
        }

        if let Some(end_date) = end_date {
            return parse_date_time(&end_date)
                .map(Self::EndDate)
                .ok_or(PromotionValidationError::InvalidDate {
                    field: "end_date",
                    value: end_date,
                });
        }

        Ok(Self::All)
    }
}

/// Promotion request payload.
///
/// Every field is optional here; required fields are enforced by
/// [`PromotionPayload::into_new_promotion`] and [`PromotionPayload::apply_to`].
/// Unknown keys, including `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionPayload {
    pub title: Option<String>,
    pub promotion_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub active: Option<bool>,
}

struct ValidatedPayload {
    title: String,
    promotion_type: String,
    start_date: DateTime,
    end_date: DateTime,
    active: Option<bool>,
}

impl PromotionPayload {
    /// Decode a request body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not JSON, is not a JSON object, or
    /// carries a field of the wrong JSON type.
    pub fn from_json(body: &[u8]) -> Result<Self, PromotionValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(PromotionValidationError::MalformedJson)?;

        if !value.is_object() {
            return Err(PromotionValidationError::NotAnObject);
        }

        serde_json::from_value(value).map_err(PromotionValidationError::InvalidField)
    }

    /// Validate the payload as a new promotion. `active` defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or invalid field.
    pub fn into_new_promotion(self) -> Result<NewPromotion, PromotionValidationError> {
        let payload = self.validate()?;

        Ok(NewPromotion {
            title: payload.title,
            promotion_type: payload.promotion_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            active: payload.active.unwrap_or(false),
        })
    }

    /// Validate the payload as a replacement for `existing`. An absent
    /// `active` keeps the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or invalid field.
    pub fn apply_to(
        self,
        existing: &PromotionRecord,
    ) -> Result<PromotionUpdate, PromotionValidationError> {
        let payload = self.validate()?;

        Ok(PromotionUpdate {
            title: payload.title,
            promotion_type: payload.promotion_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            active: payload.active.unwrap_or(existing.active),
        })
    }

    fn validate(self) -> Result<ValidatedPayload, PromotionValidationError> {
        Ok(ValidatedPayload {
            title: required_text("title", self.title)?,
            promotion_type: required_text("promotion_type", self.promotion_type)?,
            start_date: required_date("start_date", self.start_date)?,
            end_date: required_date("end_date", self.end_date)?,
            active: self.active,
        })
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, PromotionValidationError> {
    let value = value.ok_or(PromotionValidationError::MissingField(field))?;

    if value.trim().is_empty() {
        return Err(PromotionValidationError::EmptyField(field));
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(PromotionValidationError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(value)
}

fn required_date(
    field: &'static str,
    value: Option<String>,
) -> Result<DateTime, PromotionValidationError> {
    let value = value.ok_or(PromotionValidationError::MissingField(field))?;

    parse_date_time(&value).ok_or(PromotionValidationError::InvalidDate { field, value })
}

/// Parse a promotion date.
///
/// Accepts RFC 3339 timestamps (converted to UTC), civil date-times such as
/// `2021-11-01T08:30:00`, and bare dates such as `2021-11-01` (midnight).
pub fn parse_date_time(value: &str) -> Option<DateTime> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::UTC).datetime());
    }

    if let Ok(date_time) = value.parse::<DateTime>() {
        return Some(date_time);
    }

    value
        .parse::<Date>()
        .ok()
        .map(|date| date.to_datetime(Time::midnight()))
}

/// Coerce the `active` query parameter: `true` or `false`, ignoring case and
/// surrounding whitespace.
///
/// # Errors
///
/// Returns an error for any other value.
pub fn parse_active_flag(value: &str) -> Result<bool, PromotionValidationError> {
    let trimmed = value.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(PromotionValidationError::InvalidActiveFlag(value.to_string()))
    }
}
