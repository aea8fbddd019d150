//! Promotions

pub mod data;
mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::{PromotionValidationError, PromotionsServiceError};
pub use service::*;
