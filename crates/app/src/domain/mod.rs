//! Promotion Service Domain Concerns

pub mod promotions;
