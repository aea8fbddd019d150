//! Service metadata served from the root path.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

pub(crate) const SERVICE_NAME: &str = "Promotion REST API Service";

/// Root response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IndexResponse {
    /// Human-readable service name
    pub name: String,

    /// Service version
    pub version: String,

    /// Path of the promotions collection
    pub url: String,
}

/// Root handler
#[endpoint(tags("meta"), summary = "Service metadata")]
pub(crate) async fn handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        url: "/promotions".to_string(),
    })
}
