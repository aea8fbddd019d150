//! App Router

use std::{path::PathBuf, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    serve_static::StaticDir,
    trailing_slash::remove_slash,
};

use crate::{healthcheck, index, observability, promotions, state::State};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Promotion resource routes.
pub(crate) fn promotions_router() -> Router {
    Router::with_path("promotions")
        .get(promotions::index::handler)
        .post(promotions::create::handler)
        .push(
            Router::with_path("{id}")
                .get(promotions::get::handler)
                .put(promotions::update::handler)
                .delete(promotions::delete::handler)
                .push(Router::with_path("activate").put(promotions::activate::handler))
                .push(Router::with_path("deactivate").put(promotions::deactivate::handler)),
        )
}

/// Admin UI assets served from `static_dir`.
pub(crate) fn static_router(static_dir: PathBuf) -> Router {
    Router::with_path("static/{**path}").get(
        StaticDir::new([static_dir])
            .defaults("index.html")
            .auto_list(false),
    )
}

/// Full application router with middleware, API document, Swagger UI and admin UI.
pub(crate) fn app_router(state: Arc<State>, static_dir: PathBuf) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(index::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(promotions_router());

    let doc = OpenApi::new(index::SERVICE_NAME, env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
        .push(static_router(static_dir))
}
