//! App Router

use std::path::Path;

use salvo::{
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    serve_static::StaticDir,
};

use crate::{healthcheck, observability, stock};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Stock API routes.
pub(crate) fn stock_router() -> Router {
    Router::with_path("stock")
        .get(stock::index::handler)
        .post(stock::create::handler)
        .push(Router::with_path("summary").get(stock::summary::handler))
}

/// Every route the server answers, without middleware or state.
///
/// When `static_dir` is given, unmatched paths fall through to the built dashboard.
pub(crate) fn app_router(static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(stock_router());

    let doc = OpenApi::new("Stockroom API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"));

    match static_dir {
        Some(dir) => router.push(
            Router::with_path("{**path}").get(
                StaticDir::new([dir.to_path_buf()])
                    .defaults("index.html")
                    .fallback("index.html"),
            ),
        ),
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn openapi_document_lists_stock_routes() -> TestResult {
        let doc: Value = TestClient::get(format!("http://example.com{OPENAPI_PATH}"))
            .send(&Service::new(app_router(None)))
            .await
            .take_json()
            .await?;

        let paths = doc.get("paths").and_then(Value::as_object);

        assert!(paths.is_some_and(|paths| paths.contains_key("/stock")));
        assert!(paths.is_some_and(|paths| paths.contains_key("/stock/summary")));
        assert!(paths.is_some_and(|paths| paths.contains_key("/healthcheck")));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found_without_dashboard() -> TestResult {
        let res = TestClient::get("http://example.com/index.html")
            .send(&Service::new(app_router(None)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
