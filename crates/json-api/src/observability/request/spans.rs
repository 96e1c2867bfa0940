//! HTTP span helpers.

/// Routes reported under their own name. Anything else is a dashboard asset.
const API_ROUTES: [&str; 5] = [
    "/stock",
    "/stock/summary",
    "/healthcheck",
    "/metrics",
    "/api-doc/openapi.json",
];

const STATIC_ROUTE: &str = "/{static}";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: &'static str,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_label(path);

    RequestSpanName {
        route,
        otel_span_name: format!("{method} {route}"),
    }
}

/// Bounded label for a request path, so metrics cardinality stays fixed.
fn route_label(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if trimmed == "/docs" || trimmed.starts_with("/docs/") {
        return "/docs";
    }

    API_ROUTES
        .into_iter()
        .find(|route| *route == trimmed)
        .unwrap_or(STATIC_ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_routes_keep_their_path() {
        assert_eq!(route_label("/stock"), "/stock");
        assert_eq!(route_label("/stock/"), "/stock");
        assert_eq!(route_label("/stock/summary"), "/stock/summary");
        assert_eq!(route_label("/docs/index.css"), "/docs");
    }

    #[test]
    fn asset_paths_collapse() {
        assert_eq!(route_label("/"), STATIC_ROUTE);
        assert_eq!(route_label("/stockroom-ui_bg.wasm"), STATIC_ROUTE);
        assert_eq!(route_label("/stock/unknown"), STATIC_ROUTE);
    }

    #[test]
    fn span_name_joins_method_and_route() {
        let names = request_span_name("POST", "/stock");

        assert_eq!(names.route, "/stock");
        assert_eq!(names.otel_span_name, "POST /stock");
    }
}
