use crate::cli::Args;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use http::Method;
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim_end_matches('/')) {
            Ok(origin) => Some(origin),
            Err(err) => {
                tracing::warn!(origin, error = %err, "Ignoring invalid allowed origin");
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            USER_AGENT,
            HeaderName::from_static("sec-fetch-mode"),
            REFERER,
            ORIGIN,
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
            CONTENT_TYPE,
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
