use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for browser clients on other origins. Applied uniformly
/// to every route.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
