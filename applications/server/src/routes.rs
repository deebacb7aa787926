/// HTTP routing, CORS and request tracing
use crate::{api, state::AppState};
use axum::{
    http::{header, HeaderName, Method},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router with every route under `/api`
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/:id",
            get(api::playlists::get_playlist)
                .put(api::playlists::update_playlist)
                .delete(api::playlists::delete_playlist),
        )
        // Songs
        .route(
            "/songs",
            get(api::songs::list_songs).post(api::songs::create_song),
        )
        .route(
            "/songs/:id",
            get(api::songs::get_song)
                .put(api::songs::update_song)
                .delete(api::songs::delete_song),
        )
        .route("/songs/:id/order", put(api::songs::update_song_order));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors_layer())
        .with_state(app_state)
}

/// Any origin, with credentials.
///
/// Credentialed CORS forbids the `*` wildcard, so the request's own origin is
/// echoed back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            header::ORIGIN,
        ])
}
