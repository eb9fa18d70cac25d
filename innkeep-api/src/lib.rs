use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod dashboard;
pub mod error;
pub mod guests;
pub mod rooms;
pub mod services;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/", get(dashboard::index))
        .route("/bookings", get(bookings::list_bookings))
        .route("/search_rooms", post(rooms::search_rooms))
        .route("/create_booking", post(bookings::create_booking))
        .route("/guests", get(guests::list_guests))
        .route("/guest/{id}", get(guests::guest_detail))
        .route("/rooms", get(rooms::list_rooms))
        .route("/check_in/{booking_id}", get(bookings::check_in))
        .route("/check_out/{booking_id}", get(bookings::check_out))
        .route("/add_service", post(services::add_service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
