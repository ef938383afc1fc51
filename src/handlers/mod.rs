pub mod health;
pub mod hotel;
pub mod response;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::HotelService;

#[derive(Clone)]
pub struct AppState {
    pub hotel_service: HotelService,
    pub page_max_size: u32,
}

impl AppState {
    pub fn new(hotel_service: HotelService, page_max_size: u32) -> Self {
        Self {
            hotel_service,
            page_max_size,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/hotel", hotel::router().merge(health::router()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
