pub mod appresult;
pub mod config;
pub mod json;
pub mod rooms;

use axum::{debug_handler, extract::FromRef, Router};
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult};
pub use config::Config;

#[derive(Clone, Debug, Default, FromRef)]
pub struct AppState {
    pub rooms: rooms::RoomStore,
    pub rtc: rooms::RtcPicker,
}

impl AppState {
    pub fn new(rtc: rooms::RtcPicker) -> Self {
        Self {
            rooms: rooms::RoomStore::new(),
            rtc,
        }
    }
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/room", rooms::router())
        .fallback(not_found)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

#[debug_handler]
async fn not_found() -> AppError {
    AppError::not_found()
}
