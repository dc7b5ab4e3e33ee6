mod create;
mod destroy;
mod list;
pub mod room;
pub mod rtc;
pub mod store;

use axum::{debug_handler, routing::{get, post}, Router};

use crate::{AppError, AppState};

pub use create::{create_room, unix_now};
pub use destroy::{destroy_room, DestroyResponse, RoomError};
pub use list::list_rooms;
pub use room::{Room, RoomType, RtcType};
pub use rtc::RtcPicker;
pub use store::RoomStore;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create::create).fallback(method_not_allowed))
        .route("/destroy", post(destroy::destroy).fallback(method_not_allowed))
        .route("/list", get(list::list).head(method_not_allowed).fallback(method_not_allowed))
}

#[debug_handler]
async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
