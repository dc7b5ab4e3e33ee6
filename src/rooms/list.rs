use axum::{debug_handler, extract::State, Json};

use super::{room::Room, store::RoomStore};

/// Every live room, newest first.
pub async fn list_rooms(rooms: &RoomStore) -> Vec<Room> {
    let mut list = rooms.snapshot().await;
    // stable, so rooms created in the same second keep snapshot order
    list.sort_by(|a, b| b.create_time.cmp(&a.create_time));
    list
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn list(State(rooms): State<RoomStore>) -> Json<Vec<Room>> {
    Json(list_rooms(&rooms).await)
}
