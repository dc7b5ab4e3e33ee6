use axum::{debug_handler, extract::State, Json};
use serde::Deserialize;

use crate::{json::JsonBody, AppResult};

use super::{room::{room_id_for, Room, RoomType}, rtc::RtcPicker, store::RoomStore};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateRoomRequest {
    userid: Option<String>,
    room_type: Option<String>,
}

/// Builds a room for `owner_user_id` and stores it under its derived id.
///
/// The same owner always maps to the same id, so a second create replaces
/// the first room in the store while each caller still gets back its own.
pub async fn create_room(
    rooms: &RoomStore,
    rtc: &RtcPicker,
    owner_user_id: &str,
    room_type: &str,
    create_time: i64,
) -> Room {
    let room = Room {
        room_id: room_id_for(owner_user_id),
        owner_user_id: owner_user_id.to_owned(),
        create_time,
        room_type: RoomType::normalize(room_type),
        rtc_type: rtc.pick(),
    };

    if let Some(old) = rooms.insert(room.room_id.clone(), room.clone()).await {
        tracing::warn!(
            room_id = %room.room_id,
            replaced_create_time = old.create_time,
            "room id reused, previous room overwritten"
        );
    }
    tracing::debug!(
        room_id = %room.room_id,
        room_type = %room.room_type,
        rtc_type = %room.rtc_type,
        "room created"
    );

    room
}

pub fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn create(
    State(rooms): State<RoomStore>,
    State(rtc): State<RtcPicker>,
    JsonBody(CreateRoomRequest { userid, room_type }): JsonBody<CreateRoomRequest>,
) -> AppResult<Json<Room>> {
    let room = create_room(
        &rooms,
        &rtc,
        &userid.unwrap_or_default(),
        &room_type.unwrap_or_default(),
        unix_now(),
    ).await;

    Ok(Json(room))
}
