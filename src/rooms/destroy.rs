use axum::{debug_handler, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{json::JsonBody, AppError, AppResult};

use super::store::RoomStore;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("room not found")]
    NotFound,
}

impl RoomError {
    pub fn status(&self) -> StatusCode {
        match self {
            RoomError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn into_app_error(self) -> AppError {
        AppError::with_status(self.status(), self)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DestroyRoomRequest {
    room_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DestroyResponse {
    pub result: String,
}

impl DestroyResponse {
    pub fn ok() -> Self {
        Self { result: "ok".to_owned() }
    }
}

pub async fn destroy_room(rooms: &RoomStore, room_id: &str) -> Result<(), RoomError> {
    if !rooms.delete(room_id).await {
        tracing::debug!(room_id, "destroy of unknown room");
        return Err(RoomError::NotFound);
    }

    tracing::debug!(room_id, "room destroyed");
    Ok(())
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn destroy(
    State(rooms): State<RoomStore>,
    JsonBody(DestroyRoomRequest { room_id }): JsonBody<DestroyRoomRequest>,
) -> AppResult<Json<DestroyResponse>> {
    destroy_room(&rooms, &room_id.unwrap_or_default())
        .await
        .map_err(RoomError::into_app_error)?;
    Ok(Json(DestroyResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{create::create_room, rtc::RtcPicker};

    #[tokio::test]
    async fn destroy_is_error_on_repeat() {
        let rooms = RoomStore::new();
        create_room(&rooms, &RtcPicker::fixed(0), "5", "Live", 1).await;

        assert_eq!(destroy_room(&rooms, "rm_5").await, Ok(()));
        assert_eq!(destroy_room(&rooms, "rm_5").await, Err(RoomError::NotFound));
        assert!(rooms.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let rooms = RoomStore::new();
        assert_eq!(destroy_room(&rooms, "rm_ghost").await, Err(RoomError::NotFound));
        assert_eq!(RoomError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn ok_response_shape() {
        let body = serde_json::to_value(DestroyResponse::ok()).unwrap();
        assert_eq!(body, serde_json::json!({ "result": "ok" }));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = RoomError::NotFound.into_app_error();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "room not found");
    }
}
