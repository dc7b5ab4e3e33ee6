//! In-memory registry of live rooms.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use super::room::Room;

/// Shared handle to the room map. Clones point at the same rooms; separate
/// `RoomStore::new()` calls are fully independent.
#[derive(Debug, Clone, Default)]
pub struct RoomStore {
    inner: Arc<RwLock<HashMap<String, Room>>>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts `room` under `room_id`, handing back whatever it replaced.
    pub async fn insert(&self, room_id: String, room: Room) -> Option<Room> {
        let mut rooms = self.inner.write().await;
        rooms.insert(room_id, room)
    }

    /// Returns whether a room was actually removed.
    pub async fn delete(&self, room_id: &str) -> bool {
        let mut rooms = self.inner.write().await;
        rooms.remove(room_id).is_some()
    }

    /// All rooms, in no particular order.
    pub async fn snapshot(&self) -> Vec<Room> {
        let rooms = self.inner.read().await;
        rooms.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
