use std::fmt;

use serde::{Deserialize, Serialize};

pub const ROOM_ID_PREFIX: &str = "rm_";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Live,
    Audio,
}

impl RoomType {
    /// Anything other than a case-insensitive "audio" is a live room.
    pub fn normalize(room_type: &str) -> RoomType {
        if room_type.eq_ignore_ascii_case("audio") {
            RoomType::Audio
        } else {
            RoomType::Live
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RtcType {
    #[serde(rename = "TRTC")]
    Trtc,
    Agora,
}

impl fmt::Display for RtcType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use RtcType::*;
        f.write_str(match self {
            Trtc => "TRTC",
            Agora => "Agora",
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: String,
    #[serde(rename = "owner_userid")]
    pub owner_user_id: String,
    pub create_time: i64,
    pub room_type: RoomType,
    pub rtc_type: RtcType,
}

pub fn room_id_for(owner_user_id: &str) -> String {
    format!("{ROOM_ID_PREFIX}{owner_user_id}")
}
