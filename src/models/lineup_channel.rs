use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::lineup_channel;

/// A tunable channel attached to a lineup
///
/// Owned by the channel store; lineups only carry these after hydration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupChannel {
    pub id: i32,
    pub lineup_id: i32,
    pub title: String,
    pub channel_number: String,
    pub hd: bool,
    pub favorite: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<lineup_channel::Model> for LineupChannel {
    fn from(model: lineup_channel::Model) -> Self {
        Self {
            id: model.id,
            lineup_id: model.lineup_id,
            title: model.title,
            channel_number: model.channel_number,
            hd: model.hd,
            favorite: model.favorite,
            active: model.active,
            created_at: model.created_at,
        }
    }
}
