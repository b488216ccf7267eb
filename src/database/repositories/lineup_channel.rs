//! SeaORM-based read access to lineup channels
//!
//! Channel ingestion and editing live elsewhere; this repository only answers
//! the per-lineup lookups the lineup store needs for hydration.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::debug;

use crate::database::repositories::traits::LineupChannelProvider;
use crate::entities::{lineup_channel, prelude::LineupChannels};
use crate::errors::ChannelProviderResult;
use crate::models::LineupChannel;

/// SeaORM-based repository for LineupChannel lookups
#[derive(Clone)]
pub struct LineupChannelSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl LineupChannelSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Find channels for a lineup, ordered by channel id
    pub async fn find_by_lineup_id(
        &self,
        lineup_id: i32,
        active_only: bool,
    ) -> Result<Vec<LineupChannel>, DbErr> {
        let mut query =
            LineupChannels::find().filter(lineup_channel::Column::LineupId.eq(lineup_id));
        if active_only {
            query = query.filter(lineup_channel::Column::Active.eq(true));
        }

        let models = query
            .order_by_asc(lineup_channel::Column::Id)
            .all(&*self.connection)
            .await?;

        debug!(
            "Loaded {} channels for lineup {} (active_only={})",
            models.len(),
            lineup_id,
            active_only
        );
        Ok(models.into_iter().map(LineupChannel::from).collect())
    }
}

#[async_trait]
impl LineupChannelProvider for LineupChannelSeaOrmRepository {
    async fn get_channels_for_lineup(
        &self,
        lineup_id: i32,
        active_only: bool,
    ) -> ChannelProviderResult<Vec<LineupChannel>> {
        Ok(self.find_by_lineup_id(lineup_id, active_only).await?)
    }
}
