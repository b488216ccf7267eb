//! Composition root for the entity stores
//!
//! Stores are built once from a shared connection. The lineup store receives
//! the channel store only as a [`LineupChannelProvider`] capability.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::database::Database;
use crate::database::repositories::{
    LineupChannelProvider, LineupChannelSeaOrmRepository, LineupSeaOrmRepository,
};

#[derive(Clone)]
pub struct ApiCollection {
    lineups: LineupSeaOrmRepository,
    lineup_channels: Arc<LineupChannelSeaOrmRepository>,
}

impl ApiCollection {
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        let lineup_channels = Arc::new(LineupChannelSeaOrmRepository::new(connection.clone()));
        let provider: Arc<dyn LineupChannelProvider> = lineup_channels.clone();
        let lineups = LineupSeaOrmRepository::new(connection, provider);

        Self {
            lineups,
            lineup_channels,
        }
    }

    pub fn from_database(database: &Database) -> Self {
        Self::new(database.connection())
    }

    pub fn lineups(&self) -> &LineupSeaOrmRepository {
        &self.lineups
    }

    pub fn lineup_channels(&self) -> &LineupChannelSeaOrmRepository {
        &self.lineup_channels
    }
}
