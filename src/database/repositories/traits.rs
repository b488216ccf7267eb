//! Capabilities that repositories borrow from sibling stores

use async_trait::async_trait;

use crate::errors::ChannelProviderResult;
use crate::models::LineupChannel;

/// Channel lookup used to hydrate lineups
///
/// The lineup store depends on this capability rather than on the channel
/// store itself. Implementations return channels in a stable order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineupChannelProvider: Send + Sync {
    /// Channels belonging to `lineup_id`, restricted to active ones when
    /// `active_only` is set
    async fn get_channels_for_lineup(
        &self,
        lineup_id: i32,
        active_only: bool,
    ) -> ChannelProviderResult<Vec<LineupChannel>>;
}
