pub use super::lineup::Entity as Lineups;
pub use super::lineup_channel::Entity as LineupChannels;
