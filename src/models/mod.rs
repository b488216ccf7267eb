pub mod lineup;
pub mod lineup_channel;

pub use lineup::{Lineup, LineupCreateRequest, LineupUpdateRequest};
pub use lineup_channel::LineupChannel;
