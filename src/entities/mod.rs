//! SeaORM entity definitions

pub mod prelude;

pub mod lineup;
pub mod lineup_channel;
