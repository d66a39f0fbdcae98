// Model exports
pub mod domain;

pub use domain::{
    Availability, Club, GeoPoint, InvalidPoint, Level, LevelTiers, Player, RankedClub,
    RankedPlayer, SlotGroup, SortBy,
};
