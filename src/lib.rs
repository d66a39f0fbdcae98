//! Padel Algo - geography and level matching core for the Padel Sync app
//!
//! This library provides the pure matching utilities used by Padel Sync:
//! great-circle distance, coarse level compatibility, club and player
//! ranking around a reference point, and availability slot grouping.
//! All operations are stateless and fail soft: malformed input degrades to
//! empty or neutral results rather than an error.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use self::core::{
    distance::{distance_km, haversine_distance, UNBOUNDED_KM},
    group_by_slot, level_compatibility, ProximityMatcher,
};
pub use models::{
    Availability, Club, GeoPoint, Level, LevelTiers, Player, RankedClub, RankedPlayer, SlotGroup,
    SortBy,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = ProximityMatcher::with_defaults();
        let origin = GeoPoint::new(48.8566, 2.3522);
        assert!(matcher.rank_clubs(&[], origin.as_ref()).is_empty());
    }
}
