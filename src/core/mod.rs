// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod scoring;
pub mod slots;

pub use distance::{distance_km, haversine_distance, UNBOUNDED_KM};
pub use matcher::{ProximityMatcher, DEFAULT_CLUB_LIMIT, DEFAULT_MAX_RADIUS_KM};
pub use scoring::level_compatibility;
pub use slots::group_by_slot;
