use crate::models::{Level, LevelTiers};

/// Score how well two skill levels match
///
/// Coarse three-tier bucketing: identical levels score `exact`, levels one
/// step apart score `adjacent`, everything else scores `fallback`. An
/// unknown level on either side also scores `fallback`, so a player who
/// never filled in a `niveau` is still rankable.
#[inline]
pub fn level_compatibility(a: Option<Level>, b: Option<Level>, tiers: &LevelTiers) -> u8 {
    let (Some(a), Some(b)) = (a, b) else {
        return tiers.fallback;
    };

    let gap = (a.value() - b.value()).abs();
    if gap == 0.0 {
        tiers.exact
    } else if gap == 1.0 {
        tiers.adjacent
    } else {
        tiers.fallback
    }
}
