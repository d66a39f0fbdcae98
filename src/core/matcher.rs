use std::cmp::Ordering;

use crate::core::{distance::distance_km, scoring::level_compatibility};
use crate::models::{Club, GeoPoint, Level, LevelTiers, Player, RankedClub, RankedPlayer, SortBy};
use crate::config::Settings;

/// Default search radius around the reference point
pub const DEFAULT_MAX_RADIUS_KM: f64 = 100.0;

/// Club rankings are capped for display; player rankings are not
pub const DEFAULT_CLUB_LIMIT: usize = 10;

/// Pure, stateless ranking of clubs and players around a reference point
///
/// # Pipeline
/// 1. Derive `distance_km` per candidate (unbounded when no usable position)
/// 2. Filter by the search radius
/// 3. Stable sort: clubs by distance, players by distance or level score
///
/// Inputs are never mutated; each call allocates fresh output records.
/// Malformed input degrades to empty or neutral results instead of failing.
#[derive(Debug, Clone)]
pub struct ProximityMatcher {
    max_radius_km: f64,
    club_limit: usize,
    tiers: LevelTiers,
}

impl ProximityMatcher {
    pub fn new(max_radius_km: f64, club_limit: usize, tiers: LevelTiers) -> Self {
        Self {
            max_radius_km,
            club_limit,
            tiers,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            max_radius_km: DEFAULT_MAX_RADIUS_KM,
            club_limit: DEFAULT_CLUB_LIMIT,
            tiers: LevelTiers::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_radius_km: settings.matching.max_radius_km,
            club_limit: settings.matching.club_limit,
            tiers: settings.scoring.tiers.into(),
        }
    }

    pub fn max_radius_km(&self) -> f64 {
        self.max_radius_km
    }

    /// Rank clubs by distance from the reference point
    ///
    /// Clubs outside the search radius (or without a usable position) are
    /// dropped, the rest are sorted nearest-first and capped at the club
    /// limit. Ties keep their input order. An absent reference point yields
    /// an empty ranking.
    pub fn rank_clubs(&self, clubs: &[Club], origin: Option<&GeoPoint>) -> Vec<RankedClub> {
        let Some(origin) = origin else {
            return Vec::new();
        };

        let mut ranked: Vec<RankedClub> = clubs
            .iter()
            .map(|club| RankedClub {
                id: club.id.clone(),
                name: club.name.clone(),
                address: club.address.clone(),
                city: club.city.clone(),
                lat: club.lat,
                lng: club.lng,
                distance_km: distance_km(Some(origin), club.position().as_ref()),
            })
            .filter(|club| club.distance_km <= self.max_radius_km)
            .collect();

        ranked.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(self.club_limit);

        tracing::debug!(
            candidates = clubs.len(),
            ranked = ranked.len(),
            radius_km = self.max_radius_km,
            "ranked clubs"
        );

        ranked
    }

    /// Rank players by distance or level compatibility
    ///
    /// Every candidate gets a level score against `my_level`, whether or not
    /// it survives the radius filter. Players without coordinates are
    /// unbounded-far and fall out under any finite radius. `SortBy::Level`
    /// orders by descending score with ascending distance as tie-break;
    /// `SortBy::Distance` orders nearest-first. No cap is applied.
    pub fn rank_players(
        &self,
        players: &[Player],
        origin: Option<&GeoPoint>,
        my_level: Option<Level>,
        sort_by: SortBy,
    ) -> Vec<RankedPlayer> {
        let Some(origin) = origin else {
            return Vec::new();
        };

        let mut ranked: Vec<RankedPlayer> = players
            .iter()
            .map(|player| RankedPlayer {
                id: player.id.clone(),
                name: player.name.clone(),
                niveau: player.niveau,
                distance_km: distance_km(Some(origin), player.position().as_ref()),
                level_score: level_compatibility(my_level, player.niveau, &self.tiers),
            })
            .filter(|player| player.distance_km <= self.max_radius_km)
            .collect();

        match sort_by {
            SortBy::Level => ranked.sort_by(|a, b| {
                b.level_score.cmp(&a.level_score).then_with(|| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(Ordering::Equal)
                })
            }),
            SortBy::Distance => ranked.sort_by(|a, b| {
                a.distance_km
                    .partial_cmp(&b.distance_km)
                    .unwrap_or(Ordering::Equal)
            }),
        }

        tracing::debug!(
            candidates = players.len(),
            ranked = ranked.len(),
            radius_km = self.max_radius_km,
            sort = ?sort_by,
            "ranked players"
        );

        ranked
    }
}

impl Default for ProximityMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
