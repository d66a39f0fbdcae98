use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced by strict coordinate validation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidPoint {
    #[error("coordinate is not a finite number")]
    NotFinite,

    #[error("latitude {0} is outside -90..90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside -180..180")]
    LongitudeOutOfRange(f64),
}

/// A validated geographic point
///
/// Construction is the single validation boundary: once a `GeoPoint` exists,
/// both coordinates are finite and within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Validate coordinates, returning a typed error on failure
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, InvalidPoint> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidPoint::NotFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidPoint::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Validate coordinates, treating invalid input as an absent point
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        Self::try_new(lat, lng).ok()
    }

    /// Build a point from optional raw coordinates
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Self::new(lat, lng),
            _ => None,
        }
    }
}

/// A player's skill rating (`niveau` in the app's documents)
///
/// Stored documents carry it as either a JSON number or a numeric string,
/// so deserialization accepts both. Non-numeric input becomes absent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Level(f64);

impl Level {
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Field-level deserializer for `niveau`: number or numeric string, anything
/// else (including non-finite values) maps to `None`
pub(crate) fn de_opt_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Level::new(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok().and_then(Level::new),
        _ => None,
    })
}

/// A padel club as stored by the app
///
/// Coordinates are optional in the source documents; `position()` derives a
/// validated point or nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Club {
    pub fn position(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.lat, self.lng)
    }
}

/// A player profile as stored by the app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_level")]
    pub niveau: Option<Level>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Player {
    pub fn position(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.lat, self.lng)
    }
}

/// A club augmented with its distance from the reference point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedClub {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// A player augmented with distance and level compatibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_level")]
    pub niveau: Option<Level>,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "levelScore")]
    pub level_score: u8,
}

/// Player ranking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Distance,
    Level,
}

/// Score tiers for level compatibility
///
/// Exact level match, one step apart, and everything else (including
/// unknown levels) each map to a fixed score.
#[derive(Debug, Clone, Copy)]
pub struct LevelTiers {
    pub exact: u8,
    pub adjacent: u8,
    pub fallback: u8,
}

impl Default for LevelTiers {
    fn default() -> Self {
        Self {
            exact: 100,
            adjacent: 80,
            fallback: 40,
        }
    }
}

/// One response to an availability poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    #[serde(rename = "playerId")]
    pub player_id: String,
    pub slot: DateTime<Utc>,
}

/// All respondents for one time slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotGroup {
    pub slot: DateTime<Utc>,
    #[serde(rename = "playerIds")]
    pub player_ids: Vec<String>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(48.8566, 2.3522).is_some());
        assert!(GeoPoint::new(90.0, 180.0).is_some());
        assert!(GeoPoint::new(91.0, 0.0).is_none());
        assert!(GeoPoint::new(0.0, -180.5).is_none());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_none());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_geo_point_strict_errors() {
        assert_eq!(
            GeoPoint::try_new(95.0, 0.0),
            Err(InvalidPoint::LatitudeOutOfRange(95.0))
        );
        assert_eq!(
            GeoPoint::try_new(0.0, 181.0),
            Err(InvalidPoint::LongitudeOutOfRange(181.0))
        );
        assert_eq!(GeoPoint::try_new(f64::NAN, 0.0), Err(InvalidPoint::NotFinite));
    }

    #[test]
    fn test_level_from_number_or_string() {
        let player: Player = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "niveau": 3
        }))
        .unwrap();
        assert_eq!(player.niveau, Level::new(3.0));

        let player: Player = serde_json::from_value(serde_json::json!({
            "id": "p2",
            "niveau": "4.5"
        }))
        .unwrap();
        assert_eq!(player.niveau, Level::new(4.5));
    }

    #[test]
    fn test_level_junk_becomes_absent() {
        for niveau in [
            serde_json::json!("abc"),
            serde_json::json!(null),
            serde_json::json!({"value": 3}),
        ] {
            let player: Player = serde_json::from_value(serde_json::json!({
                "id": "p",
                "niveau": niveau.clone()
            }))
            .unwrap();
            assert!(player.niveau.is_none(), "expected absent for {niveau}");
        }
    }

    #[test]
    fn test_club_position_requires_both_coordinates() {
        let club: Club = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "Padel Factory",
            "lat": 48.8566
        }))
        .unwrap();
        assert!(club.position().is_none());
    }
}
