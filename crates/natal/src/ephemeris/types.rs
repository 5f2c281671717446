use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// One body as reported by the ephemeris oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBody {
    pub name: String,
    /// Apparent ecliptic longitude in degrees, not necessarily reduced
    pub longitude: f64,
    #[serde(default)]
    pub retrograde: bool,
}

/// Everything the oracle returns for one birth instant and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    pub instant: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
    pub bodies: Vec<RawBody>,
    /// House cusp longitudes, house 1 first. `None` when no location was given.
    #[serde(default)]
    pub cusps: Option<Vec<f64>>,
}
