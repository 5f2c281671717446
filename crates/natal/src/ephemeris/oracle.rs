use crate::ephemeris::types::{EphemerisSnapshot, GeoLocation};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while obtaining ephemeris data
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Failed to read snapshot at {}: {source}", path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid snapshot JSON: {0}")]
    SnapshotParse(#[from] serde_json::Error),
    #[error("No ephemeris data available for {instant}")]
    MissingInstant { instant: DateTime<Utc> },
}

/// Source of apparent longitudes and house cusps.
///
/// Implementations wrap an external ephemeris; calls are blocking and the
/// caller owns retry and timeout policy.
pub trait EphemerisOracle {
    fn snapshot(
        &self,
        instant: DateTime<Utc>,
        location: Option<GeoLocation>,
    ) -> Result<EphemerisSnapshot, EphemerisError>;
}

/// Oracle backed by previously recorded snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotOracle {
    snapshots: Vec<EphemerisSnapshot>,
}

impl SnapshotOracle {
    pub fn new(snapshots: Vec<EphemerisSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Parse either a single snapshot object or an array of them.
    pub fn from_json(json: &str) -> Result<Self, EphemerisError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let snapshots = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        Ok(Self::new(snapshots))
    }

    pub fn from_path(path: &Path) -> Result<Self, EphemerisError> {
        let text = fs::read_to_string(path).map_err(|source| EphemerisError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn snapshots(&self) -> &[EphemerisSnapshot] {
        &self.snapshots
    }
}

impl EphemerisOracle for SnapshotOracle {
    /// Snapshot recorded for `instant`. Houses are dropped when no location is
    /// requested, and the requested location replaces the recorded one.
    fn snapshot(
        &self,
        instant: DateTime<Utc>,
        location: Option<GeoLocation>,
    ) -> Result<EphemerisSnapshot, EphemerisError> {
        let recorded = self
            .snapshots
            .iter()
            .find(|s| s.instant == instant)
            .ok_or(EphemerisError::MissingInstant { instant })?;

        let mut snapshot = recorded.clone();
        if location.is_none() {
            snapshot.cusps = None;
        }
        snapshot.location = location;
        Ok(snapshot)
    }
}
