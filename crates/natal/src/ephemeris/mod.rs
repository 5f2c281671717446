pub mod oracle;
pub mod types;

pub use oracle::{EphemerisError, EphemerisOracle, SnapshotOracle};
pub use types::{EphemerisSnapshot, GeoLocation, RawBody};
