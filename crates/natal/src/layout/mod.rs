pub mod engine;
pub mod placement;
pub mod records;
pub mod types;
pub mod wheel;

pub use engine::{layout, ChartLayoutEngine};
pub use records::{layout_stored, resolve_ascendant, StoredPlacement};
pub use types::{ChartLayout, ChartSegment, HouseLine, LayoutSettings, PlanetGlyphPosition};
pub use wheel::{rotation_index, segment_start_angle, REFERENCE_ANGLE};
