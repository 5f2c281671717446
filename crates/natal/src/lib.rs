//! Natal chart computation and chart layout.
//!
//! Turns raw ecliptic longitudes from an ephemeris oracle into zodiac facts
//! (signs, houses, ascendant, aspects) and into polar chart geometry for a
//! renderer. Everything here is pure and synchronous.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod layout;
pub mod zodiac;

pub use aspects::{detect_aspects, Aspect, AspectCalculator, AspectType};
pub use chart::NatalChart;
pub use error::ChartError;
pub use houses::{resolve_houses, HouseCusp, HouseSet};
pub use layout::{
    layout, ChartLayout, ChartLayoutEngine, ChartSegment, LayoutSettings, PlanetGlyphPosition,
};
pub use zodiac::{normalize, Body, Placement, PlanetPosition, Sign};
