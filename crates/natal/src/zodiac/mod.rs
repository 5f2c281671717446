pub mod bodies;
pub mod longitude;
pub mod signs;

pub use bodies::Body;
pub use longitude::{normalize, reduce_longitude, Placement, PlanetPosition, FULL_CIRCLE};
pub use signs::{Element, Sign, UnknownSign, SIGN_SPAN};
