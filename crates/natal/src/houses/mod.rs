pub mod resolver;
pub mod types;

pub use resolver::{resolve_houses, HOUSE_COUNT};
pub use types::{HouseCusp, HouseSet};
