pub mod calculator;
pub mod types;

pub use calculator::{
    angular_separation, classify_separation, detect_aspects, AspectCalculator, ASPECT_RULES,
};
pub use types::{Aspect, AspectRule, AspectType};
