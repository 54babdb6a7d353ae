mod convert;
mod types;

pub use convert::{euler_to_axis_angle, DEGENERATE_THRESHOLD, FALLBACK_AXIS};
pub use types::*;
