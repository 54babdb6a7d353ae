pub mod card;
pub mod geometry;
pub mod gradient;

pub use card::{Animation, CardFrame, HighlightLayer, ShinyCard, Tilt};
pub use geometry::Rect;
pub use gradient::Gradient;
