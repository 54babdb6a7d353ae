use glam::DVec2;
use sheen_attitude::Attitude;
use sheen_config::ContentMode;
use std::f64::consts::PI;

/// Axis-aligned rectangle in view points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    /// Rectangle at the origin, as seen in the view's local frame.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn mid(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    /// Angle of the diagonal, measured from the vertical side (radians).
    pub fn diagonal_angle(&self) -> f64 {
        self.width().atan2(self.height())
    }
}

/// Where the highlight sits relative to the card center.
///
/// Roll slides it horizontally and pitch vertically, both proportional to the
/// card height. `attitude.pitch` is expected to already include the user's
/// neutral device angle.
pub fn highlight_offset(rect: &Rect, attitude: &Attitude) -> DVec2 {
    let x = -(attitude.roll / PI * 4.0) * rect.height();
    let y = -(attitude.pitch / PI * 4.0) * rect.height();
    DVec2::new(x, y)
}

/// Stretch that turns the circular highlight into an ellipse matching the
/// card's aspect ratio.
pub fn highlight_scale(size: DVec2) -> DVec2 {
    if size.x > size.y {
        DVec2::new(size.x / size.y, 1.0)
    } else {
        DVec2::new(1.0, size.y / size.x)
    }
}

/// End radius of the highlight gradient.
pub fn highlight_radius(rect: &Rect, content_mode: ContentMode) -> f64 {
    let half_w = rect.width() / 2.0;
    let half_h = rect.height() / 2.0;
    match content_mode {
        ContentMode::Fill => half_w.max(half_h),
        ContentMode::Fit => half_w.min(half_h),
    }
}
