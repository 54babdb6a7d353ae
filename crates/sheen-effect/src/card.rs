use crate::geometry::{highlight_offset, highlight_radius, highlight_scale, Rect};
use crate::gradient::Gradient;
use glam::{DAffine2, DMat4, DQuat, DVec2, DVec3};
use sheen_attitude::{Attitude, AttitudeScaling};
use sheen_config::{ContentMode, EffectConfig};
use std::time::Duration;

/// Inner radius of the highlight gradient, in points.
const HIGHLIGHT_START_RADIUS: f64 = 1.0;

/// Shiny, motion-reactive card effect.
///
/// Holds the presentation settings. Call [`ShinyCard::frame`] once per motion
/// sample to get everything the host toolkit needs to draw the card.
#[derive(Debug, Clone)]
pub struct ShinyCard {
    pub surface: Gradient,
    pub has_3d_effect: bool,
    pub content_mode: ContentMode,
    /// Per-axis multipliers, i.e. `1 - dampening`.
    pub scaling: AttitudeScaling,
    /// Applied to the composed tilt angle.
    pub rotation_damping: f64,
    pub animation_duration: Duration,
}

impl ShinyCard {
    pub fn from_config(config: &EffectConfig) -> Self {
        Self {
            surface: Gradient::from_preset(config.surface),
            has_3d_effect: config.has_3d_effect,
            content_mode: config.content_mode,
            scaling: config.dampening.scaling(),
            rotation_damping: config.rotation_damping,
            animation_duration: config.animation_duration(),
        }
    }

    /// Lay out the card for one attitude sample.
    ///
    /// `rect` is the card's local frame; `attitude` should carry the user
    /// device pitch rather than the raw sensor pitch.
    pub fn frame(&self, rect: Rect, attitude: Attitude) -> CardFrame {
        let highlight = HighlightLayer {
            start_radius: HIGHLIGHT_START_RADIUS,
            end_radius: highlight_radius(&rect, self.content_mode),
            scale: highlight_scale(rect.size),
            rotation: rect.diagonal_angle(),
            offset: highlight_offset(&rect, &attitude),
        };

        let tilt = self.has_3d_effect.then(|| {
            let rotation = attitude.to_axis_angle(self.scaling);
            Tilt {
                axis: rotation.axis,
                angle: rotation.angle * self.rotation_damping,
            }
        });

        CardFrame {
            content_center: rect.mid(),
            highlight,
            tilt,
            animation: Animation::linear(self.animation_duration, attitude.total_rotation()),
        }
    }
}

impl Default for ShinyCard {
    fn default() -> Self {
        Self::from_config(&EffectConfig::default())
    }
}

/// Everything needed to draw one frame of the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFrame {
    /// Where the content is positioned, in the card's local frame.
    pub content_center: DVec2,
    /// Radial highlight overlay, masked by the content.
    pub highlight: HighlightLayer,
    /// 3D rotation of the whole card. `None` when the 3D effect is off.
    pub tilt: Option<Tilt>,
    pub animation: Animation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightLayer {
    pub start_radius: f64,
    pub end_radius: f64,
    pub scale: DVec2,
    /// Rotation of the stretched highlight, radians.
    pub rotation: f64,
    /// Translation from the card center.
    pub offset: DVec2,
}

impl HighlightLayer {
    /// Map gradient-local coordinates (centered on the origin) into the card:
    /// scale, then rotate, then move to `center + offset`.
    pub fn transform(&self, center: DVec2) -> DAffine2 {
        DAffine2::from_scale_angle_translation(self.scale, self.rotation, center + self.offset)
    }
}

/// Damped card rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Unit rotation axis.
    pub axis: DVec3,
    /// Radians, after rotation damping.
    pub angle: f64,
}

impl Tilt {
    pub fn quat(&self) -> DQuat {
        DQuat::from_axis_angle(self.axis, self.angle)
    }

    /// Rotation about the coordinate origin.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_axis_angle(self.axis, self.angle)
    }

    /// Rotation about `center` in the card plane.
    pub fn matrix_about(&self, center: DVec2) -> DMat4 {
        let pivot = center.extend(0.0);
        DMat4::from_translation(pivot) * self.matrix() * DMat4::from_translation(-pivot)
    }
}

/// Linear transition between consecutive frames.
///
/// `value` changes whenever the motion does; hosts animate only when it
/// differs from the previous frame's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub duration: Duration,
    pub value: f64,
}

impl Animation {
    pub fn linear(duration: Duration, value: f64) -> Self {
        Self { duration, value }
    }

    /// Linear progress in [0, 1] after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn retriggers(&self, previous: &Animation) -> bool {
        self.value != previous.value
    }
}
