use serde::{Deserialize, Serialize};
use sheen_attitude::AttitudeDampening;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShinyConfig {
    /// Highlight and tilt presentation.
    pub effect: EffectConfig,
    /// Orientation source settings.
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Gradient used for the highlight surface.
    pub surface: SurfacePreset,
    /// Whether the card tilts in 3D with the device.
    pub has_3d_effect: bool,
    /// Whether the highlight fits inside or fills the card.
    pub content_mode: ContentMode,
    /// Per-axis suppression, 0.0 = full effect, 1.0 = none.
    /// Typical ranges: pitch 0.6-0.9, yaw 1.0, roll 0.0-0.75.
    pub dampening: AttitudeDampening,
    /// Multiplier applied to the composed tilt angle before rendering.
    pub rotation_damping: f64,
    /// Duration of the linear animation between motion samples.
    pub animation_ms: u64,
}

impl EffectConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            surface: SurfacePreset::Highlight,
            has_3d_effect: true,
            content_mode: ContentMode::Fit,
            dampening: AttitudeDampening::default(),
            rotation_damping: 0.4,
            animation_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Interval between sensor samples. Lower is smoother but costs more power.
    pub update_interval_ms: u64,
    /// Neutral holding angle added to pitch, in degrees. Negative means the
    /// device is assumed to be tilted toward the user.
    pub default_device_angle_deg: f64,
}

impl MotionConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn default_device_angle(&self) -> f64 {
        self.default_device_angle_deg.to_radians()
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 100,
            default_device_angle_deg: -25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfacePreset {
    /// Five-stop white falloff.
    Highlight,
    /// Two-stop white falloff.
    BasicHighlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentMode {
    /// Highlight radius follows the shorter side.
    Fit,
    /// Highlight radius follows the longer side.
    Fill,
}
