use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Device orientation sample, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    /// Rotation about the X axis.
    pub pitch: f64,
    /// Rotation about the Z axis.
    pub yaw: f64,
    /// Rotation about the Y axis.
    pub roll: f64,
}

impl Attitude {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Sum of all three angles. Changes whenever any axis moves.
    pub fn total_rotation(&self) -> f64 {
        self.roll + self.yaw + self.pitch
    }

    /// Compose the damped axis rotations into a single axis-angle rotation.
    pub fn to_axis_angle(&self, scaling: AttitudeScaling) -> AxisAngle {
        crate::euler_to_axis_angle(*self, scaling)
    }
}

/// How much of each axis to suppress: 0.0 = full effect, 1.0 = no effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttitudeDampening {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl AttitudeDampening {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Multipliers to apply to raw angles.
    pub fn scaling(&self) -> AttitudeScaling {
        AttitudeScaling {
            pitch: 1.0 - self.pitch,
            yaw: 1.0 - self.yaw,
            roll: 1.0 - self.roll,
        }
    }

    /// Clamp every axis into [0, 1].
    pub fn clamped(&self) -> Self {
        Self {
            pitch: self.pitch.clamp(0.0, 1.0),
            yaw: self.yaw.clamp(0.0, 1.0),
            roll: self.roll.clamp(0.0, 1.0),
        }
    }

    pub fn is_in_range(&self) -> bool {
        [self.pitch, self.yaw, self.roll]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

impl Default for AttitudeDampening {
    fn default() -> Self {
        Self {
            pitch: 0.9,
            yaw: 1.0,
            roll: 0.0,
        }
    }
}

/// Per-axis multiplier applied to attitude angles before composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeScaling {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl AttitudeScaling {
    pub const FULL: Self = Self {
        pitch: 1.0,
        yaw: 1.0,
        roll: 1.0,
    };

    pub const NONE: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }
}

impl From<AttitudeDampening> for AttitudeScaling {
    fn from(dampening: AttitudeDampening) -> Self {
        dampening.scaling()
    }
}

/// A rotation as a unit axis plus an angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub axis: DVec3,
    pub angle: f64,
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self {
            axis: DVec3::X,
            angle: 0.0,
        }
    }
}
