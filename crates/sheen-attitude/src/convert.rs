use crate::types::{Attitude, AttitudeScaling, AxisAngle};
use glam::{DQuat, DVec3};

/// Axis reported when the composed rotation is too small to have a stable axis.
pub const FALLBACK_AXIS: DVec3 = DVec3::X;

/// Below this value of `sqrt(1 - w^2)` the vector part is not normalized.
pub const DEGENERATE_THRESHOLD: f64 = 0.001;

/// Convert pitch, yaw and roll (radians) into a single axis-angle rotation.
///
/// Each angle is multiplied by its scaling factor and turned into a rotation
/// about a fixed axis: pitch about X, roll about Y, yaw about Z. The three are
/// composed as `yaw * pitch * roll`, so roll is applied first and yaw last.
///
/// The returned angle lies in `[0, 2π]`. When the rotation is degenerate
/// (angle near 0 or 2π) the axis is [`FALLBACK_AXIS`]. Non-finite input is not
/// rejected and yields non-finite output.
pub fn euler_to_axis_angle(attitude: Attitude, scaling: AttitudeScaling) -> AxisAngle {
    let q_pitch = DQuat::from_rotation_x(attitude.pitch * scaling.pitch);
    let q_roll = DQuat::from_rotation_y(attitude.roll * scaling.roll);
    let q_yaw = DQuat::from_rotation_z(attitude.yaw * scaling.yaw);

    let q = q_yaw * q_pitch * q_roll;

    // Products of unit quaternions can drift slightly past |w| = 1.
    let w = q.w.clamp(-1.0, 1.0);
    let angle = 2.0 * w.acos();

    let s = (1.0 - w * w).sqrt();
    let axis = if s < DEGENERATE_THRESHOLD {
        FALLBACK_AXIS
    } else {
        q.xyz().normalize()
    };

    AxisAngle { axis, angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    const EPS: f64 = 1e-9;

    fn assert_vec_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn zero_attitude_uses_fallback_axis() {
        for scaling in [AttitudeScaling::FULL, AttitudeScaling::NONE, AttitudeScaling::new(0.1, 1.0, 0.25)] {
            let r = euler_to_axis_angle(Attitude::ZERO, scaling);
            assert_eq!(r.angle, 0.0);
            assert_eq!(r.axis, FALLBACK_AXIS);
        }
    }

    #[test]
    fn fully_damped_input_has_no_rotation() {
        let r = euler_to_axis_angle(Attitude::new(1.2, -2.5, 0.7), AttitudeScaling::NONE);
        assert_eq!(r.angle, 0.0);
        assert_eq!(r.axis, FALLBACK_AXIS);
    }

    #[test]
    fn pitch_alone_rotates_about_x() {
        let r = euler_to_axis_angle(Attitude::new(FRAC_PI_2, 0.0, 0.0), AttitudeScaling::FULL);
        assert!((r.angle - FRAC_PI_2).abs() < EPS);
        assert_vec_eq(r.axis, DVec3::X);
    }

    #[test]
    fn roll_maps_to_y_and_yaw_maps_to_z() {
        let roll = euler_to_axis_angle(Attitude::new(0.0, 0.0, 0.5), AttitudeScaling::FULL);
        assert!((roll.angle - 0.5).abs() < EPS);
        assert_vec_eq(roll.axis, DVec3::Y);

        let yaw = euler_to_axis_angle(Attitude::new(0.0, 0.5, 0.0), AttitudeScaling::FULL);
        assert!((yaw.angle - 0.5).abs() < EPS);
        assert_vec_eq(yaw.axis, DVec3::Z);
    }

    #[test]
    fn negative_angle_flips_axis() {
        let r = euler_to_axis_angle(Attitude::new(-FRAC_PI_2, 0.0, 0.0), AttitudeScaling::FULL);
        assert!((r.angle - FRAC_PI_2).abs() < EPS);
        assert_vec_eq(r.axis, DVec3::NEG_X);
    }

    #[test]
    fn scaling_multiplies_each_axis() {
        let r = euler_to_axis_angle(
            Attitude::new(1.0, 0.0, 0.0),
            AttitudeScaling::new(0.25, 1.0, 1.0),
        );
        assert!((r.angle - 0.25).abs() < EPS);
        assert_vec_eq(r.axis, DVec3::X);
    }

    #[test]
    fn axes_differ_per_source_angle() {
        let pitch = euler_to_axis_angle(Attitude::new(FRAC_PI_4, 0.0, 0.0), AttitudeScaling::FULL);
        let roll = euler_to_axis_angle(Attitude::new(0.0, 0.0, FRAC_PI_4), AttitudeScaling::FULL);
        assert!((pitch.angle - roll.angle).abs() < EPS);
        assert!((pitch.axis - roll.axis).length() > 0.5);
    }

    #[test]
    fn roll_is_applied_before_pitch() {
        // pitch * roll (roll first) tilts the axis toward +Z; the opposite order toward -Z.
        let r = euler_to_axis_angle(Attitude::new(FRAC_PI_2, 0.0, FRAC_PI_2), AttitudeScaling::FULL);
        let expected = DVec3::ONE / 3f64.sqrt();
        assert!((r.angle - 2.0 * PI / 3.0).abs() < EPS);
        assert_vec_eq(r.axis, expected);

        let reversed = DQuat::from_rotation_y(FRAC_PI_2) * DQuat::from_rotation_x(FRAC_PI_2);
        assert!(reversed.z < 0.0);
    }

    #[test]
    fn yaw_is_applied_last() {
        let a = Attitude::new(0.4, 0.6, 0.2);
        let r = euler_to_axis_angle(a, AttitudeScaling::FULL);

        let v = DVec3::new(0.3, -0.7, 0.2);
        let stepwise = DQuat::from_rotation_z(0.6)
            * (DQuat::from_rotation_x(0.4) * (DQuat::from_rotation_y(0.2) * v));
        let composed = DQuat::from_axis_angle(r.axis, r.angle) * v;
        assert_vec_eq(composed, stepwise);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = Attitude::new(0.3, -1.1, 2.4);
        let scaling = AttitudeScaling::new(0.4, 0.6, 0.8);
        let first = euler_to_axis_angle(a, scaling);
        let second = euler_to_axis_angle(a, scaling);
        assert_eq!(first.angle.to_bits(), second.angle.to_bits());
        assert_eq!(first.axis.to_array().map(f64::to_bits), second.axis.to_array().map(f64::to_bits));
    }

    #[test]
    fn full_turn_falls_back_without_nan() {
        for pitch in [TAU, TAU - 1e-4, TAU + 1e-4] {
            let r = euler_to_axis_angle(Attitude::new(pitch, 0.0, 0.0), AttitudeScaling::FULL);
            assert!(r.axis.is_finite());
            assert_eq!(r.axis, FALLBACK_AXIS);
            assert!(r.angle.is_finite());
            assert!(r.angle >= 0.0 && r.angle <= TAU);
        }
    }

    #[test]
    fn tiny_rotation_falls_back() {
        let r = euler_to_axis_angle(Attitude::new(1e-5, 0.0, 0.0), AttitudeScaling::FULL);
        assert_eq!(r.axis, FALLBACK_AXIS);
        assert!((r.angle - 1e-5).abs() < 1e-7);
    }

    #[test]
    fn non_degenerate_axis_is_unit_length() {
        let samples = [
            Attitude::new(0.3, 0.1, 0.05),
            Attitude::new(-2.0, 3.0, 1.0),
            Attitude::new(10.0, -7.5, 42.0),
        ];
        for a in samples {
            let r = euler_to_axis_angle(a, AttitudeScaling::FULL);
            assert!((r.axis.length() - 1.0).abs() < 1e-9, "{a:?} -> {r:?}");
            assert!(r.angle >= 0.0 && r.angle <= TAU);
        }
    }

    #[test]
    fn damped_device_sample() {
        let a = Attitude::new(0.3, 0.1, 0.05);
        let scaling = AttitudeScaling::new(0.1, 1.0, 0.25);
        let r = euler_to_axis_angle(a, scaling);

        assert!(r.axis.is_finite());
        assert!((r.axis.length() - 1.0).abs() < 1e-9);
        assert!(r.angle > 0.0);
        assert!(r.angle < a.pitch.abs() + a.yaw.abs() + a.roll.abs());

        let again = euler_to_axis_angle(a, scaling);
        assert_eq!(r, again);
    }

    #[test]
    fn non_finite_input_propagates() {
        let r = euler_to_axis_angle(Attitude::new(f64::NAN, 0.0, 0.0), AttitudeScaling::FULL);
        assert!(r.angle.is_nan());
    }

    #[test]
    fn method_matches_free_function() {
        let a = Attitude::new(0.2, 0.3, 0.4);
        let scaling = AttitudeScaling::new(0.5, 0.5, 0.5);
        assert_eq!(a.to_axis_angle(scaling), euler_to_axis_angle(a, scaling));
    }
}
