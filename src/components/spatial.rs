use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Pose of the craft in scene space.
///
/// Orientation is accumulated from incremental rotations about the global
/// axes; the look direction is the body x-axis expressed in the scene frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in scene space [scene units]
    pub position: Vector3<f64>,

    /// Attitude quaternion (rotation from body to scene frame)
    pub attitude: UnitQuaternion<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl SpatialComponent {
    pub fn new(position: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self { position, attitude }
    }

    /// Create a spatial component at a specific position with identity attitude
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Unit vector the craft nose points along.
    pub fn look_direction(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    pub fn translate(&mut self, offset: Vector3<f64>) {
        self.position += offset;
    }

    /// Rotate about a scene-fixed axis (pre-multiplied, so the axis does not
    /// follow the body).
    pub fn rotate_about_global_axis(&mut self, axis: Unit<Vector3<f64>>, angle: f64) {
        if angle == 0.0 {
            return;
        }
        self.attitude = UnitQuaternion::from_axis_angle(&axis, angle) * self.attitude;
    }

    pub fn rotate_about_global_x(&mut self, angle: f64) {
        self.rotate_about_global_axis(Vector3::x_axis(), angle);
    }

    pub fn rotate_about_global_y(&mut self, angle: f64) {
        self.rotate_about_global_axis(Vector3::y_axis(), angle);
    }

    pub fn rotate_about_global_z(&mut self, angle: f64) {
        self.rotate_about_global_axis(Vector3::z_axis(), angle);
    }

    pub fn rotate_to_identity(&mut self) {
        self.attitude = UnitQuaternion::identity();
    }

    pub fn distance_to(&self, point: &Vector3<f64>) -> f64 {
        (self.position - point).norm()
    }
}
