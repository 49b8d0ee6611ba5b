//! Quaternions.

use crate::vector::Double3;
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A double-precision quaternion of unit length, representing a rotation.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitQuaternion {
    inner: glam::DQuat,
}

impl UnitQuaternion {
    /// The identity rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(glam::DQuat::IDENTITY)
    }

    /// Creates a quaternion with the given components. The quaternion is
    /// assumed to be normalized.
    #[inline]
    pub const fn from_xyzw_unchecked(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::wrap(glam::DQuat::from_xyzw(x, y, z, w))
    }

    /// Creates a quaternion by normalizing the given components.
    #[inline]
    pub fn normalized_from_xyzw(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::wrap(glam::DQuat::from_xyzw(x, y, z, w).normalize())
    }

    /// Creates the rotation of `angle` radians about the given axis. The axis
    /// is normalized first.
    #[inline]
    pub fn from_axis_angle(axis: &Double3, angle: f64) -> Self {
        Self::wrap(glam::DQuat::from_axis_angle(
            glam::DVec3::from(axis.normalized()),
            angle,
        ))
    }

    /// Creates the rotation given by the roll (about x), pitch (about y) and
    /// yaw (about z) angles in radians, applied in that order.
    #[inline]
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::wrap(glam::DQuat::from_euler(glam::EulerRot::ZYX, yaw, pitch, roll))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.inner.w
    }

    /// The inverse rotation.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::wrap(self.inner.conjugate())
    }

    /// Rotates the given vector.
    #[inline]
    pub fn rotate_vector(&self, vector: &Double3) -> Double3 {
        Double3::transform_by_rotation(vector, self)
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::DQuat) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::DQuat {
        self.inner
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, UnitQuaternion, UnitQuaternion, UnitQuaternion, |a, b| {
    UnitQuaternion::wrap(a.inner.mul(b.inner))
});

impl_approx_eq!(UnitQuaternion, |q| [q.x(), q.y(), q.z(), q.w()]);
