//! Vectors.

use crate::{
    color::Color,
    matrix::Matrix4,
    num::{self, Float},
    quaternion::UnitQuaternion,
};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};

/// A 2-dimensional double-precision vector.
///
/// This type only supports a few basic operations, as it is primarily intended
/// for conversion to and from [`Double3`].
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 2]", from = "[f64; 2]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Double2 {
    x: f64,
    y: f64,
}

/// A 3-dimensional double-precision vector.
///
/// The three components are stored contiguously, so the vector has the same
/// layout as `[f64; 3]` and can be viewed as one through [`Self::as_array`].
/// No invariant is enforced on the components: they may be NaN or infinite,
/// and operations on degenerate input follow IEEE-754 semantics rather than
/// reporting errors.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Double3 {
    raw: [f64; 3],
}

/// A 4-dimensional double-precision vector.
///
/// This type only supports a few basic operations, as it is primarily intended
/// for homogeneous coordinates and matrix columns.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 4]", from = "[f64; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Double4 {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Double2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f64) -> Double3 {
        Double3::new(self.x, self.y, z)
    }
}

impl From<[f64; 2]> for Double2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Double2> for [f64; 2] {
    #[inline]
    fn from(vector: Double2) -> Self {
        [vector.x, vector.y]
    }
}

impl From<glam::DVec2> for Double2 {
    #[inline]
    fn from(vector: glam::DVec2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<Double2> for glam::DVec2 {
    #[inline]
    fn from(vector: Double2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl_binop!(Add, add, Double2, Double2, Double2, |a, b| {
    Double2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Double2, Double2, Double2, |a, b| {
    Double2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, Double2, f64, Double2, |a, b| {
    Double2::new(a.x * b, a.y * b)
});

impl_approx_eq!(Double2, |v| [v.x, v.y]);

impl Double3 {
    /// Vector with all components equal to zero.
    pub const ZERO: Self = Self::same(0.0);
    /// Vector with all components equal to one.
    pub const ONE: Self = Self::same(1.0);
    /// Vector with all components equal to one half.
    pub const HALF: Self = Self::same(0.5);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0);
    /// Vector with all components equal to the most negative finite `f64`.
    pub const MINIMUM: Self = Self::same(f64::MIN);
    /// Vector with all components equal to the largest finite `f64`.
    pub const MAXIMUM: Self = Self::same(f64::MAX);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { raw: [x, y, z] }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a vector from the given 2D vector and z-component.
    #[inline]
    pub const fn from_double2(xy: Double2, z: f64) -> Self {
        xy.extended(z)
    }

    /// Creates a vector from the given single-precision 2D vector and
    /// z-component.
    #[inline]
    pub fn from_vec2(xy: glam::Vec2, z: f64) -> Self {
        Self::new(f64::from(xy.x), f64::from(xy.y), z)
    }

    /// Creates a vector from the given integer 2D vector and z-component.
    #[inline]
    pub fn from_ivec2(xy: glam::IVec2, z: f64) -> Self {
        Self::new(f64::from(xy.x), f64::from(xy.y), z)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.raw[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.raw[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.raw[2]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.raw[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.raw[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.raw[2]
    }

    /// The components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.raw
    }

    /// The components as a mutable array.
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [f64; 3] {
        &mut self.raw
    }

    #[inline]
    pub const fn as_slice(&self) -> &[f64] {
        &self.raw
    }

    /// Views a slice of vectors as a flat slice of components.
    #[inline]
    pub fn flatten_slice(vectors: &[Self]) -> &[f64] {
        bytemuck::cast_slice(vectors)
    }

    /// Converts the vector to the 2D vector of its x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Double2 {
        Double2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f64) -> Double4 {
        Double4::new(self.x(), self.y(), self.z(), w)
    }

    /// Converts the vector to single precision.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> glam::Vec3 {
        glam::Vec3::new(self.x() as f32, self.y() as f32, self.z() as f32)
    }

    /// Whether the vector has unit length, within [`num::ZERO_TOLERANCE`].
    #[inline]
    pub fn is_normalized(&self) -> bool {
        num::is_one(self.norm_squared())
    }

    /// Whether all components are within [`num::ZERO_TOLERANCE`] of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw.iter().all(|&c| num::is_zero(c))
    }

    /// Whether any component is within [`num::ZERO_TOLERANCE`] of zero.
    #[inline]
    pub fn is_any_zero(&self) -> bool {
        self.raw.iter().any(|&c| num::is_zero(c))
    }

    /// Whether all components are within [`num::ZERO_TOLERANCE`] of one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.raw.iter().all(|&c| num::is_one(c))
    }

    /// Whether any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.raw.iter().any(|c| c.is_nan())
    }

    /// Whether any component is positive or negative infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.raw.iter().any(|c| c.is_infinite())
    }

    /// Whether any component is NaN or infinite.
    #[inline]
    pub fn is_nan_or_infinity(&self) -> bool {
        self.is_nan() || self.is_infinity()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Computes the reciprocal of the norm of the vector.
    #[inline]
    pub fn inverse_norm(&self) -> f64 {
        self.norm().recip()
    }

    /// Normalizes the vector in place. If the norm is below
    /// [`num::ZERO_TOLERANCE`], the vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm >= num::ZERO_TOLERANCE {
            *self *= norm.recip();
        }
    }

    /// Normalizes the vector in place without checking for zero length. A
    /// zero vector becomes NaN.
    #[inline]
    pub fn normalize_unchecked(&mut self) {
        let inverse_norm = self.inverse_norm();
        *self *= inverse_norm;
    }

    /// Computes the normalized version of the vector. If the norm is below
    /// [`num::ZERO_TOLERANCE`], the vector is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Computes the normalized version of the vector without checking for
    /// zero length.
    #[inline]
    pub fn normalized_unchecked(&self) -> Self {
        self * self.inverse_norm()
    }

    /// Writes the normalized version of `input` into `result`, following
    /// [`Self::normalized`].
    #[inline]
    pub fn normalize_into(input: &Self, result: &mut Self) {
        *result = input.normalized();
    }

    /// Negates all components in place.
    #[inline]
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Replaces each component with its absolute value.
    #[inline]
    pub fn make_absolute(&mut self) {
        *self = self.component_abs();
    }

    /// Interprets the components as Euler angles in degrees and wraps each of
    /// them into `[-180, 180]`.
    #[inline]
    pub fn unwind_euler(&mut self) {
        *self = self.mapped(num::unwind_degrees);
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.to_glam().dot(other.to_glam())
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        self.to_glam().cross(other.to_glam()).into()
    }

    #[inline]
    pub fn cross_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a.cross(b);
    }

    #[inline]
    pub fn add_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a + b;
    }

    #[inline]
    pub fn sub_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a - b;
    }

    /// Writes the component-wise product of `a` and `b` into `result`.
    #[inline]
    pub fn mul_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a * b;
    }

    /// Writes the component-wise quotient of `a` and `b` into `result`.
    #[inline]
    pub fn div_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a / b;
    }

    #[inline]
    pub fn mul_scalar_into(a: &Self, b: f64, result: &mut Self) {
        *result = a * b;
    }

    #[inline]
    pub fn div_scalar_into(a: &Self, b: f64, result: &mut Self) {
        *result = a / b;
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.to_glam().abs().into()
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector. A NaN in `other`
    /// is carried over to the result.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| if a < b { a } else { b })
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector. A NaN in `other`
    /// is carried over to the result.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| if a > b { a } else { b })
    }

    #[inline]
    pub fn min_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a.component_min(b);
    }

    #[inline]
    pub fn max_into(a: &Self, b: &Self, result: &mut Self) {
        *result = a.component_max(b);
    }

    /// Returns a vector with each component restricted to the range given by
    /// the corresponding components of `min` and `max`. Where `min` exceeds
    /// `max`, the component is set to `min`.
    #[inline]
    pub fn clamp(value: &Self, min: &Self, max: &Self) -> Self {
        let clamp = |v: f64, lo: f64, hi: f64| {
            let v = if v > hi { hi } else { v };
            if v < lo { lo } else { v }
        };
        Self::new(
            clamp(value.x(), min.x(), max.x()),
            clamp(value.y(), min.y(), max.y()),
            clamp(value.z(), min.z(), max.z()),
        )
    }

    #[inline]
    pub fn clamp_into(value: &Self, min: &Self, max: &Self, result: &mut Self) {
        *result = Self::clamp(value, min, max);
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self { raw: self.raw.map(f) }
    }

    /// Rounds each component to the nearest integer, with halfway cases
    /// rounded away from zero.
    #[inline]
    pub fn round(&self) -> Self {
        self.mapped(f64::round)
    }

    #[inline]
    pub fn ceil(&self) -> Self {
        self.to_glam().ceil().into()
    }

    #[inline]
    pub fn floor(&self) -> Self {
        self.to_glam().floor().into()
    }

    /// Computes `self - self.floor()`, which lies in `[0, 1)` for finite
    /// components, also when they are negative.
    #[inline]
    pub fn fract(&self) -> Self {
        self - self.floor()
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f64 {
        let min = |a: f64, b: f64| if a < b { a } else { b };
        min(min(self.x(), self.y()), self.z())
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f64 {
        let max = |a: f64, b: f64| if a > b { a } else { b };
        max(max(self.x(), self.y()), self.z())
    }

    /// Computes the sum of the three vector components.
    #[inline]
    pub fn component_sum(&self) -> f64 {
        self.x() + self.y() + self.z()
    }

    /// Computes the arithmetic mean of the three vector components. The sum is
    /// scaled by the exact double-precision `1/3` rather than a rounded
    /// single-precision constant.
    #[inline]
    pub fn component_average(&self) -> f64 {
        self.component_sum() * <f64 as Float>::ONE_THIRD
    }

    #[inline]
    pub fn distance(a: &Self, b: &Self) -> f64 {
        (a - b).norm()
    }

    #[inline]
    pub fn distance_squared(a: &Self, b: &Self) -> f64 {
        (a - b).norm_squared()
    }

    /// Whether every component of `a` is within [`num::ZERO_TOLERANCE`] of the
    /// corresponding component of `b`.
    #[inline]
    pub fn near_equal(a: &Self, b: &Self) -> bool {
        Self::near_equal_eps(a, b, num::ZERO_TOLERANCE)
    }

    /// Whether every component of `a` differs from the corresponding
    /// component of `b` by no more than `epsilon`.
    #[inline]
    pub fn near_equal_eps(a: &Self, b: &Self, epsilon: f64) -> bool {
        a.raw
            .iter()
            .zip(&b.raw)
            .all(|(&a, &b)| num::near_equal_eps(a, b, epsilon))
    }

    /// Whether every component is strictly smaller than the corresponding
    /// component of `other`.
    ///
    /// Together with [`Self::all_le`], [`Self::all_gt`] and [`Self::all_ge`]
    /// this is a partial order: when some components are smaller and others
    /// larger, none of the four relations hold.
    #[inline]
    pub fn all_lt(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a < b)
    }

    /// Whether every component is smaller than or equal to the corresponding
    /// component of `other`.
    #[inline]
    pub fn all_le(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a <= b)
    }

    /// Whether every component is strictly larger than the corresponding
    /// component of `other`.
    #[inline]
    pub fn all_gt(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a > b)
    }

    /// Whether every component is larger than or equal to the corresponding
    /// component of `other`.
    #[inline]
    pub fn all_ge(&self, other: &Self) -> bool {
        self.all_pairs(other, |a, b| a >= b)
    }

    /// Linearly interpolates from `start` to `end`. The weight `amount` is not
    /// clamped, so values outside `[0, 1]` extrapolate. An `amount` of
    /// exactly zero or one reproduces `start` or `end` exactly.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f64) -> Self {
        Self::new(
            num::lerp(start.x(), end.x(), amount),
            num::lerp(start.y(), end.y(), amount),
            num::lerp(start.z(), end.z(), amount),
        )
    }

    #[inline]
    pub fn lerp_into(start: &Self, end: &Self, amount: f64, result: &mut Self) {
        *result = Self::lerp(start, end, amount);
    }

    /// Interpolates from `start` to `end` after passing `amount` through the
    /// smoothing curve [`num::smooth_step`].
    #[inline]
    pub fn smooth_step(start: &Self, end: &Self, amount: f64) -> Self {
        Self::lerp(start, end, num::smooth_step(amount))
    }

    #[inline]
    pub fn smooth_step_into(start: &Self, end: &Self, amount: f64, result: &mut Self) {
        *result = Self::smooth_step(start, end, amount);
    }

    /// Evaluates the cubic Hermite spline starting at `value_1` with tangent
    /// `tangent_1` and ending at `value_2` with tangent `tangent_2`, at the
    /// parameter `amount`.
    #[inline]
    pub fn hermite(
        value_1: &Self,
        tangent_1: &Self,
        value_2: &Self,
        tangent_2: &Self,
        amount: f64,
    ) -> Self {
        let squared = amount * amount;
        let cubed = amount * squared;
        let part_1 = 2.0 * cubed - 3.0 * squared + 1.0;
        let part_2 = -2.0 * cubed + 3.0 * squared;
        let part_3 = cubed - 2.0 * squared + amount;
        let part_4 = cubed - squared;
        value_1 * part_1 + value_2 * part_2 + tangent_1 * part_3 + tangent_2 * part_4
    }

    #[inline]
    pub fn hermite_into(
        value_1: &Self,
        tangent_1: &Self,
        value_2: &Self,
        tangent_2: &Self,
        amount: f64,
        result: &mut Self,
    ) {
        *result = Self::hermite(value_1, tangent_1, value_2, tangent_2, amount);
    }

    /// Reflects `vector` off a surface with the given normal, which should be
    /// of unit length.
    #[inline]
    pub fn reflect(vector: &Self, normal: &Self) -> Self {
        vector - normal * (2.0 * vector.dot(normal))
    }

    #[inline]
    pub fn reflect_into(vector: &Self, normal: &Self, result: &mut Self) {
        *result = Self::reflect(vector, normal);
    }

    /// Rotates `vector` by the given rotation.
    pub fn transform_by_rotation(vector: &Self, rotation: &UnitQuaternion) -> Self {
        let x = rotation.x() + rotation.x();
        let y = rotation.y() + rotation.y();
        let z = rotation.z() + rotation.z();
        let wx = rotation.w() * x;
        let wy = rotation.w() * y;
        let wz = rotation.w() * z;
        let xx = rotation.x() * x;
        let xy = rotation.x() * y;
        let xz = rotation.x() * z;
        let yy = rotation.y() * y;
        let yz = rotation.y() * z;
        let zz = rotation.z() * z;

        Self::new(
            vector.x() * (1.0 - yy - zz) + vector.y() * (xy - wz) + vector.z() * (xz + wy),
            vector.x() * (xy + wz) + vector.y() * (1.0 - xx - zz) + vector.z() * (yz - wx),
            vector.x() * (xz - wy) + vector.y() * (yz + wx) + vector.z() * (1.0 - xx - yy),
        )
    }

    #[inline]
    pub fn transform_by_rotation_into(
        vector: &Self,
        rotation: &UnitQuaternion,
        result: &mut Self,
    ) {
        *result = Self::transform_by_rotation(vector, rotation);
    }

    /// Transforms `vector` as the point `(x, y, z, 1)` by the given matrix and
    /// returns the full homogeneous result.
    #[inline]
    pub fn transform_extended(vector: &Self, transform: &Matrix4) -> Double4 {
        transform * vector.extended(1.0)
    }

    #[inline]
    pub fn transform_extended_into(vector: &Self, transform: &Matrix4, result: &mut Double4) {
        *result = Self::transform_extended(vector, transform);
    }

    /// Transforms `vector` as the point `(x, y, z, 1)` by the given matrix,
    /// including translation, and discards the w-component of the result
    /// without dividing by it.
    #[inline]
    pub fn transform(vector: &Self, transform: &Matrix4) -> Self {
        Self::transform_extended(vector, transform).xyz()
    }

    #[inline]
    pub fn transform_into(vector: &Self, transform: &Matrix4, result: &mut Self) {
        *result = Self::transform(vector, transform);
    }

    /// Transforms each vector in `vectors` with [`Self::transform`] and writes
    /// the results to the corresponding entries of `results`.
    ///
    /// # Panics
    /// If the two slices have different lengths.
    pub fn transform_all(vectors: &[Self], transform: &Matrix4, results: &mut [Self]) {
        assert_eq!(
            vectors.len(),
            results.len(),
            "mismatched number of vectors and results"
        );
        for (vector, result) in vectors.iter().zip(results) {
            Self::transform_into(vector, transform, result);
        }
    }

    /// Transforms the coordinate `(x, y, z, 1)` by the given matrix, including
    /// translation, and divides the result by its w-component. This applies
    /// the perspective division of projective matrices.
    #[inline]
    pub fn transform_coordinate(coordinate: &Self, transform: &Matrix4) -> Self {
        let transformed = Self::transform_extended(coordinate, transform);
        transformed.xyz() / transformed.w()
    }

    #[inline]
    pub fn transform_coordinate_into(coordinate: &Self, transform: &Matrix4, result: &mut Self) {
        *result = Self::transform_coordinate(coordinate, transform);
    }

    /// Transforms the direction `normal` by the upper-left 3x3 part of the
    /// given matrix, ignoring translation.
    #[inline]
    pub fn transform_normal(normal: &Self, transform: &Matrix4) -> Self {
        (transform * normal.extended(0.0)).xyz()
    }

    #[inline]
    pub fn transform_normal_into(normal: &Self, transform: &Matrix4, result: &mut Self) {
        *result = Self::transform_normal(normal, transform);
    }

    /// Computes the area of the triangle with the given vertices.
    #[inline]
    pub fn triangle_area(v0: &Self, v1: &Self, v2: &Self) -> f64 {
        (v1 - v0).cross(&(v2 - v0)).norm() * 0.5
    }

    /// Computes the smallest angle in radians between the two vectors.
    pub fn angle(from: &Self, to: &Self) -> f64 {
        let dot = from.normalized().dot(&to.normalized()).clamp(-1.0, 1.0);
        if dot.abs() > 1.0 - num::ZERO_TOLERANCE {
            if dot > 0.0 { 0.0 } else { <f64 as Float>::PI }
        } else {
            dot.acos()
        }
    }

    #[inline]
    fn all_pairs(&self, other: &Self, f: impl Fn(f64, f64) -> bool) -> bool {
        self.raw.iter().zip(&other.raw).all(|(&a, &b)| f(a, b))
    }

    #[inline]
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }

    #[inline]
    const fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::from_array(self.raw)
    }
}

impl From<[f64; 3]> for Double3 {
    #[inline]
    fn from(raw: [f64; 3]) -> Self {
        Self { raw }
    }
}

impl From<&[f64; 3]> for Double3 {
    #[inline]
    fn from(raw: &[f64; 3]) -> Self {
        Self { raw: *raw }
    }
}

impl From<Double3> for [f64; 3] {
    #[inline]
    fn from(vector: Double3) -> Self {
        vector.raw
    }
}

impl From<Double2> for Double3 {
    #[inline]
    fn from(vector: Double2) -> Self {
        vector.extended(0.0)
    }
}

impl From<Double4> for Double3 {
    #[inline]
    fn from(vector: Double4) -> Self {
        vector.xyz()
    }
}

impl From<glam::DVec3> for Double3 {
    #[inline]
    fn from(vector: glam::DVec3) -> Self {
        Self::from(vector.to_array())
    }
}

impl From<Double3> for glam::DVec3 {
    #[inline]
    fn from(vector: Double3) -> Self {
        vector.to_glam()
    }
}

impl From<glam::Vec2> for Double3 {
    #[inline]
    fn from(vector: glam::Vec2) -> Self {
        Self::from_vec2(vector, 0.0)
    }
}

impl From<glam::Vec3> for Double3 {
    #[inline]
    fn from(vector: glam::Vec3) -> Self {
        Self::from(vector.as_dvec3())
    }
}

impl From<glam::Vec3A> for Double3 {
    #[inline]
    fn from(vector: glam::Vec3A) -> Self {
        Self::from(vector.as_dvec3())
    }
}

impl From<glam::Vec4> for Double3 {
    #[inline]
    fn from(vector: glam::Vec4) -> Self {
        Self::from(vector.truncate())
    }
}

impl From<glam::IVec3> for Double3 {
    #[inline]
    fn from(vector: glam::IVec3) -> Self {
        Self::from(vector.as_dvec3())
    }
}

impl From<glam::IVec4> for Double3 {
    #[inline]
    fn from(vector: glam::IVec4) -> Self {
        Self::from(vector.truncate())
    }
}

impl From<Color> for Double3 {
    /// Uses the red, green and blue channels as the x-, y- and z-components.
    #[inline]
    fn from(color: Color) -> Self {
        Self::new(
            f64::from(color.r()),
            f64::from(color.g()),
            f64::from(color.b()),
        )
    }
}

impl_binop!(Add, add, Double3, Double3, Double3, |a, b| {
    Double3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!(Sub, sub, Double3, Double3, Double3, |a, b| {
    Double3::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
});

impl_binop!(Mul, mul, Double3, Double3, Double3, |a, b| {
    Double3::new(a.x() * b.x(), a.y() * b.y(), a.z() * b.z())
});

impl_binop!(Div, div, Double3, Double3, Double3, |a, b| {
    Double3::new(a.x() / b.x(), a.y() / b.y(), a.z() / b.z())
});

impl_binop!(Add, add, Double3, f64, Double3, |a, b| {
    Double3::new(a.x() + b, a.y() + b, a.z() + b)
});

impl_binop!(Sub, sub, Double3, f64, Double3, |a, b| {
    Double3::new(a.x() - b, a.y() - b, a.z() - b)
});

impl_binop!(Mul, mul, Double3, f64, Double3, |a, b| {
    Double3::new(a.x() * b, a.y() * b, a.z() * b)
});

impl_binop!(Div, div, Double3, f64, Double3, |a, b| {
    Double3::new(a.x() / b, a.y() / b, a.z() / b)
});

impl_binop!(Add, add, f64, Double3, Double3, |a, b| { b + a });

impl_binop!(Sub, sub, f64, Double3, Double3, |a, b| {
    Double3::same(*a) - b
});

impl_binop!(Mul, mul, f64, Double3, Double3, |a, b| { b * a });

impl_binop!(Div, div, f64, Double3, Double3, |a, b| {
    Double3::same(*a) / b
});

impl_binop!(BitOr, bitor, Double3, Double3, f64, |a, b| { a.dot(b) });

impl_binop!(BitXor, bitxor, Double3, Double3, Double3, |a, b| {
    a.cross(b)
});

impl_binop_assign!(AddAssign, add_assign, Double3, Double3, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Double3, Double3, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Double3, Double3, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, Double3, Double3, |a, b| {
    *a = *a / b;
});

impl_binop_assign!(AddAssign, add_assign, Double3, f64, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Double3, f64, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Double3, f64, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, Double3, f64, |a, b| {
    *a = *a / b;
});

impl_unary_op!(Neg, neg, Double3, Double3, |val| {
    Double3::new(-val.x(), -val.y(), -val.z())
});

impl Index<usize> for Double3 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.raw[index]
    }
}

impl IndexMut<usize> for Double3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.raw[index]
    }
}

impl_approx_eq!(Double3, |v| v.raw);

impl fmt::Debug for Double3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Double3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Display for Double3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{} Z:{}", self.x(), self.y(), self.z())
    }
}

impl Double4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// The 3D vector containing the x-, y-, and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Double3 {
        Double3::new(self.x, self.y, self.z)
    }
}

impl From<[f64; 4]> for Double4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Double4> for [f64; 4] {
    #[inline]
    fn from(vector: Double4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl From<glam::DVec4> for Double4 {
    #[inline]
    fn from(vector: glam::DVec4) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl From<Double4> for glam::DVec4 {
    #[inline]
    fn from(vector: Double4) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl_binop!(Add, add, Double4, Double4, Double4, |a, b| {
    Double4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Double4, Double4, Double4, |a, b| {
    Double4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Double4, f64, Double4, |a, b| {
    Double4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_approx_eq!(Double4, |v| [v.x, v.y, v.z, v.w]);
