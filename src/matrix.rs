//! Matrices.

use crate::{
    quaternion::UnitQuaternion,
    vector::{Double3, Double4},
};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A double-precision 4x4 matrix.
///
/// The matrix is stored column-major and acts on column vectors, so an affine
/// transform keeps its translation in the fourth column.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    inner: glam::DMat4,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(glam::DMat4::IDENTITY)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::DMat4::ZERO)
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub fn from_columns(
        column_1: Double4,
        column_2: Double4,
        column_3: Double4,
        column_4: Double4,
    ) -> Self {
        Self::wrap(glam::DMat4::from_cols(
            column_1.into(),
            column_2.into(),
            column_3.into(),
            column_4.into(),
        ))
    }

    /// Creates a matrix that translates by the given vector.
    #[inline]
    pub fn from_translation(translation: &Double3) -> Self {
        Self::wrap(glam::DMat4::from_translation((*translation).into()))
    }

    /// Creates a matrix that applies the given rotation.
    #[inline]
    pub fn from_rotation(rotation: &UnitQuaternion) -> Self {
        Self::wrap(glam::DMat4::from_quat(rotation.unwrap()))
    }

    /// Creates a matrix that scales each axis by the corresponding component
    /// of the given vector.
    #[inline]
    pub fn from_nonuniform_scaling(scaling: &Double3) -> Self {
        Self::wrap(glam::DMat4::from_scale((*scaling).into()))
    }

    /// Creates a matrix that scales, then rotates, then translates.
    #[inline]
    pub fn from_scaling_rotation_translation(
        scaling: &Double3,
        rotation: &UnitQuaternion,
        translation: &Double3,
    ) -> Self {
        Self::wrap(glam::DMat4::from_scale_rotation_translation(
            (*scaling).into(),
            rotation.unwrap(),
            (*translation).into(),
        ))
    }

    /// Creates a right-handed perspective projection matrix with a depth range
    /// of `[0, 1]`.
    #[inline]
    pub fn perspective(vertical_field_of_view: f64, aspect_ratio: f64, near: f64, far: f64) -> Self {
        Self::wrap(glam::DMat4::perspective_rh(
            vertical_field_of_view,
            aspect_ratio,
            near,
            far,
        ))
    }

    /// The column with the given index.
    ///
    /// # Panics
    /// If `j` is 4 or more.
    #[inline]
    pub fn column(&self, j: usize) -> Double4 {
        self.inner.col(j).into()
    }

    /// The element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is 4 or more.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f64 {
        self.inner.col(j)[i]
    }

    /// A mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is 4 or more.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        &mut self.inner.col_mut(j)[i]
    }

    #[inline]
    pub fn transposed(&self) -> Self {
        Self::wrap(self.inner.transpose())
    }

    /// Computes the inverse. The result is non-finite if the matrix is
    /// singular.
    #[inline]
    pub fn inverted(&self) -> Self {
        Self::wrap(self.inner.inverse())
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.inner.determinant()
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::DMat4) -> Self {
        Self { inner }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 4]; 4]> for Matrix4 {
    /// Creates a matrix from an array of columns.
    #[inline]
    fn from(columns: [[f64; 4]; 4]) -> Self {
        Self::wrap(glam::DMat4::from_cols_array_2d(&columns))
    }
}

impl From<Matrix4> for [[f64; 4]; 4] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.inner.to_cols_array_2d()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner.mul(b.inner))
});

impl_binop!(Mul, mul, Matrix4, Double4, Double4, |a, b| {
    a.inner.mul_vec4((*b).into()).into()
});

impl_approx_eq!(Matrix4, |m| m.inner.to_cols_array());
