use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::Error;

/// A 4x4 matrix of `f32`, stored in column-major order as WebGL and
/// OpenGL ES expect it for `uniformMatrix4fv`.
///
/// Element `i` lives at row `i % 4`, column `i / 4`. Composition follows the
/// column-vector convention: `a * b` applies `b` first, then `a`.
///
/// # Examples
///
/// ```rust
/// use glmat4::Mat4;
///
/// let projection = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0)?;
/// let model = Mat4::rotation_y(45.0) * Mat4::rotation_x(10.0);
///
/// let mvp = projection * model;
/// let uniform: &[f32; 16] = mvp.as_array();
/// # Ok::<(), glmat4::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    /// 1 on the main diagonal, 0 everywhere else.
    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4 {
        data: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from a column-major array.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    pub const fn new_identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from a column-major slice of exactly 16 elements.
    pub fn from_slice(data: &[f32]) -> Result<Self, Error> {
        <[f32; 16]>::try_from(data)
            .map(Self::new)
            .map_err(|_| Error::invalid_length(data.len()))
    }

    /// Returns the column-major elements, ready for uniform upload.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Returns the element at `row`, `col`.
    ///
    /// # Panics
    /// If `row` or `col` is greater than 3.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "row/col out of range: ({row}, {col})");
        self.data[col * 4 + row]
    }

    /// Bounds-checked element read. See [`Index`] for the panicking variant.
    pub fn get(&self, index: usize) -> Result<f32, Error> {
        self.data
            .get(index)
            .copied()
            .ok_or(Error::index_out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, Error> {
        self.data
            .get_mut(index)
            .ok_or(Error::index_out_of_range(index))
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<(), Error> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Overwrites all 16 elements with those of `other`.
    pub fn copy_from(&mut self, other: &Mat4) {
        self.data = other.data;
    }

    /// Returns `left * right`: the transform of `right` followed by that of
    /// `left`.
    pub fn multiply(left: &Mat4, right: &Mat4) -> Mat4 {
        let mut data = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                data[col * 4 + row] = (0..4)
                    .map(|k| left.data[k * 4 + row] * right.data[col * 4 + k])
                    .sum();
            }
        }

        Self { data }
    }

    /// Rotation about the x-axis by `angle` degrees.
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();

        let mut result = Self::IDENTITY;
        let data = &mut result.data;

        data[5] = cos;
        data[6] = sin;
        data[9] = -sin;
        data[10] = cos;

        result
    }

    /// Rotation about the y-axis by `angle` degrees.
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();

        let mut result = Self::IDENTITY;
        let data = &mut result.data;

        data[0] = cos;
        data[2] = -sin;
        data[8] = sin;
        data[10] = cos;

        result
    }

    /// Rotation about the z-axis by `angle` degrees.
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();

        let mut result = Self::IDENTITY;
        let data = &mut result.data;

        data[0] = cos;
        data[1] = sin;
        data[4] = -sin;
        data[5] = cos;

        result
    }

    /// Screen-space orthographic projection with the origin in the top-left
    /// corner and y growing downwards.
    pub fn orthographic_from_size(width: f32, height: f32) -> Result<Self, Error> {
        Self::orthographic(0.0, width, height, 0.0, -1.0, 1.0)
    }

    /// Orthographic projection mapping the box `[left, right] x [bottom, top]
    /// x [z_near, z_far]` onto the `[-1, 1]` clip cube.
    ///
    /// Uses a left-handed view space: z grows away from the viewer, so
    /// `z_near` maps to `-1` and `z_far` to `1`.
    ///
    /// # Errors
    /// [`Error::DegenerateProjection`] if any pair of opposing planes
    /// coincide.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, Error> {
        check_extent("x", left, right)?;
        check_extent("y", bottom, top)?;
        check_extent("z", z_near, z_far)?;

        let mut result = Self::IDENTITY;
        let data = &mut result.data;

        data[0] = 2.0 / (right - left);
        data[5] = 2.0 / (top - bottom);
        data[10] = 2.0 / (z_far - z_near);

        data[12] = -(right + left) / (right - left);
        data[13] = -(top + bottom) / (top - bottom);
        data[14] = -(z_far + z_near) / (z_far - z_near);

        Ok(result)
    }

    /// Perspective projection from a vertical field of view in degrees and a
    /// width/height aspect ratio. The camera looks down the negative z-axis.
    ///
    /// # Errors
    /// [`Error::DegenerateProjection`] if `aspect` is zero, the clip planes
    /// coincide, or `fov_y` is a multiple of 180 degrees.
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Result<Self, Error> {
        if fov_y.rem_euclid(180.0) == 0.0 {
            log::warn!("rejecting perspective projection: fov_y={fov_y}");
            return Err(Error::degenerate_fov(fov_y));
        }
        if aspect == 0.0 {
            log::warn!("rejecting perspective projection: aspect={aspect}");
            return Err(Error::degenerate_aspect(aspect));
        }
        check_extent("z", z_near, z_far)?;

        let f = 1.0 / (fov_y.to_radians() * 0.5).tan();

        let mut result = Self::IDENTITY;
        let data = &mut result.data;

        data[0] = f / aspect;
        data[5] = f;
        data[10] = -(z_far + z_near) / (z_far - z_near);
        data[11] = -1.0;
        data[14] = -2.0 * z_far * z_near / (z_far - z_near);
        data[15] = 0.0;

        Ok(result)
    }
}

fn check_extent(axis: &str, min: f32, max: f32) -> Result<(), Error> {
    if min == max {
        log::warn!("rejecting projection: empty {axis} extent ({min} == {max})");
        return Err(Error::degenerate_extent(axis, min, max));
    }

    Ok(())
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self::new(data)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = Error;

    fn try_from(data: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(&self, &rhs)
    }
}

impl<'a> Mul<&'a Mat4> for &'a Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: &'a Mat4) -> Mat4 {
        Mat4::multiply(self, rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = Mat4::multiply(self, &rhs);
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Mat4 {
    type Epsilon = <f32 as approx::AbsDiffEq>::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| <f32 as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Mat4 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.data.iter().zip(other.data.iter()).all(|(a, b)| {
            <f32 as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative)
        })
    }
}
