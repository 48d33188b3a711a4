//! Column-major 4x4 matrices for WebGL and OpenGL ES uniform upload.
//!
//! [`Mat4`] stores its 16 elements in the order `uniformMatrix4fv` expects,
//! composes with `*` (right operand applied first) and provides factories for
//! axis rotations and orthographic/perspective projections.

mod error;
mod mat4;
mod projection;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use crate::{error::Error, mat4::Mat4, projection::Projection};

#[cfg(test)]
mod tests {
    use crate::{Mat4, Projection};

    #[test]
    fn test_model_view_projection() {
        let projection = Projection::Perspective { fov_y: 90.0, aspect: 1.0, near: 1.0, far: 100.0 }
            .to_matrix()
            .unwrap();
        let model = Mat4::rotation_y(90.0);

        // rotating (1, 0, 0) about y lands on (0, 0, -1), the near plane center
        let mvp = projection * model;
        let clip: Vec<f32> = (0..4).map(|row| mvp.at(row, 0) + mvp.at(row, 3)).collect();
        assert!((clip[2] / clip[3] + 1.0).abs() < 1e-5);
        assert!(clip[0].abs() < 1e-5);
    }
}
