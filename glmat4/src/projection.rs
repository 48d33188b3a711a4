use crate::{error::Error, mat4::Mat4};

/// Camera projection described as data.
///
/// Suitable for storing in scene or application settings; with the `serde`
/// feature the variants are tagged by a `kind` field.
///
/// # Examples
///
/// ```rust
/// use glmat4::Projection;
///
/// let camera = Projection::Perspective { fov_y: 60.0, aspect: 1.0, near: 0.1, far: 100.0 };
///
/// // viewport resized to 1280x720
/// let projection = camera.with_aspect(1280.0 / 720.0).to_matrix()?;
/// # Ok::<(), glmat4::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Projection {
    /// See [`Mat4::orthographic`].
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
    /// See [`Mat4::perspective`]. `fov_y` is in degrees.
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Pixel-space orthographic projection, see [`Mat4::orthographic_from_size`].
    Screen { width: f32, height: f32 },
}

impl Projection {
    /// Builds the projection matrix for this configuration.
    pub fn to_matrix(&self) -> Result<Mat4, Error> {
        log::debug!("building projection matrix: {self:?}");

        match *self {
            Projection::Orthographic { left, right, bottom, top, near, far } => {
                Mat4::orthographic(left, right, bottom, top, near, far)
            }
            Projection::Perspective { fov_y, aspect, near, far } => {
                Mat4::perspective(fov_y, aspect, near, far)
            }
            Projection::Screen { width, height } => Mat4::orthographic_from_size(width, height),
        }
    }

    /// Replaces the aspect ratio of a perspective projection. Other kinds are
    /// returned unchanged.
    pub fn with_aspect(self, aspect: f32) -> Self {
        match self {
            Projection::Perspective { fov_y, near, far, .. } => {
                Projection::Perspective { fov_y, aspect, near, far }
            }
            other => other,
        }
    }
}

impl TryFrom<Projection> for Mat4 {
    type Error = Error;

    fn try_from(projection: Projection) -> Result<Self, Self::Error> {
        projection.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_matrix_matches_factories() {
        let ortho = Projection::Orthographic {
            left: -2.0,
            right: 2.0,
            bottom: -1.0,
            top: 1.0,
            near: 0.5,
            far: 20.0,
        };
        assert_eq!(
            ortho.to_matrix(),
            Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 20.0)
        );

        let perspective = Projection::Perspective { fov_y: 45.0, aspect: 1.5, near: 0.1, far: 50.0 };
        assert_eq!(perspective.to_matrix(), Mat4::perspective(45.0, 1.5, 0.1, 50.0));

        let screen = Projection::Screen { width: 800.0, height: 600.0 };
        assert_eq!(screen.to_matrix(), Mat4::orthographic_from_size(800.0, 600.0));
        assert_eq!(Mat4::try_from(screen), screen.to_matrix());
    }

    #[test]
    fn test_degenerate_config_is_rejected() {
        let perspective = Projection::Perspective { fov_y: 60.0, aspect: 0.0, near: 0.1, far: 50.0 };
        assert!(matches!(
            perspective.to_matrix(),
            Err(Error::DegenerateProjection(_))
        ));

        let screen = Projection::Screen { width: 800.0, height: 0.0 };
        assert!(screen.to_matrix().is_err());
    }

    #[test]
    fn test_with_aspect() {
        let perspective = Projection::Perspective { fov_y: 60.0, aspect: 1.0, near: 0.1, far: 50.0 };
        assert_eq!(
            perspective.with_aspect(2.0),
            Projection::Perspective { fov_y: 60.0, aspect: 2.0, near: 0.1, far: 50.0 }
        );

        let screen = Projection::Screen { width: 800.0, height: 600.0 };
        assert_eq!(screen.with_aspect(2.0), screen);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_config() {
        let json = r#"{ "kind": "perspective", "fov_y": 90.0, "aspect": 1.0, "near": 1.0, "far": 100.0 }"#;
        let projection: Projection = serde_json::from_str(json).unwrap();

        assert_eq!(
            projection,
            Projection::Perspective { fov_y: 90.0, aspect: 1.0, near: 1.0, far: 100.0 }
        );

        let json = r#"{ "kind": "screen", "width": 320, "height": 200 }"#;
        let projection: Projection = serde_json::from_str(json).unwrap();
        assert_eq!(projection, Projection::Screen { width: 320.0, height: 200.0 });

        let json = r#"{ "kind": "fisheye", "fov_y": 180.0 }"#;
        assert!(serde_json::from_str::<Projection>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_mat4_serializes_as_flat_array() {
        let json = serde_json::to_string(&Mat4::IDENTITY).unwrap();
        assert_eq!(
            json,
            "[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]"
        );

        let mat: Mat4 = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, Mat4::IDENTITY);
    }
}
