/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Checked element access outside of `0..16`.
    #[error("Index out of range: {index} (expected 0..16)")]
    IndexOutOfRange { index: usize },

    /// Projection parameters that would divide by zero or hit a trig pole.
    #[error("Degenerate projection: {0}")]
    DegenerateProjection(String),

    /// Source buffer does not hold exactly 16 elements.
    #[error("Invalid matrix length: {0} (expected 16)")]
    InvalidLength(usize),
}

impl Error {
    pub fn index_out_of_range(index: usize) -> Self {
        Self::IndexOutOfRange { index }
    }

    pub fn invalid_length(len: usize) -> Self {
        Self::InvalidLength(len)
    }

    // Projection errors
    pub fn degenerate_extent(axis: &str, min: f32, max: f32) -> Self {
        Self::DegenerateProjection(format!("{axis} extent is empty ({min} == {max})"))
    }

    pub fn degenerate_aspect(aspect: f32) -> Self {
        Self::DegenerateProjection(format!("aspect ratio must be non-zero, got {aspect}"))
    }

    pub fn degenerate_fov(fov_y: f32) -> Self {
        Self::DegenerateProjection(format!(
            "vertical field of view must not be a multiple of 180 degrees, got {fov_y}"
        ))
    }
}
