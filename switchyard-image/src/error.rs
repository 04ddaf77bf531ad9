use thiserror::Error;

/// Errors constructing an [`Image`](crate::Image).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    Empty {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// `width * height` does not fit in `usize`.
    #[error("image dimensions {width}x{height} overflow the pixel count")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The pixel buffer does not match the dimensions.
    #[error("expected {expected} pixels, got {actual}")]
    ShapeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },
}
