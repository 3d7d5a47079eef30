//! Heightfield generation error types.

/// Errors that can occur when validating a generation request.
///
/// Both variants are detected synchronously before any computation begins;
/// a failed call produces no partial grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The requested grid is too small to form a surface.
    #[error("invalid grid dimensions {size_x}x{size_y}: both axes must be at least 2 vertices")]
    InvalidDimensions { size_x: usize, size_y: usize },

    /// A non-physical amplitude or octave wavelength was supplied.
    #[error("invalid generation parameters: {0}")]
    InvalidParameters(&'static str),
}
