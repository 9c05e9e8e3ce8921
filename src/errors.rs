//! Validation and encoding errors

use std::path::PathBuf;

/// All the ways an input parameter set can be rejected.
///
/// Every variant is raised before any drawing begins, so a failed run never
/// produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// (ZeroRadius) The named radius is zero; both circles need positive radii
    #[error("(ZeroRadius) {0} radius must be positive")]
    ZeroRadius(&'static str),
    /// (ZeroOffset) The locus point sits at the rolling-circle centre and traces a plain circle
    #[error("(ZeroOffset) point offset must be positive")]
    ZeroOffset,
    /// (RollingTooLarge) In hypo mode the rolling circle must fit inside the fixed circle
    #[error(
        "(RollingTooLarge) rolling radius {rolling} must be smaller than fixed radius {fixed} to roll inside it"
    )]
    RollingTooLarge { fixed: u32, rolling: u32 },
    /// (ZeroDimension) The canvas has no pixels
    #[error("(ZeroDimension) canvas dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    /// (CanvasTooLarge) The raster buffer for these dimensions cannot be allocated
    #[error("(CanvasTooLarge) cannot allocate a {width}x{height} canvas")]
    CanvasTooLarge { width: u32, height: u32 },
    /// (ZeroStep) A zero-degree stride would never advance the sweep
    #[error("(ZeroStep) frame step must be at least one degree")]
    ZeroStep,
}

/// Failures while writing the animated GIF.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Underlying I/O failure on the output path or its temp file
    #[error("I/O error while writing animation: {0}")]
    Io(#[from] std::io::Error),
    /// The GIF encoder rejected a frame or the loop metadata
    #[error("GIF encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
    /// The finished temp file could not replace the destination
    #[error("could not move finished animation into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
