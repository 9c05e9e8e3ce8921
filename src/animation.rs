//! Frame composition and GIF assembly.
//!
//! One frame per angle step: each frame starts from a fresh white canvas and
//! draws the fixed circle, the rolling circle at its current position, the
//! locus traced so far, the radius segment out to the traced point, and a
//! small marker disc at the point. The finished frames are encoded into an
//! infinitely looping GIF.

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use nalgebra::Point2;
use tiny_skia::Color;
use tracing::debug;

use crate::canvas::{Canvas, CanvasConfig};
use crate::errors::{EncodeError, ParameterError};
use crate::float_types::Real;
use crate::trochoid::Trochoid;

/// Per-frame delay, matching a 2-centisecond GIF frame.
const FRAME_DELAY_MS: u32 = 20;
/// Radius of the marker disc at the traced point, pixels.
const MARKER_RADIUS: Real = 3.0;

fn outline_color() -> Color {
    Color::from_rgba8(0xAA, 0xAA, 0xAA, 0xFF)
}
fn locus_color() -> Color {
    Color::from_rgba8(0xFF, 0x00, 0x00, 0xFF)
}

/// Draws the frame for angle `theta`: fixed circle, rolling circle, the full
/// locus polyline from θ = 0, the radius segment, and the point marker.
pub fn compose_frame(
    config: CanvasConfig,
    curve: &Trochoid,
    theta: u32,
) -> Result<RgbaImage, ParameterError> {
    let mut canvas = Canvas::new(config)?;
    let trace = curve.trace(theta);
    // trace always contains the θ = 0 entry
    let rolling_center = trace.centers[trace.centers.len() - 1];
    let point = trace.points[trace.points.len() - 1];

    canvas.draw_circle(
        Point2::new(0.0, 0.0),
        curve.fixed_radius() as Real,
        outline_color(),
    );
    canvas.draw_circle(rolling_center, curve.rolling_radius() as Real, outline_color());
    canvas.draw_polyline(&trace.points, locus_color(), 1.0);
    canvas.draw_polyline(&[rolling_center, point], outline_color(), 1.0);
    canvas.draw_filled_circle(point, MARKER_RADIUS, locus_color());

    Ok(canvas.into_rgba())
}

/// An ordered run of composed frames, consumed once by the GIF encoder.
pub struct Animation {
    frames: Vec<RgbaImage>,
}

impl Animation {
    /// Renders one frame per `step` degrees, for every angle in
    /// `0..sweep_degrees`.
    ///
    /// For a curve that should run to closure, pass
    /// [`Trochoid::sweep_degrees`]; for a single turn of the driving angle,
    /// pass [`crate::trochoid::FULL_TURN_DEGREES`].
    pub fn render(
        config: CanvasConfig,
        curve: &Trochoid,
        sweep_degrees: u32,
        step: u32,
    ) -> Result<Self, ParameterError> {
        if step == 0 {
            return Err(ParameterError::ZeroStep);
        }
        let mut frames = Vec::with_capacity(sweep_degrees.div_ceil(step) as usize);
        let mut theta = 0;
        while theta < sweep_degrees {
            frames.push(compose_frame(config, curve, theta)?);
            theta += step;
        }
        debug!(frames = frames.len(), sweep_degrees, step, "rendered sweep");
        Ok(Self { frames })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Encodes the frames into an infinitely looping GIF at `path`,
    /// overwriting any previous file there.
    ///
    /// The GIF is written to a temporary file beside the destination and only
    /// moved into place once encoding succeeds, so a failed run never leaves
    /// a partial file at `path`.
    pub fn write_gif(self, path: &Path) -> Result<(), EncodeError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::Builder::new()
            .prefix(".trochogen-")
            .suffix(".gif")
            .tempfile_in(dir)?;
        {
            let mut encoder = GifEncoder::new_with_speed(tmp.as_file_mut(), 10);
            encoder.set_repeat(Repeat::Infinite)?;
            for image in self.frames {
                let frame =
                    Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1));
                encoder.encode_frame(frame)?;
            }
        }
        tmp.persist(path).map_err(|e| EncodeError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        debug!(path = %path.display(), "animation written");
        Ok(())
    }
}
