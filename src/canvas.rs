//! Raster canvas: coordinate mapping and drawing primitives.
//!
//! Curve geometry lives in Cartesian coordinates with the origin at the
//! canvas centre and y pointing up; pixels have their origin at the top-left
//! corner with y pointing down. [`CanvasConfig`] owns that mapping and is
//! threaded explicitly through every drawing call, so there is no process-wide
//! dimension state.

use crate::errors::ParameterError;
use crate::float_types::Real;
use image::{Rgba, RgbaImage};
use nalgebra::Point2;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
}

impl CanvasConfig {
    /// Validates canvas dimensions. Zero-pixel canvases are rejected.
    pub const fn new(width: u32, height: u32) -> Result<Self, ParameterError> {
        if width == 0 || height == 0 {
            return Err(ParameterError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Maps a Cartesian coordinate to the nearest pixel:
    /// `px = round(W/2 + x)`, `py = round(H/2 − y)`.
    ///
    /// Pure and total; points outside the canvas simply map to out-of-range
    /// pixel indices.
    pub fn to_pixel(&self, p: Point2<Real>) -> (i32, i32) {
        let px = (self.width as Real / 2.0 + p.x).round() as i32;
        let py = (self.height as Real / 2.0 - p.y).round() as i32;
        (px, py)
    }

    /// Inverse of [`CanvasConfig::to_pixel`] up to rounding: the Cartesian
    /// position of a pixel index.
    pub fn to_cartesian(&self, px: i32, py: i32) -> Point2<Real> {
        Point2::new(
            px as Real - self.width as Real / 2.0,
            self.height as Real / 2.0 - py as Real,
        )
    }
}

/// One frame's worth of pixels plus the state needed to paint it.
///
/// A fresh canvas is filled with opaque white; frames never overlay each
/// other incrementally.
pub struct Canvas {
    config: CanvasConfig,
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Result<Self, ParameterError> {
        let mut pixmap =
            Pixmap::new(config.width, config.height).ok_or(ParameterError::CanvasTooLarge {
                width: config.width,
                height: config.height,
            })?;
        pixmap.fill(Color::WHITE);
        Ok(Self { config, pixmap })
    }

    pub const fn config(&self) -> CanvasConfig {
        self.config
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        paint
    }

    /// Strokes a hollow circle outline, 1px wide, at a Cartesian centre.
    /// Radius is in pixels.
    pub fn draw_circle(&mut self, center: Point2<Real>, radius: Real, color: Color) {
        let (cx, cy) = self.config.to_pixel(center);
        let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) else {
            return;
        };
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, Transform::identity(), None);
    }

    /// Fills a disc at a Cartesian centre, outline and fill the same color.
    pub fn draw_filled_circle(&mut self, center: Point2<Real>, radius: Real, color: Color) {
        let (cx, cy) = self.config.to_pixel(center);
        let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes straight segments joining the mapped points in order.
    /// Fewer than two points draws nothing.
    pub fn draw_polyline(&mut self, points: &[Point2<Real>], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut pb = PathBuilder::new();
        let (x0, y0) = self.config.to_pixel(points[0]);
        pb.move_to(x0 as f32, y0 as f32);
        for p in &points[1..] {
            let (x, y) = self.config.to_pixel(*p);
            pb.line_to(x as f32, y as f32);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, Transform::identity(), None);
    }

    /// Demultiplies the pixmap into an 8-bit-per-channel RGBA buffer for the
    /// GIF encoder.
    pub fn into_rgba(self) -> RgbaImage {
        let width = self.config.width;
        let mut image = RgbaImage::new(width, self.config.height);
        for (i, px) in self.pixmap.pixels().iter().enumerate() {
            let c = px.demultiply();
            let x = i as u32 % width;
            let y = i as u32 / width;
            image.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
        }
        image
    }
}
