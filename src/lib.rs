//! Hypotrochoid and epitrochoid animation generator.
//!
//! A trochoid is the curve traced by a point rigidly attached to a circle
//! rolling along the inside (hypotrochoid) or outside (epitrochoid) of a
//! fixed circle. This crate evaluates those curves at integer-degree angles,
//! renders one raster frame per angle step, and assembles the frames into an
//! infinitely looping animated GIF.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod animation;
pub mod canvas;
pub mod errors;
pub mod float_types;
pub mod trochoid;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use animation::Animation;
pub use canvas::{Canvas, CanvasConfig};
pub use trochoid::{CurveMode, Trochoid};
