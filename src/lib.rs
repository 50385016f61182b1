//! Procedural generator for the speed-control play icon.
//!
//! [`paint`] draws the icon into a [`PixelGrid`], [`png_encoder`] turns any
//! RGBA grid into PNG bytes, and [`icon_gen`] drives both for a list of sizes.

pub mod error;
pub mod icon_gen;
pub mod manifest;
pub mod paint;
pub mod pixel;
pub mod png_encoder;

pub use error::{IconError, IconResult};
pub use pixel::{Pixel, PixelGrid};
