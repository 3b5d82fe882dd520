//! Procedural Android launcher icon generator.
//!
//! Draws a diagonal gradient, clips it to a rounded silhouette and puts a
//! door (or single character) glyph in the middle, for every mipmap density.

pub mod builtin_font;
pub mod font;
pub mod glyph;
pub mod icon_gen;
pub mod raster;
