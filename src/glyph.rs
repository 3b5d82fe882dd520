//! Glyphs drawn in the middle of an icon canvas.

use crate::builtin_font::{self, GLYPH_HEIGHT};
use crate::font::GlyphFont;
use crate::raster::{blend_pixel, clear_rect, fill_disk, fill_rect};
use anyhow::{bail, Result};
use image::{Rgb, RgbaImage};
use rusttype::{point, Scale};

/// Glyph size relative to the canvas for full launcher icons.
pub const FULL_ICON_SCALE: f32 = 0.45;
/// Smaller glyph for adaptive foregrounds, which get masked to the safe zone.
pub const FOREGROUND_SCALE: f32 = 0.35;

#[derive(Debug, Clone)]
pub enum Glyph {
    /// Stylized door: a square frame with a round handle.
    Door,
    /// A single character.
    Text { ch: char, font: GlyphFont },
}

/// Glyph size in pixels for a canvas of `size`.
pub fn icon_size(size: u32, scale: f32) -> u32 {
    (size as f32 * scale) as u32
}

/// Draw `glyph` centered on `canvas`, `icon_size` pixels across.
pub fn draw_glyph(
    canvas: &mut RgbaImage,
    glyph: &Glyph,
    icon_size: u32,
    color: Rgb<u8>,
) -> Result<()> {
    match glyph {
        Glyph::Door => {
            let cx = (canvas.width() / 2) as i32;
            let cy = (canvas.height() / 2) as i32;
            draw_door(canvas, cx, cy, icon_size, color);
            Ok(())
        }
        Glyph::Text { ch, font } => draw_text(canvas, *ch, font, icon_size, color),
    }
}

/// Door frame spanning `[c - s/2, c + s/2]` plus a handle right of center.
///
/// The inside of the door is cut out to full transparency, so a full icon
/// is see-through there.
pub fn draw_door(canvas: &mut RgbaImage, cx: i32, cy: i32, icon_size: u32, color: Rgb<u8>) {
    let s = icon_size as i32;
    let left = cx - s / 2;
    let top = cy - s / 2;
    let right = cx + s / 2;
    let bottom = cy + s / 2;
    let border = (s / 12).max(2);

    fill_rect(canvas, left, top, right, bottom, color);
    clear_rect(canvas, left + border, top + border, right - border, bottom - border);

    let handle_radius = (s / 16).max(2);
    fill_disk(canvas, cx + s / 4, cy, handle_radius, color);
}

/// Draw `ch` so that its ink bounding box is centered on the canvas.
///
/// Characters that would leave no ink (spaces, controls) are rejected by
/// either font. The built-in font draws `?` for anything else it lacks.
pub fn draw_text(
    canvas: &mut RgbaImage,
    ch: char,
    font: &GlyphFont,
    icon_size: u32,
    color: Rgb<u8>,
) -> Result<()> {
    match font {
        GlyphFont::TrueType { font, path } => {
            let glyph = font.glyph(ch);
            if glyph.id().0 == 0 {
                bail!("Font {} has no glyph for {:?}", path.display(), ch);
            }

            // Cap height of a bold sans is roughly 3/4 of the em
            let scale = Scale::uniform(icon_size as f32 * 4.0 / 3.0);
            let glyph = glyph.scaled(scale).positioned(point(0.0, 0.0));
            let Some(bb) = glyph.pixel_bounding_box() else {
                bail!("{:?} has no visible ink in {}", ch, path.display());
            };

            // Place the ink box itself in the middle, ignoring bearings and baseline
            let left = (canvas.width() as i32 - bb.width()) / 2;
            let top = (canvas.height() as i32 - bb.height()) / 2;
            let (w, h) = (canvas.width() as i32, canvas.height() as i32);

            glyph.draw(|gx, gy, coverage| {
                let x = left + gx as i32;
                let y = top + gy as i32;
                if x >= 0 && x < w && y >= 0 && y < h {
                    blend_pixel(canvas.get_pixel_mut(x as u32, y as u32), color, coverage);
                }
            });
            Ok(())
        }
        GlyphFont::Builtin => {
            if ch.is_whitespace() || ch.is_control() {
                bail!("{:?} has no visible ink in the built-in font", ch);
            }
            draw_builtin_text(canvas, ch, icon_size, color);
            Ok(())
        }
    }
}

fn draw_builtin_text(canvas: &mut RgbaImage, ch: char, icon_size: u32, color: Rgb<u8>) {
    let cell = ((icon_size as f32 / GLYPH_HEIGHT as f32).round() as i32).max(1);
    let (min_col, min_row, max_col, max_row) = builtin_font::ink_bounds(ch);
    let ink_w = (max_col - min_col + 1) as i32 * cell;
    let ink_h = (max_row - min_row + 1) as i32 * cell;

    let origin_x = (canvas.width() as i32 - ink_w) / 2 - min_col as i32 * cell;
    let origin_y = (canvas.height() as i32 - ink_h) / 2 - min_row as i32 * cell;

    for row in min_row..=max_row {
        for col in min_col..=max_col {
            if builtin_font::is_set(ch, col, row) {
                let x = origin_x + col as i32 * cell;
                let y = origin_y + row as i32 * cell;
                fill_rect(canvas, x, y, x + cell - 1, y + cell - 1, color);
            }
        }
    }
}
