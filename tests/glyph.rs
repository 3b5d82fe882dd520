use image::{Rgb, Rgba, RgbaImage};
use mipmap_gen::font::{locate_font, GlyphFont, FONT_CANDIDATES};
use mipmap_gen::glyph::{
    draw_glyph, draw_text, icon_size, Glyph, FOREGROUND_SCALE, FULL_ICON_SCALE,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn transparent(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

/// Inclusive bounding box of every pixel with non-zero alpha.
fn ink_box(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut found: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        found = Some(match found {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    found
}

fn assert_centered(image: &RgbaImage, label: &str) {
    let (x0, y0, x1, y1) = ink_box(image).unwrap_or_else(|| panic!("{label}: nothing was drawn"));
    let center_x = (x0 + x1) as f32 / 2.0;
    let center_y = (y0 + y1) as f32 / 2.0;
    let canvas_x = (image.width() - 1) as f32 / 2.0;
    let canvas_y = (image.height() - 1) as f32 / 2.0;

    assert!(
        (center_x - canvas_x).abs() <= 1.0 && (center_y - canvas_y).abs() <= 1.0,
        "{label}: ink center ({center_x}, {center_y}) is off the canvas center \
         ({canvas_x}, {canvas_y})"
    );
}

#[test]
fn test_icon_size_ratios() {
    assert_eq!(icon_size(48, FULL_ICON_SCALE), 21);
    assert_eq!(icon_size(108, FOREGROUND_SCALE), 37);
    assert_eq!(icon_size(432, FOREGROUND_SCALE), 151);
}

#[test]
fn test_door_is_centered() {
    for size in [36, 48, 72, 81, 96, 108, 144, 162, 192, 216, 324, 432] {
        for scale in [FULL_ICON_SCALE, FOREGROUND_SCALE] {
            let mut canvas = transparent(size);
            draw_glyph(&mut canvas, &Glyph::Door, icon_size(size, scale), WHITE).unwrap();
            assert_centered(&canvas, &format!("door {size}px at {scale}"));
        }
    }
}

#[test]
fn test_door_frame_geometry() {
    let size = 108;
    let s = icon_size(size, FOREGROUND_SCALE); // 37
    let mut canvas = transparent(size);
    draw_glyph(&mut canvas, &Glyph::Door, s, WHITE).unwrap();

    let c = size / 2;
    let (x0, y0, x1, y1) = ink_box(&canvas).unwrap();
    assert_eq!((x0, y0, x1, y1), (c - s / 2, c - s / 2, c + s / 2, c + s / 2));

    // Border is max(2, s / 12) = 3 pixels thick
    assert_eq!(canvas.get_pixel(x0 + 2, c)[3], 255);
    assert_eq!(canvas.get_pixel(x0 + 3, c)[3], 0);

    // The door itself stays clear, the handle sits at c + s / 4
    assert_eq!(canvas.get_pixel(c, c)[3], 0);
    assert_eq!(*canvas.get_pixel(c + s / 4, c), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_builtin_text_is_centered() {
    for ch in ['B', 'A', '1', 'j', 'Q', '?'] {
        for size in [36, 48, 108, 432] {
            let glyph = Glyph::Text {
                ch,
                font: GlyphFont::Builtin,
            };
            let mut canvas = transparent(size);
            draw_glyph(&mut canvas, &glyph, icon_size(size, FULL_ICON_SCALE), WHITE).unwrap();
            assert_centered(&canvas, &format!("builtin {ch:?} at {size}px"));
        }
    }
}

#[test]
fn test_system_font_text_is_centered() {
    let font = locate_font(FONT_CANDIDATES);
    if matches!(font, GlyphFont::Builtin) {
        println!("No system font available, skipping TrueType centering test");
        return;
    }

    for ch in ['B', 'g', 'T', '7'] {
        for size in [48, 108, 192, 432] {
            let glyph = Glyph::Text {
                ch,
                font: font.clone(),
            };
            let mut canvas = transparent(size);
            draw_glyph(&mut canvas, &glyph, icon_size(size, FOREGROUND_SCALE), WHITE).unwrap();
            assert_centered(&canvas, &format!("{} {ch:?} at {size}px", font.describe()));
        }
    }
}

#[test]
fn test_missing_fonts_fall_back_to_builtin() {
    let font = locate_font(&["/nonexistent/font-a.ttf", "/nonexistent/font-b.ttf"]);
    assert!(matches!(font, GlyphFont::Builtin));
}

#[test]
fn test_unparsable_font_is_skipped() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let bogus = dir.path().join("bogus.ttf");
    std::fs::write(&bogus, b"definitely not a font").unwrap();

    let font = locate_font(&[bogus]);
    assert!(matches!(font, GlyphFont::Builtin));
}

#[test]
fn test_blank_characters_are_rejected() {
    let mut canvas = transparent(108);
    assert!(draw_text(&mut canvas, ' ', &GlyphFont::Builtin, 37, WHITE).is_err());
    assert!(draw_text(&mut canvas, '\t', &GlyphFont::Builtin, 37, WHITE).is_err());
    assert!(canvas.pixels().all(|p| p[3] == 0));

    let font = locate_font(FONT_CANDIDATES);
    if matches!(font, GlyphFont::TrueType { .. }) {
        assert!(draw_text(&mut canvas, ' ', &font, 37, WHITE).is_err());
    }
}
