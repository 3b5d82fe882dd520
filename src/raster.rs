//! Pixel-level building blocks: the diagonal gradient, the rounded-corner
//! silhouette mask and a couple of clipped shape fills.

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Blend mask for a 135° gradient.
///
/// Every pixel stores `round(255 * (x + y) / (width + height))`, so the
/// top-left pixel is 0 and the bottom-right one approaches 255.
pub fn gradient_mask(width: u32, height: u32) -> GrayImage {
    let span = (width + height) as f32;
    ImageBuffer::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span;
        Luma([(255.0 * t).round() as u8])
    })
}

/// Paste `top` over `base` through `mask` (0 keeps `base`, 255 takes `top`).
pub fn composite(base: &RgbImage, top: &RgbImage, mask: &GrayImage) -> RgbImage {
    ImageBuffer::from_fn(base.width(), base.height(), |x, y| {
        let m = mask.get_pixel(x, y)[0] as u32;
        let b = base.get_pixel(x, y);
        let t = top.get_pixel(x, y);
        let mix = |i: usize| ((t[i] as u32 * m + b[i] as u32 * (255 - m) + 127) / 255) as u8;
        Rgb([mix(0), mix(1), mix(2)])
    })
}

/// Diagonal gradient from `start` (top-left) to `end` (bottom-right).
pub fn create_gradient(width: u32, height: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    let base = ImageBuffer::from_pixel(width, height, start);
    let top = ImageBuffer::from_pixel(width, height, end);
    composite(&base, &top, &gradient_mask(width, height))
}

/// Corner radius in pixels for a canvas of `size` and a radius ratio.
pub fn corner_radius(size: u32, ratio: f32) -> u32 {
    (size as f32 * ratio) as u32
}

/// Opacity mask of a rounded rectangle filling the whole canvas.
///
/// Coverage is evaluated at pixel centers, with one pixel of anti-aliasing
/// along the curved edges. The radius is clamped to half the shorter side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let r = radius.min(width.min(height) / 2) as f32;
    let (w, h) = (width as f32, height as f32);

    ImageBuffer::from_fn(width, height, |x, y| {
        if r == 0.0 {
            return Luma([255]);
        }
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Distance from the straight-edged core of the shape
        let dx = (r - px).max(px - (w - r)).max(0.0);
        let dy = (r - py).max(py - (h - r)).max(0.0);
        let distance = (dx * dx + dy * dy).sqrt();

        let coverage = (r - distance + 0.5).clamp(0.0, 1.0);
        Luma([(coverage * 255.0).round() as u8])
    })
}

/// Scale the alpha channel of `image` by `mask`.
pub fn apply_alpha_mask(image: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let m = mask.get_pixel(x, y)[0] as u32;
        pixel[3] = ((pixel[3] as u32 * m + 127) / 255) as u8;
    }
}

/// Source-over blend of a solid `color` with the given coverage.
pub fn blend_pixel(pixel: &mut Rgba<u8>, color: Rgb<u8>, coverage: f32) {
    let src_a = coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    if src_a >= 1.0 {
        *pixel = Rgba([color[0], color[1], color[2], 255]);
        return;
    }

    let dst_a = pixel[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    for i in 0..3 {
        let c = (color[i] as f32 * src_a + pixel[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        pixel[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = (out_a * 255.0).round() as u8;
}

/// Fill the inclusive rectangle `[left, right] x [top, bottom]`, clipped to the canvas.
pub fn fill_rect(
    image: &mut RgbaImage,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    color: Rgb<u8>,
) {
    let (w, h) = (image.width() as i32, image.height() as i32);
    for y in top.max(0)..=bottom.min(h - 1) {
        for x in left.max(0)..=right.min(w - 1) {
            blend_pixel(image.get_pixel_mut(x as u32, y as u32), color, 1.0);
        }
    }
}

/// Overwrite the inclusive rectangle with fully transparent pixels, clipped to the canvas.
pub fn clear_rect(image: &mut RgbaImage, left: i32, top: i32, right: i32, bottom: i32) {
    let (w, h) = (image.width() as i32, image.height() as i32);
    for y in top.max(0)..=bottom.min(h - 1) {
        for x in left.max(0)..=right.min(w - 1) {
            image.put_pixel(x as u32, y as u32, Rgba([0, 0, 0, 0]));
        }
    }
}

/// Anti-aliased disk covering the pixels `[cx - radius, cx + radius]` on both axes.
pub fn fill_disk(image: &mut RgbaImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let (w, h) = (image.width() as i32, image.height() as i32);
    let center_x = cx as f32 + 0.5;
    let center_y = cy as f32 + 0.5;
    let outer = radius as f32 + 0.5;

    for y in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
        for x in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
            let dx = x as f32 + 0.5 - center_x;
            let dy = y as f32 + 0.5 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();
            let coverage = (outer - distance + 0.5).clamp(0.0, 1.0);
            blend_pixel(image.get_pixel_mut(x as u32, y as u32), color, coverage);
        }
    }
}
