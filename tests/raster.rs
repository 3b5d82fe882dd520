use image::{GrayImage, Rgb, Rgba, RgbaImage};
use mipmap_gen::raster::{
    apply_alpha_mask, blend_pixel, corner_radius, create_gradient, gradient_mask,
    rounded_rect_mask,
};

#[test]
fn test_gradient_mask_endpoints() {
    for size in [1, 2, 36, 48, 108, 432] {
        let mask = gradient_mask(size, size);
        assert_eq!(mask.get_pixel(0, 0)[0], 0, "top-left should not blend at size {size}");

        // (S-1, S-1) sits at t = (S-1)/S, the closest a pixel gets to 1
        let expected = 255.0 * (size - 1) as f32 / size as f32;
        let actual = mask.get_pixel(size - 1, size - 1)[0] as f32;
        assert!(
            (actual - expected).abs() <= 1.0,
            "bottom-right blend at size {size} was {actual}, expected about {expected}"
        );
    }
}

#[test]
fn test_gradient_mask_is_monotonic_along_the_diagonal() {
    let mask = gradient_mask(96, 96);
    for i in 1..96 {
        assert!(mask.get_pixel(i, i)[0] >= mask.get_pixel(i - 1, i - 1)[0]);
    }
    // Same x + y, same blend
    assert_eq!(mask.get_pixel(10, 30), mask.get_pixel(30, 10));
}

#[test]
fn test_gradient_colors() {
    let start = Rgb([33, 150, 243]);
    let end = Rgb([100, 181, 246]);
    let gradient = create_gradient(192, 192, start, end);

    assert_eq!(*gradient.get_pixel(0, 0), start);

    let last = gradient.get_pixel(191, 191);
    for i in 0..3 {
        assert!((last[i] as i32 - end[i] as i32).abs() <= 2, "channel {i} was {}", last[i]);
    }
}

#[test]
fn test_corner_radius_truncates() {
    assert_eq!(corner_radius(48, 0.22), 10);
    assert_eq!(corner_radius(48, 0.5), 24);
    assert_eq!(corner_radius(192, 0.22), 42);
    assert_eq!(corner_radius(36, 0.0), 0);
}

fn rotate_90(mask: &GrayImage) -> GrayImage {
    let size = mask.width();
    GrayImage::from_fn(size, size, |x, y| *mask.get_pixel(size - 1 - y, x))
}

#[test]
fn test_rounded_mask_rotation_symmetry() {
    for size in [36, 48, 72, 96, 144, 192] {
        for ratio in [0.22, 0.5] {
            let mask = rounded_rect_mask(size, size, corner_radius(size, ratio));
            assert_eq!(
                rotate_90(&mask),
                mask,
                "mask of size {size} with ratio {ratio} is not rotation symmetric"
            );
        }
    }
}

#[test]
fn test_rounded_mask_shape() {
    let mask = rounded_rect_mask(48, 48, 10);
    assert_eq!(mask.get_pixel(0, 0)[0], 0);
    assert_eq!(mask.get_pixel(47, 47)[0], 0);
    assert_eq!(mask.get_pixel(24, 24)[0], 255);
    assert_eq!(mask.get_pixel(24, 0)[0], 255, "straight edges are not rounded");

    let circle = rounded_rect_mask(48, 48, 24);
    assert_eq!(circle.get_pixel(24, 24)[0], 255);
    assert_eq!(circle.get_pixel(4, 4)[0], 0);
    assert_eq!(mask.get_pixel(4, 4)[0], 255);
}

#[test]
fn test_rounded_mask_zero_radius_is_opaque() {
    let mask = rounded_rect_mask(16, 16, 0);
    assert!(mask.pixels().all(|p| p[0] == 255));
}

#[test]
fn test_apply_alpha_mask() {
    let mut image = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 255]));
    let mask = GrayImage::from_raw(2, 1, vec![0, 255]).unwrap();
    apply_alpha_mask(&mut image, &mask);

    assert_eq!(*image.get_pixel(0, 0), Rgba([10, 20, 30, 0]));
    assert_eq!(*image.get_pixel(1, 0), Rgba([10, 20, 30, 255]));
}

#[test]
fn test_blend_pixel() {
    let white = Rgb([255, 255, 255]);

    let mut transparent = Rgba([0, 0, 0, 0]);
    blend_pixel(&mut transparent, white, 0.5);
    assert_eq!(transparent, Rgba([255, 255, 255, 128]));

    let mut opaque = Rgba([0, 0, 0, 255]);
    blend_pixel(&mut opaque, white, 0.5);
    assert_eq!(opaque[3], 255);
    assert!((opaque[0] as i32 - 128).abs() <= 1);

    let mut untouched = Rgba([1, 2, 3, 4]);
    blend_pixel(&mut untouched, white, 0.0);
    assert_eq!(untouched, Rgba([1, 2, 3, 4]));
}
