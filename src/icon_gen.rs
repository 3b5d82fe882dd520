use crate::glyph::{self, Glyph, FOREGROUND_SCALE, FULL_ICON_SCALE};
use crate::raster::{apply_alpha_mask, corner_radius, create_gradient, rounded_rect_mask};
use anyhow::{bail, Context, Result};
use image::{ImageBuffer, ImageOutputFormat, Rgb, Rgba, RgbaImage};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Radius ratio of the standard launcher icon.
pub const LAUNCHER_RADIUS_RATIO: f32 = 0.22;
/// Radius ratio of the round launcher icon (a full circle).
pub const ROUND_RADIUS_RATIO: f32 = 0.5;

pub const DEFAULT_START_COLOR: Rgb<u8> = Rgb([33, 150, 243]); // #2196F3
pub const DEFAULT_END_COLOR: Rgb<u8> = Rgb([100, 181, 246]); // #64B5F6
pub const DEFAULT_GLYPH_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// A mipmap density bucket and its reference sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    pub name: &'static str,
    /// Full launcher icon size.
    pub icon: u32,
    /// Adaptive icon foreground size (108dp at this density).
    pub foreground: u32,
}

pub const DENSITIES: [Density; 6] = [
    Density {
        name: "ldpi",
        icon: 36,
        foreground: 81,
    },
    Density {
        name: "mdpi",
        icon: 48,
        foreground: 108,
    },
    Density {
        name: "hdpi",
        icon: 72,
        foreground: 162,
    },
    Density {
        name: "xhdpi",
        icon: 96,
        foreground: 216,
    },
    Density {
        name: "xxhdpi",
        icon: 144,
        foreground: 324,
    },
    Density {
        name: "xxxhdpi",
        icon: 192,
        foreground: 432,
    },
];

/// Everything a generation run depends on.
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Android `res` directory receiving the `mipmap-*` folders.
    pub output: PathBuf,
    pub glyph: Glyph,
    pub start_color: Rgb<u8>,
    pub end_color: Rgb<u8>,
    pub glyph_color: Rgb<u8>,
    pub adaptive_xml: bool,
}

impl IconConfig {
    pub fn new(output: impl Into<PathBuf>, glyph: Glyph) -> Self {
        Self {
            output: output.into(),
            glyph,
            start_color: DEFAULT_START_COLOR,
            end_color: DEFAULT_END_COLOR,
            glyph_color: DEFAULT_GLYPH_COLOR,
            adaptive_xml: false,
        }
    }
}

/// Parse a CSS color (`#2196F3`, `rgb(33, 150, 243)`, `white`, ...).
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {value}"))?;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Ok(Rgb([
        channel(color.red),
        channel(color.green),
        channel(color.blue),
    ]))
}

/// Write every foreground and launcher icon, returning the paths written.
pub fn generate_icons(config: &IconConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    println!("Generating adaptive icon foregrounds...");
    for density in DENSITIES {
        let path = mipmap_dir(&config.output, density).join("ic_launcher_foreground.png");
        let image = create_foreground(density.foreground, config)?;
        save_png(&image, &path)?;
        println!("  ✓ Generated {}", path.display());
        written.push(path);
    }

    println!("Generating launcher icons...");
    for density in DENSITIES {
        let dir = mipmap_dir(&config.output, density);

        let path = dir.join("ic_launcher.png");
        save_png(&create_icon(density.icon, LAUNCHER_RADIUS_RATIO, config)?, &path)?;
        println!("  ✓ Generated {}", path.display());
        written.push(path);

        let path = dir.join("ic_launcher_round.png");
        save_png(&create_icon(density.icon, ROUND_RADIUS_RATIO, config)?, &path)?;
        println!("  ✓ Generated {}", path.display());
        written.push(path);
    }

    if config.adaptive_xml {
        println!("Generating adaptive icon resources...");
        written.extend(generate_adaptive_icon_xml(config)?);
    }

    println!("✓ Generated {} files in {}", written.len(), config.output.display());
    Ok(written)
}

fn mipmap_dir(base: &Path, density: Density) -> PathBuf {
    base.join(format!("mipmap-{}", density.name))
}

/// Opaque gradient icon with the glyph, clipped to a rounded silhouette.
pub fn create_icon(size: u32, radius_ratio: f32, config: &IconConfig) -> Result<RgbaImage> {
    if size == 0 {
        bail!("Icon size must be greater than zero");
    }

    let gradient = create_gradient(size, size, config.start_color, config.end_color);
    let mut icon: RgbaImage = ImageBuffer::from_fn(size, size, |x, y| {
        let [r, g, b] = gradient.get_pixel(x, y).0;
        Rgba([r, g, b, 255])
    });

    let glyph_size = glyph::icon_size(size, FULL_ICON_SCALE);
    glyph::draw_glyph(&mut icon, &config.glyph, glyph_size, config.glyph_color)?;

    let mask = rounded_rect_mask(size, size, corner_radius(size, radius_ratio));
    apply_alpha_mask(&mut icon, &mask);
    Ok(icon)
}

/// Transparent adaptive icon foreground holding only the glyph.
pub fn create_foreground(size: u32, config: &IconConfig) -> Result<RgbaImage> {
    if size == 0 {
        bail!("Foreground size must be greater than zero");
    }

    let mut foreground = ImageBuffer::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let glyph_size = glyph::icon_size(size, FOREGROUND_SCALE);
    glyph::draw_glyph(&mut foreground, &config.glyph, glyph_size, config.glyph_color)?;
    Ok(foreground)
}

/// Encode `image` as PNG at `path`, creating parent directories first.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display()))?;
    }

    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    image
        .write_to(&mut file, ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    file.flush()?;
    Ok(())
}

fn hex(color: Rgb<u8>) -> String {
    format!("#FF{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

/// Adaptive icon declarations plus the vector gradient used as their background.
fn generate_adaptive_icon_xml(config: &IconConfig) -> Result<Vec<PathBuf>> {
    let anydpi_dir = config.output.join("mipmap-anydpi-v26");
    let drawable_dir = config.output.join("drawable");
    create_dir_all(&anydpi_dir).context("Can't create mipmap-anydpi-v26 directory")?;
    create_dir_all(&drawable_dir).context("Can't create drawable directory")?;

    let adaptive_icon_xml = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@drawable/ic_launcher_background" />
    <foreground android:drawable="@mipmap/ic_launcher_foreground" />
</adaptive-icon>
"#;

    let background_xml = format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:aapt="http://schemas.android.com/aapt"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">
    <path android:pathData="M0,0h108v108h-108z">
        <aapt:attr name="android:fillColor">
            <gradient
                android:type="linear"
                android:startX="0"
                android:startY="0"
                android:endX="108"
                android:endY="108"
                android:startColor="{}"
                android:endColor="{}" />
        </aapt:attr>
    </path>
</vector>
"#,
        hex(config.start_color),
        hex(config.end_color)
    );

    let files = [
        (anydpi_dir.join("ic_launcher.xml"), adaptive_icon_xml.to_string()),
        (anydpi_dir.join("ic_launcher_round.xml"), adaptive_icon_xml.to_string()),
        (drawable_dir.join("ic_launcher_background.xml"), background_xml),
    ];

    let mut written = Vec::new();
    for (path, contents) in files {
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  ✓ Generated {}", path.display());
        written.push(path);
    }
    Ok(written)
}
