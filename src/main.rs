use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use mipmap_gen::{
    font::{candidate_paths, locate_font},
    glyph::Glyph,
    icon_gen::{self, parse_color, IconConfig},
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GlyphKind {
    /// Door frame with a round handle.
    Door,
    /// A single font-rendered character.
    Text,
}

#[derive(Debug, Parser)]
#[clap(
    name = "mipmap-gen",
    about = "Generate Android launcher icons with a gradient background for every mipmap density"
)]
struct Args {
    /// Android resource directory that receives the mipmap-* folders.
    #[clap(short, long, value_name = "DIR", default_value = "app/src/main/res")]
    output: PathBuf,

    /// Glyph drawn in the middle of the icon.
    #[clap(long, value_enum, default_value = "door")]
    glyph: GlyphKind,

    /// Character used by the text glyph.
    #[clap(long, value_name = "CHAR", default_value = "B")]
    text: String,

    /// Font file tried before the built-in font candidates.
    #[clap(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Gradient color at the top-left corner (CSS color format)
    #[clap(long, default_value = "#2196F3")]
    start_color: String,

    /// Gradient color at the bottom-right corner (CSS color format)
    #[clap(long, default_value = "#64B5F6")]
    end_color: String,

    /// Glyph color (CSS color format)
    #[clap(long, default_value = "#ffffff")]
    glyph_color: String,

    /// Also write mipmap-anydpi-v26 adaptive icon XML and its gradient background drawable
    #[clap(long)]
    adaptive_xml: bool,
}

impl Args {
    fn into_config(self) -> Result<IconConfig> {
        let glyph = match self.glyph {
            GlyphKind::Door => Glyph::Door,
            GlyphKind::Text => {
                let mut chars = self.text.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    bail!("--text must be exactly one character, got {:?}", self.text);
                };
                let font = locate_font(&candidate_paths(self.font.as_deref()));
                println!("Using font: {}", font.describe());
                Glyph::Text { ch, font }
            }
        };

        let mut config = IconConfig::new(self.output, glyph);
        config.start_color = parse_color(&self.start_color)?;
        config.end_color = parse_color(&self.end_color)?;
        config.glyph_color = parse_color(&self.glyph_color)?;
        config.adaptive_xml = self.adaptive_xml;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    icon_gen::generate_icons(&config)?;
    Ok(())
}
