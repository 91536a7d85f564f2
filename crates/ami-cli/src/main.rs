//! ami - bitmap manipulation CLI
//!
//! Applies the selected manipulations to a BMP image in a fixed order
//! (invert, grayscale, blur, HSV adjustment, annotation), regardless of
//! the order the flags appear on the command line. With no
//! manipulation flags, prints the image dimensions (input only) or
//! copies the image through the codec (input and output).

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use ami_annotate::{GlyphAtlas, annotate};
use ami_color::{HsvAdjustment, adjust_hsv};
use ami_core::{PixelBuffer, Region};
use ami_filter::{box_blur, grayscale, invert};

#[derive(Parser)]
#[command(name = "ami")]
#[command(about = "Manipulate BMP images: invert, grayscale, blur, HSV adjust, annotate")]
#[command(long_about = "
Applies the selected manipulations, always in the order
invert -> grayscale -> blur -> HSV adjust -> annotate.

Examples:
  ami photo.bmp                          # Print width and height
  ami -i photo.bmp out.bmp               # Invert the whole image
  ami -g -b 2 photo.bmp out.bmp 0 0 64 64
  ami -H 120 -s 0.5 photo.bmp out.bmp    # Rotate hue, boost saturation
  ami -a \"hello\" --atlas alphabet.bmp photo.bmp out.bmp
")]
struct Cli {
    /// Invert the image
    #[arg(short = 'i', long)]
    invert: bool,

    /// Apply a grayscale filter to the image
    #[arg(short = 'g', long)]
    grayscale: bool,

    /// Apply a box blur with the given radius
    #[arg(short = 'b', long, value_name = "RADIUS")]
    blur: Option<i32>,

    /// Rotate the hue by the given number of degrees
    #[arg(short = 'H', long, value_name = "DEGREES", allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Scale the saturation by a factor of 1 + FACTOR
    #[arg(short = 's', long, value_name = "FACTOR", allow_negative_numbers = true)]
    saturation: Option<f64>,

    /// Scale the brightness value by a factor of 1 + FACTOR
    #[arg(short = 'v', long, value_name = "FACTOR", allow_negative_numbers = true)]
    brightness: Option<f64>,

    /// Annotate the image (lowercase letters and spaces)
    #[arg(short = 'a', long, value_name = "TEXT")]
    annotate: Option<String>,

    /// Glyph atlas image used for annotation
    #[arg(long, value_name = "PATH", default_value = "alphabet.bmp")]
    atlas: PathBuf,

    /// Input BMP file
    input: PathBuf,

    /// Output BMP file
    output: Option<PathBuf>,

    /// Manipulation boundaries (defaults to the whole image)
    #[arg(value_names = ["XMIN", "YMIN", "XMAX", "YMAX"])]
    bounds: Vec<u32>,
}

impl Cli {
    fn has_manipulation(&self) -> bool {
        self.invert
            || self.grayscale
            || self.blur.is_some()
            || self.hue.is_some()
            || self.saturation.is_some()
            || self.brightness.is_some()
            || self.annotate.is_some()
    }

    fn region(&self, img: &PixelBuffer) -> Result<Region> {
        match self.bounds.as_slice() {
            [] => Ok(Region::full(img)),
            &[xmin, ymin, xmax, ymax] => {
                let region = Region::new(xmin, ymin, xmax, ymax)?;
                region.check_within(img.width(), img.height())?;
                Ok(region)
            }
            other => bail!(
                "expected four boundary values <XMIN> <YMIN> <XMAX> <YMAX>, got {}",
                other.len()
            ),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut img = ami_io::read_bmp_file(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    if !cli.has_manipulation() {
        match &cli.output {
            None => {
                println!("Width: {}", img.width());
                println!("Height: {}", img.height());
            }
            Some(output) => {
                ami_io::write_bmp_file(&img, output)
                    .with_context(|| format!("failed to write {}", output.display()))?;
            }
        }
        return Ok(());
    }

    let Some(output) = &cli.output else {
        bail!("an output file is required when applying manipulations");
    };
    let region = cli.region(&img)?;

    if cli.invert {
        invert(&mut img, region)?;
    }
    if cli.grayscale {
        grayscale(&mut img, region)?;
    }
    if let Some(radius) = cli.blur {
        box_blur(&mut img, region, radius)?;
    }
    if cli.hue.is_some() || cli.saturation.is_some() || cli.brightness.is_some() {
        let adjustment = HsvAdjustment {
            hue_delta: cli.hue.unwrap_or(0.0),
            saturation_factor: cli.saturation.unwrap_or(0.0),
            value_factor: cli.brightness.unwrap_or(0.0),
        };
        adjust_hsv(&mut img, region, adjustment)?;
    }
    if let Some(text) = &cli.annotate {
        let atlas_img = ami_io::read_bmp_file(&cli.atlas)
            .with_context(|| format!("failed to read atlas {}", cli.atlas.display()))?;
        let atlas = GlyphAtlas::new(atlas_img)?;
        annotate(&mut img, &atlas, text)?;
    }

    ami_io::write_bmp_file(&img, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
