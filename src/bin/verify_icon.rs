use anyhow::{Context, Result};
use clap::Parser;
use image::io::Reader as ImageReader;
use placeholder_icons::icon_gen::parse_color;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(name = "verify-icon", about = "Check that a PNG is a single solid color")]
struct Args {
    /// Icon to check
    #[clap(value_name = "PATH", default_value = "icons/icon128.png")]
    path: PathBuf,

    /// Color every pixel is expected to have (CSS hex color format)
    #[clap(short, long)]
    color: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let expected = args.color.as_deref().map(parse_color).transpose()?;

    let img = ImageReader::open(&args.path)
        .with_context(|| format!("Failed to open {}", args.path.display()))?
        .decode()
        .context("Failed to decode image")?;

    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();

    println!("Checking icon: {}", args.path.display());
    println!("Image dimensions: {}x{}", width, height);

    let first = *rgb_img.get_pixel(0, 0);
    println!("First pixel RGB: [{}, {}, {}]", first[0], first[1], first[2]);

    let reference = expected.unwrap_or(first);
    match rgb_img
        .enumerate_pixels()
        .find(|(_, _, pixel)| **pixel != reference)
    {
        None => {
            println!("✓ Solid color icon");
            Ok(ExitCode::SUCCESS)
        }
        Some((x, y, pixel)) => {
            println!(
                "⚠ Pixel (x={}, y={}) is [{}, {}, {}], expected [{}, {}, {}]",
                x, y, pixel[0], pixel[1], pixel[2], reference[0], reference[1], reference[2]
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
