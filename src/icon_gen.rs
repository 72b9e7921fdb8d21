use crate::manifest_json::{write_manifest_json, IconManifest};
use crate::png::write_icon;
use anyhow::{Context, Result};
use image::Rgb;
use log::debug;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Icon sizes a browser extension manifest expects
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Placeholder gray, `#404040`
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([64, 64, 64]);

pub const DEFAULT_OUTPUT_DIR: &str = "icons";

// Library-side arguments, the CLI maps its flags onto these
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub color: Rgb<u8>,
    pub manifest: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            color: DEFAULT_COLOR,
            manifest: None,
        }
    }
}

/// Write `icon{size}.png` for every requested size into the output directory
///
/// The output directory has to exist already. The first failure aborts the
/// run and icons written before it are left in place.
pub fn generate_icons(args: Args) -> Result<()> {
    debug!(
        "Generating {:?} into {} with color {:?}",
        args.sizes,
        args.output.display(),
        args.color.0
    );

    let mut manifest = IconManifest::new();

    for &size in &args.sizes {
        let filename = icon_filename(size);
        let output_path = args.output.join(&filename);
        write_icon(size, args.color, &output_path)?;
        println!("Created source {size}px icon");

        manifest.add_icon(size, manifest_path(&args.output, &filename));
    }

    if let Some(manifest_file) = &args.manifest {
        write_manifest_json(manifest_file, &manifest)?;
        println!("✓ Generated {}", manifest_file.display());
    }

    Ok(())
}

pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Parse a CSS color such as `#404040` into RGB bytes
///
/// Alpha is ignored since the icons are truecolor without transparency.
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid color: {color}"))
        .context("Expected a CSS color such as #404040")?;

    Ok(Rgb([
        channel_to_byte(srgb.red),
        channel_to_byte(srgb.green),
        channel_to_byte(srgb.blue),
    ]))
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Path of an icon as a manifest refers to it: `<output dir name>/<filename>`
fn manifest_path(out_dir: &Path, filename: &str) -> String {
    match out_dir.file_name() {
        Some(dir) => format!("{}/{filename}", dir.to_string_lossy()),
        None => filename.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_color() {
        assert_eq!(parse_color("#404040").unwrap(), DEFAULT_COLOR);
    }

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(parse_color("#fff").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color("#ff8000").unwrap(), Rgb([255, 128, 0]));
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(parse_color("not-a-color").is_err());
    }

    #[test]
    fn test_manifest_path() {
        assert_eq!(
            manifest_path(Path::new("icons"), "icon16.png"),
            "icons/icon16.png"
        );
        assert_eq!(
            manifest_path(Path::new("/tmp/build/icons"), "icon48.png"),
            "icons/icon48.png"
        );
        assert_eq!(manifest_path(Path::new("/"), "icon48.png"), "icon48.png");
    }

    #[test]
    fn test_generate_default_icons() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out_dir = temp_dir.path().join("icons");
        std::fs::create_dir(&out_dir).unwrap();
        let manifest_file = temp_dir.path().join("icons.json");

        generate_icons(Args {
            output: out_dir.clone(),
            manifest: Some(manifest_file.clone()),
            ..Args::default()
        })
        .unwrap();

        for size in DEFAULT_SIZES {
            let icon = image::open(out_dir.join(icon_filename(size)))
                .unwrap()
                .to_rgb8();
            assert_eq!(icon.dimensions(), (size, size));
            assert!(icon.pixels().all(|p| *p == DEFAULT_COLOR));
        }

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&manifest_file).unwrap()).unwrap();
        assert_eq!(json["icons"]["128"], "icons/icon128.png");
    }

    #[test]
    fn test_generate_stops_at_first_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest_file = temp_dir.path().join("icons.json");

        let result = generate_icons(Args {
            output: temp_dir.path().join("missing"),
            manifest: Some(manifest_file.clone()),
            ..Args::default()
        });

        assert!(result.is_err());
        assert!(!temp_dir.path().join("missing").exists());
        assert!(!manifest_file.exists());
    }
}
