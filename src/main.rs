use anyhow::Result;
use clap::Parser;
use placeholder_icons::icon_gen::{self, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate solid-color placeholder PNG icons for an extension build"
)]
struct Args {
    /// Output directory. It must already exist.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Square icon sizes to generate.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = icon_gen::DEFAULT_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    png: Vec<u32>,

    /// Fill color (CSS hex color format)
    #[clap(short, long, default_value = "#404040")]
    color: String,

    /// Also write the manifest.json "icons" map to this file
    #[clap(long, value_name = "FILE")]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let color = icon_gen::parse_color(&args.color)?;

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        sizes: args.png,
        color,
        manifest: args.manifest,
    })
}
