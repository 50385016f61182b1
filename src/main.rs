use anyhow::Result;
use clap::Parser;
use speed_icon_gen::icon_gen::{self, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "speed-icon-gen",
    about = "Draw the speed-control play icon and write it as PNG at several sizes"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Icon sizes to generate, in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_value = "16,32,48,128",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// Also write icons.json with the manifest "icons" map
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    _ = pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();

    let args = Args::parse();
    let report = icon_gen::generate_icons(&icon_gen::Args {
        output: args.output,
        sizes: args.sizes,
        manifest: args.manifest,
    });

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} icons failed{}",
            report.failed.len(),
            report.attempted(),
            if report.manifest_error.is_some() {
                " and icons.json could not be written"
            } else {
                ""
            }
        );
    }

    Ok(())
}
