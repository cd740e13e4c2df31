// Offline front end: filter one image file into another.
//
//   cargo run --release -- photo.jpg edges.png --workers 4

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::info;

use sobel_edge::{decode, detect_edges, encode, EncodeOptions, FilterOptions, ImageFormat, Saturation};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PNG or JPEG image to read
    input: PathBuf,

    /// Where to write the edge image; its extension picks the format
    output: PathBuf,

    /// Worker threads (0 = one per CPU)
    #[arg(short, long, default_value_t = 0)]
    workers: usize,

    /// Interior pixels per work item (0 = a whole row)
    #[arg(long, default_value_t = 0)]
    run_length: usize,

    /// Wrap magnitudes above 255 modulo 256 instead of clamping
    #[arg(long)]
    wrap: bool,

    /// JPEG output quality
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let bytes = fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let image = decode(&bytes).with_context(|| format!("decoding {}", cli.input.display()))?;

    let saturation = if cli.wrap { Saturation::Wrap } else { Saturation::Clamp };
    let options = FilterOptions::default()
        .with_workers(cli.workers)
        .with_run_length(cli.run_length)
        .with_saturation(saturation);
    let edges = detect_edges(&image, &options);

    let format = output_format(cli, &bytes)?;
    let encoded = encode(&edges, format, &EncodeOptions { jpeg_quality: cli.quality })?;
    fs::write(&cli.output, &encoded).with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        "{} -> {} ({}x{}, {}, {} bytes)",
        cli.input.display(),
        cli.output.display(),
        edges.width(),
        edges.height(),
        format,
        encoded.len()
    );
    Ok(())
}

/// Output extension first, then whatever the input was.
fn output_format(cli: &Cli, input_bytes: &[u8]) -> Result<ImageFormat> {
    cli.output
        .to_str()
        .and_then(ImageFormat::from_extension)
        .or_else(|| ImageFormat::sniff(input_bytes))
        .context("cannot tell the output format; use a .png, .jpg or .jpeg file name")
}
