//! `extract-unit-images`: draw the estimated card grid over a screenshot to guide
//! manual cropping. Optionally extracts cards for a roster page using the same
//! grid, and crops hand-measured boxes listed in a JSON manifest.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use cardcrop::{
    ExtractionParams, HeaderEstimate, Roster, extract_cards_with, extract_manifest, grid_for,
    load_manifest, load_source_image, write_grid_guide,
};

const DEFAULT_OUTPUT_DIR: &str = "public/assets/units";

#[derive(Parser)]
#[command(
    name = "extract-unit-images",
    version,
    about = "Write a grid guide image to help crop unit cards from a roster screenshot",
    after_help = "Example:\n  extract-unit-images screenshots/troops.png"
)]
struct GuideArgs {
    /// Screenshot of the unit roster screen
    screenshot: PathBuf,

    /// Directory for extracted cards; the guide is written next to it [default: public/assets/units, relative to the current directory]
    output_dir: Option<PathBuf>,

    /// Also extract cards for this roster page using the guide grid
    #[arg(long)]
    screenshot_type: Option<String>,

    /// JSON manifest of hand-measured crop boxes to extract
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Number of card columns in the grid
    #[arg(long, default_value_t = 3)]
    columns: u32,

    /// Number of card rows in the grid
    #[arg(long, default_value_t = 4)]
    rows: u32,

    /// Rows' worth of header and footer added to the height divisor
    #[arg(long, default_value_t = 2)]
    extra_rows: u32,

    /// Edge length of the square output cards in pixels
    #[arg(long, default_value_t = cardcrop::DEFAULT_CARD_SIZE)]
    card_size: u32,

    /// JSON file with extra roster pages: {"type": ["NAME", ...]}
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,
}

fn extract_page(
    args: &GuideArgs,
    kind: &str,
    image: &image::RgbImage,
    params: &ExtractionParams,
    output_dir: &Path,
) -> cardcrop::Result<()> {
    let roster = match &args.roster {
        Some(path) => Roster::builtin().merge(Roster::from_json_file(path)?),
        None => Roster::builtin(),
    };
    let (kind, names) = roster.names_or_default(kind)?;
    if names.is_empty() {
        info!("Roster page {} is empty; nothing to extract", kind);
        return Ok(());
    }

    let grid = grid_for(image, params);
    let extracted = extract_cards_with(
        image,
        names,
        &grid,
        params.card_size,
        output_dir,
        |card| println!("✓ Extracted: {} → {}", card.name, card.filename),
    )?;
    println!("Extracted {} of {} {} cards", extracted.len(), names.len(), kind);
    Ok(())
}

fn run(args: GuideArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = ExtractionParams {
        columns: args.columns,
        rows: args.rows,
        header: HeaderEstimate::ExtraRows(args.extra_rows),
        card_size: args.card_size,
    };
    params.validate()?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let image = load_source_image(&args.screenshot)?;
    let grid = grid_for(&image, &params);

    println!("Image dimensions: {}x{}", image.width(), image.height());
    println!("Output directory: {}", output_dir.display());
    println!("\nThis tool provides a helper. For best results, use manual extraction.");
    println!("\nTo manually extract:");
    println!("1. Open the screenshot in an image editor");
    println!("2. Identify the unit card grid");
    println!("3. Crop each unit card individually");
    println!("4. List the boxes in a manifest and pass it with --manifest");

    println!(
        "\nApproximate card size: {}x{} pixels",
        grid.cell_width, grid.cell_height
    );
    println!(
        "Grid layout: {} columns x {} rows",
        grid.columns, grid.rows
    );

    let guide = write_grid_guide(&image, &grid, &output_dir)?;
    println!("\nGrid visualization saved to: {}", guide.display());
    println!("Use this to identify unit card boundaries.");

    if let Some(kind) = &args.screenshot_type {
        println!();
        extract_page(&args, kind, &image, &params, &output_dir)?;
    }

    if let Some(path) = &args.manifest {
        println!();
        let entries = load_manifest(path)?;
        let report = extract_manifest(&image, &entries, params.card_size, &output_dir)?;
        for card in &report.written {
            println!("Saved {}", output_dir.join(&card.filename).display());
        }
        for (name, e) in &report.failed {
            eprintln!("Error processing {}: {}", name, e);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match GuideArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
