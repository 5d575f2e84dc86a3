use std::path::PathBuf;

use tracing::info;

use cardcrop::{
    ExtractionParams, HeaderEstimate, Roster, extract_cards_with, grid_for, load_source_image,
};

use super::args::{CliArgs, DEFAULT_OUTPUT_DIR};

fn resolve_params(args: &CliArgs) -> cardcrop::Result<ExtractionParams> {
    let mut params = match &args.config {
        Some(path) => ExtractionParams::from_json_file(path)?,
        None => ExtractionParams::default(),
    };

    if let Some(columns) = args.columns {
        params.columns = columns;
    }
    if let Some(rows) = args.rows {
        params.rows = rows;
    }
    if let Some(fraction) = args.usable_fraction {
        params.header = HeaderEstimate::UsableFraction(fraction);
    }
    if let Some(card_size) = args.card_size {
        params.card_size = card_size;
    }

    params.validate()?;
    Ok(params)
}

fn resolve_roster(args: &CliArgs) -> cardcrop::Result<Roster> {
    match &args.roster {
        Some(path) => Ok(Roster::builtin().merge(Roster::from_json_file(path)?)),
        None => Ok(Roster::builtin()),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let image = load_source_image(&args.screenshot)?;
    let grid = grid_for(&image, &params);

    let roster = resolve_roster(&args)?;
    let (kind, names) = roster.names_or_default(&args.screenshot_type)?;

    println!("\nProcessing: {}", args.screenshot.display());
    println!("Type: {}", kind);
    println!("Output: {}", output_dir.display());
    println!("Units: {}\n", names.len());

    info!(
        "Grid {}x{}, cell {}x{}, header offset {} ({})",
        grid.columns, grid.rows, grid.cell_width, grid.cell_height, grid.header_offset, params.header
    );

    let extracted = extract_cards_with(
        &image,
        names,
        &grid,
        params.card_size,
        &output_dir,
        |card| println!("✓ Extracted: {} → {}", card.name, card.filename),
    )?;

    println!("\nExtracted {} unit images", extracted.len());
    println!("Saved to: {}\n", output_dir.display());

    println!("Next steps:");
    println!("   1. Review extracted images");
    println!("   2. Adjust crop if needed (extract-unit-images draws a grid guide)");
    println!("   3. Re-run with --usable-fraction or --config to fine-tune the grid");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn positional_defaults() {
        let args = CliArgs::try_parse_from(["extract-images-automated", "shot.png"]).unwrap();
        assert_eq!(args.screenshot, PathBuf::from("shot.png"));
        assert_eq!(args.screenshot_type, "troops");
        assert!(args.output_dir.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "extract-images-automated",
            "shot.png",
            "heroes",
            "out",
            "--columns",
            "4",
            "--usable-fraction",
            "0.8",
        ])
        .unwrap();
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.columns, 4);
        assert_eq!(params.rows, 4);
        assert_eq!(params.header, HeaderEstimate::UsableFraction(0.8));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn zero_card_size_is_rejected() {
        let args = CliArgs::try_parse_from([
            "extract-images-automated",
            "shot.png",
            "--card-size",
            "0",
        ])
        .unwrap();
        assert!(resolve_params(&args).is_err());
    }

    #[test]
    fn screenshot_is_required() {
        assert!(CliArgs::try_parse_from(["extract-images-automated"]).is_err());
    }
}
