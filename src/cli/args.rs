use clap::Parser;
use std::path::PathBuf;

use cardcrop::DEFAULT_SCREENSHOT_TYPE;

/// Output directory used when none is given on the command line
pub const DEFAULT_OUTPUT_DIR: &str = "public/assets/units";

#[derive(Parser)]
#[command(
    name = "extract-images-automated",
    version,
    about = "Slice a unit-roster screenshot into named 128x128 unit cards",
    after_help = "Screenshot types:\n  troops  - Troops screen (default)\n  heroes  - Heroes screen\n  more    - More units screen\n\nExample:\n  extract-images-automated screenshot1.png troops"
)]
pub struct CliArgs {
    /// Screenshot of the unit roster screen
    pub screenshot: PathBuf,

    /// Roster page shown in the screenshot (troops, heroes, more, or a page from --roster)
    #[arg(default_value = DEFAULT_SCREENSHOT_TYPE)]
    pub screenshot_type: String,

    /// Directory for the extracted cards [default: public/assets/units, relative to the current directory]
    pub output_dir: Option<PathBuf>,

    /// Number of card columns in the grid
    #[arg(long)]
    pub columns: Option<u32>,

    /// Number of card rows in the grid
    #[arg(long)]
    pub rows: Option<u32>,

    /// Fraction of the screenshot height covered by the card grid
    #[arg(long)]
    pub usable_fraction: Option<f64>,

    /// Edge length of the square output cards in pixels
    #[arg(long)]
    pub card_size: Option<u32>,

    /// JSON file with extra roster pages: {"type": ["NAME", ...]}
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// JSON file with extraction parameters; flags above override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
