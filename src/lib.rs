#![doc = r#"
cardcrop — slice unit-roster screenshots into named card images.

A roster screen shows unit portraits in a fixed grid (3 columns by 4 rows). This crate
partitions a screenshot into that grid, crops each cell, resizes it to a square card
(128x128 by default) and saves it as `<unit-name-slug>.png`. It powers the
`extract-images-automated` and `extract-unit-images` command-line tools.

Quick start: extract a troops page
----------------------------------
```rust,no_run
use std::path::Path;
use cardcrop::{process_screenshot_to_dir, ExtractionParams, Roster};

fn main() -> cardcrop::Result<()> {
    let roster = Roster::builtin();
    let cards = process_screenshot_to_dir(
        Path::new("screenshots/troops.png"),
        roster.names("troops")?,
        &ExtractionParams::default(),
        Path::new("public/assets/units"),
    )?;

    for card in &cards {
        println!("{} -> {}", card.name, card.filename);
    }
    Ok(())
}
```

Grid guide for manual cropping
------------------------------
```rust,no_run
use std::path::Path;
use cardcrop::{render_guide_to_dir, ExtractionParams};

fn main() -> cardcrop::Result<()> {
    let report = render_guide_to_dir(
        Path::new("screenshots/troops.png"),
        &ExtractionParams::guide(),
        Path::new("public/assets/units"),
    )?;
    println!("guide at {}", report.path.display());
    Ok(())
}
```

Slugs
-----
```rust
assert_eq!(cardcrop::to_filename("SORCERER'S APPRENTICES"), "sorcerers-apprentices.png");
```

Error handling
--------------
All public functions return `cardcrop::Result<T>`; match on `cardcrop::Error` to handle
specific cases. Cells that fall outside the image are not errors: they are skipped and
missing from the returned card list.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — grid geometry, rosters, slugs and processing steps.
- [`io`] — screenshot loading, manifests and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::grid::compute_grid;
pub use crate::core::naming::to_filename;
pub use crate::core::params::{DEFAULT_CARD_SIZE, ExtractionParams};
pub use crate::core::processing::cards::{extract_cards, extract_cards_with};
pub use crate::core::processing::guide::{GUIDE_FILENAME, draw_grid_guide, write_grid_guide};
pub use crate::core::processing::manifest::{ManifestReport, extract_manifest};
pub use crate::core::roster::{DEFAULT_SCREENSHOT_TYPE, Roster};
pub use error::{Error, Result};
pub use io::{ManifestEntry, load_manifest, load_source_image};
pub use types::{CardRect, ExtractedCard, GridSpec, HeaderEstimate};

pub use api::{
    GuideReport, grid_for, process_manifest_to_dir, process_screenshot_to_dir,
    render_guide_to_dir,
};
