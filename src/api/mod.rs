//! High-level, ergonomic library API: turn a screenshot path into card files,
//! a grid guide, or manifest crops. Prefer these entrypoints over the low-level
//! processing modules when integrating cardcrop.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::core::grid::compute_grid;
use crate::core::params::ExtractionParams;
use crate::core::processing::cards::extract_cards;
use crate::core::processing::guide::write_grid_guide;
use crate::core::processing::manifest::{ManifestReport, extract_manifest};
use crate::error::Result;
use crate::io::loader::load_source_image;
use crate::io::manifest::load_manifest;
use crate::types::{ExtractedCard, GridSpec};

/// Grid geometry for `image` under `params`
pub fn grid_for(image: &RgbImage, params: &ExtractionParams) -> GridSpec {
    compute_grid(
        image.width(),
        image.height(),
        params.rows,
        params.columns,
        params.header,
    )
}

/// Result of rendering a grid guide
#[derive(Debug, Clone)]
pub struct GuideReport {
    pub width: u32,
    pub height: u32,
    pub grid: GridSpec,
    pub path: PathBuf,
}

/// Load `input`, slice it into one card per name and write the cards to `output_dir`.
///
/// The input is decoded before `output_dir` is touched, so a missing or
/// undecodable screenshot leaves the filesystem unchanged.
pub fn process_screenshot_to_dir(
    input: &Path,
    names: &[String],
    params: &ExtractionParams,
    output_dir: &Path,
) -> Result<Vec<ExtractedCard>> {
    params.validate()?;
    let image = load_source_image(input)?;
    let grid = grid_for(&image, params);

    info!(
        "Extracting {} card(s) from {:?} into {:?}",
        names.len(),
        input,
        output_dir
    );
    extract_cards(&image, names, &grid, params.card_size, output_dir)
}

/// Load `input` and write `extraction-guide.png` next to `output_dir`
pub fn render_guide_to_dir(
    input: &Path,
    params: &ExtractionParams,
    output_dir: &Path,
) -> Result<GuideReport> {
    params.validate()?;
    let image = load_source_image(input)?;
    let grid = grid_for(&image, params);
    let path = write_grid_guide(&image, &grid, output_dir)?;

    Ok(GuideReport {
        width: image.width(),
        height: image.height(),
        grid,
        path,
    })
}

/// Crop the boxes listed in the JSON manifest at `manifest` out of `input`
pub fn process_manifest_to_dir(
    input: &Path,
    manifest: &Path,
    card_size: u32,
    output_dir: &Path,
) -> Result<ManifestReport> {
    let image = load_source_image(input)?;
    let entries = load_manifest(manifest)?;
    extract_manifest(&image, &entries, card_size, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("units");
        let err = process_screenshot_to_dir(
            &dir.path().join("missing.png"),
            &["IMP".to_string()],
            &ExtractionParams::default(),
            &out,
        )
        .unwrap_err();

        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn invalid_params_are_rejected_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let params = ExtractionParams {
            card_size: 0,
            ..Default::default()
        };
        let err = render_guide_to_dir(&dir.path().join("missing.png"), &params, dir.path())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "card_size", .. }));
    }
}
