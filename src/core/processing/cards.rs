use std::fs;
use std::path::Path;

use image::{RgbImage, imageops};
use tracing::{debug, info, warn};

use crate::core::naming::to_filename;
use crate::core::processing::resize::resize_to_square;
use crate::error::Result;
use crate::io::writers::png::write_rgb_png;
use crate::types::{CardRect, ExtractedCard, GridSpec};

/// Crop `rect` out of `image` and resize it to a `card_size` square.
pub fn crop_card(image: &RgbImage, rect: CardRect, card_size: u32) -> Result<RgbImage> {
    let cell = imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image();
    resize_to_square(&cell, card_size)
}

/// Cut one card per name out of `image` and save each as `<slug>.png` in `output_dir`.
///
/// The n-th name occupies grid cell n (row-major over `grid.columns`). Cells whose
/// clipped rectangle is empty are skipped and left out of the returned list.
/// Existing files are overwritten.
pub fn extract_cards(
    image: &RgbImage,
    names: &[String],
    grid: &GridSpec,
    card_size: u32,
    output_dir: &Path,
) -> Result<Vec<ExtractedCard>> {
    extract_cards_with(image, names, grid, card_size, output_dir, |_| {})
}

/// [`extract_cards`] that calls `on_card` as soon as each card file is written.
pub fn extract_cards_with<F>(
    image: &RgbImage,
    names: &[String],
    grid: &GridSpec,
    card_size: u32,
    output_dir: &Path,
    mut on_card: F,
) -> Result<Vec<ExtractedCard>>
where
    F: FnMut(&ExtractedCard),
{
    fs::create_dir_all(output_dir)?;

    if names.len() > grid.capacity() {
        warn!(
            "{} names exceed the {}x{} grid; trailing cards fall outside it",
            names.len(),
            grid.columns,
            grid.rows
        );
    }

    let (width, height) = image.dimensions();
    let mut extracted = Vec::with_capacity(names.len());

    for (i, name) in names.iter().enumerate() {
        let rect = grid.cell_rect(i, width, height);
        if rect.is_empty() {
            debug!("Skipping {}: empty cell {:?}", name, rect);
            continue;
        }

        let card = crop_card(image, rect, card_size)?;
        let filename = to_filename(name);
        write_rgb_png(&output_dir.join(&filename), &card)?;

        info!(
            "Extracted {} from {}x{} @ {},{} -> {}",
            name, rect.width, rect.height, rect.x, rect.y, filename
        );
        let card = ExtractedCard {
            name: name.clone(),
            filename,
        };
        on_card(&card);
        extracted.push(card);
    }

    Ok(extracted)
}
