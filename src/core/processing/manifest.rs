use std::fs;
use std::path::Path;

use image::RgbImage;
use tracing::{info, warn};

use crate::core::processing::cards::crop_card;
use crate::error::{Error, Result};
use crate::io::manifest::ManifestEntry;
use crate::io::writers::png::write_rgb_png;
use crate::types::{CardRect, ExtractedCard};

/// Outcome of a manifest run. One bad box does not stop the others.
#[derive(Debug, Default)]
pub struct ManifestReport {
    pub written: Vec<ExtractedCard>,
    pub failed: Vec<(String, Error)>,
}

/// Checked rectangle for `entry`; the box must be non-empty and lie fully inside the image.
pub fn entry_rect(entry: &ManifestEntry, image_width: u32, image_height: u32) -> Result<CardRect> {
    let right = entry.left as u64 + entry.width as u64;
    let bottom = entry.top as u64 + entry.height as u64;
    if entry.width == 0
        || entry.height == 0
        || right > image_width as u64
        || bottom > image_height as u64
    {
        return Err(Error::InvalidCropBox {
            name: entry.name.clone(),
            left: entry.left,
            top: entry.top,
            width: entry.width,
            height: entry.height,
            image_width,
            image_height,
        });
    }
    Ok(CardRect {
        x: entry.left,
        y: entry.top,
        width: entry.width,
        height: entry.height,
    })
}

fn extract_entry(
    image: &RgbImage,
    entry: &ManifestEntry,
    card_size: u32,
    output_dir: &Path,
) -> Result<ExtractedCard> {
    let rect = entry_rect(entry, image.width(), image.height())?;
    let card = crop_card(image, rect, card_size)?;
    let filename = entry.filename();
    write_rgb_png(&output_dir.join(&filename), &card)?;
    Ok(ExtractedCard {
        name: entry.name.clone(),
        filename,
    })
}

/// Crop every manifest box out of `image` into `output_dir`.
/// Only failing to create `output_dir` aborts the run.
pub fn extract_manifest(
    image: &RgbImage,
    entries: &[ManifestEntry],
    card_size: u32,
    output_dir: &Path,
) -> Result<ManifestReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = ManifestReport::default();
    for entry in entries {
        match extract_entry(image, entry, card_size, output_dir) {
            Ok(card) => {
                info!("Saved {:?}", output_dir.join(&card.filename));
                report.written.push(card);
            }
            Err(e) => {
                warn!("Error processing {}: {}", entry.name, e);
                report.failed.push((entry.name.clone(), e));
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn entry(name: &str, left: u32, top: u32, width: u32, height: u32) -> ManifestEntry {
        ManifestEntry {
            name: name.to_string(),
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn out_of_bounds_box_fails_alone() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(100, 100, Rgb([9, 9, 9]));
        let entries = [
            entry("first", 0, 0, 50, 50),
            entry("too_wide", 60, 0, 50, 50),
            entry("empty", 10, 10, 0, 5),
            entry("last", 50, 50, 50, 50),
        ];

        let report = extract_manifest(&img, &entries, 32, dir.path()).unwrap();
        let written: Vec<_> = report.written.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(written, ["first.png", "last.png"]);

        let failed: Vec<_> = report.failed.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(failed, ["too_wide", "empty"]);
        assert!(matches!(report.failed[0].1, Error::InvalidCropBox { .. }));

        let out = image::open(dir.path().join("last.png")).unwrap();
        assert_eq!((out.width(), out.height()), (32, 32));
    }

    #[test]
    fn box_touching_the_edge_is_valid() {
        let rect = entry_rect(&entry("edge", 90, 0, 10, 100), 100, 100).unwrap();
        assert_eq!((rect.x, rect.width), (90, 10));
    }
}
