//! Shared types used across cardcrop.
//! Includes `HeaderEstimate`, `GridSpec`, `CardRect`, and the `ExtractedCard` result record.
use serde::{Deserialize, Serialize};

/// Strategy for estimating the vertical margin that separates the card grid
/// from the surrounding UI chrome.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderEstimate {
    /// The grid covers this fraction of the image height, centered vertically.
    UsableFraction(f64),
    /// The image height is divided by `rows + n` to leave room for header and
    /// footer; cells are laid out from the top edge.
    ExtraRows(u32),
}

impl Default for HeaderEstimate {
    fn default() -> Self {
        HeaderEstimate::UsableFraction(0.7)
    }
}

impl std::fmt::Display for HeaderEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderEstimate::UsableFraction(fraction) => {
                write!(f, "UsableFraction({:.2})", fraction)
            }
            HeaderEstimate::ExtraRows(n) => write!(f, "ExtraRows({})", n),
        }
    }
}

/// Uniform grid geometry derived from a single source image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridSpec {
    pub cell_width: u32,
    pub cell_height: u32,
    pub header_offset: u32,
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Pixel rectangle inside a source image
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CardRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CardRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A card that was written to disk: display name and slug filename.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ExtractedCard {
    pub name: String,
    pub filename: String,
}
