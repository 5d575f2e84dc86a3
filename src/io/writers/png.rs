use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{Error, Result};

/// Write an RGB raster as PNG, replacing any existing file at `output`.
pub fn write_rgb_png(output: &Path, img: &RgbImage) -> Result<()> {
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })
}
