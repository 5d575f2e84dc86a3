use std::path::Path;

use image::{ImageError, ImageReader, RgbImage};
use tracing::info;

use crate::error::{Error, Result};

/// Decode a screenshot into a 3-channel RGB raster.
///
/// Existence is checked before decoding so a missing file and an unreadable one
/// surface as distinct errors. The codec is picked from the file contents, so
/// the extension does not have to match the format.
pub fn load_source_image(path: &Path) -> Result<RgbImage> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    let rgb = img.to_rgb8();
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        rgb.width(),
        rgb.height(),
        img.color()
    );
    Ok(rgb)
}
