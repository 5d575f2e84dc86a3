use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Resize an RGB raster to `target_cols` x `target_rows` with a Lanczos3 convolution.
/// Aspect ratio is not preserved.
pub fn resize_rgb_image(
    src: &RgbImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbImage> {
    let (original_cols, original_rows) = src.dimensions();
    if (original_cols, original_rows) == (target_cols, target_rows) {
        return Ok(src.clone());
    }

    debug!(
        "Resizing {}x{} -> {}x{}",
        original_cols, original_rows, target_cols, target_rows
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        src.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer does not match target dimensions".to_string()))
}

/// Resize to a `size` x `size` square
pub fn resize_to_square(src: &RgbImage, size: u32) -> Result<RgbImage> {
    resize_rgb_image(src, size, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn uniform_source_stays_uniform() {
        let src = RgbImage::from_pixel(100, 70, Rgb([200, 40, 90]));
        let dst = resize_to_square(&src, 128).unwrap();
        assert_eq!(dst.dimensions(), (128, 128));
        for p in dst.pixels() {
            assert_eq!(*p, Rgb([200, 40, 90]));
        }
    }

    #[test]
    fn same_size_is_a_copy() {
        let mut src = RgbImage::new(4, 4);
        src.put_pixel(1, 2, Rgb([1, 2, 3]));
        let dst = resize_rgb_image(&src, 4, 4).unwrap();
        assert_eq!(dst, src);
    }
}
