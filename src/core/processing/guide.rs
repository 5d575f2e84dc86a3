use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::info;

use crate::error::Result;
use crate::io::writers::png::write_rgb_png;
use crate::types::GridSpec;

pub const GUIDE_FILENAME: &str = "extraction-guide.png";

const LINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const LINE_WIDTH: u32 = 2;

/// Overlay the grid cell boundaries on a copy of `image`.
///
/// Vertical lines span the full height, horizontal lines the full width. Lines
/// are centered on the boundary and clipped to the image.
pub fn draw_grid_guide(image: &RgbImage, grid: &GridSpec) -> RgbImage {
    let mut guide = image.clone();
    let (width, height) = guide.dimensions();
    if width == 0 || height == 0 {
        return guide;
    }

    let half = (LINE_WIDTH / 2) as i64;

    for i in 0..=grid.columns as i64 {
        let x = i * grid.cell_width as i64 - half;
        if x >= width as i64 {
            break;
        }
        let rect = Rect::at(x as i32, 0).of_size(LINE_WIDTH, height);
        draw_filled_rect_mut(&mut guide, rect, LINE_COLOR);
        if grid.cell_width == 0 {
            break;
        }
    }

    for i in 0..=grid.rows as i64 {
        let y = grid.header_offset as i64 + i * grid.cell_height as i64 - half;
        if y >= height as i64 {
            break;
        }
        let rect = Rect::at(0, y as i32).of_size(width, LINE_WIDTH);
        draw_filled_rect_mut(&mut guide, rect, LINE_COLOR);
        if grid.cell_height == 0 {
            break;
        }
    }

    guide
}

/// Location of the guide image: next to `output_dir`, not inside it
pub fn guide_path(output_dir: &Path) -> PathBuf {
    output_dir
        .parent()
        .map(|p| p.join(GUIDE_FILENAME))
        .unwrap_or_else(|| PathBuf::from(GUIDE_FILENAME))
}

/// Draw the grid guide and save it next to `output_dir`, creating `output_dir` on the way.
pub fn write_grid_guide(image: &RgbImage, grid: &GridSpec, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = guide_path(output_dir);
    write_rgb_png(&path, &draw_grid_guide(image, grid))?;
    info!("Grid guide written to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::compute_grid;
    use crate::types::HeaderEstimate;

    #[test]
    fn lines_land_on_cell_boundaries() {
        let img = RgbImage::from_pixel(300, 600, Rgb([0, 0, 255]));
        let grid = compute_grid(300, 600, 4, 3, HeaderEstimate::ExtraRows(2));
        let guide = draw_grid_guide(&img, &grid);

        // vertical boundary at x = 100
        assert_eq!(*guide.get_pixel(99, 300), LINE_COLOR);
        assert_eq!(*guide.get_pixel(100, 300), LINE_COLOR);
        // horizontal boundaries start at the top edge
        assert_eq!(*guide.get_pixel(150, 0), LINE_COLOR);
        assert_eq!(*guide.get_pixel(150, 100), LINE_COLOR);
        // last horizontal boundary at 4 * 100
        assert_eq!(*guide.get_pixel(150, 400), LINE_COLOR);
        // inside a cell the source shows through
        assert_eq!(*guide.get_pixel(150, 150), Rgb([0, 0, 255]));
        // the two extra rows below the grid are untouched
        assert_eq!(*guide.get_pixel(150, 450), Rgb([0, 0, 255]));
        assert_eq!(*guide.get_pixel(150, 500), Rgb([0, 0, 255]));
    }

    #[test]
    fn edge_lines_are_clipped_not_dropped() {
        let img = RgbImage::new(300, 600);
        let grid = compute_grid(300, 600, 4, 3, HeaderEstimate::ExtraRows(2));
        let guide = draw_grid_guide(&img, &grid);
        assert_eq!(*guide.get_pixel(0, 10), LINE_COLOR);
        assert_eq!(*guide.get_pixel(299, 10), LINE_COLOR);
    }

    #[test]
    fn zero_sized_cells_draw_one_line_per_axis() {
        let img = RgbImage::from_pixel(300, 600, Rgb([0, 0, 255]));
        let grid = compute_grid(300, 600, u32::MAX, u32::MAX, HeaderEstimate::ExtraRows(2));
        let guide = draw_grid_guide(&img, &grid);
        assert_eq!(*guide.get_pixel(0, 300), LINE_COLOR);
        assert_eq!(*guide.get_pixel(150, 0), LINE_COLOR);
        assert_eq!(*guide.get_pixel(150, 300), Rgb([0, 0, 255]));
    }

    #[test]
    fn guide_lands_beside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("assets").join("units");
        let img = RgbImage::new(30, 60);
        let grid = compute_grid(30, 60, 4, 3, HeaderEstimate::ExtraRows(2));

        let path = write_grid_guide(&img, &grid, &out).unwrap();
        assert_eq!(path, dir.path().join("assets").join(GUIDE_FILENAME));
        assert!(path.is_file());
        assert!(out.is_dir());
    }
}
