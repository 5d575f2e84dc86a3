use tracing::debug;

use crate::types::{CardRect, GridSpec, HeaderEstimate};

/// Partition an image of `width` x `height` into `rows` x `columns` uniform cells.
///
/// Never fails. Degenerate inputs (zero rows or columns, tiny images) produce
/// zero-sized cells, which the extractor later skips.
pub fn compute_grid(
    width: u32,
    height: u32,
    rows: u32,
    columns: u32,
    header: HeaderEstimate,
) -> GridSpec {
    let cell_width = width.checked_div(columns).unwrap_or(0);

    let (cell_height, header_offset) = match header {
        HeaderEstimate::UsableFraction(fraction) => {
            let usable = height as f64 * fraction;
            let cell_height = if rows > 0 { (usable / rows as f64) as u32 } else { 0 };
            let header_offset = ((height as f64 - usable) / 2.0).max(0.0) as u32;
            (cell_height, header_offset)
        }
        HeaderEstimate::ExtraRows(extra) => {
            let cell_height = height.checked_div(rows.saturating_add(extra)).unwrap_or(0);
            (cell_height, 0)
        }
    };

    debug!(
        "Grid {}x{} over {}x{}: cell {}x{}, header offset {}",
        columns, rows, width, height, cell_width, cell_height, header_offset
    );

    GridSpec {
        cell_width,
        cell_height,
        header_offset,
        columns,
        rows,
    }
}

impl GridSpec {
    /// Rectangle for the card at list position `index`, clipped to the image.
    /// Parts that fall outside the image are dropped, possibly leaving an empty rectangle.
    pub fn cell_rect(&self, index: usize, image_width: u32, image_height: u32) -> CardRect {
        let columns = self.columns.max(1) as usize;
        let row = (index / columns) as u64;
        let col = (index % columns) as u64;

        let x = col * self.cell_width as u64;
        let y = self.header_offset as u64 + row * self.cell_height as u64;

        let x_end = (x + self.cell_width as u64).min(image_width as u64);
        let y_end = (y + self.cell_height as u64).min(image_height as u64);

        let x = x.min(image_width as u64);
        let y = y.min(image_height as u64);

        CardRect {
            x: x as u32,
            y: y as u32,
            width: x_end.saturating_sub(x) as u32,
            height: y_end.saturating_sub(y) as u32,
        }
    }
}
