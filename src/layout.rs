//! Geometry of the alien formation.
//!
//! Pure functions only: the same screen and alien sizes always produce the
//! same grid.

use crate::error::LayoutError;

/// Grid dimensions and the pixel offset of its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub cols: usize,
    pub rows: usize,
    pub x_offset: u32,
    pub y_offset: u32,
    pub alien_w: u32,
    pub alien_h: u32,
}

impl FleetLayout {
    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    pub fn center_row(&self) -> usize {
        self.rows / 2
    }

    /// Top-left corner of a grid cell in world units.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let x = self.x_offset as f32 + (col as u32 * self.alien_w) as f32;
        let y = self.y_offset as f32 + (row as u32 * self.alien_h) as f32;
        (x, y)
    }
}

/// Number of columns and rows that fit, before any offset is applied.
///
/// Columns are reduced so the grid keeps an odd count and a true center
/// column.  Rows lose two to leave a gap above the ship.  The returned values
/// are signed because the reductions can go below zero.
pub fn fleet_size(alien_w: u32, alien_h: u32, screen_w: u32, screen_h: u32) -> (i64, i64) {
    let raw_cols = i64::from(screen_w / alien_w);
    let raw_rows = i64::from((screen_h / 2) / alien_h);

    let cols = if raw_cols % 2 == 0 { raw_cols - 1 } else { raw_cols - 2 };
    let rows = if raw_rows == 0 { -1 } else { raw_rows - 2 };
    (cols, rows)
}

/// Compute the formation grid centered horizontally on the screen and
/// vertically within its upper half.
///
/// Grids that end up with no column or no row are rejected rather than
/// clamped: an empty formation would count as a cleared level on every tick.
pub fn compute_layout(
    alien_w: u32,
    alien_h: u32,
    screen_w: u32,
    screen_h: u32,
) -> Result<FleetLayout, LayoutError> {
    if alien_w == 0 || alien_h == 0 || screen_w == 0 || screen_h == 0 {
        return Err(LayoutError::ZeroDimension {
            alien_w,
            alien_h,
            screen_w,
            screen_h,
        });
    }

    let (cols, rows) = fleet_size(alien_w, alien_h, screen_w, screen_h);
    if cols < 1 || rows < 1 {
        return Err(LayoutError::DegenerateGrid { cols, rows });
    }
    let (cols, rows) = (cols as usize, rows as usize);

    let fleet_w = cols as u32 * alien_w;
    let fleet_h = rows as u32 * alien_h;
    let x_offset = (screen_w - fleet_w) / 2;
    let y_offset = (screen_h / 2 - fleet_h) / 2;

    Ok(FleetLayout {
        cols,
        rows,
        x_offset,
        y_offset,
        alien_w,
        alien_h,
    })
}
