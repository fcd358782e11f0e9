// canvas.rs - Block-pixel RGBA canvas: cell-to-pixel mapping and redraw

use crate::engine::Change;

/// Side length of one cell's painted block, in pixels.
pub const CELL_SIZE: usize = 4;
/// Distance between the starts of consecutive blocks; the extra pixel
/// carries the gridline.
pub const CELL_PITCH: usize = CELL_SIZE + 1;

const GRIDLINE: [u8; 4] = [192, 192, 192, 255];

/// How many cells fit along one surface dimension, keeping a leading
/// gridline and a full block per cell.
pub fn grid_size_for(surface: usize) -> usize {
    (surface - 1) / CELL_PITCH
}

/// Flat row-major RGBA pixel buffer the host hands to its presenter.
/// Cell blocks sit strictly inside the pitch boundaries, so repainting a
/// cell never touches a gridline pixel.
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn put_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = (x + y * self.width) * 4;
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Paints the static gridlines: every pixel whose x or y is a multiple
    /// of the pitch. Runs once at start-up; cell redraws never overwrite
    /// these pixels, so it never needs to run again.
    pub fn draw_grid(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                if x % CELL_PITCH == 0 || y % CELL_PITCH == 0 {
                    self.put_pixel(x, y, GRIDLINE);
                }
            }
        }
    }

    /// Repaints one cell's interior block: opaque white when alive, opaque
    /// black when dead. The block starts one pixel past the gridline.
    pub fn draw_cell(&mut self, x: i32, y: i32, alive: bool) {
        let level = if alive { 255 } else { 0 };
        let px = x as usize * CELL_PITCH;
        let py = y as usize * CELL_PITCH;
        for j in 1..=CELL_SIZE {
            for i in 1..=CELL_SIZE {
                self.put_pixel(px + i, py + j, [level, level, level, 255]);
            }
        }
    }

    /// Incremental redraw: repaints exactly the cells one step changed.
    pub fn apply(&mut self, changes: &[Change]) {
        for change in changes {
            self.draw_cell(change.x, change.y, change.alive);
        }
    }
}
