// grid.rs - Toroidal field: wrapped indexing over a dual-buffered cell grid

/// Wraps `value` into the inclusive range `[lower, upper]`.
///
/// Modular arithmetic over the range: one step past `upper` lands on
/// `lower`, one step below `lower` lands on `upper`. Total over all inputs.
pub fn wrap(value: i32, lower: i32, upper: i32) -> i32 {
    let span = upper - lower + 1;
    lower + (value - lower).rem_euclid(span)
}

/// Fixed-size toroidal grid of binary cells, addressed by (x, y).
///
/// Holds two equally shaped buffers: the current generation and the one
/// being computed. `swap` flips the active index instead of copying, so
/// stepping never allocates.
pub struct Field {
    width: i32,
    height: i32,
    cells: [Vec<bool>; 2],
    current: usize,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "field dimensions must be positive");
        let size = width as usize * height as usize;
        Field {
            width,
            height,
            cells: [vec![false; size], vec![false; size]],
            current: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let x = wrap(x, 0, self.width - 1);
        let y = wrap(y, 0, self.height - 1);
        (x + y * self.width) as usize
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.cells[self.current][self.index(x, y)]
    }

    /// Marks a cell alive in the current generation. Out-of-range
    /// coordinates wrap; this can never fail.
    pub fn set_alive(&mut self, x: i32, y: i32) {
        let i = self.index(x, y);
        self.cells[self.current][i] = true;
    }

    /// Live cells among the 8 surrounding coordinates, each axis wrapped
    /// independently so a corner cell sees its diagonal mirror.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if (nx != x || ny != y) && self.is_alive(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Writes into the buffer that becomes current after `swap`.
    pub fn set_next(&mut self, x: i32, y: i32, alive: bool) {
        let i = self.index(x, y);
        self.cells[1 - self.current][i] = alive;
    }

    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_identity_in_range() {
        for v in 0..10 {
            assert_eq!(wrap(v, 0, 9), v);
        }
        assert_eq!(wrap(3, 3, 5), 3);
        assert_eq!(wrap(5, 3, 5), 5);
    }

    #[test]
    fn wrap_steps_past_the_edges() {
        assert_eq!(wrap(10, 0, 9), 0);
        assert_eq!(wrap(-1, 0, 9), 9);
        assert_eq!(wrap(25, 0, 9), 5);
        assert_eq!(wrap(-13, 0, 9), 7);
        assert_eq!(wrap(6, 3, 5), 3);
        assert_eq!(wrap(2, 3, 5), 5);
    }

    #[test]
    fn wrap_is_total_over_a_wide_input_range() {
        for v in -100..100 {
            let w = wrap(v, 0, 6);
            assert!((0..=6).contains(&w), "wrap({v}) = {w} out of range");
        }
    }

    #[test]
    fn corner_cell_is_counted_across_both_seams() {
        let mut field = Field::new(8, 6);
        field.set_alive(0, 0);
        assert_eq!(field.live_neighbors(7, 0), 1);
        assert_eq!(field.live_neighbors(0, 5), 1);
        assert_eq!(field.live_neighbors(7, 5), 1);
        assert_eq!(field.live_neighbors(3, 3), 0);
    }

    #[test]
    fn set_alive_wraps_out_of_range_coordinates() {
        let mut field = Field::new(5, 5);
        field.set_alive(-1, 7);
        assert!(field.is_alive(4, 2));
    }

    #[test]
    fn swap_exposes_the_written_buffer() {
        let mut field = Field::new(3, 3);
        field.set_next(1, 1, true);
        assert!(!field.is_alive(1, 1));
        field.swap();
        assert!(field.is_alive(1, 1));
    }
}
