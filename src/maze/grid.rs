use super::cell::GridCell;

/// Character-level picture of a maze: `(2 * rows + 1) x (2 * cols + 1)` cells, with a
/// wall or passage between every pair of neighboring maze cells.
pub struct Grid {
    data: Box<[GridCell]>,
    width: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell: GridCell) -> Self {
        let data = vec![cell; width * height].into_boxed_slice();
        Grid { data, width }
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn set(&mut self, coord: (usize, usize), cell: GridCell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// Iterates over the grid one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.data.chunks(self.width.max(1))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
