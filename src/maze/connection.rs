use std::collections::HashSet;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, get_neighbors},
};

/// Lattice direction of an edge, recorded at the cell with the smaller coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Edge from `(r, c)` to `(r + 1, c)`.
    Down = 0,
    /// Edge from `(r, c)` to `(r, c + 1)`.
    Right = 1,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Down, Axis::Right];
}

/// Open/closed state of every lattice edge, stored as a `2 x rows x cols` boolean array.
///
/// `true` means the edge is open (no wall). Each undirected edge is stored once, at the
/// cell it leaves in the downward or rightward direction. Edges leaving the grid are
/// kept closed by [`ConnectionList::with_boundary_walls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionList {
    data: Box<[bool]>,
    rows: usize,
    cols: usize,
}

impl ConnectionList {
    /// Creates a connection list with every edge closed.
    pub fn new(rows: usize, cols: usize) -> Self {
        ConnectionList {
            data: vec![false; 2 * rows * cols].into_boxed_slice(),
            rows,
            cols,
        }
    }

    /// Creates a connection list by evaluating `f` for every `(axis, coord)` in row-major
    /// order, down axis first. No boundary clamping is applied.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Axis, Coord) -> bool) -> Self {
        let data = Axis::ALL
            .into_iter()
            .flat_map(move |axis| {
                (0..rows).flat_map(move |r| (0..cols).map(move |c| (axis, (r, c))))
            })
            .map(|(axis, coord)| f(axis, coord))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        ConnectionList { data, rows, cols }
    }

    /// Wraps a raw `(2, rows, cols)` array given in row-major order.
    /// The boundary-wall invariant is not enforced here.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<bool>) -> Result<Self> {
        let expected = 2 * rows * cols;
        if data.len() != expected {
            return Err(MazeError::ConnectionListLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(ConnectionList {
            data: data.into_boxed_slice(),
            rows,
            cols,
        })
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Raw values in `(axis, row, col)` row-major order.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    fn ravel_index(&self, axis: Axis, coord: Coord) -> usize {
        (axis as usize * self.rows + coord.0) * self.cols + coord.1
    }

    /// Returns whether the edge leaving `coord` along `axis` is open.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn get(&self, axis: Axis, coord: Coord) -> bool {
        self[(axis, coord)]
    }

    /// # Panics
    /// If `coord` is out of bounds.
    pub fn set(&mut self, axis: Axis, coord: Coord, open: bool) {
        if !self.is_in_bounds(coord) {
            panic!("The given coordinate is out of bounds");
        }
        let idx = self.ravel_index(axis, coord);
        self.data[idx] = open;
    }

    /// Forces every edge pointing outside the grid closed, leaving interior edges as they are.
    /// Only the last row of the down axis and the last column of the right axis are touched.
    pub fn with_boundary_walls(mut self) -> Self {
        if self.rows == 0 || self.cols == 0 {
            return self;
        }
        let (rows, cols) = (self.rows, self.cols);
        (0..cols).for_each(|c| self.set(Axis::Down, (rows - 1, c), false));
        (0..rows).for_each(|r| self.set(Axis::Right, (r, cols - 1), false));
        self
    }

    /// Edge-wise logical OR of two connection lists of the same shape.
    pub fn union(&self, other: &ConnectionList) -> Result<ConnectionList> {
        if self.shape() != other.shape() {
            return Err(MazeError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a || b)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(ConnectionList {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Number of open edges.
    pub fn n_connections(&self) -> usize {
        self.data.iter().filter(|&&open| open).count()
    }

    /// Canonical storage slot of the edge between two orthogonally adjacent cells:
    /// the axis plus the cell with the smaller coordinate.
    /// Returns `None` if the cells are not adjacent.
    pub fn edge_slot(a: Coord, b: Coord) -> Option<(Axis, Coord)> {
        if a.1 == b.1 && a.0.abs_diff(b.0) == 1 {
            // Same column, so the edge points down from the upper cell
            Some((Axis::Down, std::cmp::min_by_key(a, b, |c| c.0)))
        } else if a.0 == b.0 && a.1.abs_diff(b.1) == 1 {
            // Same row, so the edge points right from the left cell
            Some((Axis::Right, std::cmp::min_by_key(a, b, |c| c.1)))
        } else {
            None
        }
    }

    /// Opens the edge between two adjacent in-bounds cells.
    pub fn open_between(&mut self, a: Coord, b: Coord) -> Result<()> {
        for coord in [a, b] {
            if !self.is_in_bounds(coord) {
                return Err(MazeError::CoordOutOfBounds {
                    coord,
                    grid_shape: self.shape(),
                });
            }
        }
        let (axis, from) =
            Self::edge_slot(a, b).ok_or(MazeError::Internal("cells to join are not adjacent"))?;
        self.set(axis, from, true);
        Ok(())
    }

    /// Checks whether `a` and `b` are adjacent, in bounds and joined by an open edge.
    pub fn is_connected(&self, a: Coord, b: Coord) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        match Self::edge_slot(a, b) {
            Some((axis, from)) => self[(axis, from)],
            None => false,
        }
    }

    /// Neighbors of `coord` reachable through an open edge.
    pub fn connected_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        get_neighbors(coord, self.shape()).filter(move |&n| self.is_connected(coord, n))
    }

    /// Number of open edges touching `coord`.
    pub fn degree(&self, coord: Coord) -> usize {
        self.connected_neighbors(coord).count()
    }

    /// Set of cells reachable from `start` through open edges, `start` included.
    /// An out-of-bounds start yields an empty set.
    pub fn connected_component(&self, start: Coord) -> HashSet<Coord> {
        let mut visited = HashSet::new();
        if !self.is_in_bounds(start) {
            return visited;
        }

        visited.insert(start);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            for neighbor in self.connected_neighbors(cell) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        visited
    }
}

impl std::ops::Index<(Axis, Coord)> for ConnectionList {
    type Output = bool;

    fn index(&self, index: (Axis, Coord)) -> &Self::Output {
        let (axis, coord) = index;
        if !self.is_in_bounds(coord) {
            panic!("The given coordinate is out of bounds");
        }
        &self.data[self.ravel_index(axis, coord)]
    }
}
