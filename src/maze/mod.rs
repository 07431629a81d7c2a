pub mod cell;
pub mod connection;
pub mod grid;
pub mod meta;
pub mod solved;

use std::collections::HashSet;

use crate::{
    error::{MazeError, Result},
    solvers::{Solver, solve_maze},
};
use cell::GridCell;
use connection::{Axis, ConnectionList};
use grid::Grid;
use meta::GenerationMeta;

/// A grid cell as `(row, col)`.
pub type Coord = (usize, usize);

/// Checks that both grid dimensions are positive.
pub fn validate_grid_shape(grid_shape: (usize, usize)) -> Result<()> {
    let (rows, cols) = grid_shape;
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidGridShape { rows, cols });
    }
    Ok(())
}

/// Checks that `coord` lies inside a grid of the given shape.
pub fn validate_coord(coord: Coord, grid_shape: (usize, usize)) -> Result<()> {
    if coord.0 >= grid_shape.0 || coord.1 >= grid_shape.1 {
        return Err(MazeError::CoordOutOfBounds { coord, grid_shape });
    }
    Ok(())
}

/// Get neighbors of a cell, in the order right, left, down, up.
/// A neighbor is considered a cell that is one step away in the cardinal directions.
pub fn get_neighbors(coord: Coord, grid_shape: (usize, usize)) -> impl Iterator<Item = Coord> {
    let (rows, cols) = grid_shape;
    let (r, c) = coord;
    let in_bounds = move |n: &Coord| n.0 < rows && n.1 < cols;
    let neighbors = if in_bounds(&coord) {
        // NOTE: wrapping_sub turns -1 into usize::MAX, which the bounds check filters out.
        // saturating_add can only produce usize::MAX, which is never a valid index either.
        vec![
            (r, c.saturating_add(1)),
            (r, c.wrapping_sub(1)),
            (r.saturating_add(1), c),
            (r.wrapping_sub(1), c),
        ]
    } else {
        vec![]
    };
    neighbors.into_iter().filter(in_bounds)
}

/// A maze on a rectangular lattice: the connection list plus how it was generated.
///
/// Values are built once by a generator and not modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeMaze {
    connection_list: ConnectionList,
    generation_meta: GenerationMeta,
}

impl LatticeMaze {
    pub fn new(connection_list: ConnectionList, generation_meta: GenerationMeta) -> Self {
        LatticeMaze {
            connection_list,
            generation_meta,
        }
    }

    pub fn connection_list(&self) -> &ConnectionList {
        &self.connection_list
    }

    pub fn generation_meta(&self) -> &GenerationMeta {
        &self.generation_meta
    }

    pub fn into_parts(self) -> (ConnectionList, GenerationMeta) {
        (self.connection_list, self.generation_meta)
    }

    /// Grid shape as `(rows, cols)`, taken from the connection list.
    pub fn grid_shape(&self) -> (usize, usize) {
        self.connection_list.shape()
    }

    pub fn n_connections(&self) -> usize {
        self.connection_list.n_connections()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.connection_list.is_in_bounds(coord)
    }

    /// Neighbors of `coord` that can be reached through an open edge.
    pub fn get_coord_neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.connection_list.connected_neighbors(coord).collect()
    }

    /// All cells reachable from `start`, including `start` itself.
    pub fn gen_connected_component_from(&self, start: Coord) -> HashSet<Coord> {
        self.connection_list.connected_component(start)
    }

    /// Shortest path from `start` to `goal`, both included, or `None` if unreachable.
    pub fn find_shortest_path(&self, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        solve_maze(self, Solver::AStar, start, goal)
    }

    /// Renders the maze onto a `(2 * rows + 1) x (2 * cols + 1)` character grid.
    pub fn as_grid(&self) -> Grid {
        let (rows, cols) = self.grid_shape();
        let mut grid = Grid::new(cols * 2 + 1, rows * 2 + 1, GridCell::Wall);
        for r in 0..rows {
            for c in 0..cols {
                grid.set((r * 2 + 1, c * 2 + 1), GridCell::Open);
                if self.connection_list[(Axis::Down, (r, c))] {
                    grid.set((r * 2 + 2, c * 2 + 1), GridCell::Open);
                }
                if self.connection_list[(Axis::Right, (r, c))] {
                    grid.set((r * 2 + 1, c * 2 + 2), GridCell::Open);
                }
            }
        }
        grid
    }
}

impl std::fmt::Display for LatticeMaze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_grid())
    }
}
