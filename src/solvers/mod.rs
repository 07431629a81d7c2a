use std::rc::Rc;

use rand::Rng;

mod astar;
mod bfs;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, LatticeMaze},
};
use astar::solve_astar;
use bfs::solve_bfs;

/// Number of endpoint pairs tried by [`generate_random_path`] before giving up.
const MAX_ENDPOINT_DRAWS: usize = 32;

#[derive(Default)]
struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Coord,
    /// The parent cell from which this cell was reached
    parent: Option<Rc<TrackedCell>>,
    /// Cost to reach this cell from the start
    traveling_cost: usize,
    /// Estimated cost to reach the goal from this cell (for A* algorithm)
    heuristic_cost: usize,
}

impl TrackedCell {
    fn total_cost(&self) -> usize {
        self.traveling_cost + self.heuristic_cost
    }

    /// Walks the parent chain back to the start and returns the path start-first.
    fn path(&self) -> Vec<Coord> {
        let mut path = vec![self.coord];
        let mut parent = self.parent.as_ref();
        while let Some(cell) = parent {
            path.push(cell.coord);
            parent = cell.parent.as_ref();
        }
        path.reverse();
        path
    }
}

impl PartialEq for TrackedCell {
    fn eq(&self, other: &Self) -> bool {
        self.total_cost() == other.total_cost() && self.coord == other.coord
    }
}

impl Eq for TrackedCell {}

impl PartialOrd for TrackedCell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrackedCell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_cost()
            .cmp(&other.total_cost())
            .then_with(|| self.coord.cmp(&other.coord))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    AStar,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// Finds a shortest path from `start` to `goal` through open edges.
/// Returns `None` if either endpoint is out of bounds or the goal is unreachable.
pub fn solve_maze(
    maze: &LatticeMaze,
    solver: Solver,
    start: Coord,
    goal: Coord,
) -> Option<Vec<Coord>> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return None;
    }

    match solver {
        Solver::Bfs => solve_bfs(maze, start, goal),
        Solver::AStar => solve_astar(maze, start, goal),
    }
}

/// Picks two distinct endpoints and returns the shortest path between them.
///
/// Endpoints come from `visited_cells` in the generation metadata when present,
/// otherwise from the whole grid.
pub fn generate_random_path<R: Rng + ?Sized>(maze: &LatticeMaze, rng: &mut R) -> Result<Vec<Coord>> {
    let mut candidates: Vec<Coord> = match &maze.generation_meta().visited_cells {
        Some(cells) => cells.iter().copied().collect(),
        None => {
            let (rows, cols) = maze.grid_shape();
            (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))).collect()
        }
    };
    if candidates.len() < 2 {
        return Err(MazeError::NoValidEndpoints);
    }
    // Set iteration order is not stable across runs, sort so seeded draws are reproducible
    candidates.sort_unstable();

    for _ in 0..MAX_ENDPOINT_DRAWS {
        let picked = rand::seq::index::sample(rng, candidates.len(), 2);
        let (start, goal) = (candidates[picked.index(0)], candidates[picked.index(1)]);
        if let Some(path) = maze.find_shortest_path(start, goal) {
            return Ok(path);
        }
        tracing::debug!(
            "[random path] {:?} and {:?} are not connected, drawing again",
            start,
            goal
        );
    }
    Err(MazeError::NoValidEndpoints)
}
