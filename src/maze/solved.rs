use crate::{
    error::{MazeError, Result},
    maze::{Coord, LatticeMaze, cell::GridCell, grid::Grid},
};

/// A maze together with a path of adjacent, connected cells through it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedMaze {
    maze: LatticeMaze,
    solution: Vec<Coord>,
}

impl SolvedMaze {
    /// Attaches `solution` to `maze`.
    ///
    /// The solution must be non-empty, in bounds, and every consecutive pair of
    /// coordinates must be joined by an open edge.
    pub fn from_lattice_maze(maze: LatticeMaze, solution: Vec<Coord>) -> Result<Self> {
        if solution.is_empty() {
            return Err(MazeError::InvalidSolution("solution is empty".to_string()));
        }
        if let Some(&coord) = solution.iter().find(|&&c| !maze.is_in_bounds(c)) {
            return Err(MazeError::CoordOutOfBounds {
                coord,
                grid_shape: maze.grid_shape(),
            });
        }
        if let Some(pair) = solution
            .windows(2)
            .find(|pair| !maze.connection_list().is_connected(pair[0], pair[1]))
        {
            return Err(MazeError::InvalidSolution(format!(
                "no open edge between {:?} and {:?}",
                pair[0], pair[1]
            )));
        }
        Ok(SolvedMaze { maze, solution })
    }

    pub fn maze(&self) -> &LatticeMaze {
        &self.maze
    }

    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    pub fn start_pos(&self) -> Coord {
        self.solution[0]
    }

    pub fn end_pos(&self) -> Coord {
        self.solution[self.solution.len() - 1]
    }

    /// Renders the maze with the solution overlaid.
    pub fn as_grid(&self) -> Grid {
        let mut grid = self.maze.as_grid();
        let to_grid = |c: Coord| (c.0 * 2 + 1, c.1 * 2 + 1);
        for pair in self.solution.windows(2) {
            let (a, b) = (to_grid(pair[0]), to_grid(pair[1]));
            grid.set(a, GridCell::Path);
            // The passage between two cells sits halfway between them
            grid.set(((a.0 + b.0) / 2, (a.1 + b.1) / 2), GridCell::Path);
        }
        grid.set(to_grid(self.end_pos()), GridCell::End);
        grid.set(to_grid(self.start_pos()), GridCell::Start);
        grid
    }
}

impl std::fmt::Display for SolvedMaze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_grid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{connection::ConnectionList, meta::GenerationMeta};

    fn line_maze() -> LatticeMaze {
        let mut clist = ConnectionList::new(1, 3);
        clist.open_between((0, 0), (0, 1)).unwrap();
        clist.open_between((0, 1), (0, 2)).unwrap();
        LatticeMaze::new(clist, GenerationMeta::new("manual", (1, 3)))
    }

    #[test]
    fn test_valid_solution() {
        let solved = SolvedMaze::from_lattice_maze(line_maze(), vec![(0, 0), (0, 1), (0, 2)])
            .unwrap();
        assert_eq!(solved.start_pos(), (0, 0));
        assert_eq!(solved.end_pos(), (0, 2));
        assert_eq!(solved.to_string(), "#######\n#SXXXE#\n#######\n");
    }

    #[test]
    fn test_rejects_bad_solutions() {
        assert!(matches!(
            SolvedMaze::from_lattice_maze(line_maze(), vec![]),
            Err(MazeError::InvalidSolution(_))
        ));
        assert!(matches!(
            SolvedMaze::from_lattice_maze(line_maze(), vec![(0, 0), (0, 2)]),
            Err(MazeError::InvalidSolution(_))
        ));
        assert!(matches!(
            SolvedMaze::from_lattice_maze(line_maze(), vec![(0, 2), (0, 3)]),
            Err(MazeError::CoordOutOfBounds { .. })
        ));
    }
}
