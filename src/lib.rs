pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{Generator, generate_maze, get_maze_with_solution, get_rng};
pub use maze::{
    Coord, LatticeMaze,
    connection::{Axis, ConnectionList},
    meta::GenerationMeta,
    solved::SolvedMaze,
};
