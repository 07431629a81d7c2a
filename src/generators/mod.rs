use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;
mod percolation;
mod wilson;

pub use dfs::gen_dfs;
pub use percolation::{gen_dfs_percolation, gen_percolation};
pub use wilson::gen_wilson;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, LatticeMaze, solved::SolvedMaze, validate_coord},
    solvers::generate_random_path,
};

/// Names accepted by [`Generator::from_name`], in dispatch order.
pub const GENERATOR_NAMES: [&str; 4] = [
    "gen_dfs",
    "gen_wilson",
    "gen_percolation",
    "gen_dfs_percolation",
];

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Returns `start_coord` if given and in bounds, otherwise a uniformly random cell.
fn resolve_start_coord<R: Rng + ?Sized>(
    grid_shape: (usize, usize),
    start_coord: Option<Coord>,
    rng: &mut R,
) -> Result<Coord> {
    match start_coord {
        Some(coord) => {
            validate_coord(coord, grid_shape)?;
            Ok(coord)
        }
        None => Ok((
            rng.random_range(0..grid_shape.0),
            rng.random_range(0..grid_shape.1),
        )),
    }
}

/// Options for the randomized depth-first search generator.
#[derive(Debug, Clone, PartialEq)]
pub struct DfsParams {
    /// Stop once this many cells are carved. Defaults to every cell.
    pub n_accessible_cells: Option<usize>,
    /// Depth bound, counted in both directions from the start. Defaults to twice the cell count.
    pub max_tree_depth: Option<usize>,
    /// Without forks the maze is a single corridor.
    pub do_forks: bool,
    /// Defaults to a random cell.
    pub start_coord: Option<Coord>,
}

impl Default for DfsParams {
    fn default() -> Self {
        Self {
            n_accessible_cells: None,
            max_tree_depth: None,
            do_forks: true,
            start_coord: None,
        }
    }
}

/// Options for the percolation generator.
#[derive(Debug, Clone, PartialEq)]
pub struct PercolationParams {
    /// Probability that each edge is open.
    pub p: f64,
    /// Cell whose connected component is recorded. Defaults to a random cell.
    pub start_coord: Option<Coord>,
}

impl Default for PercolationParams {
    fn default() -> Self {
        Self {
            p: 0.4,
            start_coord: None,
        }
    }
}

/// Options for the DFS generator followed by percolation.
#[derive(Debug, Clone, PartialEq)]
pub struct DfsPercolationParams {
    pub p: f64,
    pub n_accessible_cells: Option<usize>,
    pub max_tree_depth: Option<usize>,
    pub start_coord: Option<Coord>,
}

impl Default for DfsPercolationParams {
    fn default() -> Self {
        Self {
            p: 0.4,
            n_accessible_cells: None,
            max_tree_depth: None,
            start_coord: None,
        }
    }
}

/// A maze generation algorithm together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    Dfs(DfsParams),
    Wilson,
    Percolation(PercolationParams),
    DfsPercolation(DfsPercolationParams),
}

impl Generator {
    /// Looks up a generator by its name, with default parameters.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "gen_dfs" => Ok(Generator::Dfs(DfsParams::default())),
            "gen_wilson" => Ok(Generator::Wilson),
            "gen_percolation" => Ok(Generator::Percolation(PercolationParams::default())),
            "gen_dfs_percolation" => Ok(Generator::DfsPercolation(DfsPercolationParams::default())),
            _ => Err(MazeError::UnknownGenerator(name.to_string())),
        }
    }

    /// Name recorded as `func_name` in the generation metadata.
    pub fn name(&self) -> &'static str {
        match self {
            Generator::Dfs(_) => "gen_dfs",
            Generator::Wilson => "gen_wilson",
            Generator::Percolation(_) => "gen_percolation",
            Generator::DfsPercolation(_) => "gen_dfs_percolation",
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        grid_shape: (usize, usize),
        rng: &mut R,
    ) -> Result<LatticeMaze> {
        match self {
            Generator::Dfs(params) => gen_dfs(grid_shape, params, rng),
            Generator::Wilson => gen_wilson(grid_shape, rng),
            Generator::Percolation(params) => gen_percolation(grid_shape, params, rng),
            Generator::DfsPercolation(params) => gen_dfs_percolation(grid_shape, params, rng),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::from_name(s)
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs(_) => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::Percolation(_) => write!(f, "Percolation"),
            Generator::DfsPercolation(_) => write!(f, "DFS with Percolation"),
        }
    }
}

/// Generates a maze with a freshly created RNG, seeded if `seed` is given.
pub fn generate_maze(
    grid_shape: (usize, usize),
    generator: &Generator,
    seed: Option<u64>,
) -> Result<LatticeMaze> {
    let mut rng = get_rng(seed);
    generator.generate(grid_shape, &mut rng)
}

/// Generates a maze and attaches a random shortest path through it.
pub fn get_maze_with_solution<R: Rng + ?Sized>(
    generator: &Generator,
    grid_shape: (usize, usize),
    rng: &mut R,
) -> Result<SolvedMaze> {
    let maze = generator.generate(grid_shape, rng)?;
    let solution = generate_random_path(&maze, rng)?;
    SolvedMaze::from_lattice_maze(maze, solution)
}
