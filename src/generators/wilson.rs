use rand::Rng;

use crate::{
    error::{MazeError, Result},
    maze::{
        Coord, LatticeMaze, connection::ConnectionList, meta::GenerationMeta, validate_grid_shape,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The cell one step away in this direction, if it is inside the grid.
    fn step(self, coord: Coord, grid_shape: (usize, usize)) -> Option<Coord> {
        let (row, col) = coord;
        let next = match self {
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
        };
        (next.0 < grid_shape.0 && next.1 < grid_shape.1).then_some(next)
    }
}

fn random_cell<R: Rng + ?Sized>(grid_shape: (usize, usize), rng: &mut R) -> Coord {
    (
        rng.random_range(0..grid_shape.0),
        rng.random_range(0..grid_shape.1),
    )
}

/// Picks a random direction, rotating to the next one until it stays inside the grid.
fn random_step<R: Rng + ?Sized>(
    current: Coord,
    grid_shape: (usize, usize),
    rng: &mut R,
) -> Result<(Direction, Coord)> {
    let first = rng.random_range(0..Direction::ALL.len());
    (0..Direction::ALL.len())
        .map(|i| Direction::ALL[(first + i) % Direction::ALL.len()])
        .find_map(|direction| {
            direction
                .step(current, grid_shape)
                .map(|next| (direction, next))
        })
        .ok_or(MazeError::Internal(
            "random walk found no in-bounds neighbor",
        ))
}

/// Generates a uniform spanning tree with Wilson's algorithm.
///
/// Starting from one random cell in the tree, repeatedly random-walk from a cell outside
/// the tree until the walk hits the tree, remembering only the last direction taken out
/// of every cell. Following those directions from the walk's start gives the walk with
/// its loops erased, which is then added to the tree.
pub fn gen_wilson<R: Rng + ?Sized>(grid_shape: (usize, usize), rng: &mut R) -> Result<LatticeMaze> {
    validate_grid_shape(grid_shape)?;
    let (rows, cols) = grid_shape;
    let ravel_index = |c: Coord| c.0 * cols + c.1;

    let mut connection_list = ConnectionList::new(rows, cols);
    let mut connected = vec![false; rows * cols];
    // `None` marks where a walk joined the tree
    let mut direction_matrix: Vec<Option<Direction>> = vec![None; rows * cols];

    connected[ravel_index(random_cell(grid_shape, rng))] = true;
    let mut cells_left = rows * cols - 1;

    while cells_left > 0 {
        // Start from an unconnected cell
        let start = loop {
            let cell = random_cell(grid_shape, rng);
            if !connected[ravel_index(cell)] {
                break cell;
            }
        };

        // Revisiting a cell overwrites its direction, which erases the loop
        let mut current = start;
        let mut n_steps = 0usize;
        while !connected[ravel_index(current)] {
            let (direction, next) = random_step(current, grid_shape, rng)?;
            direction_matrix[ravel_index(current)] = Some(direction);
            current = next;
            n_steps += 1;
        }
        direction_matrix[ravel_index(current)] = None;
        tracing::trace!(
            "[gen_wilson] walk from {:?} joined the tree at {:?} after {} steps",
            start,
            current,
            n_steps
        );

        // Retrace from the start, connecting cells as we go
        let mut current = start;
        while !connected[ravel_index(current)] {
            connected[ravel_index(current)] = true;
            cells_left -= 1;

            let direction = direction_matrix[ravel_index(current)].ok_or(MazeError::Internal(
                "loop-erased walk ended outside the tree",
            ))?;
            let next = direction
                .step(current, grid_shape)
                .ok_or(MazeError::Internal("recorded direction leaves the grid"))?;
            connection_list.open_between(current, next)?;
            current = next;
        }
    }

    tracing::debug!(
        "[gen_wilson] built spanning tree over {}x{} grid",
        rows,
        cols
    );

    let generation_meta = GenerationMeta {
        fully_connected: Some(true),
        ..GenerationMeta::new("gen_wilson", grid_shape)
    };
    Ok(LatticeMaze::new(connection_list, generation_meta))
}
