use std::{io::Write, process::ExitCode};

use crossterm::{queue, style};
use lattice_maze::{
    Generator, SolvedMaze,
    generators::{DfsParams, GENERATOR_NAMES},
    get_maze_with_solution, get_rng,
};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file so the maze printed on stdout stays clean.
/// Set `DEBUG=1` to include per-generator debug output.
fn init_tracing() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "lattice-maze.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let max_level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(max_level)
        .init();
    guard
}

fn render(solved: &SolvedMaze) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    for row in solved.as_grid().rows() {
        for cell in row {
            queue!(stdout, style::PrintStyledContent(cell.styled()))?;
        }
        queue!(stdout, style::Print("\n"))?;
    }
    stdout.flush()
}

fn generate_solved(
    generator: &Generator,
    grid_shape: (usize, usize),
    seed: Option<u64>,
) -> lattice_maze::Result<SolvedMaze> {
    tracing::info!(
        "Generating {}x{} maze with {} (seed: {:?})",
        grid_shape.0,
        grid_shape.1,
        generator,
        seed
    );
    let mut rng = get_rng(seed);
    get_maze_with_solution(generator, grid_shape, &mut rng)
}

fn main() -> std::io::Result<ExitCode> {
    let _guard = init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name

    // Parse the grid dimensions
    let dims = args
        .by_ref()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();
    if dims.len() != 2 {
        eprintln!("Usage: lattice-maze <rows> <cols> [generator] [seed]");
        return Ok(ExitCode::SUCCESS);
    }
    let grid_shape = (dims[0], dims[1]);

    let generator = match args.next() {
        Some(name) => match name.parse::<Generator>() {
            Ok(generator) => generator,
            Err(err) => {
                eprintln!("{err}. Available: {}", GENERATOR_NAMES.join(", "));
                return Ok(ExitCode::SUCCESS);
            }
        },
        None => Generator::Dfs(DfsParams::default()),
    };
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let solved = match generate_solved(&generator, grid_shape, seed) {
        Ok(solved) => solved,
        Err(err) => {
            tracing::error!("Maze generation failed: {}", err);
            eprintln!("Failed to generate maze: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    render(&solved)?;
    println!(
        "{}: {:?} -> {:?} in {} steps",
        generator,
        solved.start_pos(),
        solved.end_pos(),
        solved.solution().len() - 1
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_maze::{MazeError, generators::PercolationParams};

    #[test]
    fn test_generate_solved() {
        let solved = generate_solved(&Generator::Wilson, (4, 4), Some(3)).unwrap();
        assert_ne!(solved.start_pos(), solved.end_pos());
    }

    #[test]
    fn test_isolated_start_fails() {
        // With every edge closed no cell has a partner to route to
        let generator = Generator::Percolation(PercolationParams {
            p: 0.0,
            start_coord: None,
        });
        assert_eq!(
            generate_solved(&generator, (3, 3), Some(0)),
            Err(MazeError::NoValidEndpoints)
        );
    }
}
