use rand::Rng;

use crate::{
    error::{MazeError, Result},
    generators::{DfsParams, DfsPercolationParams, PercolationParams, gen_dfs, resolve_start_coord},
    maze::{LatticeMaze, connection::ConnectionList, meta::GenerationMeta, validate_grid_shape},
};

fn validate_probability(p: f64) -> Result<()> {
    // Written so that NaN is rejected too
    if !(0.0..=1.0).contains(&p) {
        return Err(MazeError::InvalidProbability(p));
    }
    Ok(())
}

/// Opens every edge independently with probability `p`, then closes the boundary edges.
fn sample_edges<R: Rng + ?Sized>(grid_shape: (usize, usize), p: f64, rng: &mut R) -> ConnectionList {
    let (rows, cols) = grid_shape;
    ConnectionList::from_fn(rows, cols, |_, _| rng.random::<f64>() < p).with_boundary_walls()
}

/// Generates a maze by simple bond percolation.
///
/// The result is usually disconnected. `visited_cells` in the metadata holds the
/// component containing the start cell, which is the usable part of the maze.
/// Values of `p` between 0.4 and 0.7 give the most interesting mazes.
pub fn gen_percolation<R: Rng + ?Sized>(
    grid_shape: (usize, usize),
    params: &PercolationParams,
    rng: &mut R,
) -> Result<LatticeMaze> {
    validate_grid_shape(grid_shape)?;
    validate_probability(params.p)?;
    let start_coord = resolve_start_coord(grid_shape, params.start_coord, rng)?;

    let connection_list = sample_edges(grid_shape, params.p, rng);
    let visited_cells = connection_list.connected_component(start_coord);
    tracing::debug!(
        "[gen_percolation] p={} opened {} edges, {} cells reachable from {:?}",
        params.p,
        connection_list.n_connections(),
        visited_cells.len(),
        start_coord
    );

    let generation_meta = GenerationMeta {
        percolation_p: Some(params.p),
        start_coord: Some(start_coord),
        visited_cells: Some(visited_cells),
        ..GenerationMeta::new("gen_percolation", grid_shape)
    };
    Ok(LatticeMaze::new(connection_list, generation_meta))
}

/// Generates a DFS maze, then ORs in a percolation sample to add cycles.
///
/// Tree edges are never removed, so everything the DFS reached stays connected.
/// `visited_cells` is recomputed from the same start over the merged edges.
pub fn gen_dfs_percolation<R: Rng + ?Sized>(
    grid_shape: (usize, usize),
    params: &DfsPercolationParams,
    rng: &mut R,
) -> Result<LatticeMaze> {
    validate_grid_shape(grid_shape)?;
    validate_probability(params.p)?;
    let start_coord = resolve_start_coord(grid_shape, params.start_coord, rng)?;

    let dfs_params = DfsParams {
        n_accessible_cells: params.n_accessible_cells,
        max_tree_depth: params.max_tree_depth,
        do_forks: true,
        start_coord: Some(start_coord),
    };
    let (tree, dfs_meta) = gen_dfs(grid_shape, &dfs_params, rng)?.into_parts();

    let percolated = sample_edges(grid_shape, params.p, rng);
    let connection_list = tree.union(&percolated)?;
    let visited_cells = connection_list.connected_component(start_coord);
    tracing::debug!(
        "[gen_dfs_percolation] p={} added {} edges, {} cells reachable from {:?}",
        params.p,
        connection_list.n_connections() - tree.n_connections(),
        visited_cells.len(),
        start_coord
    );

    let generation_meta = GenerationMeta {
        func_name: "gen_dfs_percolation",
        percolation_p: Some(params.p),
        visited_cells: Some(visited_cells),
        ..dfs_meta
    };
    Ok(LatticeMaze::new(connection_list, generation_meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::get_rng,
        maze::connection::Axis,
    };
    use std::collections::HashSet;

    #[test]
    fn test_zero_probability_is_all_walls() {
        let mut rng = get_rng(Some(0));
        let params = PercolationParams {
            p: 0.0,
            start_coord: Some((0, 0)),
        };
        let maze = gen_percolation((2, 2), &params, &mut rng).unwrap();
        assert!(maze.connection_list().as_slice().iter().all(|&open| !open));
        assert_eq!(maze.gen_connected_component_from((0, 0)), HashSet::from([(0, 0)]));
        assert_eq!(
            maze.generation_meta().visited_cells,
            Some(HashSet::from([(0, 0)]))
        );
    }

    #[test]
    fn test_full_probability_opens_interior() {
        let mut rng = get_rng(Some(0));
        let params = PercolationParams {
            p: 1.0,
            start_coord: None,
        };
        let maze = gen_percolation((4, 3), &params, &mut rng).unwrap();
        let expected = ConnectionList::from_fn(4, 3, |_, _| true).with_boundary_walls();
        assert_eq!(maze.connection_list(), &expected);
        assert_eq!(maze.generation_meta().visited_cells.as_ref().unwrap().len(), 12);
        assert_eq!(maze.generation_meta().percolation_p, Some(1.0));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let mut rng = get_rng(Some(0));
        for p in [-0.1, 1.5, f64::NAN] {
            let params = PercolationParams {
                p,
                start_coord: None,
            };
            assert!(matches!(
                gen_percolation((3, 3), &params, &mut rng),
                Err(MazeError::InvalidProbability(_))
            ));
            let params = DfsPercolationParams {
                p,
                ..DfsPercolationParams::default()
            };
            assert!(matches!(
                gen_dfs_percolation((3, 3), &params, &mut rng),
                Err(MazeError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn test_hybrid_keeps_tree_edges() {
        for seed in 0..5 {
            let start_coord = Some((1, 2));
            // With a fixed start both calls draw the same DFS tree from the same seed
            let tree = gen_dfs(
                (6, 6),
                &DfsParams {
                    n_accessible_cells: Some(20),
                    start_coord,
                    ..DfsParams::default()
                },
                &mut get_rng(Some(seed)),
            )
            .unwrap();
            let hybrid = gen_dfs_percolation(
                (6, 6),
                &DfsPercolationParams {
                    p: 0.3,
                    n_accessible_cells: Some(20),
                    start_coord,
                    ..DfsPercolationParams::default()
                },
                &mut get_rng(Some(seed)),
            )
            .unwrap();

            for axis in Axis::ALL {
                for r in 0..6 {
                    for c in 0..6 {
                        if tree.connection_list()[(axis, (r, c))] {
                            assert!(hybrid.connection_list()[(axis, (r, c))]);
                        }
                    }
                }
            }
            let before = tree.generation_meta().visited_cells.as_ref().unwrap();
            let after = hybrid.generation_meta().visited_cells.as_ref().unwrap();
            assert!(after.is_superset(before));

            let meta = hybrid.generation_meta();
            assert_eq!(meta.func_name, "gen_dfs_percolation");
            assert_eq!(meta.percolation_p, Some(0.3));
            assert_eq!(meta.start_coord, start_coord);
            assert_eq!(meta.n_accessible_cells, Some(20));
        }
    }

    #[test]
    fn test_hybrid_huge_depth_limit() {
        let params = DfsPercolationParams {
            p: 0.0,
            max_tree_depth: Some(usize::MAX),
            start_coord: Some((3, 3)),
            ..DfsPercolationParams::default()
        };
        let maze = gen_dfs_percolation((4, 4), &params, &mut get_rng(Some(8))).unwrap();
        assert_eq!(maze.n_connections(), 15);
        assert_eq!(maze.generation_meta().visited_cells.as_ref().unwrap().len(), 16);
    }

    #[test]
    fn test_hybrid_zero_probability_is_plain_dfs() {
        let params = DfsPercolationParams {
            p: 0.0,
            start_coord: Some((0, 0)),
            ..DfsPercolationParams::default()
        };
        let maze = gen_dfs_percolation((5, 4), &params, &mut get_rng(Some(3))).unwrap();
        assert_eq!(maze.n_connections(), 19);
        assert_eq!(maze.generation_meta().visited_cells.as_ref().unwrap().len(), 20);
    }
}
