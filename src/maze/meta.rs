use std::collections::HashSet;

use crate::maze::Coord;

/// Provenance record attached to a maze by the generator that built it.
///
/// `func_name` and `grid_shape` are always set. The remaining fields are filled in
/// by the generators that produce them.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationMeta {
    /// Name of the generator, e.g. `"gen_dfs"`.
    pub func_name: &'static str,
    pub grid_shape: (usize, usize),
    pub start_coord: Option<Coord>,
    pub n_accessible_cells: Option<usize>,
    pub max_tree_depth: Option<usize>,
    pub fully_connected: Option<bool>,
    /// Cells reached during generation (or reachable from `start_coord` for percolation).
    pub visited_cells: Option<HashSet<Coord>>,
    pub percolation_p: Option<f64>,
}

impl GenerationMeta {
    pub fn new(func_name: &'static str, grid_shape: (usize, usize)) -> Self {
        GenerationMeta {
            func_name,
            grid_shape,
            start_coord: None,
            n_accessible_cells: None,
            max_tree_depth: None,
            fully_connected: None,
            visited_cells: None,
            percolation_p: None,
        }
    }
}
