use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    rc::Rc,
};

use super::TrackedCell;
use crate::maze::{Coord, LatticeMaze};

pub fn solve_astar(maze: &LatticeMaze, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    // Manhattan distance never overestimates on a 4-connected lattice
    let heuristic = |c: Coord| c.0.abs_diff(goal.0) + c.1.abs_diff(goal.1);

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<Rc<TrackedCell>>> = BinaryHeap::new();
    pq.push(Reverse(Rc::new(TrackedCell {
        coord: start,
        parent: None,
        traveling_cost: 0,
        heuristic_cost: heuristic(start),
    })));

    // Hash map to track the minimum cost to reach each cell
    let mut costs = HashMap::from([(start, 0)]);
    let mut closed = HashSet::new();

    while let Some(Reverse(current)) = pq.pop() {
        if current.coord == goal {
            return Some(current.path());
        }
        if !closed.insert(current.coord) {
            // Stale queue entry, a cheaper one was already expanded
            continue;
        }

        let new_cost = current.traveling_cost + 1;
        for neighbor in maze.connection_list().connected_neighbors(current.coord) {
            let is_cheaper = costs
                .get(&neighbor)
                .is_none_or(|&existing_cost| new_cost < existing_cost);
            if is_cheaper {
                costs.insert(neighbor, new_cost);
                pq.push(Reverse(Rc::new(TrackedCell {
                    coord: neighbor,
                    parent: Some(current.clone()),
                    traveling_cost: new_cost,
                    heuristic_cost: heuristic(neighbor),
                })));
            }
        }
    }

    None
}
