use std::{
    collections::{HashSet, VecDeque},
    rc::Rc,
};

use super::TrackedCell;
use crate::maze::{Coord, LatticeMaze};

pub fn solve_bfs(maze: &LatticeMaze, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let mut queue = VecDeque::from([Rc::new(TrackedCell {
        coord: start,
        ..Default::default()
    })]);
    let mut visited = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        if current.coord == goal {
            return Some(current.path());
        }

        for neighbor in maze.connection_list().connected_neighbors(current.coord) {
            // Only enqueue each cell the first time it is seen
            if visited.insert(neighbor) {
                queue.push_back(Rc::new(TrackedCell {
                    coord: neighbor,
                    parent: Some(current.clone()),
                    traveling_cost: current.traveling_cost + 1,
                    heuristic_cost: 0,
                }));
            }
        }
    }

    None
}
