//! A* over the 4-connected tile grid.
//!
//! Step cost is 1 and the heuristic is Manhattan distance, which is admissible
//! here. Intermediate cells must be enterable; the goal cell itself is exempt
//! from the occupancy rule once the search is running.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::state::{Grid, Position};

/// Shortest path from `start` to `goal`, both ends included.
///
/// Returns `None` when either end is out of bounds, when the goal cannot be
/// entered (unless it is the start), or when no route exists.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }
    if !grid.can_enter(goal) {
        return None;
    }

    let width = grid.width() as usize;
    let cells = width * grid.height() as usize;
    let index = |position: Position| position.y as usize * width + position.x as usize;

    let mut g_score = vec![u32::MAX; cells];
    let mut came_from: Vec<Option<Position>> = vec![None; cells];
    let mut closed = vec![false; cells];
    let mut open: BinaryHeap<Reverse<(u32, Position)>> = BinaryHeap::new();

    g_score[index(start)] = 0;
    open.push(Reverse((start.manhattan_distance(goal), start)));

    while let Some(Reverse((_, current))) = open.pop() {
        if current == goal {
            return Some(reconstruct(&came_from, index, goal));
        }
        let current_index = index(current);
        if closed[current_index] {
            continue;
        }
        closed[current_index] = true;

        let tentative = g_score[current_index] + 1;
        for neighbor in current.orthogonal_neighbors() {
            let passable =
                grid.in_bounds(neighbor) && (neighbor == goal || grid.can_enter(neighbor));
            if !passable {
                continue;
            }
            let neighbor_index = index(neighbor);
            if closed[neighbor_index] || tentative >= g_score[neighbor_index] {
                continue;
            }
            g_score[neighbor_index] = tentative;
            came_from[neighbor_index] = Some(current);
            open.push(Reverse((tentative + neighbor.manhattan_distance(goal), neighbor)));
        }
    }

    None
}

fn reconstruct(
    came_from: &[Option<Position>],
    index: impl Fn(Position) -> usize,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = came_from[index(current)] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// First move along the shortest path, or `None` if there is nowhere to go.
pub fn next_step(grid: &Grid, start: Position, goal: Position) -> Option<Position> {
    find_path(grid, start, goal)?.get(1).copied()
}

/// First move toward `goal` that ends next to it when the goal cell itself
/// is occupied.
///
/// Returns `None` when the actor already stands next to (or on) the goal, or
/// when every free neighbour of the goal is unreachable.
pub fn approach_step(grid: &Grid, start: Position, goal: Position) -> Option<Position> {
    if start.manhattan_distance(goal) <= 1 {
        return None;
    }
    if grid.can_enter(goal) {
        return next_step(grid, start, goal);
    }
    goal.orthogonal_neighbors()
        .into_iter()
        .filter_map(|landing| find_path(grid, start, landing))
        .min_by_key(Vec::len)
        .and_then(|path| path.get(1).copied())
}

/// True when a path exists or the goal can be approached.
pub fn is_reachable(grid: &Grid, start: Position, goal: Position) -> bool {
    start.manhattan_distance(goal) <= 1
        || find_path(grid, start, goal).is_some()
        || approach_step(grid, start, goal).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, Tile};

    #[test]
    fn straight_line_length_is_manhattan_plus_one() {
        let grid = Grid::walled(9, 5);
        let start = Position::new(1, 2);
        let goal = Position::new(7, 2);

        let path = find_path(&grid, start, goal).unwrap();

        assert_eq!(path.len() as u32, start.manhattan_distance(goal) + 1);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
    }

    #[test]
    fn path_never_crosses_walls() {
        let mut grid = Grid::walled(7, 7);
        for y in 1..5 {
            grid.set_tile(Position::new(3, y), Tile::Wall).unwrap();
        }

        let path = find_path(&grid, Position::new(1, 1), Position::new(5, 1)).unwrap();

        assert!(path.iter().all(|cell| grid.tile(*cell).is_floor()));
        assert!(path.windows(2).all(|pair| pair[0].is_adjacent(pair[1])));
        assert!(path.contains(&Position::new(3, 5)));
    }

    #[test]
    fn start_equal_goal_is_single_node() {
        let grid = Grid::walled(5, 5);
        let here = Position::new(2, 2);
        assert_eq!(find_path(&grid, here, here), Some(vec![here]));
    }

    #[test]
    fn blocked_goal_fails_without_search() {
        let mut grid = Grid::walled(5, 5);
        grid.set_entity(Position::new(3, 3), Some(EntityId(4))).unwrap();

        assert_eq!(find_path(&grid, Position::new(1, 1), Position::new(3, 3)), None);
        assert_eq!(find_path(&grid, Position::new(1, 1), Position::new(0, 0)), None);
        assert_eq!(find_path(&grid, Position::new(1, 1), Position::new(9, 9)), None);
    }

    #[test]
    fn sealed_goal_is_unreachable() {
        let mut grid = Grid::walled(7, 7);
        for cell in Position::new(4, 4).orthogonal_neighbors() {
            grid.set_tile(cell, Tile::Wall).unwrap();
        }
        assert_eq!(find_path(&grid, Position::new(1, 1), Position::new(4, 4)), None);
    }

    #[test]
    fn occupied_cells_are_obstacles() {
        let mut grid = Grid::walled(5, 3);
        grid.set_entity(Position::new(2, 1), Some(EntityId(1))).unwrap();
        assert_eq!(find_path(&grid, Position::new(1, 1), Position::new(3, 1)), None);
    }

    #[test]
    fn approach_stops_next_to_occupied_goal() {
        let mut grid = Grid::walled(7, 3);
        grid.set_entity(Position::new(5, 1), Some(EntityId(2))).unwrap();

        assert_eq!(
            approach_step(&grid, Position::new(1, 1), Position::new(5, 1)),
            Some(Position::new(2, 1))
        );
        assert_eq!(approach_step(&grid, Position::new(4, 1), Position::new(5, 1)), None);
    }
}
