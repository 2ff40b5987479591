//! Greedy convergence toward a known target.

use rand::Rng;

use crate::grid::{GridState, Position};

/// Random picks tried when the ideal step is blocked, before the ordered scan.
pub const GATHER_RETRY_LIMIT: usize = 16;

/// Step that moves one cell toward `target` on each unaligned axis.
///
/// Diagonal when both axes differ; `from` itself when already on target.
pub fn ideal_step(from: Position, target: Position) -> Option<Position> {
    let dx = axis_step(from.x, target.x);
    let dy = axis_step(from.y, target.y);
    from.offset(dx, dy)
}

fn axis_step(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Picks the gathering destination from `from`.
///
/// Takes the [`ideal_step`] when it is in bounds and not a wall. Otherwise
/// tries up to [`GATHER_RETRY_LIMIT`] random neighbours from the surrounding
/// 8 cells, then scans the 3×3 neighbourhood (dx outer, dy inner). Returns
/// `from` when nothing is passable.
pub fn choose_gathering_move<R: Rng>(
    grid: &GridState,
    from: Position,
    target: Position,
    rng: &mut R,
) -> Position {
    if let Some(step) = ideal_step(from, target).filter(|p| grid.is_passable(*p)) {
        return step;
    }

    for _ in 0..GATHER_RETRY_LIMIT {
        let dx = rng.gen_range(-1..=1);
        let dy = rng.gen_range(-1..=1);
        if dx == 0 && dy == 0 {
            continue;
        }
        if let Some(pos) = from.offset(dx, dy).filter(|p| grid.is_passable(*p)) {
            return pos;
        }
    }

    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(pos) = from.offset(dx, dy).filter(|p| grid.is_passable(*p)) {
                return pos;
            }
        }
    }

    from
}
