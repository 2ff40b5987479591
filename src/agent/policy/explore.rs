//! Least-visited exploration with score tie-breaking.

use crate::grid::{Direction, GridState, Position};

/// Picks the exploration move from `from`.
///
/// Neighbours are enumerated Up, Down, Left, Right; out-of-bounds and wall
/// cells are dropped. Among the neighbours with the fewest visits, a single
/// candidate is taken regardless of `scores`; several candidates are ranked
/// by `scores[direction.index()]`, keeping the earlier direction on equal
/// scores. Returns `None` when every neighbour is blocked.
pub fn choose_exploration_move(
    grid: &GridState,
    from: Position,
    scores: &[f64],
) -> Option<(Direction, Position)> {
    let candidates: Vec<(Direction, Position, u32)> = Direction::all()
        .into_iter()
        .filter_map(|direction| {
            let (dx, dy) = direction.delta();
            let pos = from.offset(dx, dy)?;
            if !grid.is_passable(pos) {
                return None;
            }
            Some((direction, pos, grid.visits(pos)?))
        })
        .collect();

    let min_visits = candidates
        .iter()
        .map(|(_, _, visits)| *visits)
        .fold(u32::MAX, u32::min);

    let mut least_visited = candidates
        .into_iter()
        .filter(|(_, _, visits)| *visits == min_visits);

    let (mut best_dir, mut best_pos, _) = least_visited.next()?;
    let mut best_score = score_of(scores, best_dir);
    for (direction, pos, _) in least_visited {
        let score = score_of(scores, direction);
        if score > best_score {
            best_dir = direction;
            best_pos = pos;
            best_score = score;
        }
    }

    Some((best_dir, best_pos))
}

fn score_of(scores: &[f64], direction: Direction) -> f64 {
    scores
        .get(direction.index())
        .copied()
        .unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;

    const UNIFORM: [f64; 4] = [0.5, 0.5, 0.5, 0.5];

    #[test]
    fn never_picks_wall_or_out_of_bounds() {
        let mut grid = GridState::new(3);
        grid.set_cell(Position::new(1, 0), CellKind::Wall);
        // Corner (0, 0): Up and Left are outside, Right is a wall.
        let skewed_right = [0.0, 0.0, 0.0, 1.0];
        let choice = choose_exploration_move(&grid, Position::origin(), &skewed_right);
        assert_eq!(choice, Some((Direction::Down, Position::new(0, 1))));
    }

    #[test]
    fn enclosed_agent_stays() {
        let mut grid = GridState::new(3);
        for p in [
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(1, 2),
        ] {
            grid.set_cell(p, CellKind::Wall);
        }
        assert_eq!(
            choose_exploration_move(&grid, Position::new(1, 1), &UNIFORM),
            None
        );
    }

    #[test]
    fn least_visited_wins_over_scores() {
        let mut grid = GridState::new(5);
        let center = Position::new(2, 2);
        // Every neighbour visited except Left.
        grid.record_visit(Position::new(2, 1));
        grid.record_visit(Position::new(2, 3));
        grid.record_visit(Position::new(3, 2));

        let prefers_right = [0.1, 0.1, 0.0, 0.9];
        let a = choose_exploration_move(&grid, center, &UNIFORM);
        let b = choose_exploration_move(&grid, center, &prefers_right);
        assert_eq!(a, Some((Direction::Left, Position::new(1, 2))));
        assert_eq!(a, b);
    }

    #[test]
    fn ties_broken_by_highest_score() {
        let grid = GridState::new(5);
        let center = Position::new(2, 2);
        let prefers_down = [0.2, 0.8, 0.3, 0.1];
        assert_eq!(
            choose_exploration_move(&grid, center, &prefers_down),
            Some((Direction::Down, Position::new(2, 3)))
        );
        let prefers_left = [0.2, 0.1, 0.95, 0.9];
        assert_eq!(
            choose_exploration_move(&grid, center, &prefers_left),
            Some((Direction::Left, Position::new(1, 2)))
        );
    }

    #[test]
    fn equal_scores_keep_enumeration_order() {
        let grid = GridState::new(5);
        assert_eq!(
            choose_exploration_move(&grid, Position::new(2, 2), &UNIFORM),
            Some((Direction::Up, Position::new(2, 1)))
        );
    }

    #[test]
    fn tie_only_among_minimum() {
        let mut grid = GridState::new(5);
        let center = Position::new(2, 2);
        grid.record_visit(Position::new(2, 1));
        grid.record_visit(Position::new(2, 3));
        // Left and Right tie at zero visits; Up has the best score but is visited.
        let scores = [1.0, 0.0, 0.2, 0.6];
        assert_eq!(
            choose_exploration_move(&grid, center, &scores),
            Some((Direction::Right, Position::new(3, 2)))
        );
    }
}
