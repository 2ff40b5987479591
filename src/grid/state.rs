//! Mutable grid state: cell kinds and visit counters.

use std::fmt;

use super::cell::CellKind;
use super::types::Position;

/// Square grid of cells with a parallel visit counter per cell.
///
/// Cells are stored row-major and addressed by [`Position`]. Every accessor
/// is bounds-checked: reads outside the grid return `None`, writes outside
/// the grid are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    size: usize,
    cells: Vec<CellKind>,
    visits: Vec<u32>,
    target: Option<Position>,
}

impl GridState {
    /// Creates an all-open grid with zero visits.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellKind::Open; size * size],
            visits: vec![0; size * size],
            target: None,
        }
    }

    /// Resets every cell to `Open` and every visit counter to zero.
    pub fn reset(&mut self) {
        self.cells.fill(CellKind::Open);
        self.visits.fill(0);
        self.target = None;
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y * self.size + pos.x)
        } else {
            None
        }
    }

    /// Returns true if `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Returns the kind of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Option<CellKind> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrites the cell at `pos`.
    ///
    /// Writing `Target` moves the target: a previous `Target` cell is
    /// reopened so that exactly one target exists.
    pub fn set_cell(&mut self, pos: Position, kind: CellKind) {
        let Some(i) = self.index(pos) else {
            return;
        };
        if kind == CellKind::Target {
            if let Some(old) = self.target.filter(|old| *old != pos) {
                if self.cell(old) == Some(CellKind::Target) {
                    self.set_cell(old, CellKind::Open);
                }
            }
            self.target = Some(pos);
        }
        self.cells[i] = kind;
    }

    /// Returns true if `pos` is inside the grid and not a wall.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| c.is_passable())
    }

    /// Location of the target cell, if one has been placed.
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Number of times agents have entered `pos` this episode.
    pub fn visits(&self, pos: Position) -> Option<u32> {
        self.index(pos).map(|i| self.visits[i])
    }

    /// Increments the visit counter at `pos`.
    pub fn record_visit(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.visits[i] = self.visits[i].saturating_add(1);
        }
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Position::new(x, y)))
    }

    /// Positions currently showing `kind`.
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.positions()
            .filter(|p| self.cell(*p) == Some(kind))
            .collect()
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
