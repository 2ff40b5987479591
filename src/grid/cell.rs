//! Cell classification.

use std::fmt;

/// Identifier of an agent within one episode (its index in spawn order).
pub type AgentId = usize;

/// What a grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    /// The hidden target, not yet reached by any agent.
    Target,
    /// Occupied by the given agent.
    Occupied(AgentId),
    /// The target cell after an agent has reached it.
    Gathered,
}

impl CellKind {
    /// Walls are the only cells agents can never enter.
    pub fn is_passable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// True for the target cell, whether or not it has been reached.
    pub fn is_target(&self) -> bool {
        matches!(self, CellKind::Target | CellKind::Gathered)
    }

    /// Single-character glyph used by the grid renderer.
    pub fn glyph(&self) -> char {
        match self {
            CellKind::Open => '.',
            CellKind::Wall => '|',
            CellKind::Target => 'F',
            CellKind::Occupied(_) => 'S',
            CellKind::Gathered => 'G',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
