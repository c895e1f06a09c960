use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::query::{SortColumn, SortDirection};

/// Outcome of one click on a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortStep {
    Asc,
    Desc,
    None,
}

impl SortStep {
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            SortStep::Asc => Some(SortDirection::Asc),
            SortStep::Desc => Some(SortDirection::Desc),
            SortStep::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Ascending(SortColumn),
    Descending(SortColumn),
}

/// Tri-state (ascending, descending, unsorted) sort toggle shared by all
/// columns of the products table. Only one column is tracked at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortCycle {
    phase: Phase,
}

impl SortCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, column: SortColumn) -> SortStep {
        let (next, step) = match self.phase {
            Phase::Ascending(active) if active == column => (Phase::Descending(column), SortStep::Desc),
            Phase::Descending(active) if active == column => (Phase::Idle, SortStep::None),
            _ => (Phase::Ascending(column), SortStep::Asc),
        };
        self.phase = next;
        step
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn active_column(&self) -> Option<SortColumn> {
        match self.phase {
            Phase::Idle => None,
            Phase::Ascending(column) | Phase::Descending(column) => Some(column),
        }
    }

    pub fn state(&self) -> SortCycleState {
        let phase = match self.phase {
            Phase::Idle => 0,
            Phase::Ascending(_) => 1,
            Phase::Descending(_) => 2,
        };
        SortCycleState {
            active_column: self.active_column().map(|c| c.label().to_string()),
            phase,
        }
    }
}

/// Snapshot of [`SortCycle`] handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SortCycleState {
    pub active_column: Option<String>,
    /// 0 unsorted, 1 ascending, 2 descending.
    pub phase: u8,
}
