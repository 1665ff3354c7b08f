//! The solve loop: propagate to a fixed point, then guess, repeat.
//!
//! Guesses use minimum-remaining-values with a row-major tie-break and try
//! candidate digits in ascending order. The default mode backtracks: each
//! guess snapshots the grid and a contradiction reverts to the last choice
//! point. `NoBacktrack` keeps the propagate-then-commit behavior for callers
//! that want "solvable without search" semantics.

use serde::{Deserialize, Serialize};

use crate::propagate::{self, Forced};
use crate::{Grid, Position, SolveError};

/// Whether a wrong guess can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolveMode {
    /// Depth-first search: revert to the last choice point on contradiction.
    #[default]
    Backtrack,
    /// Commit every guess; a contradiction fails the whole attempt.
    NoBacktrack,
}

/// How a traced cell got its digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceKind {
    /// Forced by elimination.
    Deduction,
    /// Chosen at an open cell.
    Guess,
}

/// One solved cell in the order the solver settled it. Diagnostics only;
/// correctness never depends on the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub pos: Position,
    pub value: u8,
    pub kind: TraceKind,
}

impl Trace {
    fn deduced(forced: Forced) -> Self {
        Self {
            pos: forced.pos,
            value: forced.value,
            kind: TraceKind::Deduction,
        }
    }

    fn guessed(pos: Position, value: u8) -> Self {
        Self {
            pos,
            value,
            kind: TraceKind::Guess,
        }
    }
}

/// Stateless solver; all state is per call.
pub struct Solver {
    mode: SolveMode,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// A solver in the default backtracking mode.
    pub fn new() -> Self {
        Self::with_mode(SolveMode::Backtrack)
    }

    pub fn with_mode(mode: SolveMode) -> Self {
        Self { mode }
    }

    /// Solve the grid in place. On success the grid satisfies `is_solved`
    /// and the returned trace lists every cell settled along the winning
    /// path, in order.
    pub fn solve(&self, grid: &mut Grid) -> Result<Vec<Trace>, SolveError> {
        log::debug!(
            "solving: {} givens, {} open cells",
            grid.given_count(),
            grid.empty_count()
        );
        let mut trace = Vec::new();
        match self.mode {
            SolveMode::Backtrack => Self::solve_dfs(grid, &mut trace)?,
            SolveMode::NoBacktrack => Self::solve_forward(grid, &mut trace)?,
        }
        Ok(trace)
    }

    /// Repeated single-step sweeps until no cell is newly forced.
    fn propagate_to_fixed_point(grid: &mut Grid, trace: &mut Vec<Trace>) {
        while let Some(forced) = propagate::sweep(grid, true) {
            trace.push(Trace::deduced(forced));
        }
    }

    fn solve_dfs(grid: &mut Grid, trace: &mut Vec<Trace>) -> Result<(), SolveError> {
        Self::propagate_to_fixed_point(grid, trace);
        if grid.is_unsolvable() {
            return Err(SolveError::Contradiction);
        }
        if grid.is_solved() {
            return Ok(());
        }
        let pos = grid.best_guess().ok_or(SolveError::Contradiction)?;
        let candidates = grid.cell(pos).candidates();
        let snapshot = grid.clone();
        let mark = trace.len();
        for value in candidates.iter() {
            log::debug!("guess {} at {}", value, pos);
            grid.play(pos.row, pos.col, value, false);
            trace.push(Trace::guessed(pos, value));
            match Self::solve_dfs(grid, trace) {
                Ok(()) => return Ok(()),
                Err(SolveError::Contradiction) => {
                    log::debug!("contradiction, reverting guess {} at {}", value, pos);
                    *grid = snapshot.clone();
                    trace.truncate(mark);
                }
            }
        }
        Err(SolveError::Contradiction)
    }

    /// The original loop: every guess is final.
    fn solve_forward(grid: &mut Grid, trace: &mut Vec<Trace>) -> Result<(), SolveError> {
        while !grid.is_solved() {
            Self::propagate_to_fixed_point(grid, trace);
            if grid.is_unsolvable() {
                return Err(SolveError::Contradiction);
            }
            if grid.is_solved() {
                break;
            }
            let pos = grid.best_guess().ok_or(SolveError::Contradiction)?;
            let value = grid
                .cell(pos)
                .candidates()
                .iter()
                .next()
                .ok_or(SolveError::Contradiction)?;
            grid.play(pos.row, pos.col, value, false);
            trace.push(Trace::guessed(pos, value));
        }
        Ok(())
    }
}
