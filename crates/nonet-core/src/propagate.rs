//! Constraint propagation: naked-single elimination across the 27 groups.
//!
//! Each pass collects the digits already placed in a group (the resolved set)
//! and strikes them from the group's open cells. No pair/triple deduction is
//! attempted; everything beyond forced single candidates is left to the
//! solver's search.

use serde::{Deserialize, Serialize};

use crate::{CandidateSet, Grid, Position};

/// A cell forced down to a single candidate during elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forced {
    pub pos: Position,
    pub value: u8,
}

/// Eliminate a group's resolved digits from its open cells.
///
/// With `stop_at_first`, the first cell reduced to a single candidate is
/// returned immediately and the rest of the group is left for a later pass
/// (the incremental "solve one step" mode). Without it the whole group is
/// processed and no single-cell result is reported.
pub fn eliminate_in_group(
    grid: &mut Grid,
    group: &[Position; 9],
    stop_at_first: bool,
) -> Option<Forced> {
    let mut resolved = CandidateSet::empty();
    for &pos in group {
        if let Some(value) = grid.cell(pos).value() {
            if resolved.contains(value) {
                // Two solved cells in one group holding the same digit: the
                // later one loses its candidates so the contradiction is
                // visible to is_unsolvable.
                grid.cell_mut(pos).clear_candidates();
            } else {
                resolved.insert(value);
            }
        }
    }
    for &pos in group {
        let cell = grid.cell_mut(pos);
        if cell.is_solved() {
            continue;
        }
        cell.eliminate(resolved);
        if stop_at_first {
            if let Some(value) = cell.value() {
                return Some(Forced { pos, value });
            }
        }
    }
    None
}

/// Apply `eliminate_in_group` to all rows, then all columns, then all blocks,
/// in that fixed order.
///
/// With `stop_at_first`, the sweep returns as soon as any group forces a
/// cell, so a single invocation is a partial pass; reaching a fixed point
/// takes repeated calls. Without it every group is processed.
pub fn sweep(grid: &mut Grid, stop_at_first: bool) -> Option<Forced> {
    for family in [Grid::rows(), Grid::columns(), Grid::blocks()] {
        for group in &family {
            let forced = eliminate_in_group(grid, group, stop_at_first);
            if stop_at_first && forced.is_some() {
                return forced;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elimination_soundness() {
        let mut grid = Grid::new();
        grid.play(3, 0, 2, true);
        grid.play(3, 4, 6, true);
        let row = Grid::rows()[3];
        eliminate_in_group(&mut grid, &row, false);
        for pos in &row {
            let cell = grid.cell(*pos);
            if !cell.is_solved() {
                assert!(!cell.candidates().contains(2));
                assert!(!cell.candidates().contains(6));
            }
        }
    }

    #[test]
    fn test_full_sweep_returns_no_cell() {
        let mut grid = Grid::new();
        for (col, digit) in (0..8).zip(1..9) {
            grid.play(0, col, digit, true);
        }
        // Full-sweep mode still solves the forced cell, it just does not
        // report it.
        assert_eq!(sweep(&mut grid, false), None);
        assert_eq!(grid.cell(Position::new(0, 8)).value(), Some(9));
    }

    #[test]
    fn test_duplicate_in_row_is_a_contradiction() {
        let mut grid = Grid::new();
        grid.play(0, 0, 5, false);
        grid.play(0, 5, 5, false);
        assert!(!grid.is_unsolvable());
        sweep(&mut grid, false);
        assert!(grid.is_unsolvable());
    }

    #[test]
    fn test_sweep_fixed_order_row_before_column() {
        // Both the last cell of row 0 and the last cell of column 0 are
        // forced; the row family is swept first.
        let mut grid = Grid::new();
        for (col, digit) in (0..8).zip(1..9) {
            grid.play(0, col, digit, true);
        }
        for (row, digit) in (1..8).zip(2..9) {
            grid.play(row, 0, digit, true);
        }
        let forced = sweep(&mut grid, true).unwrap();
        assert_eq!(forced.pos, Position::new(0, 8));
    }
}
