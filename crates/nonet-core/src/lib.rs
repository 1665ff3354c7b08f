//! Propagation-first Sudoku solving engine.
//!
//! A puzzle arrives as an 81-character string ('.' for blanks), becomes a
//! [`Grid`] of candidate sets, and is solved by alternating naked-single
//! elimination across rows, columns and blocks with minimum-remaining-values
//! guesses. Backtracking search is the default; the propagate-then-commit
//! loop is available as [`SolveMode::NoBacktrack`].
//!
//! ```
//! use nonet_core::{Grid, Solver};
//!
//! let puzzle =
//!     "..17..5.9573.241.68..5.1..27..295.18..94..3.56528....7465.8..71...159..49.8..7.5.";
//! let mut grid = Grid::from_string(puzzle).unwrap();
//! Solver::new().solve(&mut grid).unwrap();
//! assert!(grid.is_solved());
//! ```

mod candidates;
mod cell;
mod error;
mod grid;
mod position;
pub mod propagate;
mod solver;

pub use candidates::CandidateSet;
pub use cell::Cell;
pub use error::{ParseError, SolveError};
pub use grid::Grid;
pub use position::Position;
pub use propagate::Forced;
pub use solver::{SolveMode, Solver, Trace, TraceKind};
