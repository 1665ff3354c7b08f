use crate::propagate::{self, Forced};
use crate::{Cell, ParseError, Position};

/// The 9x9 board: 81 cells in row-major order.
///
/// One grid is created per puzzle attempt and mutated in place; `play` is the
/// single mutation entry point for clues, human moves and solver guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Grid {
    /// An empty grid: every cell open with all nine candidates.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|k| Cell::new(Position::from_index(k))),
        }
    }

    /// Parse an 81-character puzzle string ('.' for blank, '1'-'9' for clues),
    /// row-major. Clues are placed frozen.
    pub fn from_string(puzzle: &str) -> Result<Self, ParseError> {
        let len = puzzle.chars().count();
        if len != 81 {
            return Err(ParseError::BadLength { len });
        }
        let mut grid = Self::new();
        for (index, ch) in puzzle.chars().enumerate() {
            match ch {
                '.' => {}
                '1'..='9' => {
                    let digit = ch as u8 - b'0';
                    let pos = Position::from_index(index);
                    grid.play(pos.row, pos.col, digit, true);
                }
                _ => return Err(ParseError::BadCharacter { ch, index }),
            }
        }
        Ok(grid)
    }

    /// The inverse of `from_string`: solved cells as digits, open cells as '.'.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.value() {
                Some(d) => (b'0' + d) as char,
                None => '.',
            })
            .collect()
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.index()]
    }

    /// Assign `digit` to the cell at (row, col) and mark it solved; with
    /// `as_clue` the cell is additionally frozen as a given.
    ///
    /// A digit no longer in the cell's candidate set is silently ignored and
    /// `false` is returned; this serves interactive correction, where a stale
    /// move is a no-op rather than a hard failure.
    pub fn play(&mut self, row: usize, col: usize, digit: u8, as_clue: bool) -> bool {
        let pos = Position::new(row, col);
        let cell = self.cell_mut(pos);
        if !cell.candidates().contains(digit) {
            return false;
        }
        cell.assign(digit);
        if as_clue {
            cell.mark_given();
        }
        true
    }

    /// The nine row groups, each nine positions.
    pub fn rows() -> [[Position; 9]; 9] {
        std::array::from_fn(|r| std::array::from_fn(|c| Position::new(r, c)))
    }

    /// The nine column groups.
    pub fn columns() -> [[Position; 9]; 9] {
        std::array::from_fn(|c| std::array::from_fn(|r| Position::new(r, c)))
    }

    /// The nine 3x3 block groups; block (bi, bj) covers rows 3bi..3bi+2 and
    /// columns 3bj..3bj+2, enumerated row-major over blocks.
    pub fn blocks() -> [[Position; 9]; 9] {
        std::array::from_fn(|b| {
            let (bi, bj) = (b / 3, b % 3);
            std::array::from_fn(|m| Position::new(3 * bi + m / 3, 3 * bj + m % 3))
        })
    }

    /// True iff every cell is solved.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// True iff some cell has run out of candidates.
    pub fn is_unsolvable(&self) -> bool {
        self.cells.iter().any(Cell::is_contradicted)
    }

    /// Cells not yet solved, in row-major order.
    pub fn unsolved_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_solved())
    }

    /// Minimum-remaining-values choice: the unsolved cell with the fewest
    /// candidates. Ties go to the lowest row-major index, so the pick is
    /// deterministic for a given grid state.
    pub fn best_guess(&self) -> Option<Position> {
        self.unsolved_cells()
            .min_by_key(|cell| cell.candidates().len())
            .map(Cell::pos)
    }

    /// Run one bounded propagation step: sweep the groups in fixed order and
    /// stop at the first cell forced to a single candidate. Returns `None`
    /// once no cell is currently forced.
    pub fn single_step(&mut self) -> Option<Forced> {
        propagate::sweep(self, true)
    }

    /// Number of original clues.
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_given()).count()
    }

    /// Number of cells still unsolved.
    pub fn empty_count(&self) -> usize {
        self.unsolved_cells().count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.cell(Position::new(row, col)).value() {
                    Some(d) => write!(f, "{} ", d)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "..17..5.9573.241.68..5.1..27..295.18..94..3.56528....7465.8..71...159..49.8..7.5.";

    #[test]
    fn test_round_trip() {
        let grid = Grid::from_string(EASY).unwrap();
        assert_eq!(grid.to_string_compact(), EASY);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let truncated = &EASY[..80];
        assert_eq!(
            Grid::from_string(truncated),
            Err(ParseError::BadLength { len: 80 })
        );
    }

    #[test]
    fn test_rejects_bad_character() {
        let mut bad = EASY.to_string();
        bad.replace_range(4..5, "x");
        assert_eq!(
            Grid::from_string(&bad),
            Err(ParseError::BadCharacter { ch: 'x', index: 4 })
        );
    }

    #[test]
    fn test_clue_counts() {
        let grid = Grid::from_string(EASY).unwrap();
        let clues = EASY.chars().filter(|c| *c != '.').count();
        assert_eq!(grid.given_count(), clues);
        assert_eq!(grid.empty_count(), 81 - clues);
    }

    #[test]
    fn test_partition_invariant() {
        // Each family covers every cell exactly once, nine cells per group.
        for family in [Grid::rows(), Grid::columns(), Grid::blocks()] {
            let mut seen = [0usize; 81];
            for group in &family {
                assert_eq!(group.len(), 9);
                for pos in group {
                    seen[pos.index()] += 1;
                }
            }
            assert!(seen.iter().all(|&count| count == 1));
        }
    }

    #[test]
    fn test_block_tiling() {
        // Block 4 is the centre: rows 3..=5, columns 3..=5.
        let centre = Grid::blocks()[4];
        for pos in &centre {
            assert_eq!(pos.block(), (1, 1));
        }
        assert_eq!(centre[0], Position::new(3, 3));
        assert_eq!(centre[8], Position::new(5, 5));
    }

    #[test]
    fn test_play_marks_solved_and_frozen() {
        let mut grid = Grid::new();
        assert!(grid.play(2, 3, 8, true));
        let cell = grid.cell(Position::new(2, 3));
        assert!(cell.is_solved());
        assert!(cell.is_given());
        assert_eq!(cell.value(), Some(8));
    }

    #[test]
    fn test_play_ignores_eliminated_digit() {
        let mut grid = Grid::new();
        grid.play(0, 0, 5, false);
        // Propagate so the 5 leaves the rest of row 0.
        grid.single_step();
        assert!(!grid.play(0, 1, 5, false));
        assert!(!grid.cell(Position::new(0, 1)).is_solved());
    }

    #[test]
    fn test_best_guess_tie_break_is_row_major() {
        let grid = Grid::new();
        // All cells tie at nine candidates; the first row-major cell wins.
        assert_eq!(grid.best_guess(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_best_guess_prefers_fewest_candidates() {
        let mut grid = Grid::new();
        for (col, digit) in (0..7).zip(1..8) {
            grid.play(8, col, digit, true);
        }
        // Propagate row 8 to a fixed point: two cells with {8,9} remain.
        while grid.single_step().is_some() {}
        assert_eq!(grid.best_guess(), Some(Position::new(8, 7)));
    }

    #[test]
    fn test_single_step_forces_exactly_one_cell() {
        let mut grid = Grid::new();
        for (col, digit) in (0..8).zip(1..9) {
            grid.play(0, col, digit, true);
        }
        let forced = grid.single_step().expect("last cell in row 0 is forced");
        assert_eq!(forced.pos, Position::new(0, 8));
        assert_eq!(forced.value, 9);
        // Nothing else is forced until more clues arrive.
        assert_eq!(grid.single_step(), None);
    }
}
