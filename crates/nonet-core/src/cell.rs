use crate::{CandidateSet, Position};

/// A single cell: its remaining candidates plus whether it is an original clue.
///
/// Solved-ness is derived, not stored: a cell is solved exactly when one
/// candidate remains. The `given` flag is the only recorded fact, since
/// clue-ness is a property of the puzzle rather than of the search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    candidates: CandidateSet,
    given: bool,
    pos: Position,
}

impl Cell {
    pub(crate) fn new(pos: Position) -> Self {
        Self {
            candidates: CandidateSet::full(),
            given: false,
            pos,
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn candidates(&self) -> CandidateSet {
        self.candidates
    }

    /// Whether this cell is an original clue.
    pub fn is_given(&self) -> bool {
        self.given
    }

    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Whether every candidate has been eliminated.
    pub fn is_contradicted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The cell's digit, if solved.
    pub fn value(&self) -> Option<u8> {
        self.candidates.sole_value()
    }

    /// Collapse the candidate set to a single digit.
    pub(crate) fn assign(&mut self, digit: u8) {
        self.candidates = CandidateSet::singleton(digit);
    }

    /// Mark the cell as an original clue.
    pub(crate) fn mark_given(&mut self) {
        self.given = true;
    }

    /// Remove `resolved` from the candidates. No-op on an already solved
    /// cell. Returns whether anything was removed.
    pub(crate) fn eliminate(&mut self, resolved: CandidateSet) -> bool {
        if self.is_solved() {
            return false;
        }
        self.candidates.remove_all(resolved)
    }

    /// Empty the candidate set, recording a contradiction in place.
    pub(crate) fn clear_candidates(&mut self) {
        self.candidates = CandidateSet::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_open() {
        let cell = Cell::new(Position::new(2, 3));
        assert!(!cell.is_solved());
        assert!(!cell.is_given());
        assert_eq!(cell.candidates().len(), 9);
        assert_eq!(cell.value(), None);
    }

    #[test]
    fn test_assign_solves() {
        let mut cell = Cell::new(Position::new(0, 0));
        cell.assign(7);
        assert!(cell.is_solved());
        assert_eq!(cell.value(), Some(7));
    }

    #[test]
    fn test_eliminate_skips_solved_cell() {
        let mut cell = Cell::new(Position::new(0, 0));
        cell.assign(5);
        let mut resolved = CandidateSet::empty();
        resolved.insert(5);
        assert!(!cell.eliminate(resolved));
        assert_eq!(cell.value(), Some(5));
    }

    #[test]
    fn test_eliminate_down_to_forced_digit() {
        let mut cell = Cell::new(Position::new(0, 0));
        let mut resolved = CandidateSet::empty();
        for d in 1..=8 {
            resolved.insert(d);
        }
        assert!(cell.eliminate(resolved));
        assert!(cell.is_solved());
        assert_eq!(cell.value(), Some(9));
    }
}
