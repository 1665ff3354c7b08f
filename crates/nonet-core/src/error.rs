/// Failure to read an 81-character puzzle string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("puzzle string must be 81 characters, got {len}")]
    BadLength { len: usize },

    #[error("invalid character {ch:?} at index {index} (expected '.' or '1'-'9')")]
    BadCharacter { ch: char, index: usize },
}

/// Failure of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Some cell lost its last candidate; the puzzle cannot be completed
    /// from the current state.
    #[error("puzzle is unsolvable from the current state")]
    Contradiction,
}
