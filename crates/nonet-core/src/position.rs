use serde::{Deserialize, Serialize};

/// A cell coordinate on the 9x9 board (0-indexed row and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Convert a linear (row-major) cell index back to a position.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Linear (row-major) cell index, 0..81.
    pub fn index(self) -> usize {
        self.row * 9 + self.col
    }

    /// The 3x3 block this cell falls in, as (block row, block col), each 0..3.
    pub fn block(self) -> (usize, usize) {
        (self.row / 3, self.col / 3)
    }

    /// The block as a single index 0..9, row-major over blocks.
    pub fn block_index(self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for k in 0..81 {
            assert_eq!(Position::from_index(k).index(), k);
        }
    }

    #[test]
    fn test_block_assignment() {
        assert_eq!(Position::new(0, 0).block(), (0, 0));
        assert_eq!(Position::new(4, 7).block(), (1, 2));
        assert_eq!(Position::new(8, 8).block(), (2, 2));
        assert_eq!(Position::new(4, 7).block_index(), 5);
    }
}
