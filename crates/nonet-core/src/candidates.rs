use serde::{Deserialize, Serialize};

/// Bits 1..=9 set, bit 0 unused.
const ALL_DIGITS: u16 = 0b11_1111_1110;

/// Set of candidate digits 1-9 for a single cell, backed by a u16 bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet(u16);

impl CandidateSet {
    /// The full set {1..9}.
    pub fn full() -> Self {
        Self(ALL_DIGITS)
    }

    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// A set holding exactly one digit.
    pub fn singleton(digit: u8) -> Self {
        debug_assert!((1..=9).contains(&digit));
        Self(1 << digit)
    }

    pub fn contains(self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));
        self.0 & (1 << digit) != 0
    }

    pub fn insert(&mut self, digit: u8) {
        debug_assert!((1..=9).contains(&digit));
        self.0 |= 1 << digit;
    }

    /// Remove a digit; returns whether it was present.
    pub fn remove(&mut self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));
        let before = self.0;
        self.0 &= !(1 << digit);
        self.0 != before
    }

    /// Remove every digit in `other`; returns whether anything was removed.
    pub fn remove_all(&mut self, other: CandidateSet) -> bool {
        let before = self.0;
        self.0 &= !other.0;
        self.0 != before
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single remaining digit, if the set is a singleton.
    pub fn sole_value(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&d| self.contains(d))
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::full()
    }
}

impl std::fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "{{{}}}", digits.join(","))
    }
}
