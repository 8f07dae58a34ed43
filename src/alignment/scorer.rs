//! Scoring policies for local alignment.

use serde::{Deserialize, Serialize};

/// Equality-based scoring: `+match_score` for equal elements,
/// `-match_score` otherwise, and a linear gap cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleScorer {
    pub match_score: i64,
    pub gap_penalty: i64,
}

impl SimpleScorer {
    pub fn new(match_score: i64, gap_penalty: i64) -> Self {
        Self { match_score, gap_penalty }
    }

    pub fn score<T: PartialEq + ?Sized>(&self, a: &T, b: &T) -> i64 {
        if a == b { self.match_score } else { -self.match_score }
    }

    /// Cost of a gap of `length` elements.
    pub fn gap_penalty(&self, length: usize) -> i64 {
        match length {
            0 => 0,
            1 => self.gap_penalty,
            n => n as i64 * self.gap_penalty(1),
        }
    }
}

/// The policy anchor updates run with: +3 / -3 / gap 2.
impl Default for SimpleScorer {
    fn default() -> Self {
        Self::new(3, 2)
    }
}
