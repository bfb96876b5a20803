//! Engine domain types with enforced invariants.
//!
//! The search works over an extended real number line: evaluation scores
//! are finite, while proven wins and losses sit at the two infinities so
//! that no heuristic opinion can outrank a decided game.

use std::cmp::Ordering;
use std::fmt;

/// A backed-up search score from the root player's perspective.
///
/// Invariant: never NaN, so scores are totally ordered. `Score::WON` and
/// `Score::LOST` are the two infinities; every heuristic evaluation must
/// stay strictly between them.
///
/// # Example
/// ```
/// use ply_core::Score;
///
/// let edge = Score::new(3.0);
/// assert!(Score::LOST < edge && edge < Score::WON);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Score(f64);

impl Score {
    /// Score of a state the root player has won.
    pub const WON: Self = Self(f64::INFINITY);

    /// Score of a state the root player has lost.
    pub const LOST: Self = Self(f64::NEG_INFINITY);

    /// The additive identity: no preference either way.
    pub const EVEN: Self = Self(0.0);

    /// Create a new score.
    pub fn new(value: f64) -> Self {
        debug_assert!(!value.is_nan(), "scores must be ordered; NaN is not a score");
        // +0.0 and -0.0 must compare equal under the total order
        Self(if value == 0.0 { 0.0 } else { value })
    }

    /// Get the underlying value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Check if this score is a proven win.
    pub fn is_win(self) -> bool {
        self.0 == f64::INFINITY
    }

    /// Check if this score is a proven loss.
    pub fn is_loss(self) -> bool {
        self.0 == f64::NEG_INFINITY
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_win() {
            write!(f, "+won")
        } else if self.is_loss() {
            write!(f, "-lost")
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> f64 {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_ordered() {
        assert!(Score::LOST < Score::EVEN);
        assert!(Score::EVEN < Score::WON);
        assert!(Score::LOST < Score::WON);
    }

    #[test]
    fn test_finite_scores_sit_between_the_infinities() {
        let high = Score::new(1e12);
        let low = Score::new(-1e12);
        assert!(high < Score::WON);
        assert!(Score::LOST < low);
        assert!(low < high);
    }

    #[test]
    fn test_win_loss_predicates() {
        assert!(Score::WON.is_win());
        assert!(!Score::WON.is_loss());
        assert!(Score::LOST.is_loss());
        assert!(!Score::new(5.0).is_win());
        assert!(!Score::new(-5.0).is_loss());
    }

    #[test]
    fn test_signed_zeros_compare_equal() {
        assert_eq!(Score::new(-0.0), Score::new(0.0));
        assert_eq!(Score::new(-0.0), Score::EVEN);
    }

    #[test]
    fn test_ord_picks_extremes() {
        let a = Score::new(1.5);
        let b = Score::new(-2.0);
        assert_eq!(a.max(b), a);
        assert_eq!(a.min(b), b);
        assert_eq!(Score::WON.max(a), Score::WON);
        assert_eq!(Score::LOST.min(b), Score::LOST);
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(0.25).to_string(), "0.250");
        assert_eq!(Score::WON.to_string(), "+won");
        assert_eq!(Score::LOST.to_string(), "-lost");
    }

    #[test]
    fn test_roundtrip_to_f64() {
        assert_eq!(f64::from(Score::new(2.5)), 2.5);
        assert!(f64::from(Score::WON).is_infinite());
    }
}
