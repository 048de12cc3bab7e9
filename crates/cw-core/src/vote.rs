//! Per-unit vote counter
//!
//! The displayed score may move one step above or below the stored score and
//! no further. Clicking a direction that is already at its limit does nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a vote click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteDirection {
    Increase,
    Decrease,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Increase => write!(f, "increase"),
            VoteDirection::Decrease => write!(f, "decrease"),
        }
    }
}

/// Display score of a single unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCounter {
    stored: i64,
    current: i64,
    last_vote: Option<VoteDirection>,
}

impl VoteCounter {
    /// Start from the record's stored score
    pub fn new(stored: i64) -> Self {
        Self {
            stored,
            current: stored,
            last_vote: None,
        }
    }

    /// Score shown to the user
    pub fn score(&self) -> i64 {
        self.current
    }

    /// Score the counter started from
    pub fn stored(&self) -> i64 {
        self.stored
    }

    /// Direction of the last accepted click
    pub fn last_vote(&self) -> Option<VoteDirection> {
        self.last_vote
    }

    /// Apply a click; returns false when the click was ignored
    pub fn vote(&mut self, direction: VoteDirection) -> bool {
        match direction {
            VoteDirection::Increase => {
                if self.current == self.stored.saturating_add(1) {
                    return false;
                }
                self.current += 1;
            }
            VoteDirection::Decrease => {
                if self.current == self.stored.saturating_sub(1) {
                    return false;
                }
                self.current -= 1;
            }
        }
        self.last_vote = Some(direction);
        true
    }

    pub fn increase(&mut self) -> bool {
        self.vote(VoteDirection::Increase)
    }

    pub fn decrease(&mut self) -> bool {
        self.vote(VoteDirection::Decrease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_twice_clamps() {
        let mut votes = VoteCounter::new(3);
        assert!(votes.increase());
        assert_eq!(votes.score(), 4);
        assert!(!votes.increase());
        assert_eq!(votes.score(), 4);
    }

    #[test]
    fn test_increase_then_decrease_nets_zero() {
        let mut votes = VoteCounter::new(3);
        votes.increase();
        votes.decrease();
        assert_eq!(votes.score(), 3);
        assert_eq!(votes.last_vote(), Some(VoteDirection::Decrease));
    }

    #[test]
    fn test_decrease_twice_clamps() {
        let mut votes = VoteCounter::new(3);
        assert!(votes.decrease());
        assert!(!votes.decrease());
        assert_eq!(votes.score(), 2);
    }

    #[test]
    fn test_swing_stays_within_one_step() {
        let mut votes = VoteCounter::new(0);
        for _ in 0..3 {
            votes.increase();
            votes.decrease();
            votes.decrease();
            votes.decrease();
        }
        assert_eq!(votes.score(), -1);
        votes.increase();
        votes.increase();
        votes.increase();
        assert_eq!(votes.score(), 1);
    }

    #[test]
    fn test_stored_score_unchanged() {
        let mut votes = VoteCounter::new(7);
        assert_eq!(votes.last_vote(), None);
        votes.increase();
        assert_eq!(votes.stored(), 7);
        assert_eq!(votes.score(), 8);
        assert_eq!(votes.last_vote(), Some(VoteDirection::Increase));
    }

    #[test]
    fn test_extreme_scores_do_not_overflow() {
        let mut top = VoteCounter::new(i64::MAX);
        assert!(!top.increase());
        assert_eq!(top.score(), i64::MAX);
        assert!(top.decrease());
        assert_eq!(top.score(), i64::MAX - 1);
        assert!(!top.decrease());

        let mut bottom = VoteCounter::new(i64::MIN);
        assert!(!bottom.decrease());
        assert_eq!(bottom.score(), i64::MIN);
        assert!(bottom.increase());
        assert_eq!(bottom.score(), i64::MIN + 1);
        assert!(!bottom.increase());
    }
}
