//! Score tracking resource.

use bevy_ecs::prelude::Resource;

use crate::components::paddle::Side;

/// First player to reach this score wins the game.
pub const WIN_SCORE: u32 = 10;

/// Both players' scores. Each stays in `[0, WIN_SCORE]`; the ball system
/// transitions to game over in the same tick a score reaches [`WIN_SCORE`].
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Score { left: 0, right: 0 }
    }

    /// Award a point to the player on `side`.
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side that reached [`WIN_SCORE`], if any.
    pub fn winner(&self) -> Option<Side> {
        if self.left >= WIN_SCORE {
            Some(Side::Left)
        } else if self.right >= WIN_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score_is_zero_zero() {
        let score = Score::new();
        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert!(score.winner().is_none());
    }

    #[test]
    fn test_award_increments_correct_side() {
        let mut score = Score::new();
        score.award(Side::Left);
        score.award(Side::Right);
        score.award(Side::Right);
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 2);
    }

    #[test]
    fn test_winner_at_win_score() {
        let mut score = Score::new();
        for _ in 0..WIN_SCORE - 1 {
            score.award(Side::Left);
        }
        assert!(score.winner().is_none());
        score.award(Side::Left);
        assert_eq!(score.winner(), Some(Side::Left));
    }

    #[test]
    fn test_reset_clears_both_sides() {
        let mut score = Score { left: 7, right: 10 };
        score.reset();
        assert_eq!(score, Score::new());
    }
}
