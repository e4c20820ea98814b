//! Score, lives and level bookkeeping.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    /// Best score of this process run.
    pub max_score: u32,
    /// Best score ever, mirrored to the score record.
    pub hi_score: u32,
    pub level: u32,
    pub lives_remaining: u32,
}

impl GameStats {
    pub fn new(hi_score: u32, starting_lives: u32) -> Self {
        GameStats {
            score: 0,
            max_score: 0,
            hi_score,
            level: 1,
            lives_remaining: starting_lives,
        }
    }

    /// Start a new round.  `max_score` and `hi_score` carry over.
    pub fn reset(&mut self, starting_lives: u32) {
        self.score = 0;
        self.level = 1;
        self.lives_remaining = starting_lives;
    }

    /// Award `points` for each destroyed alien and return the score delta.
    pub fn record_hits(&mut self, destroyed: usize, points: u32) -> u32 {
        let delta = (destroyed as u32).saturating_mul(points);
        self.score = self.score.saturating_add(delta);
        self.max_score = self.max_score.max(self.score);
        self.hi_score = self.hi_score.max(self.score);
        delta
    }

    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    /// Remove one life, never going below zero.  Returns the lives left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives_remaining = self.lives_remaining.saturating_sub(1);
        self.lives_remaining
    }
}
