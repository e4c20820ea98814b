//! All game entity types — pure data, no game rules.

// ── Entity kinds ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Ship,
    Alien,
    Bullet,
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// Common shape for the ship, every alien and every bullet.
///
/// `x` / `y` are the top-left corner in world units.  They are stored as
/// floats so per-tick speeds below one unit accumulate without drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Entity { x, y, w, h, kind }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Strict overlap test.  Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Identifiers ───────────────────────────────────────────────────────────────

/// Stable handle of an alien within one generated formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlienId(pub u32);

/// Handle of a bullet; allocated in firing order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BulletId(pub u64);

/// Grid cell an alien was placed in by the formation generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

// ── Collision output ──────────────────────────────────────────────────────────

/// One matched (bullet, alien) pair.  Both members were destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub bullet: BulletId,
    pub alien: AlienId,
    /// Body of the alien at the moment of impact, for impact effects.
    pub alien_body: Entity,
}

// ── Game status & events ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Before the first game and after a game over; waiting for start.
    Inactive,
    Active,
    /// Short pause after a life was lost.  The fleet is already regenerated.
    LifeLost { ticks_remaining: u32 },
}

/// State changes produced by the simulation for the front-end to present.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    ScoreChanged { delta: u32, score: u32 },
    AliensDestroyed(Vec<Hit>),
    LevelCleared,
    LevelChanged { level: u32 },
    LifeLost { lives_remaining: u32 },
    /// The post-life-loss pause ended and play continues.
    Resumed,
    GameOver { score: u32 },
    ScoreSaveFailed { reason: String },
}
