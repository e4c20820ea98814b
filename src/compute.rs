//! Game state machine and per-tick orchestration.
//!
//! `Game` owns the ship, fleet, arsenal and stats.  The front-end feeds it
//! input (`set_moving_*`, `fire`, `start`, `quit`) and calls [`Game::tick`]
//! once per frame; each tick returns the events the front-end should present.

use tracing::{debug, info, warn};

use crate::arsenal::Arsenal;
use crate::collision;
use crate::entities::{GameEvent, GameStatus};
use crate::error::{GameError, LayoutError, ScoreError};
use crate::fleet::Fleet;
use crate::layout::{self, FleetLayout};
use crate::scores::ScoreFile;
use crate::settings::{Difficulty, Settings};
use crate::ship::Ship;
use crate::stats::GameStats;

pub struct Game {
    settings: Settings,
    layout: FleetLayout,
    difficulty: Difficulty,
    ship: Ship,
    fleet: Fleet,
    arsenal: Arsenal,
    stats: GameStats,
    status: GameStatus,
    /// Set when a round ends with no lives left, cleared by `start`.
    game_over: bool,
    scores: Option<ScoreFile>,
    /// High score last written to the score record.
    saved_hi_score: u32,
}

// ── Construction ──────────────────────────────────────────────────────────────

impl Game {
    /// Build an inactive game.  With a score file, the stored high score is
    /// loaded (or a fresh record created).  The fleet is generated right away
    /// so there is something to show behind the start prompt.
    pub fn new(settings: Settings, scores: Option<ScoreFile>) -> Result<Game, GameError> {
        settings.validate()?;
        let layout = layout::compute_layout(
            settings.alien_w,
            settings.alien_h,
            settings.screen_w,
            settings.screen_h,
        )?;

        let hi_score = scores.as_ref().map(ScoreFile::load_or_init).unwrap_or(0);
        let (screen_w, screen_h) = (settings.screen_w as f32, settings.screen_h as f32);

        let mut fleet = Fleet::new(settings.fleet_drop_speed);
        fleet.generate(&layout, &settings.formation);
        // Every regeneration uses the same layout and policy, so an empty
        // fleet here would clear each level on its first tick.
        if fleet.is_empty() {
            return Err(LayoutError::EmptyFormation {
                cols: layout.cols,
                rows: layout.rows,
            }
            .into());
        }

        Ok(Game {
            layout,
            difficulty: settings.difficulty,
            ship: Ship::new(settings.ship_w as f32, settings.ship_h as f32, screen_w, screen_h),
            fleet,
            arsenal: Arsenal::new(settings.bullet_w as f32, settings.bullet_h as f32),
            stats: GameStats::new(hi_score, settings.starting_lives),
            status: GameStatus::Inactive,
            game_over: false,
            scores,
            saved_hi_score: hi_score,
            settings,
        })
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

impl Game {
    /// Start (or restart after game over) a round.  Ignored unless inactive.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Inactive {
            return false;
        }
        self.stats.reset(self.settings.starting_lives);
        self.difficulty = self.settings.difficulty;
        self.arsenal.clear();
        self.fleet.generate(&self.layout, &self.settings.formation);
        self.ship.stop();
        self.recenter_ship();
        self.status = GameStatus::Active;
        self.game_over = false;
        info!(lives = self.stats.lives_remaining, "round started");
        true
    }

    pub fn set_moving_left(&mut self, held: bool) {
        self.ship.moving_left = held;
    }

    pub fn set_moving_right(&mut self, held: bool) {
        self.ship.moving_right = held;
    }

    /// Fire a bullet.  Returns whether one was actually created, so the
    /// caller knows whether to play the firing sound.
    pub fn fire(&mut self) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        self.arsenal.fire(&self.ship, self.difficulty.max_bullets())
    }

    /// Persist the high score before the process exits.
    pub fn quit(&mut self) -> Result<(), ScoreError> {
        let Some(scores) = &self.scores else {
            return Ok(());
        };
        scores.save(self.stats.hi_score)?;
        self.saved_hi_score = self.stats.hi_score;
        info!(hi_score = self.stats.hi_score, "high score saved on quit");
        Ok(())
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

impl Game {
    /// Advance the simulation by one frame.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.status {
            GameStatus::Inactive => {}
            GameStatus::LifeLost { ticks_remaining } => {
                if ticks_remaining <= 1 {
                    self.status = GameStatus::Active;
                    events.push(GameEvent::Resumed);
                } else {
                    self.status = GameStatus::LifeLost {
                        ticks_remaining: ticks_remaining - 1,
                    };
                }
            }
            GameStatus::Active => self.step(&mut events),
        }
        events
    }

    fn step(&mut self, events: &mut Vec<GameEvent>) {
        let (screen_w, screen_h) = self.screen();

        // ── 1. Motion: ship, then bullets, then fleet ─────────────────────────
        self.ship.update(self.difficulty.ship_speed, screen_w);
        self.arsenal.advance_tick(self.difficulty.bullet_speed);
        self.fleet.advance_tick(self.difficulty.fleet_speed, screen_w);

        // ── 2. Collisions ─────────────────────────────────────────────────────
        let ship_hit = collision::ship_contact(&self.ship, &self.fleet);
        let hits = self.fleet.resolve_destroyed(&mut self.arsenal);

        // ── 3. Score ──────────────────────────────────────────────────────────
        if !hits.is_empty() {
            let delta = self.stats.record_hits(hits.len(), self.settings.alien_points);
            events.push(GameEvent::ScoreChanged {
                delta,
                score: self.stats.score,
            });
            events.push(GameEvent::AliensDestroyed(hits));
            self.persist_hi_score(events);
        }

        // ── 4. Transitions: losing a life beats clearing the level ────────────
        let breached = self.fleet.check_bottom_breach(screen_h);
        if ship_hit || breached {
            debug!(ship_hit, breached, "fleet reached the player");
            self.lose_life(events);
        } else if self.fleet.is_cleared() {
            events.extend(self.advance_level());
        }
    }

    /// Move on to the next level: harder difficulty, a fresh fleet and no
    /// bullets in flight.  The ship keeps its position.
    pub fn advance_level(&mut self) -> Vec<GameEvent> {
        self.difficulty = self.difficulty.scaled(self.settings.difficulty_scale);
        let level = self.stats.advance_level();
        self.arsenal.clear();
        self.fleet.generate(&self.layout, &self.settings.formation);
        info!(level, max_bullets = self.difficulty.max_bullets(), "level cleared");
        vec![GameEvent::LevelCleared, GameEvent::LevelChanged { level }]
    }

    fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        let lives_remaining = self.stats.lose_life();
        events.push(GameEvent::LifeLost { lives_remaining });
        self.recenter_ship();
        self.arsenal.clear();

        if lives_remaining == 0 {
            self.ship.stop();
            self.status = GameStatus::Inactive;
            self.game_over = true;
            info!(score = self.stats.score, "game over");
            events.push(GameEvent::GameOver {
                score: self.stats.score,
            });
            self.persist_hi_score(events);
            return;
        }

        self.fleet.generate(&self.layout, &self.settings.formation);
        self.status = match self.settings.life_lost_pause_ticks {
            0 => GameStatus::Active,
            ticks_remaining => GameStatus::LifeLost { ticks_remaining },
        };
    }

    /// Write the high score if it moved past the stored one.  A failed write
    /// is reported but the in-memory score stays authoritative.
    fn persist_hi_score(&mut self, events: &mut Vec<GameEvent>) {
        if self.stats.hi_score <= self.saved_hi_score {
            return;
        }
        let Some(scores) = &self.scores else {
            return;
        };
        match scores.save(self.stats.hi_score) {
            Ok(()) => self.saved_hi_score = self.stats.hi_score,
            Err(err) => {
                warn!(error = %err, "failed to save high score");
                events.push(GameEvent::ScoreSaveFailed {
                    reason: err.to_string(),
                });
            }
        }
    }

    fn recenter_ship(&mut self) {
        let (screen_w, screen_h) = self.screen();
        self.ship.center(screen_w, screen_h);
    }

    fn screen(&self) -> (f32, f32) {
        (self.settings.screen_w as f32, self.settings.screen_h as f32)
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────────

impl Game {
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// True between a game over and the next `start`.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn layout(&self) -> &FleetLayout {
        &self.layout
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
