//! The alien fleet: formation generation, shared motion and edge handling.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::arsenal::Arsenal;
use crate::collision;
use crate::entities::{AlienId, Entity, EntityKind, GridCell, Hit};
use crate::layout::FleetLayout;
use crate::motion::{self, Direction};

// ── Formation policies ────────────────────────────────────────────────────────

/// Decides which cells of a layout receive an alien.
pub trait FormationPolicy {
    fn places(&self, cell: GridCell, layout: &FleetLayout) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formation {
    /// Only the center row and the center column are populated.
    #[default]
    Cross,
    /// Every cell whose row and column are both odd.
    Checkerboard,
}

impl FormationPolicy for Formation {
    fn places(&self, cell: GridCell, layout: &FleetLayout) -> bool {
        match self {
            Formation::Cross => {
                cell.row == layout.center_row() || cell.col == layout.center_col()
            }
            Formation::Checkerboard => cell.row % 2 == 1 && cell.col % 2 == 1,
        }
    }
}

impl FromStr for Formation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cross" => Ok(Formation::Cross),
            "checkerboard" => Ok(Formation::Checkerboard),
            other => Err(format!("unknown formation `{other}` (expected cross or checkerboard)")),
        }
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formation::Cross => write!(f, "cross"),
            Formation::Checkerboard => write!(f, "checkerboard"),
        }
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub id: AlienId,
    pub cell: GridCell,
    pub body: Entity,
}

/// Owns every alien plus the direction they all share.
///
/// Aliens are kept in formation order (row-major), which is also the order
/// the collision resolver scans them in.
#[derive(Clone, Debug)]
pub struct Fleet {
    aliens: Vec<Alien>,
    direction: Direction,
    drop_speed: f32,
}

impl Fleet {
    pub fn new(drop_speed: f32) -> Self {
        Fleet {
            aliens: Vec::new(),
            direction: Direction::Right,
            drop_speed,
        }
    }

    /// Replace the whole fleet with a fresh formation moving right.
    pub fn generate(&mut self, layout: &FleetLayout, policy: &impl FormationPolicy) {
        self.aliens.clear();
        self.direction = Direction::Right;

        let mut next_id = 0;
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                let cell = GridCell { row, col };
                if !policy.places(cell, layout) {
                    continue;
                }
                let (x, y) = layout.cell_origin(row, col);
                self.aliens.push(Alien {
                    id: AlienId(next_id),
                    cell,
                    body: Entity::new(
                        EntityKind::Alien,
                        x,
                        y,
                        layout.alien_w as f32,
                        layout.alien_h as f32,
                    ),
                });
                next_id += 1;
            }
        }
        debug!(aliens = self.aliens.len(), cols = layout.cols, rows = layout.rows, "fleet generated");
    }

    /// Move the fleet one tick sideways, then reverse and drop the whole
    /// fleet if any alien reached the edge it is heading for.
    ///
    /// Only the leading edge counts: right after a reversal the fleet still
    /// touches the edge it left, and checking both edges would flip it back.
    ///
    /// Returns `true` when the fleet reversed this tick.
    pub fn advance_tick(&mut self, fleet_speed: f32, screen_w: f32) -> bool {
        for alien in &mut self.aliens {
            motion::step_with_fleet(&mut alien.body, self.direction, fleet_speed);
        }

        let direction = self.direction;
        let breached = self
            .aliens
            .iter()
            .any(|alien| motion::breaches_edge(&alien.body, direction, screen_w));
        if breached {
            self.direction = direction.reversed();
            for alien in &mut self.aliens {
                motion::drop_by(&mut alien.body, self.drop_speed);
            }
            debug!(direction = ?self.direction, "fleet reversed");
        }
        breached
    }

    /// True once any alien's lower edge reaches the bottom of the screen.
    pub fn check_bottom_breach(&self, screen_h: f32) -> bool {
        self.aliens.iter().any(|alien| alien.body.bottom() >= screen_h)
    }

    /// Destroy every alien/bullet pair that overlaps this tick.
    pub fn resolve_destroyed(&mut self, arsenal: &mut Arsenal) -> Vec<Hit> {
        collision::resolve_bullet_hits(self, arsenal)
    }

    pub fn is_cleared(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn drop_speed(&self) -> f32 {
        self.drop_speed
    }

    /// Insert an alien directly, outside of formation generation.
    ///
    /// Used to set up specific situations; the alien goes to the back of
    /// the scan order.
    pub fn push(&mut self, alien: Alien) {
        self.aliens.push(alien);
    }

    pub(crate) fn remove_ids(&mut self, ids: &[AlienId]) {
        self.aliens.retain(|alien| !ids.contains(&alien.id));
    }
}
