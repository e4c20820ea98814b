//! Rendering layer — all terminal I/O lives here.
//!
//! The world is laid out in screen units (1200×800 by default).  Each frame
//! it is scaled onto whatever terminal size is available: row 0 holds the
//! HUD, the last row the controls hint, and everything between is the play
//! area.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use alien_invasion::compute::Game;
use alien_invasion::entities::{Entity, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world coordinates onto terminal cells.
struct Viewport {
    width: u16,
    height: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(game: &Game, width: u16, height: u16) -> Self {
        let settings = game.settings();
        let play_rows = height.saturating_sub(2).max(1);
        Viewport {
            width,
            height,
            scale_x: f32::from(width) / settings.screen_w as f32,
            scale_y: f32::from(play_rows) / settings.screen_h as f32,
        }
    }

    /// Inclusive cell span covered by an entity, clipped to the play area.
    /// `None` when the entity is entirely off screen.
    fn cells(&self, e: &Entity) -> Option<(u16, u16, u16, u16)> {
        let max_col = f32::from(self.width.saturating_sub(1));
        let max_row = f32::from(self.height.saturating_sub(2));

        let left = (e.left() * self.scale_x).floor();
        let right = ((e.right() * self.scale_x).ceil() - 1.0).max(left);
        let top = (e.top() * self.scale_y).floor() + 1.0;
        let bottom = ((e.bottom() * self.scale_y).ceil()).max(top);

        if right < 0.0 || left > max_col || bottom < 1.0 || top > max_row {
            return None;
        }
        Some((
            left.max(0.0) as u16,
            right.min(max_col) as u16,
            top.max(1.0) as u16,
            bottom.min(max_row) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(game, width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, game, &view)?;

    for alien in game.fleet().iter() {
        draw_block(out, &view, &alien.body, "▓", C_ALIEN)?;
    }
    for bullet in game.arsenal().iter() {
        draw_block(out, &view, &bullet.body, "│", C_BULLET)?;
    }
    draw_block(out, &view, &game.ship().body, "█", C_SHIP)?;

    draw_controls_hint(out, &view)?;

    match game.status() {
        GameStatus::Inactive => draw_prompt(out, game, &view)?,
        GameStatus::LifeLost { .. } => draw_banner(out, &view, "SHIP LOST", Color::Red)?,
        GameStatus::Active => {}
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &Game, view: &Viewport) -> std::io::Result<()> {
    let stats = game.stats();

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Max:{:>7}  Hi:{:>7}",
        stats.score, stats.max_score, stats.hi_score
    )))?;

    let level_str = format!("[ LEVEL {} ]", stats.level);
    let lx = (view.width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let lives_str = format!("Ships:{}", "▲".repeat(stats.lives_remaining as usize));
    let rx = view
        .width
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_block<W: Write>(
    out: &mut W,
    view: &Viewport,
    entity: &Entity,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let Some((left, right, top, bottom)) = view.cells(entity) else {
        return Ok(());
    };
    let span = glyph.repeat(usize::from(right - left + 1));
    out.queue(style::SetForegroundColor(color))?;
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Shoot   ENTER : Play   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    view: &Viewport,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let row = view.height / 2;
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Start prompt, with the final score when a game just ended.
fn draw_prompt<W: Write>(out: &mut W, game: &Game, view: &Viewport) -> std::io::Result<()> {
    let stats = game.stats();
    let played = game.is_game_over();

    let title: &[(&str, Color)] = if played {
        &[
            ("╔════════════════════╗", Color::Red),
            ("║    GAME  OVER      ║", Color::Red),
            ("╚════════════════════╝", Color::Red),
        ]
    } else {
        &[
            ("╔════════════════════╗", C_BORDER),
            ("║   ALIEN INVASION   ║", Color::Cyan),
            ("╚════════════════════╝", C_BORDER),
        ]
    };

    let mut lines: Vec<(String, Color)> = title
        .iter()
        .map(|(text, color)| (text.to_string(), *color))
        .collect();
    if played {
        lines.push((format!("Final Score: {:>7}", stats.score), Color::Yellow));
    }
    if played && stats.score > 0 && stats.score >= stats.hi_score {
        lines.push((format!("★ NEW BEST: {:>7} ★", stats.hi_score), Color::Yellow));
    } else {
        lines.push((format!("Best Score:  {:>7}", stats.hi_score), Color::DarkGrey));
    }
    lines.push(("ENTER - Play   Q - Quit".to_string(), Color::White));

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(text))?;
    }
    Ok(())
}
