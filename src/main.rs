mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alien_invasion::compute::Game;
use alien_invasion::entities::GameEvent;
use alien_invasion::fleet::Formation;
use alien_invasion::scores::ScoreFile;
use alien_invasion::settings::Settings;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events.
const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Parser)]
#[command(name = "alien_invasion", about = "Shoot down the alien fleet before it lands")]
struct Cli {
    /// TOML settings file; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// High-score record location.
    #[arg(long)]
    scores: Option<PathBuf>,
    /// Fleet formation: cross or checkerboard.
    #[arg(long)]
    formation: Option<Formation>,
    /// Ships per game.
    #[arg(long)]
    lives: Option<u32>,
    /// Simulation ticks per second.
    #[arg(long)]
    fps: Option<u32>,
    /// Log destination; the terminal itself is taken by the game.
    #[arg(long, default_value = "alien_invasion.log")]
    log_file: PathBuf,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(scores) = &self.scores {
            settings.scores_file = scores.clone();
        }
        if let Some(formation) = self.formation {
            settings.formation = formation;
        }
        if let Some(lives) = self.lives {
            settings.starting_lives = lives;
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        Ok(settings)
    }
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event for every key, so directional keys act as held switches and work
/// together with Space.  Terminals with keyboard enhancement send real
/// releases; on the others keys expire after `HOLD_WINDOW` frames.
fn game_loop<W: Write>(out: &mut W, game: &mut Game, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let frame_time = Duration::from_secs(1) / game.settings().fps;
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                            game.start();
                        }
                        KeyCode::Char(' ') => {
                            game.fire();
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Held directions ───────────────────────────────────────────────────
        let left = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]
            .iter()
            .any(|key| is_held(&key_frame, key, frame));
        let right = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]
            .iter()
            .any(|key| is_held(&key_frame, key, frame));
        game.set_moving_left(left);
        game.set_moving_right(right);

        for event in game.tick() {
            match event {
                GameEvent::LevelChanged { level } => info!(level, "level up"),
                GameEvent::GameOver { score } => info!(score, "game over"),
                GameEvent::ScoreSaveFailed { reason } => warn!(%reason, "high score not saved"),
                _ => {}
            }
        }

        display::render(out, game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let settings = cli.settings()?;
    let scores = ScoreFile::new(settings.scores_file.clone());
    let mut game = Game::new(settings, Some(scores)).context("building the game")?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release events; terminals without support fall back to
    // the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads happen on their own thread so the loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx);

    if let Err(err) = game.quit() {
        warn!(error = %err, "failed to save high score on quit");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
