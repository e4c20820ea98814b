//! Error types for the simulation and its persisted state.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("zero-sized layout input: alien {alien_w}x{alien_h}, screen {screen_w}x{screen_h}")]
    ZeroDimension {
        alien_w: u32,
        alien_h: u32,
        screen_w: u32,
        screen_h: u32,
    },
    /// Raw signed counts after the symmetry reduction.
    #[error("screen too small for a formation: {cols} columns x {rows} rows")]
    DegenerateGrid { cols: i64, rows: i64 },
    #[error("formation places no aliens on a {cols}x{rows} grid")]
    EmptyFormation { cols: usize, rows: usize },
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to read score record {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write score record {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode score record")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid setting `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure to build a [`crate::compute::Game`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
