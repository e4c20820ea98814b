//! The persisted high-score record.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScoreError;

/// Size of the smallest valid record, `{"hi_score":0}`.  Anything shorter is
/// treated as no history.
pub const MIN_RECORD_LEN: u64 = 14;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub hi_score: u32,
}

#[derive(Clone, Debug)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record.  `Ok(None)` means there is no usable history: the
    /// file is missing, too short or does not parse.
    pub fn load(&self) -> Result<Option<ScoreRecord>, ScoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable score record");
                return Ok(None);
            }
            Err(source) => {
                return Err(ScoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if (contents.len() as u64) < MIN_RECORD_LEN {
            return Ok(None);
        }
        match serde_json::from_str::<ScoreRecord>(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable score record");
                Ok(None)
            }
        }
    }

    /// Load the stored high score, writing a fresh zero record when there is
    /// no usable history.  Never fails; problems are logged.
    pub fn load_or_init(&self) -> u32 {
        match self.load() {
            Ok(Some(record)) => record.hi_score,
            Ok(None) => {
                if let Err(err) = self.save(0) {
                    warn!(error = %err, "could not create score record");
                }
                0
            }
            Err(err) => {
                warn!(error = %err, "could not read score record");
                0
            }
        }
    }

    /// Write the record through a temp file and rename it into place, so an
    /// abrupt exit never leaves a half-written record behind.
    pub fn save(&self, hi_score: u32) -> Result<(), ScoreError> {
        let contents = serde_json::to_string_pretty(&ScoreRecord { hi_score })?;
        let tmp_path = self.tmp_path();
        let write_err = |source: std::io::Error| ScoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&tmp_path).map_err(write_err)?;
        file.write_all(contents.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        drop(file);
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;

        debug!(path = %self.path.display(), hi_score, "score record saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
