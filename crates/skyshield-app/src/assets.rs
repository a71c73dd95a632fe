//! Audio asset verification.
//!
//! Sound playback belongs to whatever renders the snapshots, but a run that
//! names an asset directory refuses to start unless every cue file is there.

use std::path::{Path, PathBuf};

use tracing::debug;

use skyshield_core::events::AudioCue;

use crate::error::AppError;

/// Resolved location of each audio cue.
#[derive(Debug, Clone)]
pub struct AudioAssets {
    files: Vec<(AudioCue, PathBuf)>,
}

impl AudioAssets {
    /// Check that every cue file exists under `dir`.
    pub fn verify(dir: &Path) -> Result<Self, AppError> {
        let mut files = Vec::with_capacity(AudioCue::ALL.len());
        for cue in AudioCue::ALL {
            let path = dir.join(cue.file_name());
            if !path.is_file() {
                return Err(AppError::MissingAsset { cue, path });
            }
            debug!(?cue, path = %path.display(), "audio asset found");
            files.push((cue, path));
        }
        Ok(Self { files })
    }

    /// Path of the file played for `cue`.
    pub fn path(&self, cue: AudioCue) -> Option<&Path> {
        self.files
            .iter()
            .find(|(c, _)| *c == cue)
            .map(|(_, path)| path.as_path())
    }
}
