//! Application-level errors. Anything here aborts startup or the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use skyshield_core::error::SimError;
use skyshield_core::events::AudioCue;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing audio asset for {cue:?}: {}", path.display())]
    MissingAsset { cue: AudioCue, path: PathBuf },

    #[error(transparent)]
    Sim(#[from] SimError),
}
