//! Config file loading.
//!
//! Files are JSON and every field is optional; anything omitted keeps its
//! default. Validation happens when the engine is constructed.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::AppError;

/// Load a config from `path`, or the defaults when no path is given.
pub fn load<T>(path: Option<&Path>) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };
    let text = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}
