// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::model::RawSessionFile;
use crate::errors::Result;
use crate::session::Session;

/// Read a session file and deserialize it into a [`RawSessionFile`].
///
/// This only performs TOML deserialization; dates are not parsed and work
/// orders are not checked. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSessionFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawSessionFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a session file and validate it into a [`Session`].
///
/// Fails on:
/// - unreadable files or invalid TOML,
/// - dates that do not match `[config].date_format`,
/// - empty or duplicate work orders,
/// - `[progress_log]` keys that name no job,
/// - inverted start/due dates when `reject_inverted_dates = true`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Session> {
    let raw = load_from_path(&path)?;
    let session = Session::try_from(raw)?;
    info!(
        path = %path.as_ref().display(),
        jobs = session.jobs().len(),
        dependencies = session.dependencies().len(),
        "loaded session file"
    );
    Ok(session)
}

/// Session file used when `--session` is not given.
pub fn default_session_path() -> PathBuf {
    PathBuf::from("Jobs.toml")
}
