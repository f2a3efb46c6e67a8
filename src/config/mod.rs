// src/config/mod.rs

//! Session file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a session file from disk (`loader.rs`).
//! - Validate it into a typed [`Session`](crate::session::Session) (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_session_path, load_and_validate, load_from_path};
pub use model::{ConfigSection, RawDependency, RawJob, RawSessionFile};
