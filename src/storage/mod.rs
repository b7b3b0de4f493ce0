//! # Storage Layer
//!
//! Persistence for shelter records in a plain-text, line-oriented format.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Shelters, animals, vet queues | Record file (see [`record_file`]) | `--file`, `RESCUE_FILE` or `default_file` |
//! | Config | TOML | `~/.config/rescue/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - Record files are read under a shared lock (`fs2`)
//! - Writes go to a locked temp file that is then renamed over the target
//!
//! ## Key Types
//!
//! - [`Session`] - Current directory, filename and changed flag
//! - [`Config`] - User configuration

pub mod record_file;
mod config;
mod session;

pub use config::{Config, ConfigError, OutputFormat};
pub use record_file::RecordFileError;
pub use session::{Session, SessionError};
