//! # Command-Line Interface
//!
//! User-facing commands for the `rescue` binary.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Record file setup | `init` |
//! | Shelter | Shelter directory | `shelter add`, `shelter list`, `shelter show` |
//! | Animal | Animals and adoptions | `animal add`, `animal list --dogs`, `animal adopt` |
//! | Appointment | Vet queue | `appointment add`, `appointment next`, `appointment complete` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logs on stderr:
//! ```bash
//! rescue --verbose shelter list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod animal;
mod app;
mod appointment;
mod output;
mod shelter;
mod workspace;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
