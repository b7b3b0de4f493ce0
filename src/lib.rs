//! Rescue Ledger - record keeping for animal rescue organizations
//!
//! Tracks shelters, the cats and dogs they hold, each animal's adoption state
//! and dated notes, and a first-in first-out vet appointment queue per
//! shelter. Everything persists to a single line-oriented record file.

pub mod cli;
pub mod collections;
pub mod domain;
pub mod logging;
pub mod storage;

pub use domain::{AnimalKey, AnimalRecord, CalendarDate, Note, Shelter, ShelterDirectory};
pub use storage::Session;
