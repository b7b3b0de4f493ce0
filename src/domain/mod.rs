//! Domain models for rescue records
//!
//! Contains the validated model without any I/O concerns.

mod animal;
mod date;
mod directory;
mod note;
mod shelter;

pub use animal::{
    age_category, Adoption, AgeCategory, AnimalDetails, AnimalError, AnimalKey, AnimalRecord,
    Breed, Size, Species,
};
pub use date::{CalendarDate, DateError, MAX_YEAR, MIN_YEAR};
pub use directory::{DirectoryError, ShelterDirectory};
pub use note::{Note, NoteError};
pub use shelter::{Shelter, ShelterError};
