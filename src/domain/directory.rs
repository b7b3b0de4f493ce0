//! The set of shelters in a record file, ordered by name

use thiserror::Error;

use super::shelter::{Shelter, ShelterError};
use crate::collections::OrderedList;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Shelter already exists: {0}")]
    DuplicateShelter(String),

    #[error("Index {index} out of range for {len} shelters")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Shelter(#[from] ShelterError),
}

/// All shelters, unique by name
#[derive(Debug, Clone, Default)]
pub struct ShelterDirectory {
    shelters: OrderedList<Shelter>,
}

impl ShelterDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shelter, rejecting a duplicate name
    pub fn add(&mut self, shelter: Shelter) -> Result<(), DirectoryError> {
        let name = shelter.name().to_string();
        self.shelters
            .add(shelter)
            .map_err(|_| DirectoryError::DuplicateShelter(name))
    }

    /// Creates and adds an empty shelter
    pub fn add_named(&mut self, name: &str) -> Result<(), DirectoryError> {
        self.add(Shelter::new(name)?)
    }

    pub fn get(&self, index: usize) -> Result<&Shelter, DirectoryError> {
        let len = self.shelters.len();
        self.shelters
            .get(index)
            .map_err(|_| DirectoryError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Shelter, DirectoryError> {
        let len = self.shelters.len();
        self.shelters
            .get_mut(index)
            .map_err(|_| DirectoryError::IndexOutOfRange { index, len })
    }

    pub fn find(&self, name: &str) -> Option<&Shelter> {
        self.shelters.iter().find(|s| s.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Shelter> {
        self.shelters.iter_mut().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.shelters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shelter> {
        self.shelters.iter()
    }
}

impl<'a> IntoIterator for &'a ShelterDirectory {
    type Item = &'a Shelter;
    type IntoIter = std::slice::Iter<'a, Shelter>;

    fn into_iter(self) -> Self::IntoIter {
        self.shelters.iter()
    }
}
