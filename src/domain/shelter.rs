//! Shelters and their vet appointment queues
//!
//! A [`Shelter`] owns its animals in an [`OrderedList`] and keeps a FIFO of
//! animals waiting for a vet visit. The queue stores [`AnimalKey`]s that
//! refer back into the animal list, so queued animals are never copies.
//!
//! Invariants:
//! - every queued key names an animal in the shelter
//! - no key is queued twice

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use super::animal::{AnimalError, AnimalKey, AnimalRecord};
use super::date::CalendarDate;
use super::note::Note;
use crate::collections::{FifoQueue, OrderedList};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShelterError {
    #[error("Invalid shelter name")]
    InvalidName,

    #[error("Invalid range: min {min}, max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Animal not found: {0}")]
    AnimalNotFound(AnimalKey),

    #[error("Index {index} out of range for {len} animals")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No appointments scheduled")]
    NoAppointments,

    #[error(transparent)]
    Animal(#[from] AnimalError),
}

/// A rescue organization's animals and vet queue
#[derive(Debug, Clone)]
pub struct Shelter {
    name: String,
    animals: OrderedList<AnimalRecord>,
    appointments: FifoQueue<AnimalKey>,
}

fn check_range(min: i32, max: i32) -> Result<(), ShelterError> {
    if max < min || min < 0 {
        return Err(ShelterError::InvalidRange { min, max });
    }
    Ok(())
}

impl Shelter {
    pub fn new(name: impl AsRef<str>) -> Result<Self, ShelterError> {
        let name = name.as_ref();
        if name.trim().is_empty() || name.contains('\n') {
            return Err(ShelterError::InvalidName);
        }

        Ok(Self {
            name: name.trim().to_string(),
            animals: OrderedList::new(),
            appointments: FifoQueue::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an animal; returns false if one with the same name and birthday
    /// is already here
    pub fn add_animal(&mut self, animal: AnimalRecord) -> bool {
        self.animals.add(animal).is_ok()
    }

    pub fn animal(&self, index: usize) -> Result<&AnimalRecord, ShelterError> {
        self.animals.get(index).map_err(|_| ShelterError::IndexOutOfRange {
            index,
            len: self.animals.len(),
        })
    }

    /// Looks up an animal by name and birthday
    pub fn find_animal(&self, name: &str, birthday: CalendarDate) -> Option<&AnimalRecord> {
        self.animals
            .iter()
            .find(|a| a.name() == name && a.birthday() == birthday)
    }

    pub fn find_by_key(&self, key: &AnimalKey) -> Option<&AnimalRecord> {
        self.animals.iter().find(|a| a.matches(key))
    }

    fn find_by_key_mut(&mut self, key: &AnimalKey) -> Option<&mut AnimalRecord> {
        self.animals.iter_mut().find(|a| a.matches(key))
    }

    pub fn contains(&self, key: &AnimalKey) -> bool {
        self.find_by_key(key).is_some()
    }

    pub fn animals(&self) -> &OrderedList<AnimalRecord> {
        &self.animals
    }

    /// Adds a note to a member animal; returns false if the animal is not here
    pub fn add_note(&mut self, key: &AnimalKey, note: Note) -> Result<bool, ShelterError> {
        match self.find_by_key_mut(key) {
            Some(animal) => {
                animal.add_note(note)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Updates a member animal's adoption state; returns false if the animal
    /// is not here
    pub fn set_adoption_info(
        &mut self,
        key: &AnimalKey,
        adopted: bool,
        date_adopted: Option<CalendarDate>,
        owner: Option<&str>,
    ) -> Result<bool, ShelterError> {
        match self.find_by_key_mut(key) {
            Some(animal) => {
                animal.set_adoption_info(adopted, date_adopted, owner)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn num_animals(&self) -> usize {
        self.animals.len()
    }

    pub fn num_available(&self) -> usize {
        self.animals.iter().filter(|a| !a.is_adopted()).count()
    }

    pub fn num_adopted(&self) -> usize {
        self.animals.iter().filter(|a| a.is_adopted()).count()
    }

    pub fn available(&self) -> Vec<&AnimalRecord> {
        self.animals.iter().filter(|a| !a.is_adopted()).collect()
    }

    pub fn adopted(&self) -> Vec<&AnimalRecord> {
        self.animals.iter().filter(|a| a.is_adopted()).collect()
    }

    pub fn available_cats(&self) -> Vec<&AnimalRecord> {
        self.animals
            .iter()
            .filter(|a| !a.is_adopted() && a.species().is_cat())
            .collect()
    }

    pub fn available_dogs(&self) -> Vec<&AnimalRecord> {
        self.animals
            .iter()
            .filter(|a| !a.is_adopted() && a.species().is_dog())
            .collect()
    }

    /// Available animals whose days in rescue fall in `min..=max`
    ///
    /// Fails if `today` precedes any animal's rescue entry date.
    pub fn available_by_day_range(
        &self,
        today: CalendarDate,
        min: i32,
        max: i32,
    ) -> Result<Vec<&AnimalRecord>, ShelterError> {
        check_range(min, max)?;

        let mut matches = Vec::new();
        for animal in &self.animals {
            let days = animal.days_available_for_adoption(today)?;
            if !animal.is_adopted() && (min..=max).contains(&days) {
                matches.push(animal);
            }
        }
        Ok(matches)
    }

    /// Available animals whose age in years falls in `min..=max`
    ///
    /// Fails if `today` precedes any animal's birthday.
    pub fn available_by_age(
        &self,
        today: CalendarDate,
        min: i32,
        max: i32,
    ) -> Result<Vec<&AnimalRecord>, ShelterError> {
        check_range(min, max)?;

        let mut matches = Vec::new();
        for animal in &self.animals {
            let age = animal.age(today)?;
            if !animal.is_adopted() && (min..=max).contains(&age) {
                matches.push(animal);
            }
        }
        Ok(matches)
    }

    /// Queues a member animal for the vet
    ///
    /// Returns false if the animal is not in this shelter or is already queued.
    pub fn add_appointment(&mut self, key: &AnimalKey) -> bool {
        if !self.contains(key) || self.appointments.contains(key) {
            return false;
        }
        self.appointments.add(key.clone());
        true
    }

    pub fn num_appointments(&self) -> usize {
        self.appointments.len()
    }

    /// Animals waiting for the vet, front of the queue first
    pub fn appointments(&self) -> impl Iterator<Item = &AnimalRecord> + '_ {
        self.appointments
            .iter()
            .filter_map(|key| self.find_by_key(key))
    }

    /// The animal at the front of the vet queue
    pub fn next_appointment(&self) -> Result<&AnimalRecord, ShelterError> {
        let key = self
            .appointments
            .peek()
            .map_err(|_| ShelterError::NoAppointments)?;
        self.find_by_key(key)
            .ok_or_else(|| ShelterError::AnimalNotFound(key.clone()))
    }

    /// Removes the front of the vet queue after its visit
    pub fn complete_appointment(&mut self) -> Result<AnimalKey, ShelterError> {
        self.appointments
            .remove()
            .map_err(|_| ShelterError::NoAppointments)
    }

    pub fn to_animals_array(&self, today: CalendarDate) -> Result<Vec<[String; 7]>, ShelterError> {
        self.animals
            .iter()
            .map(|animal| animal.to_array(today).map_err(ShelterError::from))
            .collect()
    }

    pub fn to_appointments_array(
        &self,
        today: CalendarDate,
    ) -> Result<Vec<[String; 7]>, ShelterError> {
        self.appointments
            .iter()
            .map(|key| -> Result<[String; 7], ShelterError> {
                let animal = self
                    .find_by_key(key)
                    .ok_or_else(|| ShelterError::AnimalNotFound(key.clone()))?;
                Ok(animal.to_array(today)?)
            })
            .collect()
    }
}

impl PartialEq for Shelter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Shelter {}

impl PartialOrd for Shelter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Shelter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Shelter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
