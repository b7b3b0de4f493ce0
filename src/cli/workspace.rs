//! Shared plumbing for commands that work on a record file

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::domain::{AnimalRecord, CalendarDate, Shelter};
use crate::storage::{Config, Session};

/// The record file a command reads and writes, plus the reporting date
pub struct Workspace {
    path: PathBuf,
    config: Config,
    today: Option<CalendarDate>,
}

impl Workspace {
    pub fn new(path: PathBuf, config: Config, today: Option<CalendarDate>) -> Self {
        Self {
            path,
            config,
            today,
        }
    }

    /// The date ages and days in rescue are computed against
    pub fn today(&self) -> Result<CalendarDate> {
        self.config.today(self.today)
    }

    /// Loads the record file into a fresh session
    pub fn open(&self) -> Result<Session> {
        let mut session = Session::new();
        session
            .load(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        Ok(session)
    }

    /// Writes the session back to the record file
    pub fn save(&self, session: &mut Session) -> Result<()> {
        session
            .save(&self.path)
            .with_context(|| format!("Failed to save {}", self.path.display()))
    }
}

pub fn shelter<'a>(session: &'a Session, name: &str) -> Result<&'a Shelter> {
    session
        .directory()
        .find(name)
        .ok_or_else(|| anyhow!("Shelter not found: {}", name))
}

pub fn shelter_mut<'a>(session: &'a mut Session, name: &str) -> Result<&'a mut Shelter> {
    session
        .directory_mut()
        .find_mut(name)
        .ok_or_else(|| anyhow!("Shelter not found: {}", name))
}

pub const ANIMAL_COLUMNS: [&str; 7] = [
    "Name",
    "Type",
    "Birthday",
    "Age",
    "Category",
    "Adopted",
    "Days Available",
];

/// JSON form of an animal, keyed like the text table
pub fn animal_json(animal: &AnimalRecord, today: CalendarDate) -> Result<serde_json::Value> {
    let age = animal.age(today)?;
    let days_available = if animal.is_adopted() {
        None
    } else {
        Some(animal.days_available_for_adoption(today)?)
    };

    Ok(serde_json::json!({
        "name": animal.name(),
        "type": animal.kind_label(),
        "breed": animal.breed().map(|b| b.to_string()),
        "size": animal.size().to_string(),
        "birthday": animal.birthday().to_string(),
        "age": age,
        "age_category": animal.age_category(today)?.to_string(),
        "adopted": animal.is_adopted(),
        "date_adopted": animal.date_adopted().map(|d| d.to_string()),
        "owner": animal.owner(),
        "days_available": days_available,
        "notes": animal.notes().iter().map(|n| n.to_string()).collect::<Vec<_>>(),
    }))
}
