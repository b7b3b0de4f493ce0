//! Animal CLI commands

use std::str::FromStr;

use anyhow::{bail, Result};
use clap::{Subcommand, ValueEnum};

use super::output::Output;
use super::workspace::{self, Workspace, ANIMAL_COLUMNS};
use crate::domain::{
    AnimalDetails, AnimalKey, AnimalRecord, Breed, CalendarDate, Note, Shelter, Size, Species,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Cat,
    Dog,
}

/// Inclusive `MIN-MAX` bounds for range queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl FromStr for Bounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("expected MIN-MAX, got '{}'", s);
        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            min: min.trim().parse().map_err(|_| invalid())?,
            max: max.trim().parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Subcommand)]
pub enum AnimalCommands {
    /// List a shelter's animals
    ///
    /// Examples:
    ///   rescue animal list "NCSU Rescue"              # Everyone
    ///   rescue animal list "NCSU Rescue" --dogs       # Available dogs
    ///   rescue animal list "NCSU Rescue" --age 2-5    # Available, aged 2 to 5
    ///   rescue animal list "NCSU Rescue" --days 0-30  # Available, in rescue up to 30 days
    List {
        /// Shelter name
        shelter: String,

        /// Only animals still available for adoption
        #[arg(long, group = "query")]
        available: bool,

        /// Only adopted animals
        #[arg(long, group = "query")]
        adopted: bool,

        /// Only available cats
        #[arg(long, group = "query")]
        cats: bool,

        /// Only available dogs
        #[arg(long, group = "query")]
        dogs: bool,

        /// Available animals aged MIN-MAX years
        #[arg(long, group = "query", value_name = "MIN-MAX")]
        age: Option<Bounds>,

        /// Available animals in rescue MIN-MAX days
        #[arg(long, group = "query", value_name = "MIN-MAX")]
        days: Option<Bounds>,
    },

    /// Add an animal to a shelter
    Add {
        /// Shelter name
        shelter: String,

        /// Cat or dog
        kind: Kind,

        /// Animal name
        name: String,

        /// Birthday (M/D/YYYY)
        birthday: CalendarDate,

        /// SMALL, MEDIUM or LARGE
        size: Size,

        /// Date the animal entered the rescue (M/D/YYYY)
        entered: CalendarDate,

        /// Dog breed, e.g. BEAGLE
        #[arg(long)]
        breed: Option<Breed>,

        #[arg(long)]
        house_trained: bool,

        #[arg(long)]
        good_with_kids: bool,
    },

    /// Show one animal with its notes
    Show {
        shelter: String,
        name: String,
        birthday: CalendarDate,
    },

    /// Add a dated note to an animal
    Note {
        shelter: String,
        name: String,
        birthday: CalendarDate,

        /// Note date (M/D/YYYY)
        date: CalendarDate,

        /// Note text (no commas or line breaks)
        message: String,
    },

    /// Record an adoption
    Adopt {
        shelter: String,
        name: String,
        birthday: CalendarDate,

        /// Adoption date (M/D/YYYY)
        date: CalendarDate,

        /// New owner
        owner: String,
    },

    /// Return an adopted animal to the shelter
    Return {
        shelter: String,
        name: String,
        birthday: CalendarDate,
    },
}

/// Which animals `animal list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Query {
    All,
    Available,
    Adopted,
    Cats,
    Dogs,
    Age(Bounds),
    Days(Bounds),
}

pub fn run(cmd: AnimalCommands, workspace: &Workspace, output: &Output) -> Result<()> {
    match cmd {
        AnimalCommands::List {
            shelter,
            available,
            adopted,
            cats,
            dogs,
            age,
            days,
        } => {
            let query = match (age, days) {
                (Some(bounds), _) => Query::Age(bounds),
                (_, Some(bounds)) => Query::Days(bounds),
                _ if available => Query::Available,
                _ if adopted => Query::Adopted,
                _ if cats => Query::Cats,
                _ if dogs => Query::Dogs,
                _ => Query::All,
            };
            list_animals(workspace, output, &shelter, query)
        }
        AnimalCommands::Add {
            shelter,
            kind,
            name,
            birthday,
            size,
            entered,
            breed,
            house_trained,
            good_with_kids,
        } => {
            let species = match (kind, breed) {
                (Kind::Cat, None) => Species::Cat,
                (Kind::Cat, Some(_)) => bail!("--breed only applies to dogs"),
                (Kind::Dog, Some(breed)) => Species::Dog(breed),
                (Kind::Dog, None) => bail!("Dogs need a --breed"),
            };
            let details = AnimalDetails::new(name, birthday, size, entered)
                .house_trained(house_trained)
                .good_with_kids(good_with_kids);
            add_animal(workspace, output, &shelter, AnimalRecord::new(species, details)?)
        }
        AnimalCommands::Show {
            shelter,
            name,
            birthday,
        } => show_animal(workspace, output, &shelter, &AnimalKey::new(name, birthday)),
        AnimalCommands::Note {
            shelter,
            name,
            birthday,
            date,
            message,
        } => {
            let note = Note::new(date, &message)?;
            add_note(workspace, output, &shelter, &AnimalKey::new(name, birthday), note)
        }
        AnimalCommands::Adopt {
            shelter,
            name,
            birthday,
            date,
            owner,
        } => set_adoption(
            workspace,
            output,
            &shelter,
            &AnimalKey::new(name, birthday),
            Some((date, owner.as_str())),
        ),
        AnimalCommands::Return {
            shelter,
            name,
            birthday,
        } => set_adoption(
            workspace,
            output,
            &shelter,
            &AnimalKey::new(name, birthday),
            None,
        ),
    }
}

fn select<'a>(
    shelter: &'a Shelter,
    query: Query,
    today: CalendarDate,
) -> Result<Vec<&'a AnimalRecord>> {
    let animals: Vec<&AnimalRecord> = match query {
        Query::All => shelter.animals().iter().collect(),
        Query::Available => shelter.available(),
        Query::Adopted => shelter.adopted(),
        Query::Cats => shelter.available_cats(),
        Query::Dogs => shelter.available_dogs(),
        Query::Age(b) => shelter.available_by_age(today, b.min, b.max)?,
        Query::Days(b) => shelter.available_by_day_range(today, b.min, b.max)?,
    };
    Ok(animals)
}

fn list_animals(workspace: &Workspace, output: &Output, name: &str, query: Query) -> Result<()> {
    let session = workspace.open()?;
    let shelter = workspace::shelter(&session, name)?;
    let today = workspace.today()?;

    tracing::debug!("Listing {:?} in {} as of {}", query, shelter.name(), today);
    let animals = select(shelter, query, today)?;

    if output.is_json() {
        let items = animals
            .iter()
            .map(|a| workspace::animal_json(a, today))
            .collect::<Result<Vec<_>>>()?;
        output.data(&items);
        return Ok(());
    }

    if animals.is_empty() {
        output.line("No animals found.");
        return Ok(());
    }

    output.row(&ANIMAL_COLUMNS);
    for animal in animals {
        output.row(&animal.to_array(today)?);
    }

    Ok(())
}

fn add_animal(
    workspace: &Workspace,
    output: &Output,
    shelter_name: &str,
    animal: AnimalRecord,
) -> Result<()> {
    let mut session = workspace.open()?;
    let shelter = workspace::shelter_mut(&mut session, shelter_name)?;

    let key = animal.key();
    if !shelter.add_animal(animal) {
        bail!("{} is already in {}", key, shelter.name());
    }
    workspace.save(&mut session)?;

    output.success(&format!("Added {} to {}", key, shelter_name));
    Ok(())
}

fn show_animal(
    workspace: &Workspace,
    output: &Output,
    shelter_name: &str,
    key: &AnimalKey,
) -> Result<()> {
    let session = workspace.open()?;
    let shelter = workspace::shelter(&session, shelter_name)?;
    let Some(animal) = shelter.find_by_key(key) else {
        bail!("{} is not in {}", key, shelter.name());
    };
    let today = workspace.today()?;

    if output.is_json() {
        output.data(&workspace::animal_json(animal, today)?);
        return Ok(());
    }

    output.line(&animal.to_string());
    output.blank();

    let row = animal.to_array(today)?;
    for (label, value) in ANIMAL_COLUMNS.iter().zip(row.iter()) {
        output.row(&[*label, value.as_str()]);
    }
    output.row(&["Size", animal.size().as_str()]);
    if let Some(breed) = animal.breed() {
        output.row(&["Breed", breed.as_str()]);
    }
    let entered = animal.date_enter_rescue().to_string();
    output.row(&["Entered", entered.as_str()]);
    if let (Some(date), Some(owner)) = (animal.date_adopted(), animal.owner()) {
        let adopted_on = date.to_string();
        output.row(&["Adopted On", adopted_on.as_str()]);
        output.row(&["Owner", owner]);
    }

    Ok(())
}

fn add_note(
    workspace: &Workspace,
    output: &Output,
    shelter_name: &str,
    key: &AnimalKey,
    note: Note,
) -> Result<()> {
    let mut session = workspace.open()?;
    let shelter = workspace::shelter_mut(&mut session, shelter_name)?;

    if !shelter.add_note(key, note)? {
        bail!("{} is not in {}", key, shelter_name);
    }
    workspace.save(&mut session)?;

    output.success(&format!("Added note to {}", key));
    Ok(())
}

fn set_adoption(
    workspace: &Workspace,
    output: &Output,
    shelter_name: &str,
    key: &AnimalKey,
    adoption: Option<(CalendarDate, &str)>,
) -> Result<()> {
    let mut session = workspace.open()?;
    let shelter = workspace::shelter_mut(&mut session, shelter_name)?;

    let updated = match adoption {
        Some((date, owner)) => shelter.set_adoption_info(key, true, Some(date), Some(owner))?,
        None => shelter.set_adoption_info(key, false, None, None)?,
    };
    if !updated {
        bail!("{} is not in {}", key, shelter_name);
    }
    workspace.save(&mut session)?;

    match adoption {
        Some((date, owner)) => output.success(&format!("{} adopted by {} on {}", key, owner, date)),
        None => output.success(&format!("{} is available for adoption", key)),
    }
    Ok(())
}
