//! Vet appointment CLI commands

use anyhow::{bail, Result};
use clap::Subcommand;

use super::output::Output;
use super::workspace::{self, Workspace, ANIMAL_COLUMNS};
use crate::domain::{AnimalKey, CalendarDate};

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// Put an animal at the back of the vet queue
    Add {
        shelter: String,
        name: String,
        birthday: CalendarDate,
    },

    /// Show the vet queue, front first
    List { shelter: String },

    /// Show the animal at the front of the queue
    Next { shelter: String },

    /// Finish the visit at the front of the queue
    Complete { shelter: String },
}

pub fn run(cmd: AppointmentCommands, workspace: &Workspace, output: &Output) -> Result<()> {
    match cmd {
        AppointmentCommands::Add {
            shelter,
            name,
            birthday,
        } => add_appointment(workspace, output, &shelter, &AnimalKey::new(name, birthday)),
        AppointmentCommands::List { shelter } => list_appointments(workspace, output, &shelter),
        AppointmentCommands::Next { shelter } => next_appointment(workspace, output, &shelter),
        AppointmentCommands::Complete { shelter } => {
            complete_appointment(workspace, output, &shelter)
        }
    }
}

fn add_appointment(
    workspace: &Workspace,
    output: &Output,
    shelter_name: &str,
    key: &AnimalKey,
) -> Result<()> {
    let mut session = workspace.open()?;
    let shelter = workspace::shelter_mut(&mut session, shelter_name)?;

    if !shelter.contains(key) {
        bail!("{} is not in {}", key, shelter_name);
    }
    if !shelter.add_appointment(key) {
        bail!("{} already has an appointment", key);
    }
    let position = shelter.num_appointments();
    workspace.save(&mut session)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "animal": key.to_string(),
            "position": position,
        }));
    } else {
        output.success(&format!("Scheduled {} (position {})", key, position));
    }
    Ok(())
}

fn list_appointments(workspace: &Workspace, output: &Output, shelter_name: &str) -> Result<()> {
    let session = workspace.open()?;
    let shelter = workspace::shelter(&session, shelter_name)?;
    let today = workspace.today()?;

    if output.is_json() {
        let items = shelter
            .appointments()
            .map(|a| workspace::animal_json(a, today))
            .collect::<Result<Vec<_>>>()?;
        output.data(&items);
        return Ok(());
    }

    if shelter.num_appointments() == 0 {
        output.line("No vet appointments.");
        return Ok(());
    }

    output.row(&ANIMAL_COLUMNS);
    for row in shelter.to_appointments_array(today)? {
        output.row(&row);
    }
    Ok(())
}

fn next_appointment(workspace: &Workspace, output: &Output, shelter_name: &str) -> Result<()> {
    let session = workspace.open()?;
    let shelter = workspace::shelter(&session, shelter_name)?;
    let animal = shelter.next_appointment()?;

    if output.is_json() {
        output.data(&workspace::animal_json(animal, workspace.today()?)?);
    } else {
        output.line(&animal.to_string());
    }
    Ok(())
}

fn complete_appointment(workspace: &Workspace, output: &Output, shelter_name: &str) -> Result<()> {
    let mut session = workspace.open()?;
    let shelter = workspace::shelter_mut(&mut session, shelter_name)?;
    let key = shelter.complete_appointment()?;
    let remaining = shelter.num_appointments();
    workspace.save(&mut session)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "animal": key.to_string(),
            "remaining": remaining,
        }));
    } else {
        output.success(&format!(
            "Completed appointment for {} ({} remaining)",
            key, remaining
        ));
    }
    Ok(())
}
