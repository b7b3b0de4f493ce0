//! Shelter CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::workspace::{self, Workspace, ANIMAL_COLUMNS};

#[derive(Subcommand)]
pub enum ShelterCommands {
    /// List all shelters
    List,

    /// Add an empty shelter
    Add {
        /// Shelter name
        name: String,
    },

    /// Show a shelter's animals and vet queue
    Show {
        /// Shelter name
        name: String,
    },
}

pub fn run(cmd: ShelterCommands, workspace: &Workspace, output: &Output) -> Result<()> {
    match cmd {
        ShelterCommands::List => list_shelters(workspace, output),
        ShelterCommands::Add { name } => add_shelter(workspace, output, &name),
        ShelterCommands::Show { name } => show_shelter(workspace, output, &name),
    }
}

fn list_shelters(workspace: &Workspace, output: &Output) -> Result<()> {
    let session = workspace.open()?;
    let directory = session.directory();

    if output.is_json() {
        let items: Vec<_> = directory
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.name(),
                    "animals": s.num_animals(),
                    "available": s.num_available(),
                    "adopted": s.num_adopted(),
                    "appointments": s.num_appointments(),
                })
            })
            .collect();
        output.data(&items);
        return Ok(());
    }

    if directory.is_empty() {
        output.line("No shelters found.");
        return Ok(());
    }

    output.row(&["Name", "Animals", "Available", "Adopted", "Appointments"]);
    for s in directory {
        output.row(&[
            s.name().to_string(),
            s.num_animals().to_string(),
            s.num_available().to_string(),
            s.num_adopted().to_string(),
            s.num_appointments().to_string(),
        ]);
    }

    Ok(())
}

fn add_shelter(workspace: &Workspace, output: &Output, name: &str) -> Result<()> {
    let mut session = workspace.open()?;
    session.directory_mut().add_named(name)?;
    workspace.save(&mut session)?;

    output.success(&format!("Added shelter: {}", name.trim()));
    Ok(())
}

fn show_shelter(workspace: &Workspace, output: &Output, name: &str) -> Result<()> {
    let session = workspace.open()?;
    let shelter = workspace::shelter(&session, name)?;
    let today = workspace.today()?;

    if output.is_json() {
        let animals = shelter
            .animals()
            .iter()
            .map(|a| workspace::animal_json(a, today))
            .collect::<Result<Vec<_>>>()?;
        let appointments: Vec<_> = shelter
            .appointments()
            .map(|a| a.key().to_string())
            .collect();

        output.data(&serde_json::json!({
            "name": shelter.name(),
            "available": shelter.num_available(),
            "adopted": shelter.num_adopted(),
            "animals": animals,
            "appointments": appointments,
        }));
        return Ok(());
    }

    output.line(&format!(
        "{} ({} available, {} adopted)",
        shelter.name(),
        shelter.num_available(),
        shelter.num_adopted()
    ));
    output.blank();

    output.row(&ANIMAL_COLUMNS);
    for row in shelter.to_animals_array(today)? {
        output.row(&row);
    }

    output.blank();
    if shelter.num_appointments() == 0 {
        output.line("No vet appointments.");
    } else {
        output.line("Vet queue:");
        for (position, animal) in shelter.appointments().enumerate() {
            output.line(&format!("  {}. {}", position + 1, animal.key()));
        }
    }

    Ok(())
}
