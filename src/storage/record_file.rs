//! Record file codec
//!
//! A record file is line oriented. Every non-blank line starts with an
//! indicator character:
//!
//! | Indicator | Meaning |
//! |-----------|---------|
//! | `#` | new shelter: `# name` |
//! | `*` | animal in the current shelter: `* Type,name,birthday,...` |
//! | `-` | vet appointment for an animal already listed: `- name,birthday` |
//!
//! A blank line closes the current shelter block. Two `#` lines in one block,
//! a blank first line, an unknown indicator, or a `*`/`-` line before any
//! shelter are all malformed.
//!
//! Animal fields, comma separated:
//!
//! ```text
//! Cat,name,birthday,size,houseTrained,goodWithKids,entered,NOTES[,note...]
//! Cat,name,birthday,size,houseTrained,goodWithKids,entered,true,adopted,owner,NOTES[,note...]
//! Dog,name,birthday,size,houseTrained,goodWithKids,entered,breed,NOTES[,note...]
//! Dog,name,birthday,size,houseTrained,goodWithKids,entered,true,adopted,owner,breed,NOTES[,note...]
//! ```
//!
//! Each note is `M/D/YYYY message`.
//!
//! Whatever goes wrong while parsing, [`decode`] reports a single
//! [`RecordFileError::Load`]; the specific cause is only logged.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::collections::OrderedList;
use crate::domain::{
    AnimalDetails, AnimalError, AnimalKey, AnimalRecord, Breed, CalendarDate, Note, Shelter,
    ShelterDirectory, Size, Species,
};

/// Placeholder field that precedes the notes on every animal line
pub const NOTES_TOKEN: &str = "NOTES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordFileError {
    #[error("File not found.")]
    NotFound,

    #[error("Unable to load file.")]
    Load,

    #[error("Unable to save file.")]
    Save,
}

/// Why a record file failed to parse
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: first line is blank")]
    LeadingBlankLine { line: usize },

    #[error("line {line}: second shelter header in the same block")]
    HeaderInOpenBlock { line: usize },

    #[error("line {line}: '{indicator}' line before any shelter")]
    NoShelter { line: usize, indicator: char },

    #[error("line {line}: unknown indicator '{indicator}'")]
    UnknownIndicator { line: usize, indicator: char },

    #[error("line {line}: {reason}")]
    InvalidShelter { line: usize, reason: String },

    #[error("line {line}: {reason}")]
    InvalidAnimal { line: usize, reason: String },

    #[error("line {line}: {reason}")]
    InvalidAppointment { line: usize, reason: String },
}

/// Reads and parses a record file
pub fn decode(path: &Path) -> Result<ShelterDirectory, RecordFileError> {
    let mut file = File::open(path).map_err(|e| {
        tracing::debug!("Failed to open {}: {}", path.display(), e);
        RecordFileError::NotFound
    })?;

    file.lock_shared().map_err(|e| {
        tracing::debug!("Failed to lock {}: {}", path.display(), e);
        RecordFileError::Load
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content).map_err(|e| {
        tracing::debug!("Failed to read {}: {}", path.display(), e);
        RecordFileError::Load
    })?;

    // Lock is released when file is dropped
    parse(&content).map_err(|e| {
        tracing::debug!("Rejected {}: {}", path.display(), e);
        RecordFileError::Load
    })
}

/// Writes a record file atomically (temp file in the same directory + rename)
pub fn encode(directory: &ShelterDirectory, path: &Path) -> Result<(), RecordFileError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(parent).map_err(|e| {
        tracing::debug!("Failed to create temp file in {}: {}", parent.display(), e);
        RecordFileError::Save
    })?;

    // Dropping the temp file on any error below removes it
    write_locked(temp.as_file(), &render(directory)).map_err(|e| {
        tracing::debug!("Failed to write {}: {}", temp.path().display(), e);
        RecordFileError::Save
    })?;

    temp.persist(path).map_err(|e| {
        tracing::debug!("Failed to rename temp file to {}: {}", path.display(), e.error);
        RecordFileError::Save
    })?;

    tracing::debug!("Wrote {} shelters to {}", directory.len(), path.display());
    Ok(())
}

fn write_locked(file: &File, content: &str) -> std::io::Result<()> {
    file.lock_exclusive()?;

    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    file.sync_all()
}

/// Parses record file text
pub fn parse(content: &str) -> Result<ShelterDirectory, ParseError> {
    let mut decoder = Decoder::default();
    for (index, line) in content.lines().enumerate() {
        decoder.line(index + 1, line)?;
    }
    Ok(decoder.directory)
}

#[derive(Default)]
struct Decoder {
    directory: ShelterDirectory,
    /// Name of the shelter that `*` and `-` lines attach to
    current: Option<String>,
    /// True while inside a block that already has a `#` or `*` line
    block_open: bool,
    seen_content: bool,
}

impl Decoder {
    fn line(&mut self, line_no: usize, raw: &str) -> Result<(), ParseError> {
        let line = raw.trim();

        let Some(indicator) = line.chars().next() else {
            if !self.seen_content {
                return Err(ParseError::LeadingBlankLine { line: line_no });
            }
            self.block_open = false;
            return Ok(());
        };
        self.seen_content = true;

        let data = line[indicator.len_utf8()..].trim();

        match indicator {
            '#' => {
                if self.block_open {
                    return Err(ParseError::HeaderInOpenBlock { line: line_no });
                }
                self.block_open = true;
                self.shelter(line_no, data)
            }
            '*' => {
                let shelter = self.current_shelter(line_no, indicator)?;
                let animal = parse_animal(data).map_err(|reason| ParseError::InvalidAnimal {
                    line: line_no,
                    reason,
                })?;
                let key = animal.key();
                if !shelter.add_animal(animal) {
                    tracing::debug!("line {}: duplicate animal {} ignored", line_no, key);
                }
                self.block_open = true;
                Ok(())
            }
            '-' => {
                let shelter = self.current_shelter(line_no, indicator)?;
                let key = parse_appointment(data).map_err(|reason| {
                    ParseError::InvalidAppointment {
                        line: line_no,
                        reason,
                    }
                })?;
                if !shelter.contains(&key) {
                    return Err(ParseError::InvalidAppointment {
                        line: line_no,
                        reason: format!("no animal {} in {}", key, shelter.name()),
                    });
                }
                if !shelter.add_appointment(&key) {
                    tracing::debug!("line {}: duplicate appointment for {} ignored", line_no, key);
                }
                Ok(())
            }
            other => Err(ParseError::UnknownIndicator {
                line: line_no,
                indicator: other,
            }),
        }
    }

    fn shelter(&mut self, line_no: usize, name: &str) -> Result<(), ParseError> {
        let invalid = |reason: String| ParseError::InvalidShelter {
            line: line_no,
            reason,
        };

        let shelter = Shelter::new(name).map_err(|e| invalid(e.to_string()))?;
        let name = shelter.name().to_string();
        self.directory
            .add(shelter)
            .map_err(|e| invalid(e.to_string()))?;

        tracing::debug!("line {}: shelter {}", line_no, name);
        self.current = Some(name);
        Ok(())
    }

    fn current_shelter(
        &mut self,
        line_no: usize,
        indicator: char,
    ) -> Result<&mut Shelter, ParseError> {
        let no_shelter = ParseError::NoShelter {
            line: line_no,
            indicator,
        };
        match self.current.as_deref() {
            Some(name) => self.directory.find_mut(name).ok_or(no_shelter),
            None => Err(no_shelter),
        }
    }
}

fn field<'a>(fields: &[&'a str], index: usize, what: &str) -> Result<&'a str, String> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| format!("missing {}", what))
}

fn parse_date(value: &str, what: &str) -> Result<CalendarDate, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {}: {}", what, value))
}

fn parse_flag(value: &str, what: &str) -> Result<bool, String> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("invalid {}: {}", what, other)),
    }
}

fn parse_animal(data: &str) -> Result<AnimalRecord, String> {
    let fields: Vec<&str> = data.split(',').map(str::trim).collect();

    let kind = field(&fields, 0, "animal type")?;
    let is_dog = match kind {
        "Cat" => false,
        "Dog" => true,
        other => return Err(format!("unknown animal type: {}", other)),
    };

    let name = field(&fields, 1, "name")?;
    let birthday = parse_date(field(&fields, 2, "birthday")?, "birthday")?;
    let size: Size = field(&fields, 3, "size")?
        .parse()
        .map_err(|e: AnimalError| e.to_string())?;
    let house_trained = parse_flag(field(&fields, 4, "house trained")?, "house trained")?;
    let good_with_kids = parse_flag(field(&fields, 5, "good with kids")?, "good with kids")?;
    let entered = parse_date(field(&fields, 6, "date entered rescue")?, "date entered rescue")?;

    let mut details = AnimalDetails::new(name, birthday, size, entered)
        .house_trained(house_trained)
        .good_with_kids(good_with_kids);

    let mut next = 7;
    if fields
        .get(next)
        .is_some_and(|f| f.eq_ignore_ascii_case("true"))
    {
        let adopted_on = parse_date(field(&fields, 8, "adoption date")?, "adoption date")?;
        let owner = field(&fields, 9, "owner")?;
        details = details.adopted(adopted_on, owner);
        next = 10;
    }

    let species = if is_dog {
        let breed: Breed = field(&fields, next, "breed")?
            .parse()
            .map_err(|e: AnimalError| e.to_string())?;
        next += 1;
        Species::Dog(breed)
    } else {
        Species::Cat
    };

    let token = field(&fields, next, "notes marker")?;
    if token != NOTES_TOKEN {
        return Err(format!("expected {}, found {}", NOTES_TOKEN, token));
    }

    let mut notes = OrderedList::new();
    for raw in &fields[next + 1..] {
        let note: Note = raw
            .parse()
            .map_err(|_| format!("invalid note: {}", raw))?;
        notes
            .add(note)
            .map_err(|_| format!("duplicate note: {}", raw))?;
    }

    AnimalRecord::new(species, details.notes(notes)).map_err(|e| e.to_string())
}

fn parse_appointment(data: &str) -> Result<AnimalKey, String> {
    let fields: Vec<&str> = data.split(',').map(str::trim).collect();
    let name = field(&fields, 0, "name")?;
    let birthday = parse_date(field(&fields, 1, "birthday")?, "birthday")?;
    Ok(AnimalKey::new(name, birthday))
}

/// Renders one animal's fields (without the leading `* `)
pub fn animal_line(animal: &AnimalRecord) -> String {
    let mut fields = vec![
        animal.kind_label().to_string(),
        animal.name().to_string(),
        animal.birthday().to_string(),
        animal.size().to_string(),
        animal.is_house_trained().to_string(),
        animal.is_good_with_kids().to_string(),
        animal.date_enter_rescue().to_string(),
    ];

    if let (Some(date), Some(owner)) = (animal.date_adopted(), animal.owner()) {
        fields.push("true".to_string());
        fields.push(date.to_string());
        fields.push(owner.to_string());
    }

    if let Some(breed) = animal.breed() {
        fields.push(breed.to_string());
    }

    fields.push(NOTES_TOKEN.to_string());
    fields.extend(animal.notes().iter().map(|note| note.to_string()));

    fields.join(",")
}

/// Renders a directory as record file text
///
/// Each shelter is its header, its animal lines, and its appointment lines in
/// queue order, with a blank line between shelters and after the last one.
/// A shelter with no animals or no appointments leaves a blank line in place
/// of that section.
pub fn render(directory: &ShelterDirectory) -> String {
    let mut out = String::new();

    for (index, shelter) in directory.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        out.push_str("# ");
        out.push_str(shelter.name());
        out.push('\n');

        let animals: Vec<String> = shelter
            .animals()
            .iter()
            .map(|animal| format!("* {}", animal_line(animal)))
            .collect();
        out.push_str(&animals.join("\n"));
        out.push('\n');

        let appointments: Vec<String> = shelter
            .appointments()
            .map(|animal| format!("- {},{}", animal.name(), animal.birthday()))
            .collect();
        out.push_str(&appointments.join("\n"));
        out.push('\n');
    }

    if !directory.is_empty() {
        out.push('\n');
    }

    out
}
