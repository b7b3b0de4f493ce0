//! Animal record domain model
//!
//! An [`AnimalRecord`] carries the fields shared by every animal once, with the
//! variant-specific part held in [`Species`]. Identity is `(name, birthday)`:
//! equality and hashing use only those two fields, and ordering is by
//! birthday then name.
//!
//! ## Adoption
//!
//! Adoption is a two-state machine (available / adopted) changed only through
//! [`AnimalRecord::set_adoption_info`]. The adopted state always carries both
//! the adoption date and the owner; the available state carries neither.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

use super::date::CalendarDate;
use super::note::Note;
use crate::collections::OrderedList;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimalError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Date entered rescue cannot be before birthday")]
    EnteredBeforeBirthday,

    #[error("Animal is adopted but owner or adoption date is missing")]
    MissingAdoptionInfo,

    #[error("Animal is not adopted but has an owner or adoption date")]
    UnexpectedAdoptionInfo,

    #[error("Date adopted cannot be before date entered rescue")]
    AdoptedBeforeEntry,

    #[error("Invalid owner")]
    InvalidOwner,

    #[error("Cannot add note")]
    DuplicateNote,

    #[error("Invalid age: {0} is before birthday")]
    DateBeforeBirthday(CalendarDate),

    #[error("Invalid days available for adoption: {0} is before date entered rescue")]
    DateBeforeEntry(CalendarDate),

    #[error("Invalid size: {0}")]
    InvalidSize(String),

    #[error("Invalid breed: {0}")]
    InvalidBreed(String),
}

/// Physical size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = AnimalError;

    /// Exact upper-case names only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMALL" => Ok(Size::Small),
            "MEDIUM" => Ok(Size::Medium),
            "LARGE" => Ok(Size::Large),
            other => Err(AnimalError::InvalidSize(other.to_string())),
        }
    }
}

/// Dog breeds recognized by the record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Breed {
    Beagle,
    Bulldog,
    FrenchBulldog,
    GermanShepherd,
    PointerGermanShorthaired,
    Poodle,
    RetrieverGolden,
    RetrieverLabrador,
    Rottweiler,
    YorkshireTerrier,
    Mixed,
    Other,
}

impl Breed {
    pub const ALL: [Breed; 12] = [
        Breed::Beagle,
        Breed::Bulldog,
        Breed::FrenchBulldog,
        Breed::GermanShepherd,
        Breed::PointerGermanShorthaired,
        Breed::Poodle,
        Breed::RetrieverGolden,
        Breed::RetrieverLabrador,
        Breed::Rottweiler,
        Breed::YorkshireTerrier,
        Breed::Mixed,
        Breed::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breed::Beagle => "BEAGLE",
            Breed::Bulldog => "BULLDOG",
            Breed::FrenchBulldog => "FRENCH_BULLDOG",
            Breed::GermanShepherd => "GERMAN_SHEPHERD",
            Breed::PointerGermanShorthaired => "POINTER_GERMAN_SHORTHAIRED",
            Breed::Poodle => "POODLE",
            Breed::RetrieverGolden => "RETRIEVER_GOLDEN",
            Breed::RetrieverLabrador => "RETRIEVER_LABRADOR",
            Breed::Rottweiler => "ROTTWEILER",
            Breed::YorkshireTerrier => "YORKSHIRE_TERRIER",
            Breed::Mixed => "MIXED",
            Breed::Other => "OTHER",
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breed {
    type Err = AnimalError;

    /// Case-insensitive match on the upper-case names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Breed::ALL
            .into_iter()
            .find(|breed| breed.as_str() == upper)
            .ok_or_else(|| AnimalError::InvalidBreed(s.to_string()))
    }
}

/// Life stage derived from age, species and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeCategory {
    Young,
    Adult,
    Senior,
}

impl AgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Young => "YOUNG",
            AgeCategory::Adult => "ADULT",
            AgeCategory::Senior => "SENIOR",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific part of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Cat,
    Dog(Breed),
}

impl Species {
    /// Label used in the record file and in row projections
    pub fn label(&self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog(_) => "Dog",
        }
    }

    pub fn is_cat(&self) -> bool {
        matches!(self, Species::Cat)
    }

    pub fn is_dog(&self) -> bool {
        matches!(self, Species::Dog(_))
    }
}

/// Age category thresholds: young below the first bound, senior at or above
/// the second, adult in between
pub fn age_category(species: Species, size: Size, age: i32) -> AgeCategory {
    let (adult_from, senior_from) = match (species, size) {
        (Species::Cat, _) | (Species::Dog(_), Size::Small) => (4, 9),
        (Species::Dog(_), Size::Medium) => (3, 9),
        (Species::Dog(_), Size::Large) => (3, 6),
    };

    if age < adult_from {
        AgeCategory::Young
    } else if age < senior_from {
        AgeCategory::Adult
    } else {
        AgeCategory::Senior
    }
}

/// Current adoption state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Adoption {
    #[default]
    Available,
    Adopted { date: CalendarDate, owner: String },
}

/// Identity of a record within a shelter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimalKey {
    pub name: String,
    pub birthday: CalendarDate,
}

impl AnimalKey {
    pub fn new(name: impl Into<String>, birthday: CalendarDate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }
}

impl fmt::Display for AnimalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.birthday)
    }
}

/// Construction arguments for an [`AnimalRecord`]
///
/// Defaults: not house trained, not good with kids, no notes, available.
#[derive(Debug, Clone)]
pub struct AnimalDetails {
    pub name: String,
    pub birthday: CalendarDate,
    pub size: Size,
    pub house_trained: bool,
    pub good_with_kids: bool,
    pub notes: OrderedList<Note>,
    pub date_enter_rescue: CalendarDate,
    pub adopted: bool,
    pub date_adopted: Option<CalendarDate>,
    pub owner: Option<String>,
}

impl AnimalDetails {
    pub fn new(
        name: impl Into<String>,
        birthday: CalendarDate,
        size: Size,
        date_enter_rescue: CalendarDate,
    ) -> Self {
        Self {
            name: name.into(),
            birthday,
            size,
            house_trained: false,
            good_with_kids: false,
            notes: OrderedList::new(),
            date_enter_rescue,
            adopted: false,
            date_adopted: None,
            owner: None,
        }
    }

    pub fn house_trained(mut self, value: bool) -> Self {
        self.house_trained = value;
        self
    }

    pub fn good_with_kids(mut self, value: bool) -> Self {
        self.good_with_kids = value;
        self
    }

    pub fn notes(mut self, notes: OrderedList<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn adopted(mut self, date: CalendarDate, owner: impl Into<String>) -> Self {
        self.adopted = true;
        self.date_adopted = Some(date);
        self.owner = Some(owner.into());
        self
    }
}

/// An animal in a rescue's care
#[derive(Debug, Clone)]
pub struct AnimalRecord {
    name: String,
    birthday: CalendarDate,
    size: Size,
    house_trained: bool,
    good_with_kids: bool,
    notes: OrderedList<Note>,
    date_enter_rescue: CalendarDate,
    adoption: Adoption,
    species: Species,
}

fn is_valid_text(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains('\n') && !value.contains(',')
}

/// Checks an adoption triple and turns it into an [`Adoption`] state
fn validate_adoption(
    adopted: bool,
    date_adopted: Option<CalendarDate>,
    owner: Option<&str>,
    date_enter_rescue: CalendarDate,
) -> Result<Adoption, AnimalError> {
    match (adopted, date_adopted, owner) {
        (true, Some(date), Some(owner)) => {
            if date < date_enter_rescue {
                return Err(AnimalError::AdoptedBeforeEntry);
            }
            if !is_valid_text(owner) {
                return Err(AnimalError::InvalidOwner);
            }
            Ok(Adoption::Adopted {
                date,
                owner: owner.trim().to_string(),
            })
        }
        (true, _, _) => Err(AnimalError::MissingAdoptionInfo),
        (false, None, None) => Ok(Adoption::Available),
        (false, _, _) => Err(AnimalError::UnexpectedAdoptionInfo),
    }
}

impl AnimalRecord {
    /// Creates a validated record
    pub fn new(species: Species, details: AnimalDetails) -> Result<Self, AnimalError> {
        if !is_valid_text(&details.name) {
            return Err(AnimalError::InvalidName);
        }
        if details.date_enter_rescue < details.birthday {
            return Err(AnimalError::EnteredBeforeBirthday);
        }

        let adoption = validate_adoption(
            details.adopted,
            details.date_adopted,
            details.owner.as_deref(),
            details.date_enter_rescue,
        )?;

        Ok(Self {
            name: details.name.trim().to_string(),
            birthday: details.birthday,
            size: details.size,
            house_trained: details.house_trained,
            good_with_kids: details.good_with_kids,
            notes: details.notes,
            date_enter_rescue: details.date_enter_rescue,
            adoption,
            species,
        })
    }

    pub fn cat(details: AnimalDetails) -> Result<Self, AnimalError> {
        Self::new(Species::Cat, details)
    }

    pub fn dog(breed: Breed, details: AnimalDetails) -> Result<Self, AnimalError> {
        Self::new(Species::Dog(breed), details)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> CalendarDate {
        self.birthday
    }

    pub fn key(&self) -> AnimalKey {
        AnimalKey::new(self.name.clone(), self.birthday)
    }

    /// Returns true if this record is identified by `key`
    pub fn matches(&self, key: &AnimalKey) -> bool {
        self.name == key.name && self.birthday == key.birthday
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// "Cat" or "Dog"
    pub fn kind_label(&self) -> &'static str {
        self.species.label()
    }

    /// Returns the breed for dogs
    pub fn breed(&self) -> Option<Breed> {
        match self.species {
            Species::Dog(breed) => Some(breed),
            Species::Cat => None,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_house_trained(&self) -> bool {
        self.house_trained
    }

    pub fn is_good_with_kids(&self) -> bool {
        self.good_with_kids
    }

    pub fn notes(&self) -> &OrderedList<Note> {
        &self.notes
    }

    pub fn date_enter_rescue(&self) -> CalendarDate {
        self.date_enter_rescue
    }

    pub fn adoption(&self) -> &Adoption {
        &self.adoption
    }

    pub fn is_adopted(&self) -> bool {
        matches!(self.adoption, Adoption::Adopted { .. })
    }

    pub fn date_adopted(&self) -> Option<CalendarDate> {
        match &self.adoption {
            Adoption::Adopted { date, .. } => Some(*date),
            Adoption::Available => None,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        match &self.adoption {
            Adoption::Adopted { owner, .. } => Some(owner),
            Adoption::Available => None,
        }
    }

    /// Moves between available and adopted
    ///
    /// Adopting requires both a date no earlier than the rescue entry date and
    /// a non-empty owner. Returning to available requires both to be absent.
    /// On error the record is unchanged.
    pub fn set_adoption_info(
        &mut self,
        adopted: bool,
        date_adopted: Option<CalendarDate>,
        owner: Option<&str>,
    ) -> Result<(), AnimalError> {
        self.adoption = validate_adoption(adopted, date_adopted, owner, self.date_enter_rescue)?;
        Ok(())
    }

    /// Adds a note, rejecting one equal to an existing note
    pub fn add_note(&mut self, note: Note) -> Result<(), AnimalError> {
        self.notes.add(note).map_err(|_| AnimalError::DuplicateNote)
    }

    /// Whole years since birth as of `today`
    pub fn age(&self, today: CalendarDate) -> Result<i32, AnimalError> {
        if today < self.birthday {
            return Err(AnimalError::DateBeforeBirthday(today));
        }
        Ok(self.birthday.years_to(&today))
    }

    /// Days since entering the rescue, or -1 once adopted
    pub fn days_available_for_adoption(&self, today: CalendarDate) -> Result<i32, AnimalError> {
        if today < self.date_enter_rescue {
            return Err(AnimalError::DateBeforeEntry(today));
        }
        if self.is_adopted() {
            return Ok(-1);
        }
        Ok(self.date_enter_rescue.days_to(&today))
    }

    pub fn age_category(&self, today: CalendarDate) -> Result<AgeCategory, AnimalError> {
        let age = self.age(today)?;
        Ok(age_category(self.species, self.size, age))
    }

    /// Seven-column projection: name, type, birthday, age, age category,
    /// adopted (Yes/No), days available (empty once adopted)
    pub fn to_array(&self, today: CalendarDate) -> Result<[String; 7], AnimalError> {
        let age = self.age(today)?;
        let days_available = if self.is_adopted() {
            String::new()
        } else {
            self.days_available_for_adoption(today)?.to_string()
        };

        Ok([
            self.name.clone(),
            self.species.label().to_string(),
            self.birthday.to_string(),
            age.to_string(),
            age_category(self.species, self.size, age).to_string(),
            if self.is_adopted() { "Yes" } else { "No" }.to_string(),
            days_available,
        ])
    }
}

impl PartialEq for AnimalRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.birthday == other.birthday
    }
}

impl Eq for AnimalRecord {}

impl Hash for AnimalRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.birthday.hash(state);
    }
}

impl PartialOrd for AnimalRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnimalRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.birthday
            .cmp(&other.birthday)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.birthday)?;
        for note in &self.notes {
            write!(f, "\n-{}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn loki_details() -> AnimalDetails {
        AnimalDetails::new("Loki", date("3/14/2004"), Size::Small, date("4/8/2004"))
            .good_with_kids(true)
    }

    fn dog(size: Size, birthday: &str) -> AnimalRecord {
        let details = AnimalDetails::new("Rex", date(birthday), size, date(birthday));
        AnimalRecord::dog(Breed::Mixed, details).unwrap()
    }

    #[test]
    fn new_cat_is_available() {
        let cat = AnimalRecord::cat(loki_details()).unwrap();
        assert_eq!(cat.name(), "Loki");
        assert_eq!(cat.species(), Species::Cat);
        assert!(!cat.is_adopted());
        assert!(cat.date_adopted().is_none());
        assert!(cat.owner().is_none());
        assert!(cat.breed().is_none());
        assert!(cat.is_good_with_kids());
        assert!(!cat.is_house_trained());
    }

    #[test]
    fn name_validation() {
        for bad in ["", "  ", "Lo,ki", "Lo\nki"] {
            let mut details = loki_details();
            details.name = bad.to_string();
            assert_eq!(AnimalRecord::cat(details).unwrap_err(), AnimalError::InvalidName);
        }

        let mut details = loki_details();
        details.name = "  Loki ".to_string();
        assert_eq!(AnimalRecord::cat(details).unwrap().name(), "Loki");
    }

    #[test]
    fn entry_before_birthday_rejected() {
        let details = AnimalDetails::new("Loki", date("3/14/2004"), Size::Small, date("3/13/2004"));
        assert_eq!(
            AnimalRecord::cat(details).unwrap_err(),
            AnimalError::EnteredBeforeBirthday
        );
    }

    #[test]
    fn construction_validates_adoption_triple() {
        let adopted = loki_details().adopted(date("5/13/2004"), "Ethan and Family");
        let cat = AnimalRecord::cat(adopted).unwrap();
        assert!(cat.is_adopted());
        assert_eq!(cat.owner(), Some("Ethan and Family"));

        let mut missing_owner = loki_details();
        missing_owner.adopted = true;
        missing_owner.date_adopted = Some(date("5/13/2004"));
        assert_eq!(
            AnimalRecord::cat(missing_owner).unwrap_err(),
            AnimalError::MissingAdoptionInfo
        );

        let mut stray_owner = loki_details();
        stray_owner.owner = Some("Someone".to_string());
        assert_eq!(
            AnimalRecord::cat(stray_owner).unwrap_err(),
            AnimalError::UnexpectedAdoptionInfo
        );

        let too_early = loki_details().adopted(date("4/7/2004"), "Ethan");
        assert_eq!(
            AnimalRecord::cat(too_early).unwrap_err(),
            AnimalError::AdoptedBeforeEntry
        );

        let bad_owner = loki_details().adopted(date("5/13/2004"), "Ethan, Jr");
        assert_eq!(AnimalRecord::cat(bad_owner).unwrap_err(), AnimalError::InvalidOwner);
    }

    #[test]
    fn adoption_state_machine() {
        let mut cat = AnimalRecord::cat(loki_details()).unwrap();

        cat.set_adoption_info(true, Some(date("5/13/2004")), Some(" Ethan "))
            .unwrap();
        assert!(cat.is_adopted());
        assert_eq!(cat.date_adopted(), Some(date("5/13/2004")));
        assert_eq!(cat.owner(), Some("Ethan"));

        cat.set_adoption_info(false, None, None).unwrap();
        assert_eq!(cat.adoption(), &Adoption::Available);

        // Available to available is a no-op
        cat.set_adoption_info(false, None, None).unwrap();
        assert!(!cat.is_adopted());
    }

    #[test]
    fn invalid_transition_leaves_record_unchanged() {
        let mut cat = AnimalRecord::cat(loki_details()).unwrap();
        cat.set_adoption_info(true, Some(date("5/13/2004")), Some("Ethan"))
            .unwrap();

        let err = cat
            .set_adoption_info(false, Some(date("5/13/2004")), None)
            .unwrap_err();
        assert_eq!(err, AnimalError::UnexpectedAdoptionInfo);
        assert_eq!(cat.owner(), Some("Ethan"));

        let err = cat.set_adoption_info(true, None, Some("Mia")).unwrap_err();
        assert_eq!(err, AnimalError::MissingAdoptionInfo);
        assert_eq!(cat.owner(), Some("Ethan"));
    }

    #[test]
    fn notes_reject_duplicates() {
        let mut cat = AnimalRecord::cat(loki_details()).unwrap();
        let note = Note::new(date("4/9/2004"), "Vaccinated").unwrap();

        cat.add_note(note.clone()).unwrap();
        assert_eq!(cat.add_note(note), Err(AnimalError::DuplicateNote));

        cat.add_note(Note::new(date("4/8/2004"), "Intake exam").unwrap())
            .unwrap();
        assert_eq!(cat.notes().len(), 2);
        assert_eq!(cat.notes().get(0).unwrap().message(), "Intake exam");
        assert_eq!(
            cat.to_string(),
            "Loki (3/14/2004)\n-4/8/2004 Intake exam\n-4/9/2004 Vaccinated"
        );
    }

    #[test]
    fn age_and_days_available() {
        let cat = AnimalRecord::cat(loki_details()).unwrap();
        let today = date("4/8/2010");

        assert_eq!(cat.age(today), Ok(6));
        assert_eq!(cat.days_available_for_adoption(today), Ok(6 * 365));
        assert_eq!(
            cat.age(date("1/1/2004")),
            Err(AnimalError::DateBeforeBirthday(date("1/1/2004")))
        );
        assert_eq!(
            cat.days_available_for_adoption(date("4/1/2004")),
            Err(AnimalError::DateBeforeEntry(date("4/1/2004")))
        );
    }

    #[test]
    fn adopted_animals_report_minus_one_days() {
        let cat = AnimalRecord::cat(loki_details().adopted(date("5/13/2004"), "Ethan")).unwrap();
        assert_eq!(cat.days_available_for_adoption(date("1/1/2005")), Ok(-1));
    }

    #[test]
    fn age_category_table() {
        use AgeCategory::*;

        let cat = Species::Cat;
        let mutt = Species::Dog(Breed::Mixed);

        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(age_category(cat, size, 3), Young);
            assert_eq!(age_category(cat, size, 4), Adult);
            assert_eq!(age_category(cat, size, 8), Adult);
            assert_eq!(age_category(cat, size, 9), Senior);
        }

        assert_eq!(age_category(mutt, Size::Small, 3), Young);
        assert_eq!(age_category(mutt, Size::Small, 4), Adult);
        assert_eq!(age_category(mutt, Size::Small, 9), Senior);

        assert_eq!(age_category(mutt, Size::Medium, 2), Young);
        assert_eq!(age_category(mutt, Size::Medium, 3), Adult);
        assert_eq!(age_category(mutt, Size::Medium, 8), Adult);
        assert_eq!(age_category(mutt, Size::Medium, 9), Senior);

        assert_eq!(age_category(mutt, Size::Large, 2), Young);
        assert_eq!(age_category(mutt, Size::Large, 3), Adult);
        assert_eq!(age_category(mutt, Size::Large, 5), Adult);
        assert_eq!(age_category(mutt, Size::Large, 6), Senior);
    }

    #[test]
    fn large_dog_category_from_dates() {
        let rex = dog(Size::Large, "1/1/2010");
        assert_eq!(rex.age_category(date("1/1/2013")), Ok(AgeCategory::Adult));
        assert_eq!(rex.age_category(date("1/1/2015")), Ok(AgeCategory::Adult));
        assert_eq!(rex.age_category(date("1/1/2016")), Ok(AgeCategory::Senior));
        assert!(rex.age_category(date("1/1/2009")).is_err());
    }

    #[test]
    fn identity_is_name_and_birthday() {
        let a = AnimalRecord::cat(loki_details()).unwrap();
        let b = AnimalRecord::dog(
            Breed::Poodle,
            AnimalDetails::new("Loki", date("3/14/2004"), Size::Large, date("1/1/2010")),
        )
        .unwrap();
        let c = AnimalRecord::cat(AnimalDetails::new(
            "Loki",
            date("3/15/2004"),
            Size::Small,
            date("4/8/2004"),
        ))
        .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(a.matches(&b.key()));
    }

    #[test]
    fn ordering_breaks_birthday_ties_by_name() {
        let bday = date("1/1/2010");
        let abby = AnimalRecord::cat(AnimalDetails::new("Abby", bday, Size::Small, bday)).unwrap();
        let zed = AnimalRecord::cat(AnimalDetails::new("Zed", bday, Size::Small, bday)).unwrap();
        assert!(abby < zed);
    }

    #[test]
    fn to_array_projection() {
        let cat = AnimalRecord::cat(loki_details()).unwrap();
        let row = cat.to_array(date("4/18/2004")).unwrap();
        assert_eq!(row, ["Loki", "Cat", "3/14/2004", "0", "YOUNG", "No", "10"]);

        let adopted = AnimalRecord::dog(
            Breed::Rottweiler,
            AnimalDetails::new("Duke", date("2/29/2004"), Size::Large, date("7/21/2004"))
                .adopted(date("7/28/2004"), "Olivia and Family"),
        )
        .unwrap();
        let row = adopted.to_array(date("7/28/2011")).unwrap();
        assert_eq!(row, ["Duke", "Dog", "2/29/2004", "7", "SENIOR", "Yes", ""]);
    }

    #[test]
    fn size_and_breed_parsing() {
        assert_eq!("SMALL".parse::<Size>(), Ok(Size::Small));
        assert!("small".parse::<Size>().is_err());
        assert_eq!("rottweiler".parse::<Breed>(), Ok(Breed::Rottweiler));
        assert_eq!(
            "POINTER_GERMAN_SHORTHAIRED".parse::<Breed>(),
            Ok(Breed::PointerGermanShorthaired)
        );
        assert!("DACHSHUND".parse::<Breed>().is_err());
    }
}
