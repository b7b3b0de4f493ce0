//! Property tests for dates, containers, adoption state and the record file

use std::collections::VecDeque;

use proptest::prelude::*;

use rescue_ledger::collections::{FifoQueue, OrderedList};
use rescue_ledger::domain::{
    age_category, AgeCategory, AnimalDetails, AnimalKey, AnimalRecord, Breed, CalendarDate, Note,
    Shelter, ShelterDirectory, ShelterError, Size, Species,
};
use rescue_ledger::storage::record_file;

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1u32..=12, 1u32..=31, 2000i32..=2050)
        .prop_filter_map("invalid day of month", |(m, d, y)| {
            CalendarDate::new(m, d, y).ok()
        })
}

/// Two dates in order
fn date_pair() -> impl Strategy<Value = (CalendarDate, CalendarDate)> {
    (any_date(), any_date()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

fn any_size() -> impl Strategy<Value = Size> {
    prop_oneof![Just(Size::Small), Just(Size::Medium), Just(Size::Large)]
}

fn any_species() -> impl Strategy<Value = Species> {
    prop_oneof![
        Just(Species::Cat),
        proptest::sample::select(Breed::ALL.to_vec()).prop_map(Species::Dog),
    ]
}

fn any_animal() -> impl Strategy<Value = AnimalRecord> {
    (
        "[A-Za-z]{1,8}",
        date_pair(),
        any_size(),
        any_species(),
        any::<(bool, bool)>(),
        proptest::option::of(("[A-Za-z]{1,8}( [A-Za-z]{1,8})?", 0i32..400)),
        proptest::collection::vec(("[a-z]{1,8}( [a-z]{1,8})?", any_date()), 0..3),
    )
        .prop_filter_map(
            "adoption date out of range",
            |(name, (birthday, entered), size, species, (trained, kids), adoption, notes)| {
                let mut details = AnimalDetails::new(name, birthday, size, entered)
                    .house_trained(trained)
                    .good_with_kids(kids);

                if let Some((owner, days)) = adoption {
                    let later = CalendarDate::new(
                        entered.month(),
                        entered.day(),
                        (entered.year() + days / 100).min(2050),
                    )
                    .ok()?;
                    details = details.adopted(later, owner);
                }

                let mut list = OrderedList::new();
                for (message, date) in notes {
                    let _ = list.add(Note::new(date, message).ok()?);
                }

                AnimalRecord::new(species, details.notes(list)).ok()
            },
        )
}

fn any_shelter() -> impl Strategy<Value = Shelter> {
    (
        "[A-Z][A-Za-z']{0,6}( [A-Za-z.]{1,6})?",
        proptest::collection::vec(any_animal(), 0..5),
        proptest::collection::vec(any::<prop::sample::Index>(), 0..4),
    )
        .prop_map(|(name, animals, queued)| {
            let mut shelter = Shelter::new(name).unwrap();
            for animal in animals {
                shelter.add_animal(animal);
            }
            if shelter.num_animals() > 0 {
                for index in queued {
                    let i = index.index(shelter.num_animals());
                    let key = shelter.animal(i).unwrap().key();
                    shelter.add_appointment(&key);
                }
            }
            shelter
        })
}

fn any_directory() -> impl Strategy<Value = ShelterDirectory> {
    proptest::collection::vec(any_shelter(), 0..4).prop_map(|shelters| {
        let mut directory = ShelterDirectory::new();
        for shelter in shelters {
            let _ = directory.add(shelter);
        }
        directory
    })
}

fn adoption_fields(animal: &AnimalRecord) -> (bool, Option<CalendarDate>, Option<String>) {
    (
        animal.is_adopted(),
        animal.date_adopted(),
        animal.owner().map(str::to_string),
    )
}

proptest! {
    #[test]
    fn date_display_parses_back(date in any_date()) {
        let parsed: CalendarDate = date.to_string().parse().unwrap();
        prop_assert_eq!(parsed, date);
        prop_assert!(CalendarDate::is_valid(date.month(), date.day(), date.year()));
    }

    #[test]
    fn ordered_list_stays_sorted(values in proptest::collection::vec(-50i32..50, 0..60)) {
        let mut list = OrderedList::new();
        for v in &values {
            let _ = list.add(*v);
        }

        let items: Vec<_> = list.iter().copied().collect();
        prop_assert!(items.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ordered_list_rejects_any_duplicate(
        values in proptest::collection::btree_set(-100i32..100, 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = OrderedList::new();
        for v in &values {
            prop_assert!(list.add(*v).is_ok());
        }

        let values: Vec<_> = values.into_iter().collect();
        let existing = values[pick.index(values.len())];
        prop_assert!(list.add(existing).is_err());
        prop_assert_eq!(list.len(), values.len());
    }

    #[test]
    fn fifo_matches_model(ops in proptest::collection::vec(proptest::option::of(any::<u16>()), 0..200)) {
        let mut queue = FifoQueue::new();
        let mut model = VecDeque::new();
        let (mut adds, mut removes) = (0usize, 0usize);

        for op in ops {
            match op {
                Some(value) => {
                    queue.add(value);
                    model.push_back(value);
                    adds += 1;
                }
                None => match model.pop_front() {
                    Some(expected) => {
                        prop_assert_eq!(queue.remove().unwrap(), expected);
                        removes += 1;
                    }
                    None => prop_assert!(queue.remove().is_err()),
                },
            }
            prop_assert_eq!(queue.len(), adds - removes);
        }

        let remaining: Vec<_> = queue.iter().copied().collect();
        let expected: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn adopt_then_return_restores_available(animal in any_animal(), owner in "[A-Za-z]{1,10}") {
        let mut animal = animal;
        if animal.is_adopted() {
            animal.set_adoption_info(false, None, None).unwrap();
        }
        let before = adoption_fields(&animal);

        animal
            .set_adoption_info(true, Some(animal.date_enter_rescue()), Some(owner.as_str()))
            .unwrap();
        prop_assert!(animal.is_adopted());

        animal.set_adoption_info(false, None, None).unwrap();
        prop_assert_eq!(adoption_fields(&animal), before);
        prop_assert_eq!(adoption_fields(&animal), (false, None, None));
    }

    #[test]
    fn invalid_age_range_always_fails(
        shelter in any_shelter(),
        today in any_date(),
        a in 0i32..50,
        b in 0i32..50,
    ) {
        let (min, max) = if a == b { (a + 1, b) } else { (a.max(b), a.min(b)) };
        prop_assert_eq!(
            shelter.available_by_age(today, min, max).unwrap_err(),
            ShelterError::InvalidRange { min, max }
        );
        prop_assert_eq!(
            shelter.available_by_age(today, -1 - a, b).unwrap_err(),
            ShelterError::InvalidRange { min: -1 - a, max: b }
        );
    }

    #[test]
    fn record_file_round_trip(directory in any_directory()) {
        let text = record_file::render(&directory);
        let decoded = record_file::parse(&text).unwrap();

        prop_assert_eq!(decoded.len(), directory.len());
        for (original, loaded) in directory.iter().zip(decoded.iter()) {
            prop_assert_eq!(original.name(), loaded.name());
            prop_assert_eq!(original.num_animals(), loaded.num_animals());

            for (a, b) in original.animals().iter().zip(loaded.animals().iter()) {
                prop_assert_eq!(a.key(), b.key());
                prop_assert_eq!(a.species(), b.species());
                prop_assert_eq!(a.size(), b.size());
                prop_assert_eq!(a.is_house_trained(), b.is_house_trained());
                prop_assert_eq!(a.is_good_with_kids(), b.is_good_with_kids());
                prop_assert_eq!(a.date_enter_rescue(), b.date_enter_rescue());
                prop_assert_eq!(adoption_fields(a), adoption_fields(b));
                prop_assert_eq!(a.notes(), b.notes());
            }

            let queued: Vec<AnimalKey> = original.appointments().map(|a| a.key()).collect();
            let reloaded: Vec<AnimalKey> = loaded.appointments().map(|a| a.key()).collect();
            prop_assert_eq!(queued, reloaded);
        }

        prop_assert_eq!(record_file::render(&decoded), text);
    }
}

#[test]
fn large_dog_age_boundaries() {
    let large = |age| age_category(Species::Dog(Breed::Mixed), Size::Large, age);
    assert_eq!(large(2), AgeCategory::Young);
    assert_eq!(large(3), AgeCategory::Adult);
    assert_eq!(large(5), AgeCategory::Adult);
    assert_eq!(large(6), AgeCategory::Senior);
}
