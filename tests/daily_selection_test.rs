use chrono::NaiveDate;
use fossil_globe::{
    daily_seed, select_daily, shuffle, Coordinate, ResolvedSpecies, SelectionPolicy,
    SpeciesRecord,
};
use std::collections::HashSet;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn point(id: &str, has_model: bool) -> ResolvedSpecies {
    let mut record = SpeciesRecord::new(id);
    record.name = id.to_uppercase();
    record.has_model = has_model;
    ResolvedSpecies::new(record, Coordinate::new(10.0, 20.0).unwrap())
}

fn catalog(with_model: usize, without_model: usize) -> Vec<ResolvedSpecies> {
    let mut points: Vec<ResolvedSpecies> = (0..with_model)
        .map(|n| point(&format!("model-{}", n), true))
        .collect();
    points.extend((0..without_model).map(|n| point(&format!("plain-{}", n), false)));
    points
}

fn ids(selection: &[ResolvedSpecies]) -> Vec<&str> {
    selection.iter().map(|p| p.record.id.as_str()).collect()
}

#[test]
fn test_seed_is_stable_per_day() {
    assert_eq!(daily_seed(day(2024, 2, 29)), daily_seed(day(2024, 2, 29)));
    assert_eq!(daily_seed(day(2024, 2, 29)), 20240229);

    let seeds: HashSet<i64> = (1..=31).map(|d| daily_seed(day(2024, 1, d))).collect();
    assert_eq!(seeds.len(), 31);
    assert_ne!(daily_seed(day(2024, 1, 31)), daily_seed(day(2024, 2, 1)));
}

#[test]
fn test_shuffle_is_a_repeatable_permutation() {
    let input: Vec<u32> = (0..25).collect();

    let once = shuffle(input.clone(), 20240105);
    let twice = shuffle(input.clone(), 20240105);
    assert_eq!(once, twice);

    let mut sorted = once.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, input);
}

#[test]
fn test_shuffle_depends_on_seed() {
    let input: Vec<u32> = (0..10).collect();
    let orders: HashSet<Vec<u32>> = (0..5)
        .map(|offset| shuffle(input.clone(), 20240105 + offset))
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn test_three_models_twenty_plain_cap_twelve() {
    let records = catalog(3, 20);
    let policy = SelectionPolicy::default();
    let today = day(2024, 8, 15);

    let selection = select_daily(&records, today, &policy);
    assert_eq!(selection.len(), 12);
    assert_eq!(selection.model_count(), 2);
    assert!(selection.entries[..2].iter().all(|p| p.record.has_model));

    let again = select_daily(&records, today, &policy);
    assert_eq!(
        serde_json::to_vec(&selection).unwrap(),
        serde_json::to_vec(&again).unwrap()
    );

    let unique: HashSet<&str> = ids(&selection.entries).into_iter().collect();
    assert_eq!(unique.len(), 12);
}

#[test]
fn test_no_model_records_means_none_selected() {
    let records = catalog(0, 15);
    let selection = select_daily(&records, day(2024, 8, 15), &SelectionPolicy::default());

    assert_eq!(selection.model_count(), 0);
    assert_eq!(selection.len(), 12);

    let small = catalog(0, 4);
    let selection = select_daily(&small, day(2024, 8, 15), &SelectionPolicy::default());
    assert_eq!(selection.len(), 4);
}

#[test]
fn test_single_model_record_is_always_included() {
    let records = catalog(1, 40);
    for d in 1..=28 {
        let selection = select_daily(&records, day(2023, 2, d), &SelectionPolicy::default());
        assert_eq!(selection.entries[0].record.id, "model-0");
        assert_eq!(selection.len(), 12);
    }
}

#[test]
fn test_input_smaller_than_cap_returns_everything_once() {
    let records = catalog(2, 5);
    let selection = select_daily(&records, day(2024, 12, 1), &SelectionPolicy::default());

    let mut selected = ids(&selection.entries);
    selected.sort_unstable();
    let mut expected = ids(&records);
    expected.sort_unstable();
    assert_eq!(selected, expected);
}

#[test]
fn test_empty_input() {
    let selection = select_daily(&[] as &[ResolvedSpecies], day(2024, 1, 1), &SelectionPolicy::default());
    assert!(selection.is_empty());
}

#[test]
fn test_different_days_rotate_the_selection() {
    let records = catalog(4, 30);
    let policy = SelectionPolicy::default();

    let selections: HashSet<Vec<String>> = (1..=7)
        .map(|d| {
            select_daily(&records, day(2024, 4, d), &policy)
                .entries
                .iter()
                .map(|p| p.record.id.clone())
                .collect()
        })
        .collect();
    assert!(selections.len() > 1);
}
