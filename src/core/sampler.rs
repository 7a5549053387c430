//! Date-keyed selection of the species shown on the globe.
//!
//! The seed formula and the sine transform match the browser client exactly,
//! so a dataset built here and a selection made in a visitor's browser agree
//! on the same calendar day.

use crate::domain::model::{DailySelection, ModelTagged};
use crate::domain::policy::SelectionPolicy;
use chrono::{Datelike, NaiveDate};

/// `year * 10000 + month * 100 + day`, month counted from 1.
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Fractional part of `sin(seed) * 10000`.
///
/// Reproducible rather than statistically sound.
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    let fraction = x - x.floor();
    // tiny negative products round up to exactly 1.0
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Seeded Fisher-Yates: for `i` from `len - 1` down to 1, swap `i` with
/// `floor(seeded_random(seed + i) * (i + 1))`.
pub fn shuffle<T>(mut items: Vec<T>, seed: i64) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let roll = seeded_random(seed + i as i64);
        let j = ((roll * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
    items
}

/// Picks the day's records: up to `max_with_model` model-tagged records
/// first, then untagged records until `cap` is reached.
///
/// The two groups are shuffled with seeds one apart so their orders do not
/// move in lockstep from day to day.
pub fn select_daily<T>(records: &[T], date: NaiveDate, policy: &SelectionPolicy) -> DailySelection<T>
where
    T: ModelTagged + Clone,
{
    let seed = daily_seed(date);
    let (with_model, without_model): (Vec<T>, Vec<T>) =
        records.iter().cloned().partition(|record| record.has_model());

    let model_take = policy.max_with_model.min(policy.cap).min(with_model.len());
    let mut entries: Vec<T> = shuffle(with_model, seed)
        .into_iter()
        .take(model_take)
        .collect();

    let remaining = policy.cap - entries.len();
    entries.extend(shuffle(without_model, seed + 1).into_iter().take(remaining));

    tracing::debug!(
        "Daily selection for {} (seed {}): {} with model, {} total",
        date,
        seed,
        model_take,
        entries.len()
    );

    DailySelection {
        date,
        seed,
        entries,
    }
}
