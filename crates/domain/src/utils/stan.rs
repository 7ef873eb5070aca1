//! System Trace Audit Number generation
//!
//! A STAN is 12 characters: the last four of the source app identifier followed
//! by an 8 character transaction identifier.

use chrono::{Local, Timelike};

fn tail(value: &str, n: usize) -> &str {
    let count = value.chars().count();
    if count <= n {
        return value;
    }
    let start = value.char_indices().nth(count - n).map_or(0, |(idx, _)| idx);
    &value[start..]
}

/// Build a STAN from the local wall clock when no identifier is supplied.
pub fn generate_stan(source_app: &str, identifier: Option<&str>) -> String {
    generate_stan_at(source_app, identifier, &Local::now())
}

/// Build a STAN, deriving the identifier from `time` as `HHMMSS` plus centiseconds.
pub fn generate_stan_at<T: Timelike>(source_app: &str, identifier: Option<&str>, time: &T) -> String {
    let suffix = tail(source_app, 4);
    match identifier {
        Some(id) => format!("{suffix}{}", tail(id, 8)),
        None => format!(
            "{suffix}{:02}{:02}{:02}{:02}",
            time.hour(),
            time.minute(),
            time.second(),
            (time.nanosecond() % 1_000_000_000) / 10_000_000
        ),
    }
}
