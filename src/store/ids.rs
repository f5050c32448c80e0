//! Identifier synthesis for appended skills and projects.
//!
//! Skills are keyed by the creation time in milliseconds, projects by a slug
//! of their title. Neither is unique on its own, so a candidate that is
//! already taken gets the first free `-2`, `-3`, ... suffix.

/// Lower-cases `title` and replaces each run of whitespace with one `-`.
/// Leading and trailing whitespace is dropped; punctuation is kept.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Candidate id for a skill created now.
pub fn timestamp_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Returns `candidate`, or `candidate-N` for the smallest `N >= 2` that is
/// not in `taken`.
pub fn disambiguate<'a>(candidate: String, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    let in_use = |id: &str| taken.clone().any(|t| t == id);
    if !in_use(&candidate) {
        return candidate;
    }
    let mut n = 2;
    loop {
        let id = format!("{candidate}-{n}");
        if !in_use(&id) {
            return id;
        }
        n += 1;
    }
}
