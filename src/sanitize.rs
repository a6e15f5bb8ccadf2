//! Cleaning of free-text input before it is stored.
//!
//! Markup characters are escaped rather than dropped, control characters are
//! removed and runs of whitespace collapse to a single space. Ordinary names,
//! including apostrophes, hyphens and non-Latin scripts, pass through intact.

use crate::errors::{TournamentError, TournamentResult};

pub const MAX_NAME_CHARS: usize = 200;

pub fn clean_text(input: &str) -> String {
    let visible: String = input
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();

    let collapsed = visible.split_whitespace().collect::<Vec<_>>().join(" ");
    escape_markup(&collapsed)
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn clean_name(input: &str) -> TournamentResult<String> {
    let name = clean_text(input);

    if name.is_empty() {
        return Err(TournamentError::InvalidInput(
            "name is empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(TournamentError::InvalidInput(format!(
            "name longer than {MAX_NAME_CHARS} characters"
        )));
    }

    Ok(name)
}
