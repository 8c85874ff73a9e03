//! Display projections shared by list and detail screens.

use crate::model::note::{Note, NoteId};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum characters kept in a list snippet before the ellipsis.
pub const SNIPPET_MAX_CHARS: usize = 80;

const UPDATED_AT_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    /// Single-line content preview.
    pub snippet: String,
    /// Human-readable `updated_at`, e.g. `Mar 4, 2024 9:05 PM`.
    pub updated_label: String,
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            snippet: content_snippet(&note.content, SNIPPET_MAX_CHARS),
            updated_label: format_timestamp(note.updated_at),
        }
    }
}

/// Collapses whitespace to single spaces and truncates to `max_chars`.
pub fn content_snippet(content: &str, max_chars: usize) -> String {
    let collapsed = WHITESPACE_RE.replace_all(content.trim(), " ");
    if collapsed.chars().count() <= max_chars {
        return collapsed.into_owned();
    }
    let mut truncated: String = collapsed.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Formats epoch milliseconds as `MMM d, yyyy h:mm a` in UTC.
///
/// Out-of-range values render as an empty string.
pub fn format_timestamp(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|at| at.format(UPDATED_AT_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{content_snippet, format_timestamp};

    #[test]
    fn snippet_collapses_newlines_and_truncates() {
        assert_eq!(content_snippet("milk,\n\n  eggs ", 80), "milk, eggs");
        assert_eq!(content_snippet("abcdef", 3), "abc...");
        assert_eq!(content_snippet("", 3), "");
    }

    #[test]
    fn timestamp_uses_short_month_and_twelve_hour_clock() {
        // 2024-03-04T21:05:00Z
        assert_eq!(format_timestamp(1_709_586_300_000), "Mar 4, 2024 9:05 PM");
        assert_eq!(format_timestamp(0), "Jan 1, 1970 12:00 AM");
    }
}
