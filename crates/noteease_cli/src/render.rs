//! Plain-text rendering of presenter state.

use noteease_core::{NoteApp, Screen, EMPTY_LIST_MESSAGE, NOT_FOUND_MESSAGE};
use std::io::{self, Write};

/// Writes the current screen of `app` to `out`.
pub fn render(app: &NoteApp, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", app.current_route())?;
    match app.current() {
        Screen::List(list) => {
            let state = list.state();
            if !state.query.is_empty() {
                writeln!(out, "search: {}", state.query)?;
            }
            if list.all_notes().is_empty() {
                writeln!(out, "{EMPTY_LIST_MESSAGE}")?;
            } else if state.is_empty() {
                writeln!(out, "no matches")?;
            }
            for (position, card) in state.cards().iter().enumerate() {
                writeln!(out, "#{} {}  [{}]", position + 1, card.title, card.updated_label)?;
                if !card.snippet.is_empty() {
                    writeln!(out, "    {}", card.snippet)?;
                }
            }
        }
        Screen::Editor(editor) => {
            let state = editor.state();
            writeln!(out, "{}", editor.screen_title())?;
            writeln!(out, "title: {}", state.title)?;
            if let Some(error) = state.title_error.as_deref() {
                writeln!(out, "  ! {error}")?;
            }
            writeln!(out, "content:")?;
            for line in state.content.lines() {
                writeln!(out, "  {line}")?;
            }
        }
        Screen::Detail(detail) => {
            let state = detail.state();
            match state.note.as_ref() {
                Some(note) => {
                    writeln!(out, "{}", note.title)?;
                    if let Some(label) = state.updated_label() {
                        writeln!(out, "{label}")?;
                    }
                    writeln!(out)?;
                    writeln!(out, "{}", note.content)?;
                    writeln!(out, "id: {}", note.id)?;
                }
                None => writeln!(out, "{NOT_FOUND_MESSAGE}")?,
            }
        }
    }
    Ok(())
}
