//! Console command parsing.
//!
//! One line of input maps to one `Command`; most commands are thin wrappers
//! over an app `Intent`.

use noteease_core::NoteId;
use std::fmt::{Display, Formatter};

/// Target of an `open` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    Id(NoteId),
    /// 1-based position in the visible list.
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Refresh,
    New,
    Open(OpenTarget),
    Edit,
    Title(String),
    Content(String),
    Save,
    Delete,
    Back,
    Share,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  search [text]     filter the list (empty clears)
  refresh           reload the list
  new               create a note
  open <id|#n>      open a note by id or list position
  edit              edit the open note
  title <text>      set the draft title
  content <text>    set the draft content (\\n for newlines)
  save              save the draft
  delete            delete the open note
  back              go back
  share             share the open note
  show              print the current screen
  help              print this help
  quit              exit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "find" => Command::Search(rest.to_string()),
        "refresh" => Command::Refresh,
        "new" | "add" => Command::New,
        "open" => Command::Open(parse_target(rest)?),
        "edit" => Command::Edit,
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(unescape(rest)),
        "save" => Command::Save,
        "delete" | "rm" => Command::Delete,
        "back" => Command::Back,
        "share" => Command::Share,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError(format!("unknown command `{other}`; try `help`"))),
    };
    Ok(Some(command))
}

fn parse_target(raw: &str) -> Result<OpenTarget, ParseError> {
    if raw.is_empty() {
        return Err(ParseError("open needs a note id or #position".to_string()));
    }
    if let Some(position) = raw.strip_prefix('#') {
        return match position.parse::<usize>() {
            Ok(value) if value > 0 => Ok(OpenTarget::Position(value)),
            _ => Err(ParseError(format!("invalid list position `{raw}`"))),
        };
    }
    NoteId::parse_str(raw)
        .map(OpenTarget::Id)
        .map_err(|err| ParseError(format!("invalid note id `{raw}`: {err}")))
}

fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
