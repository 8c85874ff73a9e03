//! Screen routes and the navigation back stack.
//!
//! # Invariants
//! - The stack is never empty; its root entry cannot be popped.
//! - Transitions have no guards: any route can be pushed from any screen.

use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Addressable screens, written as `list`, `edit`, `edit/{id}`, `detail/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Create,
    Edit(NoteId),
    Detail(NoteId),
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Create => write!(f, "edit"),
            Self::Edit(id) => write!(f, "edit/{id}"),
            Self::Detail(id) => write!(f, "detail/{id}"),
        }
    }
}

/// Route text that names no known screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParseError {
    pub input: String,
}

impl Display for RouteParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown route `{}`", self.input)
    }
}

impl Error for RouteParseError {}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || RouteParseError {
            input: value.to_string(),
        };
        let parse_id = |raw: &str| Uuid::parse_str(raw).map_err(|_| invalid());

        match value.trim().split_once('/') {
            None => match value.trim() {
                "list" => Ok(Self::List),
                "edit" => Ok(Self::Create),
                _ => Err(invalid()),
            },
            Some(("edit", id)) => parse_id(id).map(Self::Edit),
            Some(("detail", id)) => parse_id(id).map(Self::Detail),
            Some(_) => Err(invalid()),
        }
    }
}

/// Last-in-first-out stack of screens.
#[derive(Debug)]
pub struct NavStack<T> {
    entries: Vec<T>,
}

impl<T> NavStack<T> {
    pub fn new(root: T) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Pops the top entry. Returns `None` when only the root is left.
    pub fn pop(&mut self) -> Option<T> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &T {
        &self.entries[self.entries.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut T {
        let top = self.entries.len() - 1;
        &mut self.entries[top]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Entries from root to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{NavStack, Route};
    use uuid::Uuid;

    #[test]
    fn routes_round_trip_through_text() {
        let id = Uuid::new_v4();
        for route in [Route::List, Route::Create, Route::Edit(id), Route::Detail(id)] {
            assert_eq!(route.to_string().parse::<Route>().expect("rendered route should parse back"), route);
        }
    }

    #[test]
    fn malformed_routes_are_rejected() {
        assert!("settings".parse::<Route>().is_err());
        assert!("detail/not-a-uuid".parse::<Route>().is_err());
        assert!("list/extra".parse::<Route>().is_err());
    }

    #[test]
    fn root_is_never_popped() {
        let mut stack = NavStack::new("list");
        stack.push("detail");
        assert_eq!(stack.pop(), Some("detail"));
        assert_eq!(stack.pop(), None);
        assert_eq!(*stack.current(), "list");
        assert_eq!(stack.depth(), 1);
    }
}
