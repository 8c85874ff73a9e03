//! Application coordinator: screen stack plus intent dispatch.
//!
//! # Responsibility
//! - Own the repository handle and the stack of live screens.
//! - Map display intents onto the presenter of the current screen.
//! - Apply navigation rules after saves, deletes and back presses.
//!
//! # Invariants
//! - The bottom screen is always the note list.
//! - A refused save leaves the editor on top of the stack.
//! - Screens below the top keep their presenter; the list catches up with
//!   store changes when it becomes visible again.

use crate::model::note::NoteId;
use crate::nav::{NavStack, Route};
use crate::presenter::detail::DetailPresenter;
use crate::presenter::editor::{EditorError, EditorPresenter};
use crate::presenter::list::ListPresenter;
use crate::repo::note_repo::NoteRepository;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// User actions sent from the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    QueryChanged(String),
    Refresh,
    /// Open a blank editor.
    Create,
    /// Open the detail screen of a note.
    Open(NoteId),
    /// Open the editor for the note shown in detail.
    Edit,
    TitleChanged(String),
    ContentChanged(String),
    Save,
    Delete,
    Back,
    Share,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "query_changed",
            Self::Refresh => "refresh",
            Self::Create => "create",
            Self::Open(_) => "open",
            Self::Edit => "edit",
            Self::TitleChanged(_) => "title_changed",
            Self::ContentChanged(_) => "content_changed",
            Self::Save => "save",
            Self::Delete => "delete",
            Self::Back => "back",
            Self::Share => "share",
        }
    }
}

/// What a dispatched intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State of the current screen changed (or nothing happened).
    Stayed,
    /// A new screen is on top.
    Navigated(Route),
    /// The editor saved this note and was closed.
    Saved(NoteId),
    /// This note was deleted and its screen was closed.
    ///
    /// A delete that removed nothing still closes the screen but reports
    /// `Navigated` instead.
    Deleted(NoteId),
}

/// Coordinator-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The current screen has no handler for the intent.
    IntentNotApplicable {
        intent: &'static str,
        screen: &'static str,
    },
    /// Editor refused to save.
    Editor(EditorError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntentNotApplicable { intent, screen } => {
                write!(f, "intent `{intent}` is not available on the {screen} screen")
            }
            Self::Editor(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Editor(err) => Some(err),
            Self::IntentNotApplicable { .. } => None,
        }
    }
}

impl From<EditorError> for AppError {
    fn from(value: EditorError) -> Self {
        Self::Editor(value)
    }
}

// Stack change requested by the current screen.
enum Step {
    Stay,
    Push(Screen),
    Saved(NoteId),
    /// Close after a delete; carries the id only when a note was removed.
    Close(Option<NoteId>),
    Back,
}

/// A live screen and its presenter.
pub enum Screen {
    List(ListPresenter),
    Editor(EditorPresenter),
    Detail(DetailPresenter),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Editor(_) => "editor",
            Self::Detail(_) => "detail",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::List(_) => Route::List,
            Self::Editor(editor) => match editor.state().id {
                Some(id) => Route::Edit(id),
                None => Route::Create,
            },
            Self::Detail(detail) => Route::Detail(detail.id()),
        }
    }
}

/// Single-window note application.
pub struct NoteApp {
    repo: Arc<dyn NoteRepository>,
    stack: NavStack<Screen>,
}

impl NoteApp {
    /// Starts the app on the note list.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        let list = ListPresenter::new(Arc::clone(&repo));
        Self {
            repo,
            stack: NavStack::new(Screen::List(list)),
        }
    }

    pub fn repository(&self) -> &Arc<dyn NoteRepository> {
        &self.repo
    }

    pub fn current(&self) -> &Screen {
        self.stack.current()
    }

    pub fn current_route(&self) -> Route {
        self.stack.current().route()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Routes of every screen from the list up to the top.
    pub fn routes(&self) -> Vec<Route> {
        self.stack.iter().map(Screen::route).collect()
    }

    /// Applies pending store changes to the visible list.
    pub fn poll(&mut self) -> bool {
        match self.stack.current_mut() {
            Screen::List(list) => list.poll(),
            _ => false,
        }
    }

    /// Handles one user action on the current screen.
    ///
    /// # Errors
    /// - `AppError::Editor` when a save is refused; the editor stays open.
    /// - `AppError::IntentNotApplicable` when the current screen does not
    ///   offer the action.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, AppError> {
        let intent_name = intent.name();
        let screen_name = self.current().name();
        debug!(
            "event=intent module=app status=received intent={} screen={}",
            intent_name, screen_name
        );
        let not_applicable = || AppError::IntentNotApplicable {
            intent: intent_name,
            screen: screen_name,
        };

        let step = match self.stack.current_mut() {
            Screen::List(list) => match intent {
                Intent::QueryChanged(query) => {
                    list.on_query_change(query);
                    Step::Stay
                }
                Intent::Refresh => {
                    list.refresh();
                    Step::Stay
                }
                Intent::Create => Step::Push(Screen::Editor(EditorPresenter::new(
                    Arc::clone(&self.repo),
                    None,
                ))),
                Intent::Open(id) => Step::Push(Screen::Detail(DetailPresenter::new(
                    Arc::clone(&self.repo),
                    id,
                ))),
                Intent::Back => Step::Back,
                _ => return Err(not_applicable()),
            },
            Screen::Detail(detail) => match intent {
                Intent::Edit => Step::Push(Screen::Editor(EditorPresenter::new(
                    Arc::clone(&self.repo),
                    Some(detail.id()),
                ))),
                Intent::Share => {
                    detail.share();
                    Step::Stay
                }
                Intent::Delete => {
                    let removed = detail.delete();
                    Step::Close(removed.then_some(detail.id()))
                }
                Intent::Back => Step::Back,
                _ => return Err(not_applicable()),
            },
            Screen::Editor(editor) => match intent {
                Intent::TitleChanged(title) => {
                    editor.on_title_change(title);
                    Step::Stay
                }
                Intent::ContentChanged(content) => {
                    editor.on_content_change(content);
                    Step::Stay
                }
                Intent::Save => Step::Saved(editor.save()?),
                Intent::Delete => match editor.state().id {
                    Some(id) => {
                        let removed = editor.delete();
                        Step::Close(removed.then_some(id))
                    }
                    None => return Err(not_applicable()),
                },
                Intent::Back => Step::Back,
                _ => return Err(not_applicable()),
            },
        };

        let outcome = match step {
            Step::Stay => Outcome::Stayed,
            Step::Push(screen) => {
                let route = screen.route();
                self.stack.push(screen);
                Outcome::Navigated(route)
            }
            Step::Saved(id) => {
                self.pop();
                Outcome::Saved(id)
            }
            Step::Close(Some(id)) => {
                self.pop();
                Outcome::Deleted(id)
            }
            Step::Close(None) => {
                self.pop();
                Outcome::Navigated(self.current_route())
            }
            Step::Back => {
                if self.pop() {
                    Outcome::Navigated(self.current_route())
                } else {
                    Outcome::Stayed
                }
            }
        };

        info!(
            "event=intent module=app status=ok intent={} route={}",
            intent_name,
            self.current_route()
        );
        Ok(outcome)
    }

    fn pop(&mut self) -> bool {
        if self.stack.pop().is_none() {
            return false;
        }
        self.poll();
        true
    }
}
