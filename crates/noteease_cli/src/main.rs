//! Console front end for the NoteEase core.
//!
//! # Responsibility
//! - Resolve logging configuration from flags and environment.
//! - Translate stdin lines into app intents and print the resulting screen.

mod command;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use command::{parse_line, Command, OpenTarget, HELP};
use log::info;
use noteease_core::{
    init_from_config, CoreConfig, InMemoryNoteRepository, Intent, NoteApp, NoteId,
    NoteStore, Outcome, Screen,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "noteease")]
#[command(about = "In-memory note taking from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides NOTEEASE_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; overrides NOTEEASE_LOG_DIR
    #[arg(long)]
    log_dir: Option<String>,

    /// Suppress the prompt and screen echo after each command
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_from_config(&config).context("failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        noteease_core::core_version()
    );

    let repo = Arc::new(InMemoryNoteRepository::new(NoteStore::new()));
    let mut app = NoteApp::new(repo);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.quiet {
        render::render(&app, &mut out)?;
        prompt(&mut out)?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                if !cli.quiet {
                    prompt(&mut out)?;
                }
                continue;
            }
            Err(err) => {
                writeln!(out, "error: {err}")?;
                if !cli.quiet {
                    prompt(&mut out)?;
                }
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => render::render(&app, &mut out)?,
            other => match run_command(&mut app, other) {
                Ok(outcome) => {
                    report(&outcome, &mut out)?;
                    if !cli.quiet {
                        render::render(&app, &mut out)?;
                    }
                }
                Err(err) => writeln!(out, "error: {err:#}")?,
            },
        }
        if !cli.quiet {
            prompt(&mut out)?;
        }
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig> {
    let mut config = CoreConfig::from_env().context("invalid environment configuration")?;
    if let Some(level) = cli.log_level.as_deref() {
        config = config.with_log_level(level)?;
    }
    if let Some(dir) = cli.log_dir.as_deref() {
        config = config.with_log_dir(dir)?;
    }
    Ok(config)
}

fn run_command(app: &mut NoteApp, command: Command) -> Result<Outcome> {
    let intent = match command {
        Command::Search(query) => Intent::QueryChanged(query),
        Command::Refresh => Intent::Refresh,
        Command::New => Intent::Create,
        Command::Open(target) => Intent::Open(resolve_target(app, target)?),
        Command::Edit => Intent::Edit,
        Command::Title(title) => Intent::TitleChanged(title),
        Command::Content(content) => Intent::ContentChanged(content),
        Command::Save => Intent::Save,
        Command::Delete => Intent::Delete,
        Command::Back => Intent::Back,
        Command::Share => Intent::Share,
        Command::Show | Command::Help | Command::Quit => return Ok(Outcome::Stayed),
    };
    Ok(app.dispatch(intent)?)
}

fn resolve_target(app: &NoteApp, target: OpenTarget) -> Result<NoteId> {
    match target {
        OpenTarget::Id(id) => Ok(id),
        OpenTarget::Position(position) => match app.current() {
            Screen::List(list) => list
                .state()
                .notes
                .get(position - 1)
                .map(|note| note.id)
                .with_context(|| format!("no note at position #{position}")),
            other => anyhow::bail!(
                "positions only apply on the list, not the {} screen",
                other.name()
            ),
        },
    }
}

fn report(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Saved(id) => writeln!(out, "saved {id}"),
        Outcome::Deleted(id) => writeln!(out, "deleted {id}"),
        Outcome::Stayed | Outcome::Navigated(_) => Ok(()),
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
