//! Headless intent scripts
//!
//! A script is a text file with one command per line:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! select queue
//! enqueue 1
//! enqueue 2
//! dequeue
//! ```
//!
//! Every intent verb understood by [`Intent`]'s parser is accepted, plus
//! `select <kind>` to switch structure. The whole script is parsed before
//! anything runs, so a typo never leaves the playground half-updated.

use crate::playground::{Intent, IntentParseError, Playground, Transition};
use crate::structure::{KindParseError, StructureKind};
use log::{debug, info};
use std::fmt;

/// One parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(StructureKind),
    Submit(Intent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    Intent(IntentParseError),
    Structure(KindParseError),
}

/// A malformed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScriptErrorKind::Intent(e) => write!(f, "line {}: {}", self.line, e),
            ScriptErrorKind::Structure(e) => write!(f, "line {}: {}", self.line, e),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ScriptErrorKind::Intent(e) => Some(e),
            ScriptErrorKind::Structure(e) => Some(e),
        }
    }
}

/// Parse one line, None for blank and comment lines
pub fn parse_line(line: &str) -> Result<Option<Command>, ScriptErrorKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if let Some((verb, rest)) = trimmed.split_once(char::is_whitespace) {
        if verb.eq_ignore_ascii_case("select") {
            return rest
                .parse::<StructureKind>()
                .map(|kind| Some(Command::Select(kind)))
                .map_err(ScriptErrorKind::Structure);
        }
    }

    trimmed
        .parse::<Intent>()
        .map(|intent| Some(Command::Submit(intent)))
        .map_err(ScriptErrorKind::Intent)
}

/// Parse a whole script, keeping line numbers
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let parsed = parse_line(line).map_err(|kind| ScriptError {
            line: index + 1,
            kind,
        })?;
        if let Some(command) = parsed {
            commands.push((index + 1, command));
        }
    }
    Ok(commands)
}

/// Parse and replay a script, returning the transition of every intent
pub fn run_script(playground: &mut Playground, source: &str) -> Result<Vec<Transition>, ScriptError> {
    let commands = parse_script(source)?;
    info!("Running script with {} command(s)", commands.len());

    let mut transitions = Vec::new();
    for (line, command) in commands {
        debug!("script line {}: {:?}", line, command);
        match command {
            Command::Select(kind) => playground.select_structure(kind),
            Command::Submit(intent) => transitions.push(playground.submit(intent)),
        }
    }
    Ok(transitions)
}
