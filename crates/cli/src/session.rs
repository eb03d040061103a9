// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The interactive loop: prompt, built-ins, and hand-off to the engine.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lsh_adapters::{LineReader, ReadOutcome};
use lsh_engine::{Confirm, Engine, ModelQuery, Reporter};
use lsh_shell::{CommandLine, CommandRunner, OutputSink, StdoutSink};

use crate::color::{codes, paint};

pub const BANNER: &str = "Welcome to LSH (LLM Shell). Type 'exit' or 'quit' to quit.";

/// Commands the session handles itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Builtin<'a> {
    Exit,
    Cd(Option<&'a str>),
}

impl<'a> Builtin<'a> {
    /// `input` is the trimmed line `line` was parsed from.
    pub fn recognize(input: &str, line: &'a CommandLine) -> Option<Self> {
        if input == "exit" || input == "quit" {
            return Some(Builtin::Exit);
        }
        match line.program() {
            Some("cd") => Some(Builtin::Cd(line.args().first().map(String::as_str))),
            _ => None,
        }
    }
}

pub struct Session<R, M, C, P> {
    engine: Engine<R, M, C, P>,
    reader: LineReader,
    output: Arc<dyn OutputSink>,
    colorize: bool,
}

impl<R, M, C, P> Session<R, M, C, P>
where
    R: CommandRunner,
    M: ModelQuery,
    C: Confirm,
    P: Reporter,
{
    pub fn new(engine: Engine<R, M, C, P>, reader: LineReader, colorize: bool) -> Self {
        Self { engine, reader, output: Arc::new(StdoutSink), colorize }
    }

    #[cfg(test)]
    pub fn with_output(mut self, output: impl OutputSink) -> Self {
        self.output = Arc::new(output);
        self
    }

    /// Serve lines until `exit`, `quit` or end of input.
    pub async fn run(&self) {
        self.write(&format!("{BANNER}\n\n"));
        loop {
            self.write(&self.prompt());
            let input = match self.reader.read_line().await {
                ReadOutcome::Line(input) => input,
                ReadOutcome::Interrupted => {
                    self.write("^C\n");
                    continue;
                }
                ReadOutcome::Eof => {
                    self.write("\nGoodbye!\n");
                    tracing::info!("session ended at end of input");
                    return;
                }
            };

            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            let line = CommandLine::parse(input);
            match Builtin::recognize(input, &line) {
                Some(Builtin::Exit) => {
                    self.write("Goodbye!\n");
                    tracing::info!("session ended by user");
                    return;
                }
                Some(Builtin::Cd(target)) => {
                    if let Err(e) = change_dir(target) {
                        self.write(&format!("cd: {e}\n"));
                    }
                }
                None => self.engine.run(&line).await,
            }
        }
    }

    fn prompt(&self) -> String {
        let cwd = match std::env::current_dir() {
            Ok(cwd) => cwd.display().to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "working directory unavailable");
                "?".to_string()
            }
        };
        format!(
            "{}:{}$ ",
            paint(self.colorize, codes::PROMPT, "lsh"),
            paint(self.colorize, codes::CWD, &cwd)
        )
    }

    fn write(&self, text: &str) {
        let mut out = self.output.writer();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "failed to write to terminal");
        }
    }
}

fn change_dir(target: Option<&str>) -> Result<(), String> {
    let home = dirs::home_dir();
    let path = resolve_dir(target, home.as_deref())
        .ok_or_else(|| "cannot determine home directory".to_string())?;
    std::env::set_current_dir(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::debug!(cwd = %path.display(), "changed directory");
    Ok(())
}

/// `cd` target with `~` expanded; no argument means home.
pub fn resolve_dir(target: Option<&str>, home: Option<&Path>) -> Option<PathBuf> {
    match target {
        None | Some("~") => home.map(Path::to_path_buf),
        Some(target) => match target.strip_prefix("~/") {
            Some(rest) => home.map(|home| home.join(rest)),
            None => Some(PathBuf::from(target)),
        },
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
