use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{debug, warn};
use rustyline::{error::ReadlineError, history::FileHistory, Editor};

use super::completer::ShellCompleter;
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Source of input lines for the shell loop.
pub trait LineReader {
    /// Show `prompt` and read one line without its line ending.
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Plain buffered reads, used for pipes, files and tests.
pub struct StreamReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        // Undecodable bytes become U+FFFD rather than ending the session.
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// Interactive line editor with completion and persistent history.
pub struct EditorReader {
    editor: Editor<ShellCompleter, FileHistory>,
    history_file: Option<PathBuf>,
}

impl EditorReader {
    pub fn new(config: &ShellConfig, completer: ShellCompleter) -> Result<Self, ShellError> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();
        let mut editor = Editor::<ShellCompleter, FileHistory>::with_config(editor_config)?;
        editor.set_helper(Some(completer));

        if let Some(path) = &config.history_file {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    warn!("couldn't load history from {}: {}", path.display(), e);
                }
            }
        }

        Ok(Self {
            editor,
            history_file: config.history_file.clone(),
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the line being edited
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for EditorReader {
    fn drop(&mut self) {
        let Some(path) = &self.history_file else {
            return;
        };
        match self.editor.save_history(path) {
            Ok(()) => debug!("history saved to {}", path.display()),
            Err(e) => warn!("couldn't save history to {}: {}", path.display(), e),
        }
    }
}
