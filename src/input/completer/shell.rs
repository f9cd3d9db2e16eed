use std::borrow::Cow;

use super::command::CommandCompleter;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Line editor helper: command and file name completion plus highlighting.
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    file_completer: FilenameCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(command_completer: CommandCompleter) -> Self {
        ShellCompleter {
            command_completer,
            file_completer: FilenameCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }
}

/// Byte offset where the word under the cursor starts.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos].rfind(' ').map_or(0, |i| i + 1)
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        self.highlighter
            .highlight_command(line, |name| self.command_completer.contains(name))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        if line[..start].trim().is_empty() {
            let matches = self.command_completer.complete_command(&line[start..pos]);
            return Ok((start, matches));
        }
        self.file_completer.complete_path(line, pos)
    }
}
