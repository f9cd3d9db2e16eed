use std::collections::HashMap;
use std::io::Write;

use thiserror::Error;

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_::TypeCommand;

use crate::path::{PathExpander, PathSearch};

#[derive(Debug, Error)]
pub enum CommandError {
    /// Bad usage. The message is shown to the user as is.
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}: No such file or directory")]
    NoSuchDirectory(String),
    #[error("{0}")]
    ExecutionError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CommandError {
    /// User input errors are reported on stdout, everything else on stderr.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CommandError::InvalidArguments(_))
    }
}

/// What the shell loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Everything a builtin may need besides its arguments.
pub struct Invocation<'a> {
    pub registry: &'a CommandRegistry,
    pub search: &'a PathSearch,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut Invocation<'_>) -> Result<Flow, CommandError>;
}

/// Builtin commands by name. Names are case-sensitive.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every builtin the shell ships with.
    pub fn with_builtins(expander: PathExpander) -> Self {
        let mut registry = Self::new();
        registry.register("exit", Box::new(ExitCommand::new()));
        registry.register("echo", Box::new(EchoCommand::new()));
        registry.register("type", Box::new(TypeCommand::new()));
        registry.register("pwd", Box::new(PwdCommand::new()));
        registry.register("cd", Box::new(CdCommand::new(expander)));
        registry
    }

    /// Insert a handler, replacing any previous one under the same name.
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn Command>) {
        self.commands.insert(name.into(), handler);
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd.as_ref())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
