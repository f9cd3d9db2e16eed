use super::{Command, CommandError, Flow, Invocation};
use crate::path::PathExpander;
use log::debug;
use std::env;
use std::io::ErrorKind;

/// `cd [path]`: change the working directory, `~` meaning `$HOME`.
#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new(PathExpander::from_env())
    }
}

impl CdCommand {
    pub fn new(path_expander: PathExpander) -> Self {
        Self { path_expander }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _ctx: &mut Invocation<'_>) -> Result<Flow, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "cd: too many arguments".to_string(),
            ));
        }

        let path_str = args.first().map(|s| s.as_str()).unwrap_or("~");
        let expanded_path = self
            .path_expander
            .expand(path_str)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;

        env::set_current_dir(&expanded_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CommandError::NoSuchDirectory(path_str.to_string()),
            _ => CommandError::ExecutionError(format!("cd: {}: {}", path_str, e)),
        })?;
        debug!("working directory is now {}", expanded_path.display());
        Ok(Flow::Continue)
    }
}
