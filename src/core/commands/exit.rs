use super::{Command, CommandError, Flow, Invocation};

/// `exit [code]`: leave the shell, with status 0 unless a code is given.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], _ctx: &mut Invocation<'_>) -> Result<Flow, CommandError> {
        let Some(code) = args.first() else {
            return Ok(Flow::Exit(0));
        };

        code.parse::<i32>()
            .map(Flow::Exit)
            .map_err(|_| CommandError::InvalidArguments("Invalid exit code".to_string()))
    }
}
