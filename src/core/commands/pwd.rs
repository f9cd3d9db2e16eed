use std::env;
use std::io::Write;

use super::{Command, CommandError, Flow, Invocation};

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut Invocation<'_>) -> Result<Flow, CommandError> {
        let cwd = env::current_dir()?;
        writeln!(ctx.out, "{}", cwd.display())?;
        Ok(Flow::Continue)
    }
}
