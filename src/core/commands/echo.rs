use std::io::Write;

use super::{Command, CommandError, Flow, Invocation};

#[derive(Clone, Default)]
pub struct EchoCommand;

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[String], ctx: &mut Invocation<'_>) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(Flow::Continue)
    }
}
