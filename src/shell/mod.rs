use std::io::{self, Write};

use log::debug;

use crate::{
    config::ShellConfig,
    core::{
        commands::{CommandRegistry, Flow},
        Dispatcher,
    },
    error::ShellError,
    input::{CommandCompleter, CommandLine, EditorReader, LineReader, ShellCompleter, StreamReader},
    path::{PathExpander, PathSearch},
    process::ProcessExecutor,
};

/// The read-parse-dispatch loop.
pub struct Shell {
    reader: Box<dyn LineReader>,
    dispatcher: Dispatcher,
    prompt: String,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Shell {
    /// Shell on the process's own stdin, stdout and stderr.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let registry = CommandRegistry::with_builtins(PathExpander::from_env());
        let search = PathSearch::from_env();

        let reader: Box<dyn LineReader> = if config.interactive {
            let commands = CommandCompleter::new(registry.names(), &search);
            Box::new(EditorReader::new(&config, ShellCompleter::new(commands))?)
        } else {
            Box::new(StreamReader::new(io::stdin().lock(), io::stdout()))
        };
        debug!("interactive: {}", config.interactive);

        let dispatcher = Dispatcher::new(registry, ProcessExecutor::new(search));
        Ok(Self::with_io(
            &config,
            dispatcher,
            reader,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        ))
    }

    pub fn with_io(
        config: &ShellConfig,
        dispatcher: Dispatcher,
        reader: Box<dyn LineReader>,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Self {
            reader,
            dispatcher,
            prompt: config.prompt.clone(),
            out,
            err,
        }
    }

    /// Run until end of input or `exit`, returning the exit status.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let code = loop {
            let Some(line) = self.reader.read_line(&self.prompt)? else {
                debug!("end of input");
                break 0;
            };

            let Some(command) = CommandLine::parse(&line) else {
                continue;
            };
            debug!("dispatching {:?}", command);

            match self
                .dispatcher
                .dispatch(&command, &mut *self.out, &mut *self.err)?
            {
                Flow::Continue => {}
                Flow::Exit(code) => break code,
            }
        };

        self.out.flush()?;
        self.err.flush()?;
        Ok(code)
    }
}
