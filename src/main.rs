use std::process;

use minish::config::ShellConfig;
use minish::error::ShellError;
use minish::shell::Shell;

fn run() -> Result<i32, ShellError> {
    let mut shell = Shell::new(ShellConfig::from_env())?;
    shell.run()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("MINISH_LOG", "warn"))
        .init();

    // The shell is dropped inside `run`, so output and history are flushed
    // before the process goes away.
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("minish: {}", e);
            1
        }
    };
    process::exit(code);
}
