//! Resolves a parsed command line to a builtin or an external program.

use std::io::{self, Write};

use log::debug;

use crate::core::commands::{CommandRegistry, Flow, Invocation};
use crate::input::CommandLine;
use crate::process::ProcessExecutor;

/// Owns the builtin registry and the external process runner.
///
/// Builtins always win over executables of the same name, and a failing
/// builtin never falls back to `PATH`. Every failure is reported to the given
/// streams; only a failure to write to those streams is returned.
pub struct Dispatcher {
    registry: CommandRegistry,
    executor: ProcessExecutor,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, executor: ProcessExecutor) -> Self {
        Self { registry, executor }
    }

    pub fn dispatch(
        &self,
        line: &CommandLine,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<Flow> {
        let flow = match self.registry.lookup(line.name()) {
            Some(cmd) => {
                debug!("{} is a builtin", line.name());
                let mut ctx = Invocation {
                    registry: &self.registry,
                    search: self.executor.search(),
                    out: &mut *out,
                };
                match cmd.execute(line.args(), &mut ctx) {
                    Ok(flow) => flow,
                    Err(e) if e.is_user_error() => {
                        writeln!(out, "{}", e)?;
                        Flow::Continue
                    }
                    Err(e) => {
                        writeln!(err, "{}", e)?;
                        Flow::Continue
                    }
                }
            }
            None => {
                self.run_external(line, out)?;
                Flow::Continue
            }
        };

        out.flush()?;
        Ok(flow)
    }

    fn run_external(&self, line: &CommandLine, out: &mut dyn Write) -> io::Result<()> {
        let name = line.name();
        let failure = match self.executor.run(name, line.args()) {
            Ok(captured) => {
                out.write_all(&captured.stdout)?;
                captured.error
            }
            Err(e) => Some(e),
        };

        if let Some(e) = failure {
            debug!("{}", e);
            writeln!(out, "{}: command not found", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathExpander, PathSearch};
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    struct Harness {
        dispatcher: Dispatcher,
        _bin: TempDir,
    }

    impl Harness {
        fn new(scripts: &[(&str, &str)]) -> Self {
            let bin = TempDir::new().unwrap();
            for (name, body) in scripts {
                write_script(bin.path(), name, body);
            }
            let registry = CommandRegistry::with_builtins(PathExpander::with_home("/"));
            let executor = ProcessExecutor::new(PathSearch::new(vec![bin.path().into()]));
            Self {
                dispatcher: Dispatcher::new(registry, executor),
                _bin: bin,
            }
        }

        fn run(&self, line: &str) -> (Flow, String, String) {
            let line = CommandLine::parse(line).unwrap();
            let mut out = Vec::new();
            let mut err = Vec::new();
            let flow = self.dispatcher.dispatch(&line, &mut out, &mut err).unwrap();
            (
                flow,
                String::from_utf8(out).unwrap(),
                String::from_utf8(err).unwrap(),
            )
        }
    }

    fn write_script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_exit_status() {
        let harness = Harness::new(&[]);
        assert_eq!(harness.run("exit 7").0, Flow::Exit(7));
        assert_eq!(harness.run("exit").0, Flow::Exit(0));
    }

    #[test]
    fn test_exit_invalid_code_keeps_running() {
        let harness = Harness::new(&[]);
        let (flow, out, err) = harness.run("exit abc");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "Invalid exit code\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_type_reports() {
        let harness = Harness::new(&[("tool", "true")]);
        assert_eq!(harness.run("type echo").1, "echo is a shell builtin\n");
        assert_eq!(harness.run("type doesnotexist123").1, "doesnotexist123: not found\n");
        assert!(harness.run("type tool").1.starts_with("tool is /"));
    }

    #[test]
    fn test_builtin_wins_over_path() {
        let harness = Harness::new(&[("echo", "echo external")]);
        let (_, out, _) = harness.run("echo 'a  b'");
        assert_eq!(out, "a  b\n");
    }

    #[test]
    fn test_external_output_verbatim() {
        let harness = Harness::new(&[("show", r#"printf '%s|' "$@""#)]);
        let (flow, out, err) = harness.run(r#"show one "two three" 'four'"#);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "one|two three|four|");
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let harness = Harness::new(&[]);
        let (flow, out, _) = harness.run("doesnotexist123 --flag");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "doesnotexist123: command not found\n");
    }

    #[test]
    fn test_failing_external_reported() {
        let harness = Harness::new(&[("fail", "echo partial; exit 1")]);
        let (flow, out, _) = harness.run("fail");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "partial\nfail: command not found\n");
    }

    #[test]
    fn test_cd_failure_leaves_cwd() {
        let harness = Harness::new(&[]);
        let before = env::current_dir().unwrap();

        let (flow, out, err) = harness.run("cd /nonexistent/path");
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert_eq!(err, "/nonexistent/path: No such file or directory\n");

        let (_, pwd, _) = harness.run("pwd");
        assert_eq!(pwd, format!("{}\n", before.display()));
    }

    #[test]
    fn test_user_errors_go_to_stdout() {
        let harness = Harness::new(&[]);
        let (_, out, err) = harness.run("type");
        assert_eq!(out, "type: missing argument\n");
        assert!(err.is_empty());
    }
}
