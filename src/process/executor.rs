use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use log::debug;

use super::ProcessError;
use crate::path::PathSearch;

/// Output of a finished external command.
#[derive(Debug)]
pub struct Captured {
    pub stdout: Vec<u8>,
    pub error: Option<ProcessError>,
}

/// Runs external programs found through `PATH`.
///
/// The child inherits stdin, stderr and the working directory. Its stdout is
/// collected in full before control returns to the shell.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    search: PathSearch,
}

impl ProcessExecutor {
    pub fn new(search: PathSearch) -> Self {
        Self { search }
    }

    pub fn search(&self) -> &PathSearch {
        &self.search
    }

    pub fn run(&self, name: &str, args: &[String]) -> Result<Captured, ProcessError> {
        let program = self
            .search
            .resolve(name)
            .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))?;
        debug!("spawning {} as {}", program.display(), name);

        let output = Command::new(&program)
            .arg0(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ProcessError::Spawn {
                name: name.to_string(),
                source,
            })?;

        let error = (!output.status.success()).then(|| ProcessError::Failed {
            name: name.to_string(),
            status: output.status,
        });

        Ok(Captured {
            stdout: output.stdout,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_captures_stdout_and_args() {
        let dir = TempDir::new().unwrap();
        // $0 is the script path for shebang scripts, so only the arguments are checked.
        script(dir.path(), "greet", r#"echo "$1:$2:$#""#);
        let executor = ProcessExecutor::new(PathSearch::new(vec![dir.path().into()]));

        let captured = executor
            .run("greet", &["a b".to_string(), "c".to_string()])
            .unwrap();
        assert!(captured.error.is_none());
        assert_eq!(String::from_utf8(captured.stdout).unwrap(), "a b:c:2\n");
    }

    #[test]
    fn test_not_found() {
        let executor = ProcessExecutor::new(PathSearch::new(vec![]));
        let result = executor.run("doesnotexist123", &[]);
        assert!(matches!(result, Err(ProcessError::CommandNotFound(name)) if name == "doesnotexist123"));
    }

    #[test]
    fn test_nonzero_exit_keeps_output() {
        let dir = TempDir::new().unwrap();
        script(dir.path(), "fail", "echo partial; exit 3");
        let executor = ProcessExecutor::new(PathSearch::new(vec![dir.path().into()]));

        let captured = executor.run("fail", &[]).unwrap();
        assert_eq!(captured.stdout, b"partial\n");
        match captured.error {
            Some(ProcessError::Failed { name, status }) => {
                assert_eq!(name, "fail");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
