use std::collections::BTreeSet;
use std::env;
use std::ffi::{CString, OsStr};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Locates executables by scanning the directories listed in `PATH`.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    dirs: Vec<PathBuf>,
}

impl PathSearch {
    pub fn from_env() -> Self {
        let dirs = env::var_os("PATH")
            .map(|path| env::split_paths(&path).collect())
            .unwrap_or_default();
        Self::new(dirs)
    }

    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Resolve a command name to an executable file.
    ///
    /// Names containing a `/` are taken as paths and only checked, never
    /// searched for. Otherwise the first match in `PATH` order wins.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        if name.contains('/') {
            let path = PathBuf::from(name);
            return is_executable(&path).then_some(path);
        }

        self.dirs
            .iter()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }

    /// Names of every executable reachable through `PATH`.
    pub fn executables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for dir in &self.dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if !is_executable(&entry.path()) {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    names.insert(name.to_string());
                }
            }
        }
        names
    }
}

/// A regular file (symlinks followed) the current user may execute.
fn is_executable(path: &Path) -> bool {
    let is_file = fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false);
    is_file && access_x_ok(path.as_os_str())
}

fn access_x_ok(path: &OsStr) -> bool {
    let Ok(c_path) = CString::new(path.as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the whole call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
