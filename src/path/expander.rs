use crate::error::ShellError;
use std::env;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the home directory.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PathExpander {
    /// Home comes from `HOME`, falling back to the platform lookup when unset.
    pub fn from_env() -> Self {
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        Self { home }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        let without_tilde = &path[1..];
        if without_tilde.is_empty() {
            return self.home_dir();
        }

        match without_tilde.strip_prefix('/') {
            Some(stripped) => {
                let mut home_path = self.home_dir()?;
                for part in stripped.split('/').filter(|part| !part.is_empty()) {
                    home_path.push(part);
                }
                Ok(home_path)
            }
            // "~user" is left alone
            None => Ok(Path::new(path).to_path_buf()),
        }
    }

    pub fn home_dir(&self) -> Result<PathBuf, ShellError> {
        self.home.clone().ok_or(ShellError::HomeDirNotFound)
    }
}
