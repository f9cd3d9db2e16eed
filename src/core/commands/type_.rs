use std::io::Write;

use super::{Command, CommandError, Flow, Invocation};

/// `type name...`: tell whether each name is a builtin or an executable.
#[derive(Clone, Default)]
pub struct TypeCommand;

impl TypeCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for TypeCommand {
    fn execute(&self, args: &[String], ctx: &mut Invocation<'_>) -> Result<Flow, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "type: missing argument".to_string(),
            ));
        }

        for name in args {
            if ctx.registry.exists(name) {
                writeln!(ctx.out, "{} is a shell builtin", name)?;
            } else if let Some(path) = ctx.search.resolve(name) {
                writeln!(ctx.out, "{} is {}", name, path.display())?;
            } else {
                writeln!(ctx.out, "{}: not found", name)?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::invoke;
    use crate::core::commands::CommandRegistry;
    use crate::path::{PathExpander, PathSearch};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn registry() -> CommandRegistry {
        CommandRegistry::with_builtins(PathExpander::with_home("/"))
    }

    #[test]
    fn test_type_builtin() {
        let (result, out) = invoke(&registry(), &PathSearch::default(), "type", &["echo"]);
        assert!(result.is_ok());
        assert_eq!(out, "echo is a shell builtin\n");
    }

    #[test]
    fn test_type_itself_is_builtin() {
        let (_, out) = invoke(&registry(), &PathSearch::default(), "type", &["type"]);
        assert_eq!(out, "type is a shell builtin\n");
    }

    #[test]
    fn test_type_not_found() {
        let (result, out) = invoke(
            &registry(),
            &PathSearch::default(),
            "type",
            &["doesnotexist123"],
        );
        assert!(result.is_ok());
        assert_eq!(out, "doesnotexist123: not found\n");
    }

    #[test]
    fn test_type_external() {
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("tool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        let search = PathSearch::new(vec![dir.path().into()]);

        let (_, out) = invoke(&registry(), &search, "type", &["tool", "cd"]);
        assert_eq!(
            out,
            format!("tool is {}\ncd is a shell builtin\n", tool.display())
        );
    }

    #[test]
    fn test_type_missing_argument() {
        let (result, out) = invoke(&registry(), &PathSearch::default(), "type", &[]);
        let err = result.unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "type: missing argument");
        assert!(out.is_empty());
    }
}
