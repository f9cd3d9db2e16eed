use std::collections::BTreeSet;

use rustyline::completion::Pair;

use crate::path::PathSearch;

/// Completes the command word from builtin names and `PATH` executables.
#[derive(Clone, Debug, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new<'a>(builtins: impl IntoIterator<Item = &'a str>, search: &PathSearch) -> Self {
        let mut commands = search.executables();
        commands.extend(builtins.into_iter().map(String::from));
        Self { commands }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .range(prefix.to_string()..)
            .take_while(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
