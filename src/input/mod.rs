mod completer;
pub mod reader;
pub mod tokenizer;

pub use completer::{CommandCompleter, ShellCompleter};
pub use reader::{EditorReader, LineReader, StreamReader};
pub use tokenizer::{tokenize, CommandLine};
