//! Splits a raw input line into arguments.
//!
//! Quoting rules:
//! - `'...'` keeps everything literally, backslash included.
//! - `"..."` keeps everything literally except that a backslash escapes `\`
//!   and `"`. Before any other character the backslash is kept.
//! - Unquoted, a backslash escapes whichever character follows it.
//!
//! Only the space character separates arguments. Tabs are ordinary content.
//! Malformed input never fails: an unterminated quote still yields what was
//! collected, and a trailing lone backslash is kept as is.
//!
//! Joining arguments with single spaces and tokenizing again gives back the
//! same list only when no argument is empty or contains a space, a quote or a
//! backslash: `a\b` comes back as `ab` and an empty argument disappears.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
}

impl Quote {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Tokenizer {
    args: Vec<String>,
    buf: String,
    // Set once anything (even an empty quote pair) has started the current
    // argument, so `''` still produces an empty argument.
    in_token: bool,
    quote: Option<Quote>,
    escaped: bool,
}

impl Tokenizer {
    fn feed(&mut self, c: char) {
        if self.escaped {
            self.escaped = false;
            if self.quote == Some(Quote::Double) && !matches!(c, '\\' | '"') {
                self.buf.push('\\');
            }
            self.push(c);
            return;
        }

        if c == '\\' && self.quote != Some(Quote::Single) {
            self.escaped = true;
            self.in_token = true;
            return;
        }

        if let Some(quote) = Quote::from_char(c) {
            match self.quote {
                None => {
                    self.quote = Some(quote);
                    self.in_token = true;
                }
                Some(open) if open == quote => self.quote = None,
                Some(_) => self.push(c),
            }
            return;
        }

        if c == ' ' && self.quote.is_none() {
            self.flush();
        } else {
            self.push(c);
        }
    }

    fn push(&mut self, c: char) {
        self.buf.push(c);
        self.in_token = true;
    }

    fn flush(&mut self) {
        if self.in_token {
            self.args.push(std::mem::take(&mut self.buf));
            self.in_token = false;
        }
    }

    fn finish(mut self) -> Vec<String> {
        if self.escaped {
            self.buf.push('\\');
        }
        self.flush();
        self.args
    }
}

/// Tokenize one line of input. Blank lines produce no arguments.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::default();
    for c in line.chars() {
        tokenizer.feed(c);
    }
    tokenizer.finish()
}

/// A parsed, non-empty command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    name: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Parse a raw line. Returns `None` when the line holds no command.
    pub fn parse(line: &str) -> Option<Self> {
        let mut argv = tokenize(line).into_iter();
        let name = argv.next()?;
        Some(Self {
            name,
            args: argv.collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
