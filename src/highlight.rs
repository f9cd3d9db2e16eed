use std::borrow::Cow;

use inksac::prelude::*;

/// Colors the command word of the line being edited.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self::with_support(support)
    }

    pub fn with_support(color_support: ColorSupport) -> Self {
        Self { color_support }
    }

    /// Cyan when `known` accepts the command word, red otherwise. Everything
    /// after the command word is left untouched.
    pub fn highlight_command<'l>(&self, line: &'l str, known: impl Fn(&str) -> bool) -> Cow<'l, str> {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return Cow::Borrowed(line);
        }

        let Some((start, end)) = command_span(line) else {
            return Cow::Borrowed(line);
        };

        let word = &line[start..end];
        let style = if known(word) {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };

        Cow::Owned(format!("{}{}{}", &line[..start], word.style(style), &line[end..]))
    }
}

/// Byte range of the first space-delimited word.
fn command_span(line: &str) -> Option<(usize, usize)> {
    let start = line.find(|c: char| c != ' ')?;
    let end = line[start..].find(' ').map_or(line.len(), |i| start + i);
    Some((start, end))
}
