//! Text primitives shared by the transcoder and the aligner
//!
//!     Both tools see a file as a sequence of lines and a line as a sequence of
//!     whitespace-delimited tokens. The boundaries used here are the "universal"
//!     ones: any of the Unicode line separators ends a line, and a final
//!     separator does not open an extra empty line.
//!
//!     Line boundaries:
//!
//!         - `\n`, `\r`, and `\r\n` (counted as one boundary)
//!         - vertical tab and form feed (`\x0b`, `\x0c`)
//!         - file, group and record separators (`\x1c`, `\x1d`, `\x1e`)
//!         - next line (`\u{85}`), line separator (`\u{2028}`), paragraph separator (`\u{2029}`)
//!
//!     Token separators are the Unicode whitespace characters, the four ASCII
//!     information separators `\x1c`..`\x1f`, and U+180E (mongolian vowel
//!     separator, still a space separator in Unicode 5.2).

use std::iter::FusedIterator;

/// Returns true for characters that end a line.
pub fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns true for characters that separate tokens within a line.
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f' | '\u{180e}')
}

/// Split `text` into lines using universal newline semantics.
///
/// The returned lines never contain their terminator.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((idx, c)) => {
                let line = &self.rest[..idx];
                let mut end = idx + c.len_utf8();
                if c == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl FusedIterator for Lines<'_> {}

/// Split a line into its whitespace-delimited tokens.
///
/// Runs of separators collapse; leading and trailing separators yield nothing.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_token_separator).filter(|token| !token.is_empty())
}
