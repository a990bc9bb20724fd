//! Quoting of text for strings and symbol names.  Produces the same escape
//! sequences the reader accepts: `\\`, the escaped delimiter, `\a`, `\b`,
//! `\t`, `\n`, `\r` and `\x<hex>;` for everything else that is not printable.

use unicode_normalization::is_nfc;

/// The character that opens and closes a string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Single,
    Double,
}

impl Delimiter {
    pub fn char(self) -> char {
        match self {
            Delimiter::Single => '\'',
            Delimiter::Double => '"',
        }
    }
}

/// Escaping settings shared by every text-like literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiteralStyle {
    delimiter: Delimiter,
    ascii_only: bool,
}

impl LiteralStyle {
    pub fn new(delimiter: Delimiter, ascii_only: bool) -> Self {
        Self {
            delimiter,
            ascii_only,
        }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn ascii_only(&self) -> bool {
        self.ascii_only
    }

    /// Quote and escape some text as a string literal
    pub fn quote(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        self.quote_into(&mut out, text);
        out
    }

    /// Literal form of a symbol name, `:name` or `:'name'` if the name would
    /// not be read back as the same identifier
    pub fn symbol(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 1);
        self.symbol_into(&mut out, name);
        out
    }

    /// Whether a name can be written without quotes
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();

        let first = match chars.next() {
            Some(ch) => ch,
            None => return false,
        };

        if !(first.is_alphabetic() || first == '_') {
            return false;
        }

        if !chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-') {
            return false;
        }

        if self.ascii_only && !name.is_ascii() {
            return false;
        }

        // the reader normalises identifiers
        is_nfc(name)
    }

    /// Whether a bare name would be read as a boolean or number instead of
    /// as a name
    pub fn is_reserved(&self, name: &str) -> bool {
        RESERVED.contains(&name)
    }

    pub(crate) fn quote_into(&self, out: &mut String, text: &str) {
        let delimiter = self.delimiter.char();

        out.push(delimiter);
        for ch in text.chars() {
            self.escape_char(out, ch);
        }
        out.push(delimiter);
    }

    pub(crate) fn symbol_into(&self, out: &mut String, name: &str) {
        out.push(':');
        if self.is_identifier(name) {
            out.push_str(name);
        } else {
            self.quote_into(out, name);
        }
    }

    fn escape_char(&self, out: &mut String, ch: char) {
        match ch {
            '\\' => out.push_str(r"\\"),
            ch if ch == self.delimiter.char() => {
                out.push('\\');
                out.push(ch);
            }
            '\u{7}' => out.push_str(r"\a"),
            '\u{8}' => out.push_str(r"\b"),
            '\t' => out.push_str(r"\t"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            ch if !is_printable(ch) || (self.ascii_only && !ch.is_ascii()) => {
                out.push_str(&format!(r"\x{:x};", ch as u32));
            }
            ch => out.push(ch),
        }
    }
}

/// Tokens that look like identifiers but are other literals
const RESERVED: &[&str] = &[
    "true", "false", "nan", "inf", "nanf32", "inff32", "nani", "infi", "nanf32i", "inff32i",
];

impl Default for LiteralStyle {
    fn default() -> Self {
        Self::new(Delimiter::Single, false)
    }
}

/// Characters that are safe to emit raw.  Controls, invisible format
/// characters and bidirectional marks are not, they could hide or reorder
/// the text around them.
fn is_printable(ch: char) -> bool {
    !(ch.is_control()
        || ch == '\u{ad}'
        || ch == '\u{61c}'
        || ('\u{200b}'..='\u{200f}').contains(&ch)
        || ('\u{2028}'..='\u{202e}').contains(&ch)
        || ('\u{2060}'..='\u{2064}').contains(&ch)
        || ('\u{2066}'..='\u{2069}').contains(&ch)
        || ch == '\u{feff}'
        || ('\u{fff9}'..='\u{fffb}').contains(&ch))
}
