//! Tokenizer for the attribute-annotation grammar.
//!
//! The grammar is a sequence of whitespace-separated tokens:
//!
//! * `#identifier` — an id,
//! * `.identifier` — a class,
//! * `key=value` — any other attribute, with the value either
//!   double-quoted, single-quoted, or an unquoted run without spaces.
//!
//! Tokens that match none of the forms are skipped; an input where
//! nothing matches reduces to an empty set, which callers treat as "no
//! attributes parsed".

use crate::attributes::normalize_attr_text;

/// A single parsed unit of the annotation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttrToken {
    Id(String),
    Class(String),
    KeyValue(String, String),
}

/// The reduction of an annotation string: first id wins, classes
/// accumulate in encounter order, every other key overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAttributeSet {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub pairs: Vec<(String, String)>,
}

impl ParsedAttributeSet {
    /// Tokenize and reduce `raw`, an annotation string already stripped
    /// of its `@`/brace wrapping by the delimiter resolver.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut set = Self::default();
        for token in Tokenizer::new(raw) {
            match token {
                AttrToken::Id(value) => {
                    if set.id.is_none() {
                        set.id = Some(value);
                    }
                }
                AttrToken::Class(value) => set.classes.push(value),
                AttrToken::KeyValue(key, value) => match key.as_str() {
                    // Explicit forms funnel through the shorthand rules.
                    "id" => {
                        if set.id.is_none() {
                            set.id = Some(value);
                        }
                    }
                    "class" => set.classes.push(value),
                    _ => {
                        if let Some(slot) =
                            set.pairs.iter_mut().find(|(k, _)| *k == key)
                        {
                            slot.1 = value;
                        } else {
                            set.pairs.push((key, value));
                        }
                    }
                },
            }
        }
        set
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty() && self.pairs.is_empty()
    }
}

fn is_token_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_id_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

fn is_class_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')
}

fn is_key_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')
}

/// Character state machine over the annotation string. Byte positions
/// are only compared against ASCII, so slices always fall on character
/// boundaries.
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn bytes(&self) -> &[u8] {
        self.input.as_bytes()
    }

    fn skip_whitespace(&mut self) {
        while self
            .bytes()
            .get(self.pos)
            .copied()
            .is_some_and(is_token_ws)
        {
            self.pos += 1;
        }
    }

    /// Discard the rest of a token that turned out not to match any
    /// grammar form.
    fn skip_junk(&mut self) {
        while self
            .bytes()
            .get(self.pos)
            .copied()
            .is_some_and(|b| !is_token_ws(b))
        {
            self.pos += 1;
        }
    }

    /// Scan a run of `accept` bytes starting at `self.pos`, requiring
    /// the first byte to be alphabetic. Returns the matched slice.
    fn scan_name(&mut self, accept: fn(u8) -> bool) -> Option<&'a str> {
        let start = self.pos;
        if !self
            .bytes()
            .get(start)
            .copied()
            .is_some_and(|b| b.is_ascii_alphabetic())
        {
            return None;
        }
        while self.bytes().get(self.pos).copied().is_some_and(accept) {
            self.pos += 1;
        }
        self.input.get(start..self.pos)
    }

    /// Scan a quoted value body after the opening quote. A backslash
    /// escapes the next character; an unterminated value runs to the end
    /// of the input (the delimiter split consumes the closing quote in
    /// the quoted single-attribute forms).
    fn scan_quoted(&mut self, quote: u8) -> &'a str {
        let start = self.pos;
        while let Some(&b) = self.bytes().get(self.pos) {
            if b == b'\\' {
                self.pos += 1;
                if self.pos < self.input.len() {
                    self.pos += 1;
                }
                continue;
            }
            if b == quote {
                let body = self.input.get(start..self.pos).unwrap_or_default();
                self.pos += 1;
                return body;
            }
            self.pos += 1;
        }
        self.input.get(start..).unwrap_or_default()
    }

    fn scan_value(&mut self) -> Option<String> {
        match self.bytes().get(self.pos).copied() {
            Some(b'"') => {
                self.pos += 1;
                let body = self.scan_quoted(b'"');
                let value = normalize_attr_text(body);
                (!value.is_empty()).then_some(value)
            }
            Some(b'\'') => {
                self.pos += 1;
                let body = self.scan_quoted(b'\'');
                let value = normalize_attr_text(body);
                // Double quotes inside a single-quoted value are escaped
                // on output rather than substituted, so embedded
                // JSON-like content stays intact.
                (!value.is_empty()).then(|| value.replace('"', "\\\""))
            }
            Some(b) if !is_token_ws(b) => {
                let start = self.pos;
                while self
                    .bytes()
                    .get(self.pos)
                    .copied()
                    .is_some_and(|b| !is_token_ws(b) && !matches!(b, b'"' | b'\''))
                {
                    self.pos += 1;
                }
                let body = self.input.get(start..self.pos).unwrap_or_default();
                let value = normalize_attr_text(body);
                (!value.is_empty()).then_some(value)
            }
            _ => None,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = AttrToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.skip_whitespace();
            let b = self.bytes().get(self.pos).copied()?;
            match b {
                b'#' => {
                    self.pos += 1;
                    if let Some(name) = self.scan_name(is_id_char) {
                        self.skip_junk();
                        return Some(AttrToken::Id(name.to_string()));
                    }
                    self.skip_junk();
                }
                b'.' => {
                    self.pos += 1;
                    if let Some(name) = self.scan_name(is_class_char) {
                        self.skip_junk();
                        return Some(AttrToken::Class(name.to_string()));
                    }
                    self.skip_junk();
                }
                b if b.is_ascii_alphabetic() => {
                    let Some(key) = self.scan_name(is_key_char) else {
                        self.skip_junk();
                        continue;
                    };
                    if self.bytes().get(self.pos).copied() != Some(b'=') {
                        self.skip_junk();
                        continue;
                    }
                    self.pos += 1;
                    if let Some(value) = self.scan_value() {
                        return Some(AttrToken::KeyValue(key.to_string(), value));
                    }
                    self.skip_junk();
                }
                _ => self.skip_junk(),
            }
        }
    }
}
