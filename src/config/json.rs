//! Minimal single-pass JSON tokenizer.
//!
//! Scans a JSON document left to right and produces a flat sequence of
//! typed tokens with parent links and child counts. No tree is allocated:
//! tokens carry byte offsets into the source text and the caller re-derives
//! values from the spans. Built for small, shallow configuration documents
//! on memory-constrained targets.
//!
//! Deliberately out of scope: escape-sequence decoding (a backslash skips
//! the following byte, nothing more), number validation (primitives are
//! spans; callers use [`str::parse`]) and any grammar checking beyond
//! container balancing.

use heapless::Vec;

use crate::error::Error;

// Marks a container that has been opened but not yet closed.
const UNCLOSED: usize = usize::MAX;

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{` ... `}`
    Object,
    /// `[` ... `]`
    Array,
    /// Quoted string; the span excludes the quotes.
    String,
    /// Number, boolean or null-style bare word.
    Primitive,
}

/// A tagged span of the source text.
///
/// `start` and `end` are byte offsets into the tokenized text with `end`
/// one past the last byte. `parent` is the index of the enclosing token,
/// which always appears earlier in the sequence; `children` counts the
/// tokens whose parent is this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Byte offset of the first byte of the span.
    pub start: usize,
    /// Byte offset one past the last byte of the span.
    pub end: usize,
    /// Number of direct children.
    pub children: usize,
    /// Index of the enclosing token, `None` at the root.
    pub parent: Option<usize>,
}

impl Token {
    /// The span's text within the source it was tokenized from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Tokenize a JSON document into at most `N` tokens.
///
/// Runs in one pass with no extra space beyond the output vector. Empty
/// input yields an empty sequence.
///
/// # Returns
///
/// * `Ok(tokens)` - Flat token sequence in source order
/// * `Err(Error::ParseError)` - Unrecognized byte, mismatched or unclosed
///   container, or more than `N` tokens
///
/// # Examples
///
/// ```rust
/// use coreshell::config::json::{TokenKind, tokenize};
///
/// let source = r#"{"device_name":"Probe1"}"#;
/// let tokens = tokenize::<8>(source).unwrap();
///
/// assert_eq!(tokens[0].kind, TokenKind::Object);
/// assert_eq!(tokens[0].children, 2);
/// assert_eq!(tokens[1].text(source), "device_name");
/// assert_eq!(tokens[2].text(source), "Probe1");
/// ```
pub fn tokenize<const N: usize>(source: &str) -> Result<Vec<Token, N>, Error> {
    let bytes = source.as_bytes();
    let mut tokens: Vec<Token, N> = Vec::new();
    let mut toksuper: Option<usize> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            open @ (b'{' | b'[') => {
                let kind = if open == b'{' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                let index = push_token(&mut tokens, kind, pos, UNCLOSED, toksuper)?;
                toksuper = Some(index);
                pos += 1;
            }
            close @ (b'}' | b']') => {
                let kind = if close == b'}' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                // Find the nearest container that is still open. A stray
                // closer with nothing open is skipped.
                for i in (0..tokens.len()).rev() {
                    if tokens[i].end == UNCLOSED {
                        if tokens[i].kind != kind {
                            return Err(Error::ParseError);
                        }
                        tokens[i].end = pos + 1;
                        toksuper = tokens[i].parent;
                        break;
                    }
                }
                pos += 1;
            }
            b'"' => {
                let start = pos + 1;
                let mut i = start;
                while i < bytes.len() && bytes[i] != b'"' {
                    // A backslash escapes exactly the following byte.
                    if bytes[i] == b'\\' && i + 1 < bytes.len() {
                        i += 1;
                    }
                    i += 1;
                }
                push_token(&mut tokens, TokenKind::String, start, i, toksuper)?;
                pos = if i < bytes.len() { i + 1 } else { i };
            }
            b' ' | b'\t' | b'\r' | b'\n' | b':' | b',' => pos += 1,
            b'0'..=b'9' | b'-' | b't' | b'f' | b'n' => {
                let start = pos;
                let mut i = pos;
                while i < bytes.len() && !is_delimiter(bytes[i]) {
                    i += 1;
                }
                push_token(&mut tokens, TokenKind::Primitive, start, i, toksuper)?;
                // The delimiter itself still needs processing (it may close
                // a container), so scanning resumes on it.
                pos = i;
            }
            _ => return Err(Error::ParseError),
        }
    }

    if tokens.iter().any(|t| t.end == UNCLOSED) {
        return Err(Error::ParseError);
    }

    Ok(tokens)
}

fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b',' | b']' | b'}')
}

fn push_token<const N: usize>(
    tokens: &mut Vec<Token, N>,
    kind: TokenKind,
    start: usize,
    end: usize,
    parent: Option<usize>,
) -> Result<usize, Error> {
    let index = tokens.len();
    tokens
        .push(Token {
            kind,
            start,
            end,
            children: 0,
            parent,
        })
        .map_err(|_| Error::ParseError)?;

    if let Some(parent) = parent {
        tokens[parent].children += 1;
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let tokens = tokenize::<4>("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_flat_object() {
        let source = r#"{"a": 1, "b": true}"#;
        let tokens = tokenize::<8>(source).unwrap();

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, source.len());
        assert_eq!(tokens[0].children, 4);

        assert_eq!(tokens[1].text(source), "a");
        assert_eq!(tokens[2].kind, TokenKind::Primitive);
        assert_eq!(tokens[2].text(source), "1");
        assert_eq!(tokens[4].text(source), "true");
    }

    #[test]
    fn test_parent_links() {
        let source = r#"{"uart": {"num": 0}}"#;
        let tokens = tokenize::<8>(source).unwrap();

        assert_eq!(tokens[0].parent, None);
        assert_eq!(tokens[1].parent, Some(0)); // "uart"
        assert_eq!(tokens[2].parent, Some(0)); // inner object
        assert_eq!(tokens[2].kind, TokenKind::Object);
        assert_eq!(tokens[3].parent, Some(2)); // "num"
        assert_eq!(tokens[4].parent, Some(2)); // 0
        assert_eq!(tokens[2].children, 2);
    }

    #[test]
    fn test_sibling_after_nested_container() {
        let source = r#"{"a": {"b": 1}, "c": 2}"#;
        let tokens = tokenize::<8>(source).unwrap();

        // "c" and 2 belong to the root again once the inner object closes.
        assert_eq!(tokens[5].text(source), "c");
        assert_eq!(tokens[5].parent, Some(0));
        assert_eq!(tokens[6].parent, Some(0));
        assert_eq!(tokens[0].children, 4);
    }

    #[test]
    fn test_array_of_primitives() {
        let source = "[1, -2, null]";
        let tokens = tokenize::<8>(source).unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Array);
        assert_eq!(tokens[0].children, 3);
        assert_eq!(tokens[2].text(source), "-2");
        assert_eq!(tokens[3].text(source), "null");
    }

    #[test]
    fn test_escaped_quote_spans_whole_string() {
        let source = r#"{"msg": "say \"hi\""}"#;
        let tokens = tokenize::<8>(source).unwrap();

        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text(source), r#"say \"hi\""#);
    }

    #[test]
    fn test_mismatched_closer_fails() {
        assert_eq!(tokenize::<8>(r#"{"a":1]"#), Err(Error::ParseError));
        assert_eq!(tokenize::<8>("[1}"), Err(Error::ParseError));
    }

    #[test]
    fn test_unclosed_container_fails() {
        assert_eq!(tokenize::<8>(r#"{"a":1"#), Err(Error::ParseError));
    }

    #[test]
    fn test_unrecognized_byte_fails() {
        assert_eq!(tokenize::<8>("{x: 1}"), Err(Error::ParseError));
        assert_eq!(tokenize::<8>("@"), Err(Error::ParseError));
    }

    #[test]
    fn test_capacity_ceiling() {
        let source = r#"{"a": 1, "b": 2}"#;
        assert_eq!(tokenize::<3>(source), Err(Error::ParseError));
        assert!(tokenize::<5>(source).is_ok());
    }

    #[test]
    fn test_primitive_at_end_of_input() {
        let source = "42";
        let tokens = tokenize::<2>(source).unwrap();
        assert_eq!(tokens[0].text(source), "42");
        assert_eq!(tokens[0].end, 2);
    }
}
