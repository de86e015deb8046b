//! Recursive-descent parser for the JavaScript literal subset found in build configs.
//!
//! Accepts single, double and backtick quoted strings (with escapes), arrays,
//! objects, numbers, `true`/`false`/`null`/`undefined`, line and block comments,
//! and trailing commas. Anything that would need evaluation (identifiers, calls,
//! spreads, template interpolation, operators) is reported as [`LiteralError::NotLiteral`].

use std::fmt;

/// A parsed literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    /// Raw numeric text, kept unevaluated.
    Number(String),
    Bool(bool),
    Null,
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Str(_) => "string",
            Literal::Number(_) => "number",
            Literal::Bool(_) => "boolean",
            Literal::Null => "null",
            Literal::Array(_) => "array",
            Literal::Object(_) => "object",
        }
    }
}

/// Failure to read a literal. Offsets are character offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Valid JavaScript that is not a plain literal.
    NotLiteral { offset: usize },
    Unterminated { what: &'static str, offset: usize },
    Unexpected { found: char, offset: usize },
    InvalidEscape { offset: usize },
    UnexpectedEnd,
}

impl LiteralError {
    pub fn offset(&self) -> Option<usize> {
        match self {
            LiteralError::NotLiteral { offset }
            | LiteralError::Unterminated { offset, .. }
            | LiteralError::Unexpected { offset, .. }
            | LiteralError::InvalidEscape { offset } => Some(*offset),
            LiteralError::UnexpectedEnd => None,
        }
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::NotLiteral { .. } => write!(f, "value is an expression, not a literal"),
            LiteralError::Unterminated { what, .. } => write!(f, "unterminated {}", what),
            LiteralError::Unexpected { found, .. } => write!(f, "unexpected character '{}'", found),
            LiteralError::InvalidEscape { .. } => write!(f, "invalid escape sequence"),
            LiteralError::UnexpectedEnd => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for LiteralError {}

/// Parse a document that consists of exactly one literal.
pub fn parse_literal(source: &str) -> Result<Literal, LiteralError> {
    let mut cursor = Cursor::new(source, 0);
    let value = cursor.parse_value()?;
    cursor.skip_trivia()?;
    match cursor.peek() {
        None => Ok(value),
        Some(c) => Err(cursor.unexpected(c)),
    }
}

/// Locate `key: <value>` outside strings and comments and parse the value.
///
/// Returns `None` when the key does not occur.
pub fn parse_key_value(source: &str, key: &str) -> Option<Result<Literal, LiteralError>> {
    let offset = find_key(source, key)?;
    let mut cursor = Cursor::new(source, offset);
    Some(cursor.parse_value().and_then(|value| cursor.expect_value_end().map(|_| value)))
}

/// Character offset just past the colon of the first `key:` occurrence.
pub fn find_key(source: &str, key: &str) -> Option<usize> {
    let mut cursor = Cursor::new(source, 0);

    loop {
        let c = cursor.peek()?;
        match c {
            '/' if matches!(cursor.peek_at(1), Some('/') | Some('*')) => {
                cursor.skip_trivia().ok()?;
            }
            '\'' | '"' | '`' => {
                let start = cursor.pos;
                let matched = match cursor.parse_string(c) {
                    Ok(text) => text == key,
                    Err(_) => {
                        cursor.pos = start;
                        cursor.skip_string(c)?;
                        false
                    }
                };
                if matched && let Some(offset) = cursor.colon_after() {
                    return Some(offset);
                }
            }
            c if is_ident_start(c) => {
                let ident = cursor.read_identifier();
                if ident == key && let Some(offset) = cursor.colon_after() {
                    return Some(offset);
                }
            }
            c if c.is_ascii_digit() => {
                cursor.read_identifier();
            }
            _ => cursor.pos += 1,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '.' | '(' | ')' | '?' | '|' | '&' | '<' | '>' | '=' | '!'
            | '~' | '^'
    )
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(source: &str, pos: usize) -> Self {
        Self { chars: source.chars().collect(), pos }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn unexpected(&self, found: char) -> LiteralError {
        if is_operator(found) {
            LiteralError::NotLiteral { offset: self.pos }
        } else {
            LiteralError::Unexpected { found, offset: self.pos }
        }
    }

    fn skip_trivia(&mut self) -> Result<(), LiteralError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => self.pos += 1,
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some('*'), Some('/')) => {
                                self.pos += 2;
                                break;
                            }
                            (Some(_), _) => self.pos += 1,
                            (None, _) => {
                                return Err(LiteralError::Unterminated {
                                    what: "block comment",
                                    offset: start,
                                });
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// After a key, skip trivia and consume a `:` if it follows.
    fn colon_after(&mut self) -> Option<usize> {
        let resume = self.pos;
        if self.skip_trivia().is_ok() && self.peek() == Some(':') {
            return Some(self.pos + 1);
        }
        self.pos = resume;
        None
    }

    /// A top-level value must be followed by a separator or the end of its container.
    fn expect_value_end(&mut self) -> Result<(), LiteralError> {
        self.skip_trivia()?;
        match self.peek() {
            None | Some(',') | Some('}') | Some(';') => Ok(()),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn parse_value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_trivia()?;
        let offset = self.pos;
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(quote @ ('\'' | '"' | '`')) => self.parse_string(quote).map(Literal::Str),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' => self.parse_number(),
            Some('.') if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.parse_number()
            }
            Some(c) if is_ident_start(c) => match self.read_identifier().as_str() {
                "true" => Ok(Literal::Bool(true)),
                "false" => Ok(Literal::Bool(false)),
                "null" | "undefined" => Ok(Literal::Null),
                _ => Err(LiteralError::NotLiteral { offset }),
            },
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn parse_array(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        self.pos += 1;
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => return Err(LiteralError::Unterminated { what: "array", offset: start }),
                Some(']') => {
                    self.pos += 1;
                    return Ok(Literal::Array(items));
                }
                Some('.') if self.peek_at(1) == Some('.') => {
                    return Err(LiteralError::NotLiteral { offset: self.pos });
                }
                _ => {}
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(']') => {
                    self.pos += 1;
                    return Ok(Literal::Array(items));
                }
                None => return Err(LiteralError::Unterminated { what: "array", offset: start }),
                Some(c) => return Err(self.unexpected(c)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        self.pos += 1;
        let mut entries = Vec::new();

        loop {
            self.skip_trivia()?;
            let key_offset = self.pos;
            let key = match self.peek() {
                None => return Err(LiteralError::Unterminated { what: "object", offset: start }),
                Some('}') => {
                    self.pos += 1;
                    return Ok(Literal::Object(entries));
                }
                Some(quote @ ('\'' | '"')) => self.parse_string(quote)?,
                Some(c) if is_ident_start(c) || c.is_ascii_digit() => self.read_identifier(),
                Some('[') | Some('.') => {
                    return Err(LiteralError::NotLiteral { offset: key_offset });
                }
                Some(c) => return Err(self.unexpected(c)),
            };

            self.skip_trivia()?;
            match self.peek() {
                Some(':') => self.pos += 1,
                // Shorthand properties and methods reference bindings.
                Some(',') | Some('}') | Some('(') => {
                    return Err(LiteralError::NotLiteral { offset: key_offset });
                }
                None => return Err(LiteralError::Unterminated { what: "object", offset: start }),
                Some(c) => return Err(self.unexpected(c)),
            }

            let value = self.parse_value()?;
            entries.push((key, value));

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    return Ok(Literal::Object(entries));
                }
                None => return Err(LiteralError::Unterminated { what: "object", offset: start }),
                Some(c) => return Err(self.unexpected(c)),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.pos += 1;
        }
        while let Some(c) = self.peek() {
            let exponent_sign = matches!(c, '+' | '-')
                && matches!(self.chars.get(self.pos.wrapping_sub(1)), Some('e') | Some('E'));
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }

        let raw: String = self.chars[start..self.pos].iter().collect();
        if raw.chars().any(|c| c.is_ascii_digit()) {
            Ok(Literal::Number(raw))
        } else {
            Err(match self.chars.get(start) {
                Some(&found) => LiteralError::Unexpected { found, offset: start },
                None => LiteralError::UnexpectedEnd,
            })
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, LiteralError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        let unterminated = LiteralError::Unterminated { what: "string", offset: start };

        loop {
            let Some(c) = self.bump() else {
                return Err(unterminated);
            };
            match c {
                c if c == quote => return Ok(out),
                '\\' => {
                    let escape_offset = self.pos - 1;
                    let Some(escaped) = self.bump() else {
                        return Err(unterminated);
                    };
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        'b' => out.push('\u{8}'),
                        'f' => out.push('\u{c}'),
                        'v' => out.push('\u{b}'),
                        '0' => out.push('\0'),
                        'x' => out.push(self.read_hex_escape(2, escape_offset)?),
                        'u' if self.peek() == Some('{') => {
                            self.pos += 1;
                            let digits_start = self.pos;
                            while self.peek().is_some_and(|c| c != '}') {
                                self.pos += 1;
                            }
                            if self.bump() != Some('}') {
                                return Err(LiteralError::InvalidEscape { offset: escape_offset });
                            }
                            let digits: String =
                                self.chars[digits_start..self.pos - 1].iter().collect();
                            out.push(decode_code_point(&digits, escape_offset)?);
                        }
                        'u' => out.push(self.read_hex_escape(4, escape_offset)?),
                        '\r' => {
                            if self.peek() == Some('\n') {
                                self.pos += 1;
                            }
                        }
                        '\n' | '\u{2028}' | '\u{2029}' => {}
                        other => out.push(other),
                    }
                }
                '\n' if quote != '`' => return Err(unterminated),
                '$' if quote == '`' && self.peek() == Some('{') => {
                    return Err(LiteralError::NotLiteral { offset: start });
                }
                c => out.push(c),
            }
        }
    }

    fn read_hex_escape(&mut self, len: usize, offset: usize) -> Result<char, LiteralError> {
        let end = self.pos + len;
        let Some(digits) = self.chars.get(self.pos..end) else {
            return Err(LiteralError::InvalidEscape { offset });
        };
        let digits: String = digits.iter().collect();
        self.pos = end;
        decode_code_point(&digits, offset)
    }

    /// Advance past a string without decoding it. `None` when unterminated.
    fn skip_string(&mut self, quote: char) -> Option<()> {
        self.pos += 1;
        loop {
            match self.bump()? {
                '\\' => {
                    self.bump()?;
                }
                c if c == quote => return Some(()),
                _ => {}
            }
        }
    }
}

fn decode_code_point(digits: &str, offset: usize) -> Result<char, LiteralError> {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(LiteralError::InvalidEscape { offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Literal {
        Literal::Array(items.iter().map(|s| Literal::Str(s.to_string())).collect())
    }

    #[test]
    fn parses_single_quoted_array_with_trailing_comma() {
        let value = parse_literal("['/settings/foo', '/apps/foo',]").unwrap();
        assert_eq!(value, strs(&["/settings/foo", "/apps/foo"]));
    }

    #[test]
    fn parses_mixed_quotes_and_comments() {
        let source = r#"[
            // settings entry
            '/settings/foo',
            /* apps entry */ "/apps/foo",
            `/foo`
        ]"#;
        assert_eq!(parse_literal(source).unwrap(), strs(&["/settings/foo", "/apps/foo", "/foo"]));
    }

    #[test]
    fn brackets_inside_strings_do_not_close_the_array() {
        let value = parse_literal(r#"['/a]b', "/c[d"]"#).unwrap();
        assert_eq!(value, strs(&["/a]b", "/c[d"]));
    }

    #[test]
    fn decodes_escapes() {
        let value = parse_literal(r#"'it\'s \x41B\u{43}\n'"#).unwrap();
        assert_eq!(value, Literal::Str("it's ABC\n".to_string()));
    }

    #[test]
    fn parses_nested_objects() {
        let value = parse_literal("{ a: 1, 'b': [true, null], c: { d: -2.5e-3 }, }").unwrap();
        let Literal::Object(entries) = value else {
            panic!("expected object");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("a".to_string(), Literal::Number("1".to_string())));
        assert_eq!(
            entries[1],
            ("b".to_string(), Literal::Array(vec![Literal::Bool(true), Literal::Null]))
        );
    }

    #[test]
    fn unterminated_array_is_reported() {
        let err = parse_literal("['/a', '/b'").unwrap_err();
        assert!(matches!(err, LiteralError::Unterminated { what: "array", offset: 0 }));
    }

    #[test]
    fn unterminated_string_is_reported() {
        let err = parse_literal("['/a]").unwrap_err();
        assert!(matches!(err, LiteralError::Unterminated { what: "string", .. }));
    }

    #[test]
    fn identifiers_are_not_literals() {
        assert!(matches!(parse_literal("routes"), Err(LiteralError::NotLiteral { .. })));
        assert!(matches!(parse_literal("[...base]"), Err(LiteralError::NotLiteral { .. })));
        assert!(matches!(parse_literal("`/${name}`"), Err(LiteralError::NotLiteral { .. })));
    }

    #[test]
    fn missing_comma_is_a_syntax_error() {
        let err = parse_literal("['/a' '/b']").unwrap_err();
        assert!(matches!(err, LiteralError::Unexpected { found: '\'', .. }));
    }

    #[test]
    fn find_key_skips_strings_and_comments() {
        let source = r#"
            // appUrl: ['/commented']
            const note = "appUrl: ['/in-string']";
            module.exports = { appUrl: ['/real'] };
        "#;
        let value = parse_key_value(source, "appUrl").unwrap().unwrap();
        assert_eq!(value, strs(&["/real"]));
    }

    #[test]
    fn find_key_accepts_quoted_keys() {
        let value = parse_key_value(r#"{ "appUrl": "/solo" }"#, "appUrl").unwrap().unwrap();
        assert_eq!(value, Literal::Str("/solo".to_string()));
    }

    #[test]
    fn find_key_ignores_longer_identifiers() {
        assert!(parse_key_value("{ appUrlPrefix: '/x' }", "appUrl").is_none());
    }

    #[test]
    fn value_followed_by_operator_is_not_literal() {
        let result = parse_key_value("{ appUrl: '/a' + suffix }", "appUrl").unwrap();
        assert!(matches!(result, Err(LiteralError::NotLiteral { .. })));
    }
}
