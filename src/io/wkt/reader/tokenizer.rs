use crate::error::{GeometryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind {
    Word,
    Number,
    LParen,
    RParen,
    Comma,
    Semicolon,
    Equals,
    End,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    /// Whether this is the given keyword, ignoring case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && self.text.eq_ignore_ascii_case(keyword)
    }

    /// A syntax error located at this token.
    pub fn error(&self, message: impl Into<String>) -> GeometryError {
        GeometryError::Syntax {
            position: self.position,
            token: self.text.to_string(),
            message: message.into(),
        }
    }
}

/// Splits WKT into tokens. Whitespace separates tokens and is otherwise ignored.
pub(super) struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    pub fn next_token(&mut self) -> Result<Token<'a>> {
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() && bytes[self.position].is_ascii_whitespace() {
            self.position += 1;
        }

        let start = self.position;
        let Some(&first) = bytes.get(start) else {
            return Ok(Token {
                kind: TokenKind::End,
                text: "",
                position: start,
            });
        };

        let kind = match first {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'=' => TokenKind::Equals,
            b'0'..=b'9' | b'-' | b'+' | b'.' => TokenKind::Number,
            b if b.is_ascii_alphabetic() => TokenKind::Word,
            _ => {
                // Report the whole character, which may be multi-byte
                let text = self.input[start..]
                    .chars()
                    .next()
                    .map_or("", |c| &self.input[start..start + c.len_utf8()]);
                return Err(GeometryError::Syntax {
                    position: start,
                    token: text.to_string(),
                    message: "unexpected character".to_string(),
                });
            }
        };

        let end = match kind {
            // Exponents, signs and spelled-out NaN or infinity all belong to the number
            TokenKind::Number => scan(bytes, start, |b| {
                b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'+')
            }),
            TokenKind::Word => scan(bytes, start, |b| b.is_ascii_alphanumeric() || b == b'_'),
            _ => start + 1,
        };
        self.position = end;
        Ok(Token {
            kind,
            text: &self.input[start..end],
            position: start,
        })
    }
}

fn scan(bytes: &[u8], start: usize, accept: impl Fn(u8) -> bool) -> usize {
    let mut end = start + 1;
    while end < bytes.len() && accept(bytes[end]) {
        end += 1;
    }
    end
}
