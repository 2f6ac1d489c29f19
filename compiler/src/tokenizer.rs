use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref TOKEN_REGEX:   Regex = Regex::new(r"//[^\n]*|\s+|[A-Za-z_][A-Za-z0-9_]*|[0-9]+|[:;{}\[\].]|.").unwrap();
    pub static ref IDENTIFIER_RX: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    pub static ref PUNCT_RX:      Regex = Regex::new(r"^[:;{}\[\].]$").unwrap();
    pub static ref SKIPPED_RX:    Regex = Regex::new(r"^(//.*|\s+)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Punct,
    /// Anything the scanner has no rule for: digits, `=`, quotes, parentheses.
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

impl Token {
    pub fn is_punct(&self, p: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == p
    }

    pub fn is_keyword(&self, k: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == k
    }
}

/// Splits schema text into tokens, dropping whitespace and `//` comments.
/// Never fails: unknown characters become `TokenKind::Other`.
pub fn tokenize_schema(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;

    for mat in TOKEN_REGEX.find_iter(text) {
        let part = mat.as_str();

        if !SKIPPED_RX.is_match(part) {
            let kind = if IDENTIFIER_RX.is_match(part) {
                TokenKind::Ident
            } else if PUNCT_RX.is_match(part) {
                TokenKind::Punct
            } else {
                TokenKind::Other
            };
            tokens.push(Token {
                kind,
                text: part.to_string(),
                line,
                column,
            });
        }

        // Update line/column
        let newline_count = part.matches('\n').count();
        if newline_count > 0 {
            line += newline_count;
            if let Some(last_line_part) = part.split('\n').last() {
                column = last_line_part.chars().count() + 1;
            }
        } else {
            column += part.chars().count();
        }
    }

    tokens
}
