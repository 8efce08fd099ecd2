//! Expression lexer.
//!
//! [`scan`] turns source text into the positioned [`Token`]s consumed by the
//! parser. It never fails: malformed input becomes an `N_ERROR` token
//! carrying a [`LexError`], and the stream always ends with `T_EOF`.
//!
//! On top of the raw runs from [`crate::tokenizer`] the lexer
//!
//! - assembles numbers from digits, an optional fraction and an optional
//!   `e`/`E` exponent with an optional sign,
//! - rejects leading zeros (`07`) one zero at a time,
//! - synthesises a zero-width `T_IMPLIED_STAR` after a number or `)` that is
//!   followed by `(`, and after `)` followed by a digit,
//! - flags `()` as empty parentheses,
//! - classifies letter runs (`NaN`, a lone exponent suffix, anything else).

use std::fmt;

use log::trace;
use phf::phf_map;

use crate::error::LexError;
use crate::tokenizer::{RawKind, RawToken, tokenize_with_trivia};
use crate::{Decimal, SyntaxKind};

/// A token of the expression grammar.
///
/// `column` and `length` are measured in code points. Synthetic
/// `T_IMPLIED_STAR` tokens consume no input: they have no column and a length
/// of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Source text of numbers and error tokens.
    pub text: Option<String>,
    /// Diagnostic carried by `N_ERROR` tokens.
    pub error: Option<LexError>,
    pub column: Option<usize>,
    pub length: usize,
}

impl Token {
    fn symbol(kind: SyntaxKind, column: usize) -> Self {
        Self {
            kind,
            text: None,
            error: None,
            column: Some(column),
            length: 1,
        }
    }

    fn number(text: &str, column: usize) -> Self {
        Self {
            kind: SyntaxKind::T_NUMBER,
            text: Some(text.to_owned()),
            error: None,
            column: Some(column),
            length: text.chars().count(),
        }
    }

    fn error(error: LexError, text: &str, column: usize, length: usize) -> Self {
        Self {
            kind: SyntaxKind::N_ERROR,
            text: Some(text.to_owned()),
            error: Some(error),
            column: Some(column),
            length,
        }
    }

    fn implied_multiply() -> Self {
        Self {
            kind: SyntaxKind::T_IMPLIED_STAR,
            text: None,
            error: None,
            column: None,
            length: 0,
        }
    }

    pub(crate) fn eof(column: usize) -> Self {
        Self {
            kind: SyntaxKind::T_EOF,
            text: None,
            error: None,
            column: Some(column),
            length: 0,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == SyntaxKind::N_ERROR
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(text) = &self.text {
            write!(f, " {text:?}")?;
        }
        if let Some(error) = self.error {
            write!(f, " ({error})")?;
        }
        match self.column {
            Some(column) => write!(f, " @{column}"),
            None => Ok(()),
        }
    }
}

/// Letter runs with a dedicated diagnostic, keyed by their lowercase form.
///
/// `NaN` is matched case-sensitively before this table is consulted.
static WORDS: phf::Map<&'static str, LexError> = phf_map! {
    "undefined" => LexError::NotANumber,
    "infinity" => LexError::NotANumber,
    "e" => LexError::MisplacedExponentSuffix,
};

fn classify_word(word: &str) -> LexError {
    if word == "NaN" {
        return LexError::NotANumber;
    }
    WORDS
        .get(word.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(LexError::UnknownIdentifier)
}

struct Scanner<'a> {
    src: &'a str,
    raw: Vec<RawToken>,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        let raw = tokenize_with_trivia(src);
        let capacity = raw.len() + 1;
        Self {
            src,
            raw,
            pos: 0,
            tokens: Vec::with_capacity(capacity),
        }
    }

    fn peek_nth(&self, n: usize) -> Option<&RawToken> {
        self.raw.get(self.pos + n)
    }

    fn peek_kind_nth(&self, n: usize) -> Option<RawKind> {
        self.peek_nth(n).map(|t| t.kind)
    }

    /// First non-whitespace run at or after the cursor.
    fn peek_significant(&self) -> Option<&RawToken> {
        self.raw
            .get(self.pos..)
            .and_then(|rest| rest.iter().find(|t| t.kind != RawKind::Whitespace))
    }

    fn text(&self, token: &RawToken) -> &'a str {
        self.src.get(token.span.clone()).unwrap_or_default()
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(token) = self.raw.get(self.pos).cloned() {
            self.pos += 1;
            self.scan_token(&token);
        }
        let end = self.raw.last().map_or(0, |t| t.column + t.width);
        self.tokens.push(Token::eof(end));
        self.tokens
    }

    fn scan_token(&mut self, token: &RawToken) {
        match token.kind {
            RawKind::Whitespace => {}
            RawKind::Symbol(SyntaxKind::T_LPAREN) => self.open_paren(token),
            RawKind::Symbol(SyntaxKind::T_RPAREN) => self.close_paren(token),
            RawKind::Symbol(kind) => self.tokens.push(Token::symbol(kind, token.column)),
            RawKind::Digits => self.number(token),
            RawKind::Dot => self.tokens.push(Token::error(
                LexError::MisplacedDecimal,
                ".",
                token.column,
                1,
            )),
            RawKind::Word => {
                let word = self.text(token);
                let error = classify_word(word);
                self.tokens
                    .push(Token::error(error, word, token.column, token.width));
            }
            RawKind::Unknown => {
                let text = self.text(token);
                self.tokens.push(Token::error(
                    LexError::UnknownCharacter,
                    text,
                    token.column,
                    token.width,
                ));
            }
        }
    }

    fn open_paren(&mut self, token: &RawToken) {
        self.tokens
            .push(Token::symbol(SyntaxKind::T_LPAREN, token.column));
        let close = self
            .peek_significant()
            .filter(|t| t.kind == RawKind::Symbol(SyntaxKind::T_RPAREN))
            .map(|t| (t.column + t.width, t.span.end));
        if let Some((close_column, close_end)) = close {
            let length = close_column - token.column;
            let text = self.src.get(token.span.start..close_end).unwrap_or("()");
            self.tokens.push(Token::error(
                LexError::EmptyParens,
                text,
                token.column,
                length,
            ));
        }
    }

    fn close_paren(&mut self, token: &RawToken) {
        self.tokens
            .push(Token::symbol(SyntaxKind::T_RPAREN, token.column));
        if matches!(
            self.peek_significant().map(|t| t.kind),
            Some(RawKind::Digits | RawKind::Symbol(SyntaxKind::T_LPAREN))
        ) {
            self.tokens.push(Token::implied_multiply());
        }
    }

    fn number(&mut self, digits: &RawToken) {
        let mut start = digits.span.start;
        let mut column = digits.column;
        let mut text = self.text(digits);
        while text.len() > 1 && text.starts_with('0') {
            self.tokens
                .push(Token::error(LexError::LeadingZero, "0", column, 1));
            text = text.get(1..).unwrap_or_default();
            start += 1;
            column += 1;
        }

        let mut end = digits.span.end;
        if self.peek_kind_nth(0) == Some(RawKind::Dot)
            && self.peek_kind_nth(1) == Some(RawKind::Digits)
        {
            end = self.consume(2);
        }
        if let Some(taken) = self.exponent_suffix_len() {
            end = self.consume(taken);
        }

        let lexeme = self.src.get(start..end).unwrap_or(text);
        if lexeme.parse::<Decimal>().is_ok() {
            self.tokens.push(Token::number(lexeme, column));
        } else {
            let length = lexeme.chars().count();
            self.tokens.push(Token::error(
                LexError::ExponentOutOfRange,
                lexeme,
                column,
                length,
            ));
        }
        if self.peek_significant().map(|t| t.kind) == Some(RawKind::Symbol(SyntaxKind::T_LPAREN)) {
            self.tokens.push(Token::implied_multiply());
        }
    }

    /// Number of raw runs forming an exponent suffix at the cursor, if any:
    /// `e` then digits, or `e`, a sign and digits.
    fn exponent_suffix_len(&self) -> Option<usize> {
        let marker = self.peek_nth(0).filter(|t| t.kind == RawKind::Word)?;
        if !matches!(self.text(marker), "e" | "E") {
            return None;
        }
        match self.peek_kind_nth(1)? {
            RawKind::Digits => Some(2),
            RawKind::Symbol(SyntaxKind::T_PLUS | SyntaxKind::T_MINUS) => {
                let sign = self.peek_nth(1).map(|t| self.text(t))?;
                let signed = matches!(sign, "+" | "-");
                (signed && self.peek_kind_nth(2) == Some(RawKind::Digits)).then_some(3)
            }
            _ => None,
        }
    }

    /// Advance over `count` runs and return the byte end of the last one.
    fn consume(&mut self, count: usize) -> usize {
        self.pos += count;
        self.raw
            .get(self.pos - 1)
            .map_or(self.src.len(), |t| t.span.end)
    }
}

/// Scan `text` into tokens, always terminated by `T_EOF`.
///
/// # Examples
///
/// ```rust
/// use decicalc::{SyntaxKind, scan};
///
/// let kinds: Vec<SyntaxKind> = scan("2(3)").iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         SyntaxKind::T_NUMBER,
///         SyntaxKind::T_IMPLIED_STAR,
///         SyntaxKind::T_LPAREN,
///         SyntaxKind::T_NUMBER,
///         SyntaxKind::T_RPAREN,
///         SyntaxKind::T_EOF,
///     ]
/// );
/// ```
#[must_use]
pub fn scan(text: &str) -> Vec<Token> {
    let tokens = Scanner::new(text).run();
    trace!("scanned {} tokens from {} bytes", tokens.len(), text.len());
    tokens
}
