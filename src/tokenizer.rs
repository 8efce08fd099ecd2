//! Raw lexical pass over expression text.
//!
//! This module exposes `tokenize_with_trivia` and `tokenize_without_trivia`,
//! which split the source into maximal runs of one character class using the
//! `logos` crate. The runs are deliberately coarse: digits, letters and the
//! decimal point come out separately and [`crate::lexer`] assembles them
//! into numbers and diagnostics. Every run records both its byte span and its
//! code-point column so diagnostics line up under multi-byte characters.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\n\r\x0B\x0C]+", priority = 2)]
    Whitespace,
    #[regex(r"[0-9]+", priority = 2)]
    Digits,
    #[regex(r"[A-Za-z]+", priority = 2)]
    Word,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    #[token("\u{2212}")]
    Minus,
    #[token("*")]
    #[token("×")]
    Star,
    #[token("/")]
    #[token("÷")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r".")]
    Unknown,
}

/// Classification of a raw run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    Whitespace,
    Digits,
    /// ASCII letters only.
    Word,
    Dot,
    /// A single-character operator or parenthesis.
    Symbol(SyntaxKind),
    /// Any other character, one per run.
    Unknown,
}

/// One run of the raw pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: RawKind,
    pub span: Span,
    /// Code-point offset of the first character.
    pub column: usize,
    /// Number of code points in the run.
    pub width: usize,
}

#[must_use]
fn tokenize_impl(src: &str) -> Vec<RawToken> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::with_capacity(src.len());
    let mut column = 0;
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let width = src.get(span.clone()).map_or(0, |text| text.chars().count());
        let kind = match result {
            Ok(Token::Whitespace) => RawKind::Whitespace,
            Ok(Token::Digits) => RawKind::Digits,
            Ok(Token::Word) => RawKind::Word,
            Ok(Token::Dot) => RawKind::Dot,
            Ok(Token::Plus) => RawKind::Symbol(SyntaxKind::T_PLUS),
            Ok(Token::Minus) => RawKind::Symbol(SyntaxKind::T_MINUS),
            Ok(Token::Star) => RawKind::Symbol(SyntaxKind::T_STAR),
            Ok(Token::Slash) => RawKind::Symbol(SyntaxKind::T_SLASH),
            Ok(Token::Caret) => RawKind::Symbol(SyntaxKind::T_CARET),
            Ok(Token::LParen) => RawKind::Symbol(SyntaxKind::T_LPAREN),
            Ok(Token::RParen) => RawKind::Symbol(SyntaxKind::T_RPAREN),
            Ok(Token::Unknown) | Err(()) => RawKind::Unknown,
        };
        out.push(RawToken {
            kind,
            span,
            column,
            width,
        });
        column += width;
    }
    out
}

/// Split the source into raw runs, excluding whitespace.
///
/// # Examples
///
/// ```rust
/// use decicalc::{RawKind, tokenize_without_trivia};
///
/// let tokens = tokenize_without_trivia("12 + 3");
/// assert_eq!(tokens.len(), 3);
/// assert!(tokens.iter().all(|t| t.kind != RawKind::Whitespace));
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<RawToken> {
    tokenize_impl(src)
        .into_iter()
        .filter(|t| t.kind != RawKind::Whitespace)
        .collect()
}

/// Split the source into raw runs, keeping whitespace.
///
/// The runs tile the input: each span starts where the previous one ended.
///
/// # Examples
///
/// ```rust
/// use decicalc::{RawKind, tokenize_with_trivia};
///
/// let tokens = tokenize_with_trivia("1.5e3");
/// let kinds: Vec<RawKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [RawKind::Digits, RawKind::Dot, RawKind::Digits, RawKind::Word, RawKind::Digits]
/// );
/// ```
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<RawToken> {
    tokenize_impl(src)
}
