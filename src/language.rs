//! Token kinds produced by the lexer and dispatched on by the parser.
//!
//! The naming follows the usual `T_` prefix for tokens taken from the source
//! text. `N_ERROR` marks a lexical diagnostic carried inline in the token
//! stream, and `T_IMPLIED_STAR` is synthesised by the lexer when two terms
//! are juxtaposed.

use std::fmt;

/// Every kind of token the evaluator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(non_camel_case_types, reason = "token naming mirrors lexer output")]
pub enum SyntaxKind {
    /// Decimal literal such as `12`, `0.5` or `7e-3`.
    T_NUMBER,
    /// `+`
    T_PLUS,
    /// `-` or `−` (U+2212)
    T_MINUS,
    /// `*` or `×`
    T_STAR,
    /// `/` or `÷`
    T_SLASH,
    /// `^`
    T_CARET,
    /// Zero-width multiplication between juxtaposed terms, as in `2(3)`.
    T_IMPLIED_STAR,
    T_LPAREN,
    T_RPAREN,
    /// Malformed input; the token carries its [`crate::LexError`].
    N_ERROR,
    /// End of input. Always the final token.
    T_EOF,
}

impl SyntaxKind {
    /// Whether the kind is one of the arithmetic operator symbols.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::T_PLUS
                | Self::T_MINUS
                | Self::T_STAR
                | Self::T_SLASH
                | Self::T_CARET
                | Self::T_IMPLIED_STAR
        )
    }

    /// Short human-readable name used in token dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::T_NUMBER => "number",
            Self::T_PLUS => "+",
            Self::T_MINUS => "-",
            Self::T_STAR => "*",
            Self::T_SLASH => "/",
            Self::T_CARET => "^",
            Self::T_IMPLIED_STAR => "implied *",
            Self::T_LPAREN => "(",
            Self::T_RPAREN => ")",
            Self::N_ERROR => "error",
            Self::T_EOF => "eof",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
