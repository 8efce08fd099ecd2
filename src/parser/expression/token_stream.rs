//! Cursor over the scanned tokens with diagnostic helpers.
//!
//! The final `T_EOF` token is never consumed: reading past the end keeps
//! returning it.

use crate::error::{Diagnostic, ErrorKind, LexError};
use crate::lexer::Token;
use crate::SyntaxKind;

pub(super) struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
    end: usize,
}

impl TokenStream {
    pub(super) fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.kind == SyntaxKind::T_EOF) {
            let column = tokens
                .last()
                .and_then(|t| t.column.map(|c| c + t.length))
                .unwrap_or_default();
            tokens.push(Token::eof(column));
        }
        let end = tokens.len() - 1;
        Self {
            tokens,
            index: 0,
            end,
        }
    }

    fn eof(&self) -> Token {
        self.tokens
            .get(self.end)
            .cloned()
            .unwrap_or_else(|| Token::eof(0))
    }

    pub(super) fn next_tok(&mut self) -> Token {
        if self.index >= self.end {
            return self.eof();
        }
        let token = self.tokens.get(self.index).cloned();
        self.index += 1;
        token.unwrap_or_else(|| self.eof())
    }

    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub(super) fn peek_kind(&self) -> SyntaxKind {
        self.peek().map_or(SyntaxKind::T_EOF, |t| t.kind)
    }

    /// True while tokens other than `T_EOF` remain unconsumed.
    pub(super) fn has_remaining(&self) -> bool {
        self.index < self.end
    }

    /// True when the input produced nothing but `T_EOF`.
    pub(super) fn is_empty_input(&self) -> bool {
        self.end == 0
    }

    /// Position `kind` at `token`.
    ///
    /// Synthetic tokens have no column of their own and borrow the column of
    /// the token that follows them.
    pub(super) fn diagnostic(&self, token: &Token, kind: impl Into<ErrorKind>) -> Diagnostic {
        let column = token
            .column
            .or_else(|| self.peek().and_then(|t| t.column))
            .unwrap_or_default();
        Diagnostic::new(column, token.length, kind)
    }

    /// Diagnostic for an `N_ERROR` token produced by the lexer.
    pub(super) fn lex_diagnostic(&self, token: &Token) -> Diagnostic {
        self.diagnostic(token, token.error.unwrap_or(LexError::UnknownCharacter))
    }

    /// Combine `first` with the lexical errors not yet consumed.
    pub(super) fn collect_errors(&mut self, first: Diagnostic) -> Vec<Diagnostic> {
        let pending: Vec<Diagnostic> = self
            .tokens
            .get(self.index..)
            .unwrap_or_default()
            .iter()
            .filter(|t| t.is_error())
            .map(|t| self.lex_diagnostic(t))
            .collect();
        self.index = self.end;
        let mut errors = Vec::with_capacity(pending.len() + 1);
        errors.push(first);
        errors.extend(pending);
        errors
    }
}
