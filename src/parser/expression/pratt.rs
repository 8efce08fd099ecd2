//! Core Pratt evaluator and entry point.
//!
//! This module defines the [`Pratt`] struct and the [`evaluate`] function
//! which scans the source and computes its value in a single pass.

use log::debug;

use crate::error::{Diagnostic, ParseError};
use crate::parser::EvalConfig;
use crate::{Decimal, SyntaxKind, scan};

use super::EvalResult;
use super::precedence::prefix_entry;
use super::token_stream::TokenStream;

pub(super) struct Pratt {
    pub(super) ts: TokenStream,
    pub(super) config: EvalConfig,
}

/// Scan and evaluate `src`.
///
/// On failure the first diagnostic is the one that stopped evaluation; it is
/// followed by every lexical error left in the unconsumed input.
///
/// # Errors
/// Returns the collected diagnostics when the expression is malformed or an
/// arithmetic operation fails.
#[must_use = "discarding the Result will ignore evaluation errors"]
pub fn evaluate(src: &str, config: EvalConfig) -> Result<Decimal, Vec<Diagnostic>> {
    let mut parser = Pratt::new(TokenStream::new(scan(src)), config);
    let result = parser
        .parse_expr(0)
        .and_then(|value| parser.expect_end(value));
    result.map_err(|first| {
        let errors = parser.ts.collect_errors(first);
        debug!("evaluation failed with {} diagnostic(s)", errors.len());
        errors
    })
}

impl Pratt {
    pub(super) fn new(ts: TokenStream, config: EvalConfig) -> Self {
        Self { ts, config }
    }

    pub(super) fn parse_expr(&mut self, min_bp: u8) -> EvalResult {
        let token = self.ts.next_tok();
        let Some(entry) = prefix_entry(token.kind) else {
            return Err(self.ts.diagnostic(&token, ParseError::UndefinedPrefix));
        };
        let lhs = (entry.handler)(self, &token)?;
        self.parse_infix(lhs, min_bp)
    }

    /// Reject input left over after a complete expression.
    fn expect_end(&mut self, value: Decimal) -> EvalResult {
        if !self.ts.has_remaining() {
            return Ok(value);
        }
        let token = self.ts.next_tok();
        let kind = match token.kind {
            SyntaxKind::N_ERROR => return Err(self.ts.lex_diagnostic(&token)),
            SyntaxKind::T_RPAREN => ParseError::MismatchedParen,
            SyntaxKind::T_NUMBER => ParseError::MisplacedNumber,
            _ => ParseError::IncompleteExpression,
        };
        Err(self.ts.diagnostic(&token, kind))
    }
}
