//! Prefix handlers: literals, grouping, unary signs and the tokens that can
//! only fail in operand position.

use crate::error::{LexError, ParseError};
use crate::lexer::Token;
use crate::{Decimal, SyntaxKind};

use super::precedence::{UNARY_BP, UnaryOp};
use super::{EvalResult, Pratt};

impl Pratt {
    pub(super) fn parse_literal(&mut self, token: &Token) -> EvalResult {
        token
            .text
            .as_deref()
            .unwrap_or_default()
            .parse::<Decimal>()
            .map_err(|_| self.ts.diagnostic(token, LexError::ExponentOutOfRange))
    }

    /// Evaluate a parenthesised sub-expression. An unclosed group is
    /// reported at its opening parenthesis.
    pub(super) fn parse_grouping(&mut self, open: &Token) -> EvalResult {
        let value = self.parse_expr(0)?;
        if self.ts.peek_kind() != SyntaxKind::T_RPAREN {
            return Err(self.ts.diagnostic(open, ParseError::MismatchedParen));
        }
        self.ts.next_tok();
        Ok(value)
    }

    pub(super) fn parse_unmatched_close(&mut self, token: &Token) -> EvalResult {
        Err(self.ts.diagnostic(token, ParseError::MismatchedParen))
    }

    pub(super) fn parse_unary(&mut self, token: &Token) -> EvalResult {
        let Some(op) = UnaryOp::from_kind(token.kind) else {
            return Err(self.ts.diagnostic(token, ParseError::UndefinedPrefix));
        };
        let operand = self.parse_expr(UNARY_BP)?;
        Ok(op.apply(operand))
    }

    /// Input ran out where an operand was expected.
    pub(super) fn parse_eof(&mut self, token: &Token) -> EvalResult {
        let kind = if self.ts.is_empty_input() {
            ParseError::EmptyExpression
        } else {
            ParseError::IncompleteExpression
        };
        Err(self.ts.diagnostic(token, kind))
    }

    pub(super) fn parse_lex_error(&mut self, token: &Token) -> EvalResult {
        Err(self.ts.lex_diagnostic(token))
    }
}
