//! Infix operator handling for the Pratt evaluator.

use log::trace;

use crate::error::ParseError;
use crate::lexer::Token;
use crate::Decimal;

use super::precedence::{BinaryOp, infix_binding_power, infix_entry};
use super::{EvalResult, Pratt};

impl Pratt {
    /// Fold operators into `lhs` while they bind tighter than `min_bp`.
    pub(super) fn parse_infix(&mut self, mut lhs: Decimal, min_bp: u8) -> EvalResult {
        while infix_binding_power(self.ts.peek_kind()) > min_bp {
            let token = self.ts.next_tok();
            let Some(entry) = infix_entry(token.kind) else {
                return Err(self.ts.diagnostic(&token, ParseError::UndefinedInfix));
            };
            lhs = (entry.handler)(self, lhs, &token)?;
        }
        Ok(lhs)
    }

    pub(super) fn parse_binary(&mut self, lhs: Decimal, token: &Token) -> EvalResult {
        let (Some(op), Some(entry)) = (BinaryOp::from_kind(token.kind), infix_entry(token.kind))
        else {
            return Err(self.ts.diagnostic(token, ParseError::UndefinedInfix));
        };
        let rhs = self.parse_expr(entry.r_bp)?;
        trace!("folding {op:?} at {:?}", token.column);
        op.apply(&lhs, &rhs, self.config.division_precision)
            .map_err(|err| self.ts.diagnostic(token, err))
    }

    pub(super) fn parse_lex_error_infix(&mut self, _lhs: Decimal, token: &Token) -> EvalResult {
        Err(self.ts.lex_diagnostic(token))
    }
}
