//! Binding powers and handlers for expression tokens.
//!
//! Every token kind the evaluator understands is listed here once, keeping
//! precedence and dispatch in one place. Kinds missing from a table have no
//! handler in that position.

use crate::lexer::Token;
use crate::{ArithResult, Decimal, SyntaxKind};

use super::{EvalResult, Pratt};

/// Binding power of unary `+` and `-`: tighter than every binary operator,
/// so `-2^2` is `(-2)^2`.
pub(super) const UNARY_BP: u8 = 50;

/// Stray lexer errors bind tighter than any operator so they are reported as
/// soon as they are reached.
const ERROR_BP: u8 = u8::MAX;

pub(super) type PrefixHandler = fn(&mut Pratt, &Token) -> EvalResult;
pub(super) type InfixHandler = fn(&mut Pratt, Decimal, &Token) -> EvalResult;

#[derive(Clone, Copy)]
pub(super) struct PrefixEntry {
    pub handler: PrefixHandler,
}

#[derive(Clone, Copy)]
pub(super) struct InfixEntry {
    pub l_bp: u8,
    pub r_bp: u8,
    pub handler: InfixHandler,
}

const PREFIX_TABLE: &[(SyntaxKind, PrefixEntry)] = &[
    (
        SyntaxKind::T_NUMBER,
        PrefixEntry {
            handler: Pratt::parse_literal,
        },
    ),
    (
        SyntaxKind::T_LPAREN,
        PrefixEntry {
            handler: Pratt::parse_grouping,
        },
    ),
    (
        SyntaxKind::T_RPAREN,
        PrefixEntry {
            handler: Pratt::parse_unmatched_close,
        },
    ),
    (
        SyntaxKind::T_PLUS,
        PrefixEntry {
            handler: Pratt::parse_unary,
        },
    ),
    (
        SyntaxKind::T_MINUS,
        PrefixEntry {
            handler: Pratt::parse_unary,
        },
    ),
    (
        SyntaxKind::T_EOF,
        PrefixEntry {
            handler: Pratt::parse_eof,
        },
    ),
    (
        SyntaxKind::N_ERROR,
        PrefixEntry {
            handler: Pratt::parse_lex_error,
        },
    ),
];

const INFIX_TABLE: &[(SyntaxKind, InfixEntry)] = &[
    (
        SyntaxKind::T_PLUS,
        InfixEntry {
            l_bp: 10,
            r_bp: 10,
            handler: Pratt::parse_binary,
        },
    ),
    (
        SyntaxKind::T_MINUS,
        InfixEntry {
            l_bp: 10,
            r_bp: 10,
            handler: Pratt::parse_binary,
        },
    ),
    (
        SyntaxKind::T_STAR,
        InfixEntry {
            l_bp: 20,
            r_bp: 20,
            handler: Pratt::parse_binary,
        },
    ),
    (
        SyntaxKind::T_SLASH,
        InfixEntry {
            l_bp: 20,
            r_bp: 20,
            handler: Pratt::parse_binary,
        },
    ),
    (
        SyntaxKind::T_IMPLIED_STAR,
        InfixEntry {
            l_bp: 30,
            r_bp: 30,
            handler: Pratt::parse_binary,
        },
    ),
    // Right-associative: the operand is parsed one level lower.
    (
        SyntaxKind::T_CARET,
        InfixEntry {
            l_bp: 40,
            r_bp: 39,
            handler: Pratt::parse_binary,
        },
    ),
    (
        SyntaxKind::N_ERROR,
        InfixEntry {
            l_bp: ERROR_BP,
            r_bp: ERROR_BP,
            handler: Pratt::parse_lex_error_infix,
        },
    ),
];

/// Lookup the prefix handler for `kind`.
pub(super) fn prefix_entry(kind: SyntaxKind) -> Option<PrefixEntry> {
    PREFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (kind == *k).then_some(*entry))
}

/// Lookup the binding powers and handler for an infix token.
pub(super) fn infix_entry(kind: SyntaxKind) -> Option<InfixEntry> {
    INFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (kind == *k).then_some(*entry))
}

/// Left binding power of `kind` in infix position, `0` when it cannot
/// continue an expression.
pub(super) fn infix_binding_power(kind: SyntaxKind) -> u8 {
    infix_entry(kind).map_or(0, |entry| entry.l_bp)
}

/// Binary arithmetic selected by an operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Operator for an infix token kind. Implied multiplication is `Mul`.
    #[must_use]
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::T_PLUS => Some(Self::Add),
            SyntaxKind::T_MINUS => Some(Self::Sub),
            SyntaxKind::T_STAR | SyntaxKind::T_IMPLIED_STAR => Some(Self::Mul),
            SyntaxKind::T_SLASH => Some(Self::Div),
            SyntaxKind::T_CARET => Some(Self::Pow),
            _ => None,
        }
    }

    /// Apply the operator. Quotients and negative powers are rounded to
    /// `precision`.
    ///
    /// # Errors
    /// Propagates the operation's [`crate::ArithmeticError`].
    pub fn apply(self, lhs: &Decimal, rhs: &Decimal, precision: i64) -> ArithResult {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs.div_with_precision(rhs, precision),
            Self::Pow => lhs.pow_with_precision(rhs, precision),
        }
    }
}

/// Unary sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
}

impl UnaryOp {
    #[must_use]
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::T_PLUS => Some(Self::Plus),
            SyntaxKind::T_MINUS => Some(Self::Neg),
            _ => None,
        }
    }

    #[must_use]
    pub fn apply(self, operand: Decimal) -> Decimal {
        match self {
            Self::Plus => operand,
            Self::Neg => -operand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SyntaxKind::T_PLUS, 10)]
    #[case(SyntaxKind::T_MINUS, 10)]
    #[case(SyntaxKind::T_STAR, 20)]
    #[case(SyntaxKind::T_SLASH, 20)]
    #[case(SyntaxKind::T_IMPLIED_STAR, 30)]
    #[case(SyntaxKind::T_CARET, 40)]
    #[case(SyntaxKind::T_NUMBER, 0)]
    #[case(SyntaxKind::T_RPAREN, 0)]
    #[case(SyntaxKind::T_EOF, 0)]
    fn infix_powers(#[case] kind: SyntaxKind, #[case] expected: u8) {
        assert_eq!(infix_binding_power(kind), expected);
    }

    #[rstest]
    fn caret_is_right_associative() {
        let entry = infix_entry(SyntaxKind::T_CARET).unwrap_or_else(|| panic!("caret entry"));
        assert!(entry.r_bp < entry.l_bp);
    }

    #[rstest]
    fn unary_binds_tighter_than_binary() {
        let tightest = INFIX_TABLE
            .iter()
            .filter(|(kind, _)| kind.is_operator())
            .map(|(_, entry)| entry.l_bp)
            .max()
            .unwrap_or_default();
        assert!(UNARY_BP > tightest);
    }

    #[rstest]
    #[case(SyntaxKind::T_NUMBER, true)]
    #[case(SyntaxKind::T_LPAREN, true)]
    #[case(SyntaxKind::T_EOF, true)]
    #[case(SyntaxKind::T_STAR, false)]
    #[case(SyntaxKind::T_CARET, false)]
    #[case(SyntaxKind::T_IMPLIED_STAR, false)]
    fn prefix_positions(#[case] kind: SyntaxKind, #[case] expected: bool) {
        assert_eq!(prefix_entry(kind).is_some(), expected);
    }

    #[rstest]
    #[case(BinaryOp::Add, "7", "2", "9")]
    #[case(BinaryOp::Sub, "7", "2", "5")]
    #[case(BinaryOp::Mul, "7", "2", "14")]
    #[case(BinaryOp::Div, "7", "2", "3.5")]
    #[case(BinaryOp::Pow, "7", "2", "49")]
    fn binary_ops_apply(
        #[case] op: BinaryOp,
        #[case] lhs: &str,
        #[case] rhs: &str,
        #[case] expected: &str,
    ) {
        let result = op
            .apply(&Decimal::decode(lhs), &Decimal::decode(rhs), -4)
            .unwrap_or_else(|e| panic!("{op:?} failed: {e}"));
        assert_eq!(result.encode(), expected);
    }

    #[rstest]
    #[case(BinaryOp::Add, i64::MIN)]
    #[case(BinaryOp::Sub, i64::MIN)]
    #[case(BinaryOp::Mul, 1)]
    fn exponent_overflow_surfaces(#[case] op: BinaryOp, #[case] rhs_exponent: i64) {
        let lhs = Decimal::new(1.into(), i64::MAX);
        let rhs = Decimal::new(1.into(), rhs_exponent);
        assert_eq!(
            op.apply(&lhs, &rhs, -4),
            Err(crate::ArithmeticError::ExponentOverflow)
        );
    }

    #[rstest]
    fn implied_multiply_maps_to_mul() {
        assert_eq!(
            BinaryOp::from_kind(SyntaxKind::T_IMPLIED_STAR),
            Some(BinaryOp::Mul)
        );
    }
}
