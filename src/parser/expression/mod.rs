//! Pratt evaluator for arithmetic expressions.
//!
//! The implementation is split across submodules: [`pratt`] hosts the core
//! loop and the top-level driver, [`prefix`] handles literals, grouping and
//! unary operators, [`infix`] folds binary operators, and [`precedence`] holds
//! the binding-power table that ties token kinds to handlers.

mod infix;
mod pratt;
mod precedence;
mod prefix;
mod token_stream;

pub use pratt::evaluate;
pub use precedence::{BinaryOp, UnaryOp};

use pratt::Pratt;

use crate::{Decimal, Diagnostic};

/// Outcome of one grammar production.
type EvalResult = Result<Decimal, Diagnostic>;
