//! Error types for instruction evaluation.
//!
//! Every variant is fatal to the run that produced it. The driver wraps the
//! failing instruction's error in a [`RunError`] carrying its line, so
//! callers can choose between flat "the run failed" reporting and a precise
//! diagnostic.

use thiserror::Error;

/// Result of evaluating a single instruction or operand.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed failure of one instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The line matches none of the recognised token shapes.
    #[error(
        "malformed instruction: expected `SYM = VAL`, `SYM = VAL + VAL` or `SYM`, \
         found {token_count} token(s)"
    )]
    MalformedInstruction { token_count: usize },

    /// A symbol was read before anything was bound to it.
    #[error("unresolved symbol `{name}`")]
    UnresolvedSymbol { name: String },

    /// A literal operand is not a valid integer.
    #[error("invalid integer literal `{text}`")]
    InvalidLiteral { text: String },

    /// A new symbol was introduced but every slot is taken.
    #[error("symbol table full: cannot bind `{name}` (capacity {capacity})")]
    SymbolTableFull { name: String, capacity: usize },
}

impl EvalError {
    pub fn unresolved_symbol(name: &str) -> Self {
        Self::UnresolvedSymbol {
            name: name.to_owned(),
        }
    }

    pub fn invalid_literal(text: &str) -> Self {
        Self::InvalidLiteral {
            text: text.to_owned(),
        }
    }

    /// Stable short name of the error category, used in log fields.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::MalformedInstruction { .. } => "MalformedInstruction",
            Self::UnresolvedSymbol { .. } => "UnresolvedSymbol",
            Self::InvalidLiteral { .. } => "InvalidLiteral",
            Self::SymbolTableFull { .. } => "SymbolTableFull",
        }
    }
}

/// A failed run: the instruction error plus where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line} (`{text}`): {source}")]
pub struct RunError {
    /// 1-based line number of the failing instruction.
    pub line: usize,
    /// The failing instruction, verbatim.
    pub text: String,
    pub source: EvalError,
}
