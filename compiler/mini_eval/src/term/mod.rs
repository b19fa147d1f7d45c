//! Operand resolution.
//!
//! A term is either a numeric literal or a symbol name. The numeric check is
//! lenient: any floating-point spelling counts as a literal, but only an exact
//! `i32` parse yields a value. So `2.5`, `1d` and `Infinity` are literals that
//! fail with `InvalidLiteral`, never symbol lookups.

use crate::errors::{EvalError, EvalResult};
use crate::symbol_table::SymbolTable;

/// Suffixes that may close a floating-point literal (`1d`, `2.5f`).
const FLOAT_SUFFIXES: [char; 4] = ['d', 'D', 'f', 'F'];

/// Whether `term` is lexically a number.
///
/// Accepts integer, decimal and exponent forms with an optional sign and one
/// trailing `d`/`f` suffix, plus the exact spellings `Infinity` and `NaN`
/// (optionally signed). Other spelled-out forms such as `inf` are symbol
/// names.
pub fn is_numeric_literal(term: &str) -> bool {
    let unsigned = term.strip_prefix(['+', '-']).unwrap_or(term);
    if matches!(unsigned, "Infinity" | "NaN") {
        return true;
    }
    let body = term.strip_suffix(FLOAT_SUFFIXES).unwrap_or(term);
    body.bytes().any(|b| b.is_ascii_digit()) && body.parse::<f64>().is_ok()
}

/// Parse `term` as an integer literal, with no symbol fallback.
pub fn parse_literal(term: &str) -> EvalResult<i32> {
    term.parse::<i32>().map_err(|_| EvalError::invalid_literal(term))
}

/// Resolves operand tokens against a symbol table.
#[derive(Clone, Copy, Debug)]
pub struct TermResolver<'t> {
    symbols: &'t SymbolTable,
}

impl<'t> TermResolver<'t> {
    pub fn new(symbols: &'t SymbolTable) -> Self {
        TermResolver { symbols }
    }

    /// Literal value of `term`, or the value bound to the symbol it names.
    pub fn resolve(&self, term: &str) -> EvalResult<i32> {
        if is_numeric_literal(term) {
            return parse_literal(term);
        }
        self.symbols
            .lookup(term)
            .ok_or_else(|| EvalError::unresolved_symbol(term))
    }
}
