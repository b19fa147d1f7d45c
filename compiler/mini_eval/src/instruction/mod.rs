//! Instruction classification.
//!
//! The grammar is flat: a line is split on whitespace and matched by token
//! count and the fixed keyword positions below. There is no precedence and
//! no chaining, so `A = 1 + 2 + 3` is simply malformed.
//!
//! ```text
//! SYM = VAL            Assign
//! SYM = VAL + VAL      Add
//! SYM                  Return
//! ```

use smallvec::SmallVec;
use std::fmt;

use crate::errors::{EvalError, EvalResult};

/// Keyword in position 1 of assignments and additions.
pub const ASSIGN_KEYWORD: &str = "=";
/// Keyword in position 3 of additions.
pub const PLUS_KEYWORD: &str = "+";

/// One classified line, borrowing its operand tokens from the source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// `SYM = VAL`: bind an integer literal.
    Assign { symbol: &'a str, value: &'a str },
    /// `SYM = VAL + VAL`: bind the sum of two terms.
    Add {
        symbol: &'a str,
        lhs: &'a str,
        rhs: &'a str,
    },
    /// `SYM`: emit the symbol's current value.
    Return { symbol: &'a str },
}

impl<'a> Instruction<'a> {
    /// Classify one line.
    pub fn classify(line: &'a str) -> EvalResult<Self> {
        let tokens: SmallVec<[&'a str; 5]> = line.split_whitespace().collect();
        match *tokens.as_slice() {
            [symbol, ASSIGN_KEYWORD, value] => Ok(Instruction::Assign { symbol, value }),
            [symbol, ASSIGN_KEYWORD, lhs, PLUS_KEYWORD, rhs] => {
                Ok(Instruction::Add { symbol, lhs, rhs })
            }
            [symbol] => Ok(Instruction::Return { symbol }),
            _ => Err(EvalError::MalformedInstruction {
                token_count: tokens.len(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Assign { .. } => "assign",
            Instruction::Add { .. } => "add",
            Instruction::Return { .. } => "return",
        }
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Assign { symbol, value } => write!(f, "{symbol} = {value}"),
            Instruction::Add { symbol, lhs, rhs } => write!(f, "{symbol} = {lhs} + {rhs}"),
            Instruction::Return { symbol } => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod tests;
