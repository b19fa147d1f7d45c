#![deny(clippy::arithmetic_side_effects)]
//! Mini Eval - interpreter for the Mini line language.
//!
//! A Mini program is a sequence of lines, each one of:
//!
//! ```text
//! A = 2          assign a literal
//! C = A + B      assign the sum of two literals or symbols
//! C              return (print) a symbol's value
//! ```
//!
//! # Architecture
//!
//! - `SymbolTable`: fixed-capacity name → `i32` slots with upsert semantics
//! - `TermResolver`: literal-or-symbol operand resolution
//! - `split_lines`: program text → instruction lines
//! - `Instruction`: flat token-shape classifier
//! - `Interpreter`: fail-fast driver over the lines of one run
//! - `PrintHandler`: where `Return` output goes (stdout, buffer, silent)

pub mod errors;
mod instruction;
mod interpreter;
mod print_handler;
mod source;
mod symbol_table;
mod term;

pub use errors::{EvalError, EvalResult, RunError};
pub use instruction::{Instruction, ASSIGN_KEYWORD, PLUS_KEYWORD};
pub use interpreter::{Interpreter, InterpreterBuilder, RunState, RunSummary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use source::split_lines;
pub use symbol_table::{Binding, SlotIndex, SymbolTable, SYMBOL_CAPACITY};
pub use term::{is_numeric_literal, parse_literal, TermResolver};
