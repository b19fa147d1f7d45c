//! `InterpreterBuilder` for creating Interpreter instances.

use super::{Interpreter, RunState};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::symbol_table::SymbolTable;

/// Builder for creating Interpreter instances.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    return_prefix: String,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handler receiving `Return` output.
    ///
    /// Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Text printed before each returned value, e.g. `"Return: "`.
    ///
    /// Default is empty, so each `Return` prints the bare decimal value.
    #[must_use]
    pub fn return_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.return_prefix = prefix.into();
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            symbols: SymbolTable::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            return_prefix: self.return_prefix,
            state: RunState::Ready,
        }
    }
}
