//! Line-by-line interpreter.
//!
//! A run resets the symbol table, then classifies and executes each line in
//! order. The first failing line ends the run: later lines are never read,
//! and bindings made before the failure stay in the table (there is no
//! rollback) until the next run resets it.
//!
//! ```text
//! Ready ──run──► Running ──all lines ok──► Succeeded
//!                   │
//!                   └──any line fails──► Failed
//! ```

mod builder;

pub use builder::InterpreterBuilder;

use crate::errors::{EvalError, EvalResult, RunError};
use crate::instruction::Instruction;
use crate::print_handler::SharedPrintHandler;
use crate::source::split_lines;
use crate::symbol_table::SymbolTable;
use crate::term::{parse_literal, TermResolver};

/// Lifecycle of the most recent run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run has started yet.
    #[default]
    Ready,
    /// Lines are being executed.
    Running,
    /// Every line executed.
    Succeeded,
    /// A line failed; the rest were skipped.
    Failed,
}

/// What a successful run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of instructions executed.
    pub executed: usize,
    /// Values emitted by `Return` instructions, in order.
    pub returned: Vec<i32>,
}

/// Interprets Mini programs against a fixed-capacity symbol table.
pub struct Interpreter {
    symbols: SymbolTable,
    print_handler: SharedPrintHandler,
    return_prefix: String,
    state: RunState,
}

impl Interpreter {
    /// Interpreter printing returned values to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Bindings left by the most recent run (including a failed one).
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run one program given as already-split lines.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run<I>(&mut self, lines: I) -> Result<RunSummary, RunError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.symbols.clear();
        self.state = RunState::Running;
        let mut summary = RunSummary::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match self.execute(line) {
                Ok(returned) => {
                    summary.executed = summary.executed.saturating_add(1);
                    summary.returned.extend(returned);
                }
                Err(source) => {
                    let line_number = index.saturating_add(1);
                    tracing::debug!(
                        line = line_number,
                        kind = source.kind_name(),
                        %source,
                        "run failed"
                    );
                    self.state = RunState::Failed;
                    return Err(RunError {
                        line: line_number,
                        text: line.to_owned(),
                        source,
                    });
                }
            }
        }

        tracing::debug!(
            executed = summary.executed,
            symbols = self.symbols.len(),
            "run succeeded"
        );
        self.state = RunState::Succeeded;
        Ok(summary)
    }

    /// Run a program given as newline-separated text, split by [`split_lines`].
    pub fn run_source(&mut self, source: &str) -> Result<RunSummary, RunError> {
        self.run(split_lines(source))
    }

    /// Classify and execute one line, returning the value a `Return` emitted.
    fn execute(&mut self, line: &str) -> EvalResult<Option<i32>> {
        let instruction = Instruction::classify(line)?;
        tracing::trace!(kind = instruction.name(), %instruction, "execute");
        match instruction {
            Instruction::Assign { symbol, value } => {
                self.exec_assign(symbol, value)?;
                Ok(None)
            }
            Instruction::Add { symbol, lhs, rhs } => {
                self.exec_add(symbol, lhs, rhs)?;
                Ok(None)
            }
            Instruction::Return { symbol } => self.exec_return(symbol).map(Some),
        }
    }

    /// `SYM = VAL`: the right-hand side must be an integer literal.
    fn exec_assign(&mut self, symbol: &str, value: &str) -> EvalResult<()> {
        let value = parse_literal(value)?;
        self.symbols.upsert(symbol, value)?;
        Ok(())
    }

    /// `SYM = VAL + VAL`: each operand is a literal or a bound symbol.
    /// The sum wraps on overflow.
    fn exec_add(&mut self, symbol: &str, lhs: &str, rhs: &str) -> EvalResult<()> {
        let resolver = TermResolver::new(&self.symbols);
        let lhs = resolver.resolve(lhs)?;
        let rhs = resolver.resolve(rhs)?;
        self.symbols.upsert(symbol, lhs.wrapping_add(rhs))?;
        Ok(())
    }

    fn exec_return(&self, symbol: &str) -> EvalResult<i32> {
        let value = self
            .symbols
            .lookup(symbol)
            .ok_or_else(|| EvalError::unresolved_symbol(symbol))?;
        self.print_handler
            .println(&format!("{}{value}", self.return_prefix));
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
