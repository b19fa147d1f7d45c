//! Command handlers for the Mini CLI.
//!
//! Each submodule implements one command. Shared pieces (options, file
//! reading, executing one program) live here in the module root.

use mini_eval::{split_lines, Interpreter, SharedPrintHandler};

mod demo;
mod run;

pub use demo::{run_demos, DemoReport, BANNER};
pub use run::{parse_run_args, run_file};

/// Printed when a run fails. Which error occurred is only shown with `--verbose`.
pub const FAILURE_NOTICE: &str = "Error, please check input.";

/// Printed before each returned value.
pub const RETURN_PREFIX: &str = "Return: ";

/// Flags shared by `run` and `demo`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the program's lines before running it.
    pub echo: bool,
    /// Print the symbol table after the run.
    pub dump_symbols: bool,
    /// Print the failing line and error after the failure notice.
    pub verbose: bool,
}

impl RunOptions {
    /// Defaults for `mini demo`, which always shows the program.
    pub fn for_demo() -> Self {
        RunOptions {
            echo: true,
            ..Self::default()
        }
    }

    /// Apply one command-line flag. Returns `false` if `arg` is not a run flag.
    pub fn apply_flag(&mut self, arg: &str) -> bool {
        match arg {
            "--echo" => self.echo = true,
            "--no-echo" => self.echo = false,
            "--dump-symbols" => self.dump_symbols = true,
            "--verbose" | "-v" => self.verbose = true,
            _ => return false,
        }
        true
    }
}

/// Run one program's text, sending all output to `handler`.
///
/// Returns whether the run succeeded.
pub fn execute_program(source: &str, options: &RunOptions, handler: &SharedPrintHandler) -> bool {
    let lines = split_lines(source);
    if options.echo {
        for line in &lines {
            handler.println(line);
        }
    }

    let mut interp = Interpreter::builder()
        .print_handler(SharedPrintHandler::clone(handler))
        .return_prefix(RETURN_PREFIX)
        .build();
    let result = interp.run(&lines);

    if options.dump_symbols {
        for line in interp.symbols().to_string().lines() {
            handler.println(line);
        }
    }

    match result {
        Ok(summary) => {
            tracing::debug!(executed = summary.executed, "program finished");
            true
        }
        Err(err) => {
            tracing::debug!(%err, "program failed");
            handler.println(FAILURE_NOTICE);
            if options.verbose {
                handler.println(&format!("error: {err}"));
            }
            false
        }
    }
}

/// Read a program file, exiting with a message if it cannot be read.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
