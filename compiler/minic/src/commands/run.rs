//! The `run` command: execute a Mini program file.

use mini_eval::stdout_handler;

use super::{execute_program, read_file, RunOptions};

/// Parse the arguments that follow `mini run`: exactly one file path plus
/// any run flags, in any order.
///
/// The error is the message to show the user.
pub fn parse_run_args<S: AsRef<str>>(args: &[S]) -> Result<(String, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut file_path: Option<&str> = None;

    for arg in args {
        let arg: &str = arg.as_ref();
        if options.apply_flag(arg) {
            continue;
        }
        if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        }
        if file_path.is_some() {
            return Err(format!("unexpected argument '{arg}'"));
        }
        file_path = Some(arg);
    }

    let path = file_path.ok_or_else(|| "missing file path".to_owned())?;
    Ok((path.to_owned(), options))
}

/// Run a Mini source file, printing returned values to stdout.
///
/// Exits with status 1 if the file cannot be read or the run fails.
pub fn run_file(path: &str, options: &RunOptions) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "running file");

    if !execute_program(&content, options, &stdout_handler()) {
        std::process::exit(1);
    }
}
