//! The `demo` command: run the bundled example programs one after another.

use mini_eval::SharedPrintHandler;

use super::{execute_program, RunOptions};
use crate::demos::{Demo, DEMOS};

/// Printed before each demo program.
pub const BANNER: &str = "|*****New Input*****|";

/// Outcome of a `demo` invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoReport {
    /// Names of the demos whose run succeeded.
    pub succeeded: Vec<&'static str>,
    /// Names of the demos whose run failed.
    pub failed: Vec<&'static str>,
}

/// Run `selected` demos (all of them when empty).
///
/// A failing demo does not stop the others. Unknown names are reported
/// through `Err` before anything runs.
pub fn run_demos(
    selected: &[String],
    options: &RunOptions,
    handler: &SharedPrintHandler,
) -> Result<DemoReport, String> {
    let demos: Vec<&'static Demo> = if selected.is_empty() {
        DEMOS.iter().collect()
    } else {
        selected
            .iter()
            .map(|name| crate::demos::find(name).ok_or_else(|| name.clone()))
            .collect::<Result<_, _>>()?
    };

    let mut report = DemoReport::default();
    for demo in demos {
        handler.println(BANNER);
        tracing::debug!(demo = demo.name, "running demo");
        if execute_program(demo.source, options, handler) {
            report.succeeded.push(demo.name);
        } else {
            report.failed.push(demo.name);
        }
    }
    Ok(report)
}
