// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests over the bundled demo programs.

use mini_eval::{buffer_handler, silent_handler, split_lines, EvalError, Interpreter};
use minic::commands::{run_demos, RunOptions, BANNER, FAILURE_NOTICE};
use minic::demos::{self, Expected, DEMOS};
use pretty_assertions::assert_eq;

#[test]
fn every_demo_matches_its_expectation() {
    for demo in &DEMOS {
        let mut interp = Interpreter::builder().print_handler(silent_handler()).build();
        let result = interp.run(split_lines(demo.source));
        match demo.expected {
            Expected::Returns(value) => {
                let summary = result.expect(demo.name);
                assert_eq!(summary.returned.last(), Some(&value), "demo {}", demo.name);
            }
            Expected::Fails => assert!(result.is_err(), "demo {} should fail", demo.name),
        }
    }
}

#[test]
fn syntax_error_demo_fails_on_last_line() {
    let demo = demos::find("syntax-error").unwrap();
    let mut interp = Interpreter::builder().print_handler(silent_handler()).build();
    let err = interp.run(split_lines(demo.source)).unwrap_err();

    assert_eq!(err.line, 4);
    assert_eq!(err.source, EvalError::MalformedInstruction { token_count: 3 });
}

#[test]
fn demo_command_output_matches_transcript() {
    let handler = buffer_handler();
    let report = run_demos(&[], &RunOptions::for_demo(), &handler).unwrap();

    assert_eq!(report.succeeded, vec!["sum", "reassign", "literal-sum"]);
    assert_eq!(report.failed, vec!["syntax-error"]);

    let expected = [
        BANNER,
        "A = 2",
        "B = 8",
        "C = A + B",
        "C",
        "Return: 10",
        BANNER,
        "A = 2",
        "B = 22",
        "Z = 91",
        "K = A + B",
        "Z = K + A",
        "Z",
        "Return: 26",
        BANNER,
        "A = 2 + 1",
        "B = A + 9",
        "C = A + B",
        "A",
        "Return: 3",
        BANNER,
        "A = 2 + 1",
        "B = A + 9",
        "C = A + B",
        "A + B",
        FAILURE_NOTICE,
    ];
    let output = handler.get_output();
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn demo_command_runs_selected_only() {
    let handler = buffer_handler();
    let options = RunOptions::default();
    let report = run_demos(&["reassign".to_owned()], &options, &handler).unwrap();

    assert_eq!(report.succeeded, vec!["reassign"]);
    assert!(report.failed.is_empty());
    assert_eq!(handler.get_output(), format!("{BANNER}\nReturn: 26\n"));
}

#[test]
fn demo_command_rejects_unknown_name() {
    let handler = buffer_handler();
    let err = run_demos(&["nope".to_owned()], &RunOptions::default(), &handler).unwrap_err();

    assert_eq!(err, "nope");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn demos_do_not_leak_symbols_between_runs() {
    let mut interp = Interpreter::builder().print_handler(silent_handler()).build();
    interp.run(split_lines(DEMOS[1].source)).unwrap();

    let err = interp.run(["K"]).unwrap_err();
    assert_eq!(err.source, EvalError::unresolved_symbol("K"));
}
