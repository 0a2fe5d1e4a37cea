use pretty_assertions::assert_eq;
use strafe_eval::{buffer_handler, EvalErrorKind};

use super::*;

fn run(source: &str, options: &RunOptions) -> (Result<(), RunError>, String, String) {
    let print = buffer_handler();
    let result = run_source(source, options, print.clone());
    (result, print.get_output(), print.get_diagnostics())
}

#[test]
fn demo_script_runs_clean() {
    let (result, output, diagnostics) = run(DEMO_SCRIPT, &RunOptions::default());
    result.unwrap();
    assert_eq!(diagnostics, "");
    assert_eq!(output.lines().count(), 25);
    let last = output.lines().last().unwrap();
    assert!(last.starts_with("X: 0.6 "), "{last}");
}

#[test]
fn precision_option_reaches_output() {
    let options = RunOptions {
        precision: 3,
        ..RunOptions::default()
    };
    let (result, output, _) = run("walk", &options);
    result.unwrap();
    assert_eq!(output, "Velocity: (0, 0.098)\nPosition: (0, 0)\n");
}

#[test]
fn player_options_reach_the_simulation() {
    let mut options = RunOptions::default();
    options.player.reverse = true;
    let (result, output, _) = run("walk outvz", &options);
    result.unwrap();
    assert!(output.ends_with("Vz: -0.09799999\n"), "{output}");
}

#[test]
fn parse_errors_stop_before_running() {
    let (result, output, _) = run("walk { sprint", &RunOptions::default());
    assert!(matches!(result, Err(RunError::Parse(_))));
    assert_eq!(output, "");
}

#[test]
fn eval_errors_keep_earlier_output() {
    let (result, output, _) = run("walk let x = 5 / 0", &RunOptions::default());
    let err = result.unwrap_err();
    let RunError::Eval(eval) = &err else {
        panic!("expected an eval error, got {err:?}");
    };
    assert_eq!(eval.kind, EvalErrorKind::DivisionByZero);
    assert!(err.to_string().starts_with("runtime error: division by zero"));
    assert_eq!(output.lines().count(), 2);
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
