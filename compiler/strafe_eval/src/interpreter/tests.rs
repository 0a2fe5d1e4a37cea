use pretty_assertions::assert_eq;
use strafe_parse::parse;
use strafe_physics::{Modifiers, PlayerConfig};

use super::*;
use crate::{buffer_handler, silent_handler, EvalErrorKind};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

/// Evaluate the single expression statement `source`.
fn eval(source: &str) -> EvalResult {
    let script = parse(source).unwrap();
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(silent_handler())
        .build();
    let Some(Stmt::Expr(expr)) = script.stmts.first() else {
        panic!("not an expression statement: {source}");
    };
    interpreter.eval_expr(expr)
}

struct Outcome {
    result: Result<(), EvalError>,
    output: String,
    diagnostics: String,
    player: Player,
}

fn run_with(source: &str, builder: InterpreterBuilder) -> Outcome {
    let script = parse(source).unwrap();
    let print = buffer_handler();
    let mut interpreter = builder.print_handler(print.clone()).build();
    let result = interpreter.run(&script);
    Outcome {
        result,
        output: print.get_output(),
        diagnostics: print.get_diagnostics(),
        player: *interpreter.player(),
    }
}

fn run(source: &str) -> Outcome {
    run_with(source, InterpreterBuilder::new())
}

mod expressions {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), Some(Value::Int(14)));
        assert_eq!(eval("(2 + 3) * 4").unwrap(), Some(Value::Int(20)));
        assert_eq!(eval("10 - 4 - 3").unwrap(), Some(Value::Int(3)));
        assert_eq!(eval("1 + 2 < 4 == true").unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn unary_binding() {
        assert_eq!(eval("-2 + 3").unwrap(), Some(Value::Int(1)));
        assert_eq!(eval("- (2 + 3)").unwrap(), Some(Value::Int(-5)));
        assert_eq!(eval("-0.5 * 2").unwrap(), Some(Value::Float(-1.0)));
    }

    #[test]
    fn mixed_arithmetic() {
        assert_eq!(eval("1 + 0.5").unwrap(), Some(Value::Float(1.5)));
        assert_eq!(eval("7 / 2").unwrap(), Some(Value::Int(3)));
    }

    #[test]
    fn division_by_zero() {
        let err = eval("5 / 0").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        assert_eq!(err.span, Some(Span::new(0, 5)));
    }

    #[test]
    fn type_mismatch() {
        let err = eval("true + 1").unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::BinaryTypeMismatch {
                op: BinaryOp::Add,
                left: "bool",
                right: "int",
            }
        );
    }

    #[test]
    fn literals() {
        assert_eq!(eval("\"hi\"").unwrap(), Some(Value::Str("hi".into())));
        assert_eq!(eval("false").unwrap(), Some(Value::Bool(false)));
        assert_eq!(eval("2.25").unwrap(), Some(Value::Float(2.25)));
    }

    #[test]
    fn logical_operators_short_circuit() {
        assert_eq!(eval("false && nope").unwrap(), Some(Value::Bool(false)));
        assert_eq!(eval("true || nope").unwrap(), Some(Value::Bool(true)));
        assert_eq!(eval("true && false").unwrap(), Some(Value::Bool(false)));
    }

    #[test]
    fn logical_operators_need_bools() {
        let err = eval("1 && true").unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::NonBooleanCondition {
                construct: "&&",
                got: "int"
            }
        );
        assert!(eval("true && 1").is_err());
    }

    #[test]
    fn undefined_variable_has_no_value() {
        assert_eq!(eval("nope").unwrap(), None);
        let err = eval("nope + 1").unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::MissingOperand {
                operation: "+".into()
            }
        );
    }

    #[test]
    fn calls_produce_no_value() {
        assert_eq!(eval("outx").unwrap(), None);
        assert_eq!(eval("walk").unwrap(), None);
    }
}

mod statements {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn block_scoping() {
        let script = parse("let x = 1 { let x = 2 let y = 3 x = 20 }").unwrap();
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(silent_handler())
            .build();
        interpreter.run(&script).unwrap();
        assert_eq!(interpreter.variable("x"), Some(&Value::Int(1)));
        assert_eq!(interpreter.variable("y"), None);
    }

    #[test]
    fn assignment_reaches_outer_scope() {
        let script = parse("let x = 1 { x = x + 1 } let n = 0 for 3 { let t = 2 n = n + t }").unwrap();
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(silent_handler())
            .build();
        interpreter.run(&script).unwrap();
        assert_eq!(interpreter.variable("x"), Some(&Value::Int(2)));
        assert_eq!(interpreter.variable("n"), Some(&Value::Int(6)));
        assert_eq!(interpreter.variable("t"), None);
    }

    #[test]
    fn for_truncates_float_counts() {
        let script = parse("let n = 0 for 2.9 { n = n + 1 } for -3 { n = n + 100 }").unwrap();
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(silent_handler())
            .build();
        interpreter.run(&script).unwrap();
        assert_eq!(interpreter.variable("n"), Some(&Value::Int(2)));
    }

    #[test]
    fn for_needs_a_number() {
        let outcome = run("for \"a\" { walk }");
        assert_eq!(
            outcome.result.unwrap_err().kind,
            EvalErrorKind::InvalidLoopCount { got: "str" }
        );
    }

    #[test]
    fn while_reevaluates_condition() {
        let script = parse("let i = 0 while i < 3 { i = i + 1 }").unwrap();
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(silent_handler())
            .build();
        interpreter.run(&script).unwrap();
        assert_eq!(interpreter.variable("i"), Some(&Value::Int(3)));
    }

    #[test]
    fn conditions_must_be_bool() {
        let outcome = run("while 1 { }");
        assert_eq!(
            outcome.result.unwrap_err().kind,
            EvalErrorKind::NonBooleanCondition {
                construct: "while",
                got: "int"
            }
        );
        assert!(run("if \"yes\" { }").result.is_err());
    }

    #[test]
    fn if_else_chain() {
        let outcome = run("let a = 2 if a == 1 { print \"one\" } else if a == 2 { print \"two\" } else { print \"many\" }");
        outcome.result.unwrap();
        assert_eq!(outcome.output, "two\n");
    }

    #[test]
    fn let_without_value_warns() {
        let outcome = run("let v = walk 0");
        outcome.result.unwrap();
        assert!(outcome.diagnostics.contains("`let v`"), "{}", outcome.diagnostics);
    }

    #[test]
    fn assignment_to_undeclared_variable_warns() {
        let outcome = run("ghost = 3");
        outcome.result.unwrap();
        assert!(outcome
            .diagnostics
            .contains("assignment to undeclared variable `ghost`"));
    }
}

mod functions {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parameters_are_bound_per_call() {
        let outcome = run("fn hop(n) { sprintjump n } hop 3");
        outcome.result.unwrap();
        assert_close(outcome.player.velocity.y, 0.211_338_755_688_695_1);
        assert_close(outcome.player.position.y, 0.531_640_359_635_567);
    }

    #[test]
    fn parameters_do_not_leak() {
        let script = parse("fn f(a) { print a } f 1").unwrap();
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(silent_handler())
            .build();
        interpreter.run(&script).unwrap();
        assert_eq!(interpreter.variable("a"), None);
    }

    #[test]
    fn wrong_argument_count() {
        let outcome = run("fn two(a b) { print a b } two 1");
        assert_eq!(
            outcome.result.unwrap_err().kind,
            EvalErrorKind::WrongFunctionArgs {
                name: "two".into(),
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn declaration_must_run_before_call() {
        let outcome = run("if false { fn g() { walk } } g");
        assert_eq!(
            outcome.result.unwrap_err().kind,
            EvalErrorKind::UndefinedFunction { name: "g".into() }
        );
    }

    #[test]
    fn runaway_recursion_is_stopped() {
        let outcome = run_with("fn f() { f } f", InterpreterBuilder::new().max_call_depth(50));
        assert_eq!(
            outcome.result.unwrap_err().kind,
            EvalErrorKind::RecursionLimit { depth: 50 }
        );
    }

    #[test]
    fn bounded_recursion() {
        let script = parse("let n = 0 fn down(k) { if k > 0 { n = n + 1 down k - 1 } } down 10").unwrap();
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(silent_handler())
            .build();
        interpreter.run(&script).unwrap();
        assert_eq!(interpreter.variable("n"), Some(&Value::Int(10)));
    }
}

mod movement {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_walk_tick_report() {
        let outcome = run("walk");
        outcome.result.unwrap();
        assert_eq!(outcome.output, "Velocity: (0, 0.09799999)\nPosition: (0, 0)\n");
    }

    #[test]
    fn walk_five_then_outx() {
        let outcome = run("walk 5 outx outz");
        outcome.result.unwrap();
        assert_eq!(
            outcome.output,
            "Velocity: (0, 0.2053845)\nPosition: (0, 0.6269063)\nX: 0\nZ: 0.6269063\n"
        );
        assert_close(outcome.player.position.y, 0.626_906_275_794_978_4);
    }

    #[test]
    fn sprint_jump_then_air() {
        let outcome = run("sprintjump sprintair");
        outcome.result.unwrap();
        assert_close(outcome.player.velocity.y, 0.204_240_390_534_614_87);
        assert_eq!(outcome.output.lines().count(), 4);
    }

    #[test]
    fn water_ignores_sprint_and_speed() {
        let water = run("water speed 3 sprint");
        let still = run("water walk");
        assert_eq!(water.player.velocity, still.player.velocity);
        assert_close(water.player.velocity.y, 0.019_600_000_232_458_115);
    }

    #[test]
    fn potion_levels() {
        assert_close(
            run("speed 2 walk").player.velocity.y,
            0.137_199_968_099_594_12,
        );
        assert_close(
            run("slowness 2 walk").player.velocity.y,
            0.068_599_984_049_797_06,
        );
    }

    #[test]
    fn sneak_and_45() {
        assert_close(run("sneak").player.velocity.y, 0.029_399_998_486_042_023);
        assert_close(run("walk45").player.velocity.y, 0.099_999_979_138_374_33);
    }

    #[test]
    fn composites() {
        let pessi = run("walkpessi 5 2");
        assert_close(pessi.player.velocity.y, 0.053_666_760_636_493_57);
        assert_close(pessi.player.position.y, 0.057_036_000_676_453_12);

        let fmm = run("forcemomentum 4 1");
        assert_close(fmm.player.velocity.y, 0.109_207_532_802_845_86);
        assert_close(fmm.player.position.y, 0.263_116_264_350_921_7);
    }

    #[test]
    fn negative_force_momentum_delay_warns() {
        let outcome = run("forcemomentum 3 (-1)");
        outcome.result.unwrap();
        assert!(outcome.diagnostics.contains("delay -1 is negative"));
        assert_eq!(outcome.player.position.y, 0.0);
        assert_eq!(
            outcome.output,
            "Velocity: (0, 0)\nPosition: (0, 0)\n"
        );
    }

    #[test]
    fn rotation_argument_overrides_facing() {
        let outcome = run("walk 1 90");
        assert_close(outcome.player.velocity.x, -0.097_999_989_986_419_68);
        let faced = run("facing 90 walk");
        assert_eq!(faced.player.velocity, outcome.player.velocity);
    }

    #[test]
    fn input_masks() {
        let back = run("walk.s");
        assert_close(back.player.velocity.y, -0.097_999_989_986_419_68);

        let outcome = run("walk.wx");
        assert!(outcome.diagnostics.contains("unknown input `x`"));
        assert_close(outcome.player.velocity.y, 0.097_999_989_986_419_68);

        let stop = run("stop.w");
        assert_eq!(stop.player.velocity.y, 0.0);
    }

    #[test]
    fn bad_duration_defaults_to_one_tick() {
        let outcome = run("walk \"far\"");
        outcome.result.unwrap();
        assert!(outcome.diagnostics.contains("`walk` expected a number, got str"));
        assert_close(outcome.player.velocity.y, 0.097_999_989_986_419_68);
    }

    #[test]
    fn config_from_builder() {
        let config = PlayerConfig {
            speed: 2,
            ..PlayerConfig::default()
        };
        let outcome = run_with("walk", InterpreterBuilder::new().player_config(config));
        assert_close(outcome.player.velocity.y, 0.137_199_968_099_594_12);
    }
}

mod builtins {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn out_with_target_shows_signed_offset() {
        let outcome = run("walk 5 outz 1 outz 0.5");
        outcome.result.unwrap();
        let lines: Vec<_> = outcome.output.lines().skip(2).collect();
        assert_eq!(lines, ["Z: 1 - 0.3730937", "Z: 0.5 + 0.1269063"]);
    }

    #[test]
    fn setters_and_velocity_output() {
        let outcome = run("setz 2 setvx 0.5 outz outvx outvz");
        outcome.result.unwrap();
        assert_eq!(outcome.output, "Z: 2\nVx: 0.5\nVz: 0\n");
    }

    #[test]
    fn reset_keeps_momentum() {
        let outcome = run("walk 5 | outz");
        assert!(outcome.output.ends_with("Z: 0\n"));
        assert_close(outcome.player.velocity.y, 0.205_384_514_322_593_7);
    }

    #[test]
    fn print_concatenates() {
        let outcome = run("print \"v=\" 1 + 2 \" \" 2.5 true");
        assert_eq!(outcome.output, "v=3 2.5true\n");
    }

    #[test]
    fn print_skips_unknown_arguments() {
        let outcome = run("print \"a\" nope \"b\"");
        assert_eq!(outcome.output, "ab\n");
        assert!(outcome.diagnostics.contains("undefined variable `nope`"));
        assert!(outcome.diagnostics.contains("argument 2 of `print` not recognized"));
    }

    #[test]
    fn precision_changes_output() {
        let outcome = run("precision 3 walk");
        assert_eq!(outcome.output, "Velocity: (0, 0.098)\nPosition: (0, 0)\n");
        assert!(run("precision 0").diagnostics.contains("precision must be positive"));
    }

    #[test]
    fn modifier_toggles() {
        assert_eq!(run("water").player.modifiers, Modifiers::WATER);
        assert_eq!(run("web block").player.modifiers, Modifiers::WEB | Modifiers::BLOCK);
        assert_eq!(run("ladder ladder false").player.modifiers, Modifiers::empty());
        let bad = run("lava 1");
        assert_eq!(bad.player.modifiers, Modifiers::empty());
        assert!(bad.diagnostics.contains("`lava` expected a bool, got int"));
    }

    #[test]
    fn config_switches() {
        let player = run("slip 0.8 speed 1 slowness 2 sneakdelay airsprintdelay false reverse inertia false").player;
        assert_eq!(player.config.ground_slipperiness, 0.8);
        assert_eq!(player.config.speed, 1);
        assert_eq!(player.config.slow, 2);
        assert!(player.config.sneak_delay);
        assert!(!player.config.air_sprint_delay);
        assert!(player.config.reverse);
        assert_eq!(player.config.inertia_axis, 0);
    }

    #[test]
    fn facing_defaults_to_zero() {
        assert_eq!(run("facing 45 facing").player.rotation, 0.0);
        assert_eq!(run("facing 30.5").player.rotation, 30.5);
    }

    #[test]
    fn tap_reports_displacement() {
        let outcome = run("tap { walk 5 }");
        outcome.result.unwrap();
        assert_eq!(
            outcome.diagnostics,
            "tap: moved (0, 0.6269063), velocity changed by (0, 0.2053845)\n"
        );
    }
}

#[test]
fn demo_script_runs() {
    let outcome = run("facing 30.3 stopjump walkair.s 0 sneak.s 4 stop stopjump outvz sprintair outz outvz sprintair 10 sprint 1 outz 1 outx -0.4 | sprintjump 9 outz -0.6 outx 0.6");
    outcome.result.unwrap();
    assert_eq!(outcome.diagnostics, "");
    assert_eq!(outcome.output.lines().count(), 25);
    assert!(outcome
        .output
        .lines()
        .all(|line| line.starts_with("Velocity: (")
            || line.starts_with("Position: (")
            || line.starts_with("X: ")
            || line.starts_with("Z: ")
            || line.starts_with("Vz: ")));
}
