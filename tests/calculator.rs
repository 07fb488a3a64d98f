use deskcalc::{
    config::Config,
    error::Halt,
    interpreter::{evaluator::core::Evaluator, repl::Termination, terminal::Terminal},
    run_session,
};

type TestEvaluator = Evaluator<Terminal<&'static [u8], Vec<u8>>>;

fn evaluator(input: &'static str) -> TestEvaluator {
    Evaluator::with_config(Terminal::new(input.as_bytes(), Vec::new()), Config::default().quiet())
}

/// Evaluates every expression in `input` and collects the outcomes.
fn values(input: &'static str) -> Vec<Option<f64>> {
    let mut evaluator = evaluator(input);
    let mut values = Vec::new();
    loop {
        match evaluator.evaluate() {
            Ok(value) => values.push(value),
            Err(Halt::EndOfInput) => return values,
            Err(e) => panic!("Unexpected halt: {e}"),
        }
    }
}

fn value_of(input: &'static str) -> f64 {
    match values(input).as_slice() {
        [Some(value)] => *value,
        other => panic!("Expected a single value for {input:?}, got {other:?}"),
    }
}

/// Runs a full prompt-less session and returns its transcript.
fn session(input: &str) -> (String, Termination) {
    let mut output = Vec::new();
    let end = run_session(input.as_bytes(), &mut output, Config::default().quiet())
        .unwrap_or_else(|e| panic!("Session failed: {e}"));
    (String::from_utf8(output).expect("transcript is UTF-8"), end)
}

#[test]
fn basic_arithmetic() {
    assert_eq!(value_of("3 4 + @"), 7.0);
    assert_eq!(value_of("6 7 * @"), 42.0);
    assert_eq!(value_of("1.5 2.25 + @"), 3.75);
    assert_eq!(value_of("5 ~ @"), -5.0);
    assert_eq!(value_of("42 @"), 42.0);
}

#[test]
fn non_commutative_operators_use_first_popped_as_left_operand() {
    // `a b -` pops b, then a, and computes b - a.
    assert_eq!(value_of("2 3 - @"), 1.0);
    assert_eq!(value_of("3 2 - @"), -1.0);
    assert_eq!(value_of("10 2 / @"), 0.2);
    assert_eq!(value_of("2 10 / @"), 5.0);
}

#[test]
fn longer_postfix_expressions() {
    // (4 + 3) * 2, then 1 - 14
    assert_eq!(value_of("2 3 4 + * 1 - @"), -13.0);
    assert_eq!(value_of("1 2 3 4 + + + ~ @"), -10.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(value_of("0 5 / @"), f64::INFINITY);
    assert_eq!(value_of("0 5 ~ / @"), f64::NEG_INFINITY);
    assert_eq!(value_of("5 0 / @"), 0.0);
    assert!(value_of("0 0 / @").is_nan());
}

#[test]
fn results_go_to_it_by_default() {
    let mut evaluator = evaluator("2 3 + @\nit 1 + @\n");
    assert_eq!(evaluator.target(), "it");
    assert_eq!(evaluator.evaluate().unwrap(), Some(5.0));
    assert_eq!(evaluator.variable("it"), 5.0);
    assert_eq!(evaluator.evaluate().unwrap(), Some(6.0));
    assert_eq!(evaluator.variable("it"), 6.0);
}

#[test]
fn assignment_round_trip() {
    assert_eq!(values("x = 5 @\nx @\n"), vec![Some(5.0), Some(5.0)]);

    let mut evaluator = evaluator("x = 5 @\n");
    evaluator.evaluate().unwrap();
    assert_eq!(evaluator.target(), "x");
    assert_eq!(evaluator.variable("x"), 5.0);
}

#[test]
fn assignment_target_persists_across_lines() {
    let mut evaluator = evaluator("total = 1 @\n2 3 * @\n");
    evaluator.evaluate().unwrap();
    assert_eq!(evaluator.evaluate().unwrap(), Some(6.0));
    assert_eq!(evaluator.variable("total"), 6.0);
    assert_eq!(evaluator.variable("it"), 0.0);
}

#[test]
fn assignment_can_use_previous_value() {
    assert_eq!(values("n = 4 @\nn = n n * @\n"), vec![Some(4.0), Some(16.0)]);
}

#[test]
fn unknown_variables_read_as_zero() {
    assert_eq!(value_of("y @"), 0.0);
    assert_eq!(value_of("y 3 + @"), 3.0);
}

#[test]
fn variables_are_case_sensitive() {
    let mut evaluator = evaluator("Rate = 2 @\n");
    evaluator.evaluate().unwrap();
    assert_eq!(evaluator.variable("Rate"), 2.0);
    assert_eq!(evaluator.variable("rate"), 0.0);

    // A bare read stores into the target, so `rate @` overwrites `Rate`.
    assert_eq!(values("Rate = 2 @\nrate @\nRate @\n"), vec![Some(2.0), Some(0.0), Some(0.0)]);
}

#[test]
fn leading_variable_forms() {
    assert_eq!(values("a = 3 @\na ~ @\n"), vec![Some(3.0), Some(-3.0)]);
    assert_eq!(values("a = 3 @\na 4 * @\n"), vec![Some(3.0), Some(12.0)]);
    assert_eq!(values("a = 3 @\nb = 4 @\na b - @\n"), vec![Some(3.0), Some(4.0), Some(1.0)]);
}

#[test]
fn invalid_expression_after_leading_variable() {
    assert_eq!(values("x + @\n1 @\n"), vec![None, Some(1.0)]);
    assert_eq!(values("x - 1 @\n"), vec![None]);
    let (transcript, _) = session("x + @\n");
    assert!(transcript.starts_with("Invalid expression"));
}

#[test]
fn bad_token_aborts_only_its_line() {
    assert_eq!(values("5 # @\n2 2 + @\n"), vec![None, Some(4.0)]);

    let (transcript, _) = session("5 # @\n2 2 + @\n");
    assert_eq!(transcript, "Bad token: '#'\n5 # @\n  ^\nno value\n4\n\nBye\n");
}

#[test]
fn stack_underflow_is_recoverable() {
    assert_eq!(values("+@\n1 2 + @\n"), vec![None, Some(3.0)]);
    assert_eq!(values("~ @\n"), vec![None]);

    let (transcript, _) = session("+@\n");
    assert_eq!(transcript, "Not enough operands\n+@\n^\nno value\n\nBye\n");
}

#[test]
fn underflow_discards_the_rest_of_the_line() {
    assert_eq!(values("1 + 2 @ 3 @\n7 @\n"), vec![None, Some(7.0)]);
}

#[test]
fn leftover_operands_are_rejected() {
    assert_eq!(values("1 2 @\n"), vec![None]);

    let (transcript, _) = session("1 2 @\n");
    assert!(transcript.starts_with("Too many operands: 2 values left on the stack\n1 2 @\n    ^\n"));
}

#[test]
fn failed_lines_leave_variables_untouched() {
    let mut evaluator = evaluator("it = 9 @\n1 # @\n");
    evaluator.evaluate().unwrap();
    assert_eq!(evaluator.evaluate().unwrap(), None);
    assert_eq!(evaluator.variable("it"), 9.0);
}

#[test]
fn expressions_may_span_physical_lines() {
    assert_eq!(values("3\n4\n+\n@\n"), vec![Some(7.0)]);
}

#[test]
fn several_expressions_on_one_line() {
    assert_eq!(values("1 1 + @ 2 2 * @\n"), vec![Some(2.0), Some(4.0)]);
}

#[test]
fn exit_in_any_case_ends_the_session() {
    for command in ["exit", "EXIT", "Exit", "eXiT"] {
        let mut evaluator = evaluator(Box::leak(format!("{command}\n1 @\n").into_boxed_str()));
        assert!(matches!(evaluator.evaluate(), Err(Halt::Exit)), "{command}");
    }

    let (transcript, end) = session("1 2 + @\nexit\n4 @\n");
    assert_eq!(end, Termination::Exit);
    assert_eq!(transcript, "3\n\nBye\n");
}

#[test]
fn exit_only_counts_as_a_whole_word() {
    assert_eq!(values("exits @\n"), vec![Some(0.0)]);
}

#[test]
fn end_of_input_ends_the_session() {
    let (transcript, end) = session("2 2 * @\n");
    assert_eq!(end, Termination::EndOfInput);
    assert_eq!(transcript, "4\n\nBye\n");

    let (transcript, end) = session("1 2 +\n");
    assert_eq!(end, Termination::EndOfInput);
    assert_eq!(transcript, "\nBye\n");
}

#[test]
fn prompt_precedes_every_line_read() {
    let mut output = Vec::new();
    run_session("1 @\n\n2 @\n".as_bytes(), &mut output, Config::default()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), ">> 1\n>> >> 2\n>> \nBye\n");
}

#[test]
fn results_render_like_a_calculator() {
    let (transcript, _) = session("0 1 / @\n0 1 ~ / @\n0.5 0.25 + @\n");
    assert_eq!(transcript, "Infinity\n-Infinity\n0.75\n\nBye\n");
}

#[test]
fn custom_farewell_and_target() {
    let config = Config { farewell: "Ciao".to_string(),
                          default_target: "ans".to_string(),
                          ..Config::default().quiet() };
    let mut evaluator = Evaluator::with_config(Terminal::new("1 1 + @\n".as_bytes(), Vec::new()), config);
    assert_eq!(evaluator.run().unwrap(), Termination::EndOfInput);
    assert_eq!(evaluator.variable("ans"), 2.0);
    assert_eq!(evaluator.into_console().into_parts().1, b"2\n\nCiao\n");
}

#[test]
fn invalid_utf8_is_a_bad_token_not_the_end_of_the_session() {
    let mut output = Vec::new();
    let end = run_session(&b"1 \xff @\n2 2 + @\n"[..], &mut output, Config::default().quiet()).unwrap();

    assert_eq!(end, Termination::EndOfInput);
    assert_eq!(String::from_utf8(output).unwrap(),
               "Bad token: '\u{FFFD}'\n1 \u{FFFD} @\n  ^\nno value\n4\n\nBye\n");
}

#[test]
fn empty_assignment_keeps_the_current_value() {
    assert_eq!(values("x = 4 @\nx = @\ny = @\n"), vec![Some(4.0), Some(4.0), Some(0.0)]);

    let mut evaluator = evaluator("x = 4 @\nx = @\n");
    evaluator.evaluate().unwrap();
    evaluator.evaluate().unwrap();
    assert_eq!(evaluator.target(), "x");
    assert_eq!(evaluator.variable("x"), 4.0);
}

#[test]
fn extreme_magnitudes_render_in_exponent_form() {
    let (transcript, _) = session("100000000000000000000 @\n0.00000025 @\n1000000 @\n");
    assert_eq!(transcript, "1e20\n2.5e-7\n1000000\n\nBye\n");
}
