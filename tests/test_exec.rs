//! Whole-program execution tests: operators, control flow, functions and
//! error handling, run through compiled trees against a fresh realm.

extern crate ferric;

mod exec_util;

use exec_util::{int, run_ok, run_program, string};
use ferric::compiler::ast::{BinaryOp, Node, UnaryOp};
use ferric::runtime::ds::error::JsError;
use ferric::runtime::ds::value::{JsNumberType, JsValue};

fn binary(op: BinaryOp, left: Node, right: Node) -> Vec<Node> {
    vec![Node::binary(op, left, right)]
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_addition_folds_to_integers_where_exact() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Add, Node::number(2.0), Node::number(3.0))),
        int(5)
    );
}

#[test]
fn test_division_keeps_fractions() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Div, Node::number(7.0), Node::number(2.0))),
        JsValue::Number(JsNumberType::Float(3.5))
    );
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Div, Node::number(1.0), Node::number(0.0))),
        JsValue::Number(JsNumberType::PositiveInfinity)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::Div, Node::number(0.0), Node::number(0.0))),
        JsValue::Number(JsNumberType::NaN)
    );
}

#[test]
fn test_string_concatenation_wins_over_addition() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Add, Node::string("a"), Node::number(1.0))),
        string("a1")
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::Add, Node::number(1.0), Node::string("2"))),
        string("12")
    );
}

#[test]
fn test_subtraction_coerces_numeric_strings() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Sub, Node::string("10"), Node::number(3.0))),
        int(7)
    );
}

#[test]
fn test_arithmetic_with_undefined_is_nan() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Add, Node::undefined(), Node::number(1.0))),
        JsValue::Number(JsNumberType::NaN)
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(
        run_ok(&binary(BinaryOp::Lt, Node::number(1.0), Node::number(2.0))),
        JsValue::Boolean(true)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::Lt, Node::string("b"), Node::string("a"))),
        JsValue::Boolean(false)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::LtEq, Node::number(2.0), Node::number(2.0))),
        JsValue::Boolean(true)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::Gt, Node::number(3.0), Node::number(2.0))),
        JsValue::Boolean(true)
    );
}

#[test]
fn test_every_comparison_against_nan_is_false() {
    let nan = || Node::binary(BinaryOp::Div, Node::number(0.0), Node::number(0.0));
    assert_eq!(
        run_ok(&binary(BinaryOp::Lt, nan(), Node::number(1.0))),
        JsValue::Boolean(false)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::GtEq, nan(), Node::number(1.0))),
        JsValue::Boolean(false)
    );
}

#[test]
fn test_loose_against_strict_equality() {
    assert_eq!(
        run_ok(&binary(BinaryOp::EqEq, Node::number(1.0), Node::string("1"))),
        JsValue::Boolean(true)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::StrictEq, Node::number(1.0), Node::string("1"))),
        JsValue::Boolean(false)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::EqEq, Node::null(), Node::undefined())),
        JsValue::Boolean(true)
    );
    assert_eq!(
        run_ok(&binary(BinaryOp::StrictEq, Node::null(), Node::undefined())),
        JsValue::Boolean(false)
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::Not, Node::number(0.0))]),
        JsValue::Boolean(true)
    );
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::Neg, Node::string("5"))]),
        int(-5)
    );
}

#[test]
fn test_typeof_by_value_kind() {
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::TypeOf, Node::number(1.0))]),
        string("number")
    );
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::TypeOf, Node::null())]),
        string("object")
    );
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::TypeOf, Node::object(vec![]))]),
        string("object")
    );
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::TypeOf, Node::function(None, vec![], vec![]))]),
        string("function")
    );
}

#[test]
fn test_typeof_an_unresolved_name_is_undefined() {
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::TypeOf, Node::identifier("missing"))]),
        string("undefined")
    );
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_if_else_takes_the_right_branch() {
    let result = run_ok(&[Node::if_stmt(
        Node::boolean(false),
        Node::number(1.0),
        Some(Node::number(2.0)),
    )]);
    assert_eq!(result, int(2));
}

#[test]
fn test_while_accumulates() {
    // var i = 0; var sum = 0;
    // while (i < 5) { i = i + 1; sum = sum + i; }
    // sum
    let result = run_ok(&[
        Node::var("i", Some(Node::number(0.0))),
        Node::var("sum", Some(Node::number(0.0))),
        Node::while_stmt(
            Node::binary(BinaryOp::Lt, Node::identifier("i"), Node::number(5.0)),
            Node::block(vec![
                Node::assign(
                    Node::identifier("i"),
                    Node::binary(BinaryOp::Add, Node::identifier("i"), Node::number(1.0)),
                ),
                Node::assign(
                    Node::identifier("sum"),
                    Node::binary(BinaryOp::Add, Node::identifier("sum"), Node::identifier("i")),
                ),
            ]),
        ),
        Node::identifier("sum"),
    ]);
    assert_eq!(result, int(15));
}

#[test]
fn test_break_exits_the_loop() {
    // var i = 0;
    // while (true) { i = i + 1; if (i == 3) { break; } }
    // i
    let result = run_ok(&[
        Node::var("i", Some(Node::number(0.0))),
        Node::while_stmt(
            Node::boolean(true),
            Node::block(vec![
                Node::assign(
                    Node::identifier("i"),
                    Node::binary(BinaryOp::Add, Node::identifier("i"), Node::number(1.0)),
                ),
                Node::if_stmt(
                    Node::binary(BinaryOp::EqEq, Node::identifier("i"), Node::number(3.0)),
                    Node::break_stmt(),
                    None,
                ),
            ]),
        ),
        Node::identifier("i"),
    ]);
    assert_eq!(result, int(3));
}

#[test]
fn test_continue_skips_an_iteration() {
    // var i = 0; var sum = 0;
    // while (i < 5) { i = i + 1; if (i == 2) { continue; } sum = sum + i; }
    // sum
    let result = run_ok(&[
        Node::var("i", Some(Node::number(0.0))),
        Node::var("sum", Some(Node::number(0.0))),
        Node::while_stmt(
            Node::binary(BinaryOp::Lt, Node::identifier("i"), Node::number(5.0)),
            Node::block(vec![
                Node::assign(
                    Node::identifier("i"),
                    Node::binary(BinaryOp::Add, Node::identifier("i"), Node::number(1.0)),
                ),
                Node::if_stmt(
                    Node::binary(BinaryOp::EqEq, Node::identifier("i"), Node::number(2.0)),
                    Node::continue_stmt(),
                    None,
                ),
                Node::assign(
                    Node::identifier("sum"),
                    Node::binary(BinaryOp::Add, Node::identifier("sum"), Node::identifier("i")),
                ),
            ]),
        ),
        Node::identifier("sum"),
    ]);
    assert_eq!(result, int(13));
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_missing_arguments_read_undefined_and_extras_are_dropped() {
    // var f = function (a, b) { return typeof b; }; f(1, 2, 3); f(1)
    let f = Node::var(
        "f",
        Some(Node::function(
            None,
            vec!["a", "b"],
            vec![Node::return_stmt(Some(Node::unary(
                UnaryOp::TypeOf,
                Node::identifier("b"),
            )))],
        )),
    );
    let result = run_ok(&[
        f,
        Node::call(
            Node::identifier("f"),
            vec![Node::number(1.0), Node::number(2.0), Node::number(3.0)],
        ),
        Node::call(Node::identifier("f"), vec![Node::number(1.0)]),
    ]);
    assert_eq!(result, string("undefined"));
}

#[test]
fn test_recursion_through_the_global_binding() {
    // var fact = function (n) { if (n < 2) { return 1; } return n * fact(n - 1); };
    // fact(5)
    let result = run_ok(&[
        Node::var(
            "fact",
            Some(Node::function(
                None,
                vec!["n"],
                vec![
                    Node::if_stmt(
                        Node::binary(BinaryOp::Lt, Node::identifier("n"), Node::number(2.0)),
                        Node::return_stmt(Some(Node::number(1.0))),
                        None,
                    ),
                    Node::return_stmt(Some(Node::binary(
                        BinaryOp::Mul,
                        Node::identifier("n"),
                        Node::call(
                            Node::identifier("fact"),
                            vec![Node::binary(
                                BinaryOp::Sub,
                                Node::identifier("n"),
                                Node::number(1.0),
                            )],
                        ),
                    ))),
                ],
            )),
        ),
        Node::call(Node::identifier("fact"), vec![Node::number(5.0)]),
    ]);
    assert_eq!(result, int(120));
}

#[test]
fn test_closures_persist_state_across_calls() {
    // var make = function () {
    //     var n = 0;
    //     return function () { n = n + 1; return n; };
    // };
    // var c = make(); c(); c(); c()
    let result = run_ok(&[
        Node::var(
            "make",
            Some(Node::function(
                None,
                vec![],
                vec![
                    Node::var("n", Some(Node::number(0.0))),
                    Node::return_stmt(Some(Node::function(
                        None,
                        vec![],
                        vec![
                            Node::assign(
                                Node::identifier("n"),
                                Node::binary(
                                    BinaryOp::Add,
                                    Node::identifier("n"),
                                    Node::number(1.0),
                                ),
                            ),
                            Node::return_stmt(Some(Node::identifier("n"))),
                        ],
                    ))),
                ],
            )),
        ),
        Node::var("c", Some(Node::call(Node::identifier("make"), vec![]))),
        Node::call(Node::identifier("c"), vec![]),
        Node::call(Node::identifier("c"), vec![]),
        Node::call(Node::identifier("c"), vec![]),
    ]);
    assert_eq!(result, int(3));
}

#[test]
fn test_function_expressions_are_callable_inline() {
    // (function () { return 9; })()
    let result = run_ok(&[Node::call(
        Node::function(None, vec![], vec![Node::return_stmt(Some(Node::number(9.0)))]),
        vec![],
    )]);
    assert_eq!(result, int(9));
}

#[test]
fn test_a_function_without_a_return_yields_undefined() {
    let result = run_ok(&[Node::call(
        Node::function(None, vec![], vec![Node::number(5.0)]),
        vec![],
    )]);
    assert_eq!(result, JsValue::Undefined);
}

#[test]
fn test_calling_a_non_function_value_is_a_type_error() {
    let result = run_program(&[
        Node::var("x", Some(Node::number(5.0))),
        Node::call(Node::identifier("x"), vec![]),
    ]);
    match result {
        Err(JsError::TypeError(m)) => assert_eq!(m, "5 is not a function"),
        other => panic!("expected a type error, got {:?}", other),
    }
}

#[test]
fn test_calling_a_missing_method_is_a_type_error() {
    let result = run_program(&[
        Node::var("o", Some(Node::object(vec![]))),
        Node::call(Node::member(Node::identifier("o"), "m"), vec![]),
    ]);
    assert!(matches!(result, Err(JsError::TypeError(_))));
}

// ============================================================================
// Errors and try/catch/finally
// ============================================================================

#[test]
fn test_unresolved_identifier_raises_a_reference_error() {
    let result = run_program(&[Node::identifier("nope")]);
    match result {
        Err(JsError::ReferenceError(m)) => assert_eq!(m, "'nope' is not defined"),
        other => panic!("expected a reference error, got {:?}", other),
    }
}

#[test]
fn test_throw_and_catch_a_value() {
    // try { throw "boom"; } catch (e) { e }
    let result = run_ok(&[Node::try_stmt(
        Node::throw(Node::string("boom")),
        Some(("e", Node::identifier("e"))),
        None,
    )]);
    assert_eq!(result, string("boom"));
}

#[test]
fn test_catch_binds_engine_error_messages() {
    // try { nope(); } catch (e) { e }
    let result = run_ok(&[Node::try_stmt(
        Node::call(Node::identifier("nope"), vec![]),
        Some(("e", Node::identifier("e"))),
        None,
    )]);
    assert_eq!(result, string("ReferenceError: 'nope' is not defined"));
}

#[test]
fn test_catch_scope_does_not_leak() {
    // try { throw "v"; } catch (e) { } typeof e
    let result = run_ok(&[
        Node::try_stmt(
            Node::throw(Node::string("v")),
            Some(("e", Node::block(vec![]))),
            None,
        ),
        Node::unary(UnaryOp::TypeOf, Node::identifier("e")),
    ]);
    assert_eq!(result, string("undefined"));
}

#[test]
fn test_finally_runs_on_the_normal_path() {
    // var log = ""; try { log = log + "t"; } finally { log = log + "f"; } log
    let result = run_ok(&[
        Node::var("log", Some(Node::string(""))),
        Node::try_stmt(
            Node::assign(
                Node::identifier("log"),
                Node::binary(BinaryOp::Add, Node::identifier("log"), Node::string("t")),
            ),
            None,
            Some(Node::assign(
                Node::identifier("log"),
                Node::binary(BinaryOp::Add, Node::identifier("log"), Node::string("f")),
            )),
        ),
        Node::identifier("log"),
    ]);
    assert_eq!(result, string("tf"));
}

#[test]
fn test_finally_runs_while_an_error_unwinds() {
    // var log = "";
    // try { try { throw "x"; } finally { log = log + "f"; } }
    // catch (e) { log = log + "c"; }
    // log
    let result = run_ok(&[
        Node::var("log", Some(Node::string(""))),
        Node::try_stmt(
            Node::try_stmt(
                Node::throw(Node::string("x")),
                None,
                Some(Node::assign(
                    Node::identifier("log"),
                    Node::binary(BinaryOp::Add, Node::identifier("log"), Node::string("f")),
                )),
            ),
            Some((
                "e",
                Node::assign(
                    Node::identifier("log"),
                    Node::binary(BinaryOp::Add, Node::identifier("log"), Node::string("c")),
                ),
            )),
            None,
        ),
        Node::identifier("log"),
    ]);
    assert_eq!(result, string("fc"));
}

#[test]
fn test_an_abrupt_finally_supersedes_the_block() {
    // var f = function () { try { return "block"; } finally { return "finally"; } };
    // f()
    let result = run_ok(&[
        Node::var(
            "f",
            Some(Node::function(
                None,
                vec![],
                vec![Node::try_stmt(
                    Node::return_stmt(Some(Node::string("block"))),
                    None,
                    Some(Node::return_stmt(Some(Node::string("finally")))),
                )],
            )),
        ),
        Node::call(Node::identifier("f"), vec![]),
    ]);
    assert_eq!(result, string("finally"));
}

#[test]
fn test_a_throwing_finally_supersedes_the_original_error() {
    // try { try { throw "a"; } finally { throw "b"; } } catch (e) { e }
    let result = run_ok(&[Node::try_stmt(
        Node::try_stmt(
            Node::throw(Node::string("a")),
            None,
            Some(Node::throw(Node::string("b"))),
        ),
        Some(("e", Node::identifier("e"))),
        None,
    )]);
    assert_eq!(result, string("b"));
}

#[test]
fn test_catch_can_rethrow() {
    // try { try { throw "x"; } catch (e) { throw "y"; } } catch (e2) { e2 }
    let result = run_ok(&[Node::try_stmt(
        Node::try_stmt(
            Node::throw(Node::string("x")),
            Some(("e", Node::throw(Node::string("y")))),
            None,
        ),
        Some(("e2", Node::identifier("e2"))),
        None,
    )]);
    assert_eq!(result, string("y"));
}

// ============================================================================
// Objects, globals and program results
// ============================================================================

#[test]
fn test_nested_member_and_index_access() {
    // var o = { a: { b: 7 } }; o.a.b
    let result = run_ok(&[
        Node::var(
            "o",
            Some(Node::object(vec![(
                "a",
                Node::object(vec![("b", Node::number(7.0))]),
            )])),
        ),
        Node::member(Node::member(Node::identifier("o"), "a"), "b"),
    ]);
    assert_eq!(result, int(7));
}

#[test]
fn test_index_keys_canonicalize_to_strings() {
    // var o = {}; o[1] = "x"; o["1"]
    let result = run_ok(&[
        Node::var("o", Some(Node::object(vec![]))),
        Node::assign(
            Node::index(Node::identifier("o"), Node::number(1.0)),
            Node::string("x"),
        ),
        Node::index(Node::identifier("o"), Node::string("1")),
    ]);
    assert_eq!(result, string("x"));
}

#[test]
fn test_this_at_the_top_level_is_the_global_object() {
    // this.marker = 12; marker
    let result = run_ok(&[
        Node::assign(Node::member(Node::this(), "marker"), Node::number(12.0)),
        Node::identifier("marker"),
    ]);
    assert_eq!(result, int(12));
}

#[test]
fn test_default_global_bindings() {
    assert_eq!(
        run_ok(&[Node::identifier("NaN")]),
        JsValue::Number(JsNumberType::NaN)
    );
    assert_eq!(
        run_ok(&[Node::identifier("Infinity")]),
        JsValue::Number(JsNumberType::PositiveInfinity)
    );
    assert_eq!(run_ok(&[Node::identifier("undefined")]), JsValue::Undefined);
    assert_eq!(
        run_ok(&[Node::unary(UnaryOp::TypeOf, Node::identifier("globalThis"))]),
        string("object")
    );
}

#[test]
fn test_array_literals_carry_length() {
    let result = run_ok(&[Node::member(
        Node::array(vec![Node::number(1.0), Node::number(2.0)]),
        "length",
    )]);
    assert_eq!(result, int(2));
}

#[test]
fn test_programs_yield_the_last_value() {
    assert_eq!(
        run_ok(&[Node::number(1.0), Node::string("two")]),
        string("two")
    );
    assert_eq!(
        run_ok(&[Node::var("x", Some(Node::number(1.0)))]),
        JsValue::Undefined
    );
}

#[test]
fn test_declared_but_unassigned_vars_read_undefined() {
    let result = run_ok(&[Node::var("later", None), Node::identifier("later")]);
    assert_eq!(result, JsValue::Undefined);
}
