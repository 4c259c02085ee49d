use super::ast::{Node, NodeType, UnaryOp};
use super::codegen::{compile, CodeGen, CompileError};

// ==============================================
// Tree printing
// ==============================================

#[test]
fn test_print_of_leaf_nodes() {
    assert_eq!(Node::number(1.0).to_pretty_string(), "(Number 1)\n");
    assert_eq!(Node::string("hi").to_pretty_string(), "(String \"hi\")\n");
    assert_eq!(Node::boolean(true).to_pretty_string(), "(Boolean true)\n");
    assert_eq!(Node::identifier("x").to_pretty_string(), "(Identifier x)\n");
    assert_eq!(Node::this().to_pretty_string(), "(This)\n");
    assert_eq!(Node::null().to_pretty_string(), "(Null)\n");
}

#[test]
fn test_print_of_a_with_node() {
    let node = Node::with(Node::identifier("x"), Node::identifier("y"));
    assert_eq!(
        node.to_pretty_string(),
        "(With\n  (Identifier x)\n  (Identifier y)\n)\n"
    );
}

#[test]
fn test_print_indents_two_spaces_per_level() {
    let node = Node::with(
        Node::identifier("a"),
        Node::with(Node::identifier("b"), Node::block(vec![])),
    );
    assert_eq!(
        node.to_pretty_string(),
        "(With\n  (Identifier a)\n  (With\n    (Identifier b)\n    (Block\n    )\n  )\n)\n"
    );
}

#[test]
fn test_node_type_discriminators() {
    assert_eq!(Node::break_stmt().node_type(), NodeType::Break);
    assert_eq!(Node::undefined().node_type(), NodeType::Undefined);
    assert_eq!(
        Node::with(Node::identifier("o"), Node::block(vec![])).node_type(),
        NodeType::With
    );
}

// ==============================================
// CodeGen notifications
// ==============================================

#[test]
fn test_with_notifications_balance() {
    let mut codegen = CodeGen::new();
    codegen.enter_with();
    codegen.enter_with();
    assert_eq!(codegen.with_depth(), 2);
    assert!(codegen.exit_with().is_ok());
    assert!(codegen.exit_with().is_ok());
    assert_eq!(codegen.with_depth(), 0);
}

#[test]
fn test_with_exit_without_entry_is_rejected() {
    let mut codegen = CodeGen::new();
    assert_eq!(codegen.exit_with(), Err(CompileError::UnbalancedWith));
}

#[test]
fn test_walking_a_with_node_balances_the_depth() {
    let mut codegen = CodeGen::new();
    let node = Node::with(Node::identifier("o"), Node::block(vec![]));
    assert!(node.walk(&mut codegen).is_ok());
    assert_eq!(codegen.with_depth(), 0);
}

#[test]
fn test_walking_a_with_inside_a_function_body_balances_the_depth() {
    let program = [Node::function(
        Some("f"),
        vec![],
        vec![Node::with(Node::identifier("o"), Node::block(vec![]))],
    )];
    assert!(compile(&program).is_ok());
}

// ==============================================
// Structural rejections
// ==============================================

#[test]
fn test_break_outside_a_loop_is_rejected() {
    assert_eq!(
        compile(&[Node::break_stmt()]).err(),
        Some(CompileError::BreakOutsideLoop)
    );
}

#[test]
fn test_continue_outside_a_loop_is_rejected() {
    assert_eq!(
        compile(&[Node::continue_stmt()]).err(),
        Some(CompileError::ContinueOutsideLoop)
    );
}

#[test]
fn test_break_inside_a_nested_function_does_not_see_the_outer_loop() {
    // while (true) { (function () { break; }) }
    let program = [Node::while_stmt(
        Node::boolean(true),
        Node::block(vec![Node::function(None, vec![], vec![Node::break_stmt()])]),
    )];
    assert_eq!(
        compile(&program).err(),
        Some(CompileError::BreakOutsideLoop)
    );
}

#[test]
fn test_return_outside_a_function_is_rejected() {
    assert_eq!(
        compile(&[Node::return_stmt(None)]).err(),
        Some(CompileError::ReturnOutsideFunction)
    );
}

#[test]
fn test_return_inside_a_function_compiles() {
    let program = [Node::function(
        None,
        vec![],
        vec![Node::return_stmt(Some(Node::number(1.0)))],
    )];
    assert!(compile(&program).is_ok());
}

#[test]
fn test_break_inside_a_loop_compiles() {
    let program = [Node::while_stmt(
        Node::boolean(true),
        Node::block(vec![Node::break_stmt()]),
    )];
    assert!(compile(&program).is_ok());
}

#[test]
fn test_assignment_to_a_literal_is_rejected() {
    assert_eq!(
        compile(&[Node::assign(Node::number(1.0), Node::number(2.0))]).err(),
        Some(CompileError::InvalidAssignmentTarget("Number".to_string()))
    );
}

#[test]
fn test_statement_where_an_expression_is_expected_is_rejected() {
    assert_eq!(
        compile(&[Node::unary(UnaryOp::Not, Node::block(vec![]))]).err(),
        Some(CompileError::ExpectedExpression("Block".to_string()))
    );
}
