// tests/operation_tests.rs

use aql_build::{
    AqlError, Expression, Keyword, Literal, Node, Operation, PartialStatement, RawExpression,
    Reference, Statement, Token,
};

// ============================================================================
// Ternary operations
// ============================================================================

#[test]
fn test_ternary_renders_infix() {
    let op = Operation::ternary("?", ":", "x", "y", "z").unwrap();
    assert_eq!(op.to_aql(), "x ? y : z");
}

#[test]
fn test_ternary_is_an_operation_node() {
    let op = Operation::ternary("?", ":", "x", "y", "z").unwrap();
    let node = Node::from(op);
    assert_eq!(node.category(), aql_build::Category::Operation);
}

#[test]
fn test_accepts_any_non_empty_string_operator() {
    let operators = ["-", "~", "+", "not", "nöis3", "$$ $$%§-äß", "bad:bad:bad"];
    for op in operators {
        let expr = Operation::ternary(op, op, "x", "y", "z").unwrap();
        assert_eq!(expr.to_aql(), format!("x {op} y {op} z"));
    }
}

#[test]
fn test_rejects_non_string_operators() {
    let values: Vec<Token> = vec![
        Token::from(""),
        Literal::Str("for".to_string()).into(),
        RawExpression::new("for").into(),
        Reference::simple("for").unwrap().into(),
        Keyword::new("for").unwrap().into(),
        Literal::Null.into(),
        Token::from(42),
        Token::from(true),
        Token::Null,
        Token::Object(vec![]),
        Token::List(vec![]),
    ];
    for value in values {
        let result = Operation::ternary(value.clone(), value, "x", "y", "z");
        assert!(matches!(result, Err(AqlError::InvalidOperator(_))));
    }
}

#[test]
fn test_operator_validation_runs_before_operand_casting() {
    // Both the operator and an operand are invalid; the operator error wins
    let result = Operation::ternary(42, ":", "not valid!", "y", "z");
    assert_eq!(result.unwrap_err(), AqlError::InvalidOperator("integer".to_string()));
}

#[test]
fn test_second_operator_is_validated_too() {
    let result = Operation::ternary("?", true, "x", "y", "z");
    assert_eq!(result.unwrap_err(), AqlError::InvalidOperator("boolean".to_string()));
}

#[test]
fn test_ternary_auto_casts_each_position() {
    let op = Operation::ternary("?", ":", 42, 42, 42).unwrap();
    for operand in op.operands() {
        assert_eq!(operand, &Node::Literal(Literal::Integer(42)));
    }

    let op = Operation::ternary("?", ":", "id", "id", "id").unwrap();
    for operand in op.operands() {
        assert!(matches!(operand, Node::Reference(Reference::Identifier(_))));
    }
}

#[test]
fn test_ternary_allows_mixed_operand_shapes() {
    let op = Operation::ternary("?", ":", "flag", 1, "\"fallback\"").unwrap();
    assert_eq!(op.to_aql(), "flag ? 1 : \"fallback\"");
}

#[test]
fn test_ternary_exposes_operators_and_operands() {
    let op = Operation::ternary("?", ":", "x", "y", "z").unwrap();
    assert_eq!(op.operators(), vec!["?", ":"]);
    assert_eq!(op.operands().len(), 3);
}

// ============================================================================
// Parenthesization by category
// ============================================================================

#[test]
fn test_wraps_operation_operands_in_parentheses() {
    let inner = Operation::binary("+", 1, 2).unwrap();
    let op = Operation::ternary("?", ":", inner.clone(), inner.clone(), inner).unwrap();
    assert_eq!(op.to_aql(), "(1 + 2) ? (1 + 2) : (1 + 2)");
}

#[test]
fn test_wraps_statement_operands_in_parentheses() {
    let st = Statement::return_("x").unwrap();
    let op = Operation::ternary("?", ":", st.clone(), st.clone(), st).unwrap();
    assert_eq!(op.to_aql(), "(RETURN x) ? (RETURN x) : (RETURN x)");
}

#[test]
fn test_wraps_partial_statement_operands_in_parentheses() {
    let ps = PartialStatement::for_("x", "xs").unwrap();
    let op = Operation::ternary("?", ":", ps.clone(), ps.clone(), ps).unwrap();
    assert_eq!(op.to_aql(), "(FOR x IN xs) ? (FOR x IN xs) : (FOR x IN xs)");
}

#[test]
fn test_leaf_operands_render_unwrapped() {
    // Raw text renders exactly as given, so the output shows no parentheses
    let raw = RawExpression::new("x");
    let op = Operation::ternary("?", ":", raw.clone(), raw.clone(), raw).unwrap();
    assert_eq!(op.to_aql(), "x ? x : x");

    let kw = Keyword::new("for").unwrap();
    let op = Operation::ternary("?", ":", kw.clone(), kw.clone(), kw).unwrap();
    assert_eq!(op.to_aql(), "FOR ? FOR : FOR");
}

#[test]
fn test_expression_operands_render_unwrapped() {
    let range = Expression::range(1, 10).unwrap();
    let op = Operation::binary("==", range, "x").unwrap();
    assert_eq!(op.to_aql(), "1..10 == x");
}

// ============================================================================
// Unary operations
// ============================================================================

#[test]
fn test_unary_renders_prefix() {
    let op = Operation::unary("-", 5).unwrap();
    assert_eq!(op.to_aql(), "- 5");

    let op = Operation::unary("not", true).unwrap();
    assert_eq!(op.to_aql(), "not true");
}

#[test]
fn test_unary_wraps_operation_operand() {
    let inner = Operation::binary("+", 1, 2).unwrap();
    let op = Operation::unary("-", inner).unwrap();
    assert_eq!(op.to_aql(), "- (1 + 2)");
}

#[test]
fn test_unary_rejects_invalid_operator() {
    assert!(matches!(
        Operation::unary("", "x"),
        Err(AqlError::InvalidOperator(_))
    ));
    assert!(matches!(
        Operation::unary(5.5, "x"),
        Err(AqlError::InvalidOperator(_))
    ));
}

// ============================================================================
// Binary operations
// ============================================================================

#[test]
fn test_binary_renders_infix() {
    let op = Operation::binary("==", "doc.age", 42).unwrap();
    assert_eq!(op.to_aql(), "doc.age == 42");
}

#[test]
fn test_binary_wraps_each_side_independently() {
    let left = Operation::binary("+", 1, 2).unwrap();
    let op = Operation::binary("*", left, 3).unwrap();
    assert_eq!(op.to_aql(), "(1 + 2) * 3");

    let right = Operation::binary("-", 5, 4).unwrap();
    let op = Operation::binary("*", 3, right).unwrap();
    assert_eq!(op.to_aql(), "3 * (5 - 4)");
}

#[test]
fn test_binary_rejects_node_operator() {
    let node = Operation::binary("+", 1, 2).unwrap();
    let result = Operation::binary(node, 1, 2);
    assert_eq!(result.unwrap_err(), AqlError::InvalidOperator("node".to_string()));
}

// ============================================================================
// N-ary operations
// ============================================================================

#[test]
fn test_nary_joins_operands() {
    let op = Operation::nary("or", vec![true, false, true]).unwrap();
    assert_eq!(op.to_aql(), "true or false or true");
}

#[test]
fn test_nary_single_operand_has_no_operator() {
    let op = Operation::nary("and", vec![1]).unwrap();
    assert_eq!(op.to_aql(), "1");
}

#[test]
fn test_nary_wraps_nested_operations() {
    let a = Operation::binary(">", "x", 1).unwrap();
    let b = Operation::binary("<", "x", 9).unwrap();
    let op = Operation::nary("and", vec![a, b]).unwrap();
    assert_eq!(op.to_aql(), "(x > 1) and (x < 9)");
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_matches_to_aql() {
    let op = Operation::ternary("?", ":", "x", "y", "z").unwrap();
    assert_eq!(format!("{op}"), op.to_aql());
    assert_eq!(format!("{}", Node::from(op.clone())), op.to_aql());
}
