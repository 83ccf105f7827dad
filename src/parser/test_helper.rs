//! Shared assertion helpers for the parser test suites.
//!
//! The helpers panic with a `got=...` message on mismatch, so a failing
//! integration test points straight at the node that was wrong.

use crate::ast::{
    Node,
    expression::Expression,
    statement::Statement,
};
use crate::parser::Parser;

/// Expected literal value for [`test_literal_expression`].
#[derive(Debug, Clone, Copy)]
pub enum Expected {
    Int(i64),
    Ident(&'static str),
    Bool(bool),
}

impl From<i64> for Expected {
    fn from(value: i64) -> Self {
        Expected::Int(value)
    }
}

impl From<i32> for Expected {
    fn from(value: i32) -> Self {
        Expected::Int(value as i64)
    }
}

impl From<&'static str> for Expected {
    fn from(value: &'static str) -> Self {
        Expected::Ident(value)
    }
}

impl From<bool> for Expected {
    fn from(value: bool) -> Self {
        Expected::Bool(value)
    }
}

/// Fails the test with every recorded error if the parser saw any.
#[track_caller]
pub fn check_parser_errors(parser: &Parser) {
    let errors = parser.errors();
    if errors.is_empty() {
        return;
    }

    println!("parser has {} error(s):", errors.len());
    for error in errors {
        println!("  {}", error);
    }
    panic!("parser has {} errors", errors.len());
}

/// Asserts that `statement` is a `let` binding the name `name`.
#[track_caller]
pub fn test_let_statement(statement: &Statement, name: &str) {
    assert_eq!(
        statement.token_literal(),
        "let",
        "statement.token_literal() not 'let'. got={}",
        statement.token_literal()
    );

    let let_stmt = match statement {
        Statement::Let(let_stmt) => let_stmt,
        _ => panic!("statement is not a LetStatement. got={:?}", statement),
    };

    assert_eq!(
        let_stmt.name.value, name,
        "let_stmt.name.value not '{}'. got={}",
        name, let_stmt.name.value
    );
    assert_eq!(
        let_stmt.name.token_literal(),
        name,
        "let_stmt.name.token_literal() not '{}'. got={}",
        name,
        let_stmt.name.token_literal()
    );
}

/// Asserts that `statement` is a `return` statement.
#[track_caller]
pub fn test_return_statement(statement: &Statement) {
    let return_stmt = match statement {
        Statement::Return(return_stmt) => return_stmt,
        _ => panic!("statement is not a ReturnStatement. got={:?}", statement),
    };

    assert_eq!(
        return_stmt.token_literal(),
        "return",
        "return_stmt.token_literal() not 'return'. got={}",
        return_stmt.token_literal()
    );
}

/// Unwraps the expression out of an expression statement.
#[track_caller]
pub fn unwrap_expression_statement(statement: &Statement) -> &Expression {
    match statement {
        Statement::Expression(expr_stmt) => &expr_stmt.expression,
        _ => panic!("statement is not an ExpressionStatement. got={:?}", statement),
    }
}

#[track_caller]
pub fn test_identifier(expression: &Expression, value: &str) {
    let ident = match expression {
        Expression::Identifier(ident) => ident,
        _ => panic!("expression is not an Identifier. got={:?}", expression),
    };

    assert_eq!(
        ident.value, value,
        "ident.value not '{}'. got={}",
        value, ident.value
    );
    assert_eq!(
        ident.token_literal(),
        value,
        "ident.token_literal() not '{}'. got={}",
        value,
        ident.token_literal()
    );
}

#[track_caller]
pub fn test_integer_literal(expression: &Expression, value: i64) {
    let int_lit = match expression {
        Expression::IntegerLiteral(int_lit) => int_lit,
        _ => panic!("expression is not an IntegerLiteral. got={:?}", expression),
    };

    assert_eq!(
        int_lit.value, value,
        "int_lit.value not {}. got={}",
        value, int_lit.value
    );
    assert_eq!(
        int_lit.token_literal(),
        value.to_string(),
        "int_lit.token_literal() not '{}'. got={}",
        value,
        int_lit.token_literal()
    );
}

#[track_caller]
pub fn test_boolean_literal(expression: &Expression, value: bool) {
    let bool_lit = match expression {
        Expression::BooleanLiteral(bool_lit) => bool_lit,
        _ => panic!("expression is not a BooleanLiteral. got={:?}", expression),
    };

    assert_eq!(
        bool_lit.value, value,
        "bool_lit.value not {}. got={}",
        value, bool_lit.value
    );
    // token literal keeps the lowercase source spelling
    let literal = if value { "true" } else { "false" };
    assert_eq!(
        bool_lit.token_literal(),
        literal,
        "bool_lit.token_literal() not '{}'. got={}",
        literal,
        bool_lit.token_literal()
    );
}

/// Dispatches to the matching literal assertion for `expected`.
#[track_caller]
pub fn test_literal_expression<E: Into<Expected>>(expression: &Expression, expected: E) {
    match expected.into() {
        Expected::Int(value) => test_integer_literal(expression, value),
        Expected::Ident(value) => test_identifier(expression, value),
        Expected::Bool(value) => test_boolean_literal(expression, value),
    }
}

/// Asserts `expression` is `<left> <operator> <right>` over literal operands.
#[track_caller]
pub fn test_infix_expression<L, R>(expression: &Expression, left: L, operator: &str, right: R)
where
    L: Into<Expected>,
    R: Into<Expected>,
{
    let infix = match expression {
        Expression::InfixExpression(infix) => infix,
        _ => panic!("expression is not an InfixExpression. got={:?}", expression),
    };

    test_literal_expression(&infix.left, left);
    assert_eq!(
        infix.operator, operator,
        "infix.operator not '{}'. got={}",
        operator, infix.operator
    );
    test_literal_expression(&infix.right, right);
}
