//! Expression nodes of the Monkey AST.

use crate::ast::Node;
use crate::ast::statement::BlockStatement;
use crate::lexer::token::Token;
use std::fmt::{Display, Formatter, Result};

/// A name referring to a variable or function.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

/// An integer literal, e.g. `42`.
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

/// A boolean literal, e.g. `true`.
///
/// The token literal keeps the source spelling; the value is derived from
/// the token kind.
#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

/// A prefix operator applied to an operand, e.g. `!ok`, `-5`.
#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

/// A binary operator between two operands, e.g. `a + b`, `x == y`.
#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `if (<condition>) <consequence>` with an optional `else <alternative>`.
#[derive(Debug, Clone)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// `fn(<parameters>) <body>`.
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// A call of any callee expression, e.g. `add(1, 2)` or `fn(x) { x }(5)`.
#[derive(Debug, Clone)]
pub struct CallExpression {
    pub token: Token, // the `(` token
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// All expression forms.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    PrefixExpression(PrefixExpression),
    InfixExpression(InfixExpression),
    IfExpression(IfExpression),
    FunctionLiteral(FunctionLiteral),
    CallExpression(CallExpression),
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for BooleanLiteral {
    /// Renders by value as `True` / `False`, not by token literal.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(if self.value { "True" } else { "False" })
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Node for IfExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            parameters.join(", "),
            self.body
        )
    }
}

impl Node for CallExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral(int_lit) => int_lit.token_literal(),
            Expression::BooleanLiteral(bool_lit) => bool_lit.token_literal(),
            Expression::PrefixExpression(prefix) => prefix.token_literal(),
            Expression::InfixExpression(infix) => infix.token_literal(),
            Expression::IfExpression(if_expr) => if_expr.token_literal(),
            Expression::FunctionLiteral(func) => func.token_literal(),
            Expression::CallExpression(call) => call.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(int_lit) => write!(f, "{}", int_lit),
            Expression::BooleanLiteral(bool_lit) => write!(f, "{}", bool_lit),
            Expression::PrefixExpression(prefix) => write!(f, "{}", prefix),
            Expression::InfixExpression(infix) => write!(f, "{}", infix),
            Expression::IfExpression(if_expr) => write!(f, "{}", if_expr),
            Expression::FunctionLiteral(func) => write!(f, "{}", func),
            Expression::CallExpression(call) => write!(f, "{}", call),
        }
    }
}
