//! Pratt parser for the Monkey language.
//!
//! The parser pulls tokens from the [`Lexer`] through a two-token lookahead
//! window (`curr_token`, `peek_token`). Expression parsing is top-down
//! operator precedence: each token kind may carry a prefix handler and an
//! infix handler, and the expression loop keeps folding infix operators in
//! while the next operator binds tighter than the current level.
//!
//! Failures never unwind. A handler that cannot make progress records a
//! [`ParserError`] and returns `None`; the statement loop advances and tries
//! again at the next statement boundary, so [`Parser::parse_program`] always
//! returns a (possibly partial) program.

pub mod error;
mod precedence;
pub mod test_helper;
mod trace;

use crate::ast::{
    Program,
    expression::{
        BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
        InfixExpression, IntegerLiteral, PrefixExpression,
    },
    statement::{
        BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement,
    },
};
use crate::lexer::{
    Lexer,
    token::{Token, TokenKind},
};
use error::{ParserError, ParserErrors};
use precedence::Precedence;
use trace::Tracer;

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// Turns the token stream into an AST.
///
/// Handlers are plain function pointers held in two arrays indexed by the
/// token kind's ordinal; registration happens once in [`Parser::new`] and
/// lookup per token is a bounds-checked array read.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    curr_token: Token,
    peek_token: Token,
    errors: ParserErrors,
    prefix_parse_fns: [Option<PrefixParseFn>; TokenKind::COUNT],
    infix_parse_fns: [Option<InfixParseFn>; TokenKind::COUNT],
    tracer: Tracer,
}

impl Parser {
    /// Creates a parser and primes the lookahead window so that
    /// `curr_token` holds the first real token of the input.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            curr_token: Token::new(TokenKind::Eof, String::new(), 0, 0),
            peek_token: Token::new(TokenKind::Eof, String::new(), 0, 0),
            errors: ParserErrors::new(),
            prefix_parse_fns: [None; TokenKind::COUNT],
            infix_parse_fns: [None; TokenKind::COUNT],
            tracer: Tracer::default(),
        };

        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        parser.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        parser.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::True, Parser::parse_boolean_literal);
        parser.register_prefix(TokenKind::False, Parser::parse_boolean_literal);
        parser.register_prefix(TokenKind::Lparen, Parser::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Parser::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Parser::parse_function_literal);

        parser.register_infix(TokenKind::Plus, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Minus, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Slash, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Asterisk, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Eq, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::NotEq, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Lt, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Gt, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::Lparen, Parser::parse_call_expression);

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Turns on BEGIN/END tracing of the recursive descent. Lines are
    /// emitted at trace level through the `log` facade.
    pub fn enable_tracing(&mut self) {
        self.tracer = Tracer::new(true);
    }

    /// The errors accumulated so far, in the order they were recorded.
    pub fn errors(&self) -> &ParserErrors {
        &self.errors
    }

    /// Parses the whole input.
    ///
    /// Loops until `Eof`, collecting every statement that parses; failed
    /// statements leave their errors behind and are skipped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program {
            statements: Vec::new(),
        };

        while !self.is_curr(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        log::debug!(
            "parsed {} statement(s), {} error(s)",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    fn next_token(&mut self) {
        self.curr_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn is_curr(&self, kind: TokenKind) -> bool {
        self.curr_token.kind == kind
    }

    fn is_peek(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances when the peek token has the expected kind; records an
    /// error and stays put otherwise.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.is_peek(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ParserError::unexpected_token(expected, &self.peek_token);
        log::debug!("{}", error);
        self.errors.push(error);
    }

    fn no_prefix_parse_fn_error(&mut self) {
        let error = ParserError::no_prefix_fn(&self.curr_token);
        log::debug!("{}", error);
        self.errors.push(error);
    }

    fn register_prefix(&mut self, kind: TokenKind, handler: PrefixParseFn) {
        self.prefix_parse_fns[kind as usize] = Some(handler);
    }

    fn register_infix(&mut self, kind: TokenKind, handler: InfixParseFn) {
        self.infix_parse_fns[kind as usize] = Some(handler);
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn curr_precedence(&self) -> Precedence {
        Precedence::of(self.curr_token.kind)
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `let <identifier> = <expression>` with an optional trailing `;`.
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.is_peek(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(LetStatement { token, name, value })
    }

    /// `return <expression>` with an optional trailing `;`.
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.curr_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.is_peek(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let _span = self.tracer.begin("parse_expression_statement");
        let token = self.curr_token.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        // consume the terminator even when the expression failed, so the
        // statement loop resumes after it
        if self.is_peek(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ExpressionStatement {
            token,
            expression: expression?,
        })
    }

    /// The Pratt core.
    ///
    /// The prefix handler of `curr_token` produces the initial left
    /// expression; then, while the upcoming operator binds tighter than
    /// `precedence`, its infix handler folds the left expression into a
    /// bigger one. A missing infix handler ends the expression; a failing
    /// handler propagates `None`.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let _span = self.tracer.begin("parse_expression");

        let Some(prefix) = self.prefix_parse_fns[self.curr_token.kind as usize] else {
            self.no_prefix_parse_fn_error();
            return None;
        };
        let mut left = prefix(self)?;

        while !self.is_peek(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns[self.peek_token.kind as usize] else {
                return Some(left);
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let _span = self.tracer.begin("parse_integer_literal");
        let token = self.curr_token.clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                let error = ParserError::invalid_integer(&token);
                log::debug!("{}", error);
                self.errors.push(error);
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral(BooleanLiteral {
            token: self.curr_token.clone(),
            value: self.is_curr(TokenKind::True),
        }))
    }

    /// `!<operand>` / `-<operand>`; the operand binds at `Prefix` level.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let _span = self.tracer.begin("parse_prefix_expression");
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::PrefixExpression(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// `<left> <op> <right>`; the right side binds at the operator's own
    /// level, so equal-precedence operators fold to the left.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let _span = self.tracer.begin("parse_infix_expression");
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();
        let precedence = self.curr_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::InfixExpression(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// `( <expression> )`: returns the inner expression, no wrapper node.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let _span = self.tracer.begin("parse_if_expression");
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.is_peek(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::Lbrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::IfExpression(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Expects `curr_token` to be `{`. Collects statements until `}` or
    /// `Eof`; the closing `}` stays current for the caller.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.curr_token.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.is_curr(TokenKind::Rbrace) && !self.is_curr(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Comma-separated identifier list between `(` and `)`; empty allowed.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.is_peek(TokenKind::Rparen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        });

        while self.is_peek(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(Identifier {
                token: self.curr_token.clone(),
                value: self.curr_token.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(parameters)
    }

    /// Infix handler for `(`: the left expression is the callee.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::CallExpression(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Like parameter lists, but each element is a full expression.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.is_peek(TokenKind::Rparen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.is_peek(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(arguments)
    }
}
