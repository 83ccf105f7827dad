//! Front end for the Monkey programming language.
//!
//! Two stages: the [`lexer`] turns source text into tokens, the [`parser`]
//! turns tokens into the [`ast`]. The parser is a Pratt-style top-down
//! operator-precedence parser; its output is a [`ast::Program`] plus any
//! errors it accumulated on the way.
//!
//! ```
//! use monkey_parse::{lexer::Lexer, parser::Parser};
//!
//! let lexer = Lexer::new("let answer = 6 * 7;".to_string());
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let answer = (6 * 7);");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod repl;
