//! Lexer for the Monkey language.
//!
//! A single-pass cursor over the input string. The parser pulls tokens one
//! at a time through [`Lexer::next_token`]; once the input is exhausted every
//! further call returns `Eof`.

pub mod token;

use token::{Token, TokenKind, lookup_identifier};

/// Character cursor producing a lazy stream of tokens.
///
/// `position` indexes the character currently held in `ch`, `read_position`
/// the next character to read; after every advance
/// `read_position == position + 1`. The input is ASCII by contract, so the
/// cursor walks bytes. End of input is represented by the `'\0'` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: char,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: '\0',
            line: 1,
            column: 0, // becomes 1 with the first read_char
        };
        lexer.read_char();
        lexer
    }

    /// Advances the cursor by one character, updating line/column.
    fn read_char(&mut self) {
        if self.ch == '\n' {
            self.line += 1;
            self.column = 0;
        }

        self.ch = match self.input.as_bytes().get(self.read_position) {
            Some(&byte) => byte as char,
            None => '\0',
        };
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    /// The character after `ch`, without advancing. `'\0'` at end of input.
    fn peek_char(&self) -> char {
        match self.input.as_bytes().get(self.read_position) {
            Some(&byte) => byte as char,
            None => '\0',
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_ascii_whitespace() {
            self.read_char();
        }
    }

    /// Identifier characters are ASCII letters and `_`.
    fn is_letter(&self) -> bool {
        self.ch.is_ascii_alphabetic() || self.ch == '_'
    }

    fn is_digit(&self) -> bool {
        self.ch.is_ascii_digit()
    }

    /// Consumes the maximal run of identifier characters from `position`.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.is_letter() {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }

    /// Consumes the maximal run of digits from `position`.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.is_digit() {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }

    /// Returns the next token in the input.
    ///
    /// The token's literal is the exact source text that produced it; `Eof`
    /// carries an empty literal. Unrecognized characters come back as
    /// `Illegal` tokens rather than errors.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let line = self.line;
        let column = self.column;

        let token = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    let ch = self.ch;
                    self.read_char();
                    let literal = format!("{}{}", ch, self.ch);
                    Token::new(TokenKind::Eq, literal, line, column)
                } else {
                    Token::new(TokenKind::Assign, self.ch.to_string(), line, column)
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    let ch = self.ch;
                    self.read_char();
                    let literal = format!("{}{}", ch, self.ch);
                    Token::new(TokenKind::NotEq, literal, line, column)
                } else {
                    Token::new(TokenKind::Bang, self.ch.to_string(), line, column)
                }
            }
            '+' => Token::new(TokenKind::Plus, self.ch.to_string(), line, column),
            '-' => Token::new(TokenKind::Minus, self.ch.to_string(), line, column),
            '*' => Token::new(TokenKind::Asterisk, self.ch.to_string(), line, column),
            '/' => Token::new(TokenKind::Slash, self.ch.to_string(), line, column),
            '<' => Token::new(TokenKind::Lt, self.ch.to_string(), line, column),
            '>' => Token::new(TokenKind::Gt, self.ch.to_string(), line, column),
            ',' => Token::new(TokenKind::Comma, self.ch.to_string(), line, column),
            ';' => Token::new(TokenKind::Semicolon, self.ch.to_string(), line, column),
            '(' => Token::new(TokenKind::Lparen, self.ch.to_string(), line, column),
            ')' => Token::new(TokenKind::Rparen, self.ch.to_string(), line, column),
            '{' => Token::new(TokenKind::Lbrace, self.ch.to_string(), line, column),
            '}' => Token::new(TokenKind::Rbrace, self.ch.to_string(), line, column),
            '\0' => Token::new(TokenKind::Eof, String::new(), line, column),
            _ => {
                if self.is_letter() {
                    let literal = self.read_identifier();
                    let kind = lookup_identifier(&literal);
                    // read_identifier already advanced past the last character
                    return Token::new(kind, literal, line, column);
                } else if self.is_digit() {
                    let literal = self.read_number();
                    return Token::new(TokenKind::Int, literal, line, column);
                } else {
                    Token::new(TokenKind::Illegal, self.ch.to_string(), line, column)
                }
            }
        };
        self.read_char();
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_only() {
        let input = "=+(){},;".to_string();
        let expected = vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Lparen,
            TokenKind::Rparen,
            TokenKind::Lbrace,
            TokenKind::Rbrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ];

        let mut lexer = Lexer::new(input);
        for (i, kind) in expected.into_iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(
                token.kind, kind,
                "tests[{}] - wrong token kind. expected={:?}, got={:?}",
                i, kind, token.kind
            );
        }
    }

    #[test]
    fn test_let_statement_tokens() {
        let input = "let five = 5;".to_string();
        let expected = vec![
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        let mut lexer = Lexer::new(input);
        for (i, (kind, literal)) in expected.into_iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(
                token.kind, kind,
                "tests[{}] - wrong token kind. expected={:?}, got={:?}",
                i, kind, token.kind
            );
            assert_eq!(
                token.literal, literal,
                "tests[{}] - wrong literal. expected={:?}, got={:?}",
                i, literal, token.literal
            );
        }
    }

    #[test]
    fn test_next_token() {
        let input = "let five = 5;
        let ten = 10;
        let add = fn(x, y) {
        x + y;
        };
        let result = add(five, ten);
        !-/*5;
        5 < 10 > 5;
        if (5 < 10) {
        return true;
        } else {
        return false;
        }
        10 == 10;
        10 != 9;
        "
        .to_string();

        let expected = vec![
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::Lparen, "("),
            (TokenKind::Ident, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "y"),
            (TokenKind::Rparen, ")"),
            (TokenKind::Lbrace, "{"),
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Rbrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Ident, "add"),
            (TokenKind::Lparen, "("),
            (TokenKind::Ident, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "ten"),
            (TokenKind::Rparen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::Gt, ">"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::Lparen, "("),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::Rparen, ")"),
            (TokenKind::Lbrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Rbrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::Lbrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Rbrace, "}"),
            (TokenKind::Int, "10"),
            (TokenKind::Eq, "=="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "10"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Int, "9"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        let mut lexer = Lexer::new(input);
        for (i, (kind, literal)) in expected.into_iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(
                token.kind, kind,
                "tests[{}] - wrong token kind. expected={:?}, got={:?}",
                i, kind, token.kind
            );
            assert_eq!(
                token.literal, literal,
                "tests[{}] - wrong literal. expected={:?}, got={:?}",
                i, literal, token.literal
            );
        }
    }

    #[test]
    fn test_illegal_characters() {
        let mut lexer = Lexer::new("@ #".to_string());

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.literal, "@");

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.literal, "#");

        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_stable() {
        let mut lexer = Lexer::new("x".to_string());
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        for _ in 0..5 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
        }
    }

    #[test]
    fn test_underscore_identifiers() {
        let mut lexer = Lexer::new("_foo bar_baz".to_string());

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, "_foo");

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, "bar_baz");
    }

    #[test]
    fn test_token_positions() {
        let input = "let x = 5;\nlet y = 10;".to_string();
        let mut lexer = Lexer::new(input);

        let token = lexer.next_token();
        assert_eq!((token.line, token.column), (1, 1), "let");
        let token = lexer.next_token();
        assert_eq!((token.line, token.column), (1, 5), "x");
        let token = lexer.next_token();
        assert_eq!((token.line, token.column), (1, 7), "=");
        let token = lexer.next_token();
        assert_eq!((token.line, token.column), (1, 9), "5");
        let token = lexer.next_token();
        assert_eq!((token.line, token.column), (1, 10), ";");

        let token = lexer.next_token();
        assert_eq!((token.line, token.column), (2, 1), "second let");
    }
}
