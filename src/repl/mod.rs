//! Line-oriented REPL over the lexer and parser.
//!
//! Each line is parsed as a full program; errors are printed behind a
//! banner, successful parses print the program's canonical string form.

mod display;

use crate::{lexer::Lexer, parser::Parser};
pub use display::MONKEY_LOGO;
use display::{CYAN, RESET, print_parser_errors, print_welcome};
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">>";

/// Runs the REPL until EOF on `input`.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    print_welcome();

    let mut reader = input;
    let mut line = String::new();

    loop {
        write!(output, "{}{}{} ", CYAN, PROMPT, RESET)?;
        output.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(output, "\nGoodbye!")?;
            return Ok(());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            continue;
        }

        let lexer = Lexer::new(trimmed.to_string());
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parser_errors(&mut output, parser.errors())?;
            continue;
        }

        writeln!(output, "{}", program)?;
    }
}
