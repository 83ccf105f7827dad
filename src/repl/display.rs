//! Banner and error printing for the REPL.

use crate::parser::error::ParserErrors;
use colored::Colorize;
use std::io::{Result, Write};

pub const MONKEY_LOGO: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

// ANSI color codes for the raw prompt writes
pub const RESET: &str = "\x1b[0m";
pub const CYAN: &str = "\x1b[36m";
pub const GRAY: &str = "\x1b[90m";

pub fn print_welcome() {
    let username = users::get_current_username()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "friend".to_string());

    println!("\n{}", MONKEY_LOGO.cyan());
    println!("  {}\n", "Monkey Programming Language".cyan().bold());

    println!("{}", format!("Hello, {}!", username).green().bold());
    println!(
        "{} {}",
        "This REPL:".bright_black(),
        "lexes and parses your input, then prints the AST".green()
    );
    println!(
        "{}\n",
        "Type your commands below. Press Ctrl+D to exit.".bright_black()
    );
}

/// Prints the accumulated parser errors behind the monkey-business banner.
pub fn print_parser_errors<W: Write>(output: &mut W, errors: &ParserErrors) -> Result<()> {
    writeln!(
        output,
        "{}",
        "Woops! We ran into some monkey business here!".red().bold()
    )?;
    writeln!(output, " parser errors:")?;
    for error in errors {
        writeln!(output, "  {}{}{}", GRAY, error, RESET)?;
    }
    Ok(())
}
