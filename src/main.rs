use env_logger::Builder;
use monkey_parse::repl;
use std::io;

fn main() -> io::Result<()> {
    // Logging is controlled via RUST_LOG, e.g. RUST_LOG=trace for the
    // parser's BEGIN/END trace lines.
    Builder::from_default_env().init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    repl::start(stdin, stdout)?;
    Ok(())
}
