pub mod arithmetic;
pub mod console;
pub mod guess;
pub mod logger;
pub mod rps;
pub mod shift;

use std::io::{self, BufReader, Stdin, Stdout};

use console::Console;

/// Console bound to the process's stdin and stdout.
pub fn stdio_console() -> Console<BufReader<Stdin>, Stdout> {
    Console::new(BufReader::new(io::stdin()), io::stdout())
}
