use console_labs::{logger::setup_logger, shift, stdio_console};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let mut console = stdio_console();
    shift::run(&mut console)
}
