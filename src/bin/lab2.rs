use console_labs::{arithmetic, logger::setup_logger, stdio_console};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let mut console = stdio_console();
    arithmetic::run(&mut console)
}
