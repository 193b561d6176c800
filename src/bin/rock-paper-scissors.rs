use console_labs::rps::{self, Hand};
use console_labs::{logger::setup_logger, stdio_console};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let mut rng = rand::rng();
    let mut console = stdio_console();
    let tally = rps::play(&mut console, || Hand::random(&mut rng))?;
    log::info!("final tally: {tally:?}");

    Ok(())
}
