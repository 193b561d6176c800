use console_labs::guess::{self, GuessGame};
use console_labs::{logger::setup_logger, stdio_console};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let game = GuessGame::random(&mut rand::rng());
    log::debug!("secret chosen");

    let mut console = stdio_console();
    let attempts = guess::play(&mut console, game.secret())?;
    log::info!("solved in {attempts} attempts");

    Ok(())
}
