use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use crate::console::Console;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    pub fn from_code(code: i64) -> Option<Hand> {
        match code {
            0 => Some(Hand::Rock),
            1 => Some(Hand::Scissors),
            2 => Some(Hand::Paper),
            _ => None,
        }
    }

    pub fn random<G: Rng>(rng: &mut G) -> Hand {
        Hand::ALL[rng.random_range(0..Hand::ALL.len())]
    }

    fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors)
                | (Hand::Scissors, Hand::Paper)
                | (Hand::Paper, Hand::Rock)
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hand::Rock => "rock",
            Hand::Scissors => "scissors",
            Hand::Paper => "paper",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    PlayerWins,
    ComputerWins,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Draw => f.write_str("draw!"),
            Outcome::PlayerWins => f.write_str("you win!"),
            Outcome::ComputerWins => f.write_str("the computer wins!"),
        }
    }
}

pub fn judge(player: Hand, computer: Hand) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats(computer) {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::PlayerWins => self.wins += 1,
            Outcome::ComputerWins => self.losses += 1,
        }
    }
}

/// Play a series: the player picks the round count, then each round reads
/// 0/1/2 and compares it with `opponent()`.
///
/// An invalid pick repeats the round.
pub fn play<R, W, F>(console: &mut Console<R, W>, mut opponent: F) -> Result<Tally>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> Hand,
{
    console.prompt("Number of rounds: ")?;
    // A negative count plays no rounds.
    let rounds = console.next::<i64>()?.max(0);
    let mut tally = Tally::default();

    let mut round = 1;
    while round <= rounds {
        console.say("")?;
        console.say(&format!("Round {round}"))?;
        console.prompt("Your pick (0=rock, 1=scissors, 2=paper): ")?;

        let Some(player) = console.try_next::<i64>()?.and_then(Hand::from_code) else {
            console.say("Invalid pick, enter 0~2.")?;
            continue;
        };
        let computer = opponent();
        let outcome = judge(player, computer);
        log::debug!("round {round}: {player} vs {computer} -> {outcome:?}");

        console.say(&format!("You played: {player}"))?;
        console.say(&format!("Computer played: {computer}"))?;
        console.say(&format!("Result: {outcome}"))?;
        tally.record(outcome);
        round += 1;
    }

    console.say("")?;
    console.say(&format!(
        "Game over! {} won, {} lost, {} drawn. Thanks for playing~",
        tally.wins, tally.losses, tally.draws
    ))?;
    Ok(tally)
}
