use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::Result;
use rand::Rng;

use crate::console::Console;

pub const SECRET_RANGE: RangeInclusive<i64> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    OutOfRange { low: i64, high: i64 },
    TooHigh,
    TooLow,
    Correct { attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Genius,
    Lucky,
    Fair,
    Slow,
}

impl Rating {
    pub fn for_attempts(attempts: u32) -> Rating {
        match attempts {
            0..=3 => Rating::Genius,
            4..=7 => Rating::Lucky,
            8..=15 => Rating::Fair,
            _ => Rating::Slow,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rating::Genius => "Amazing! You're a genius!",
            Rating::Lucky => "Nice, pretty lucky!",
            Rating::Fair => "Not bad, keep it up!",
            Rating::Slow => "A bit slow, more practice needed!",
        }
    }
}

/// One round of guess-the-number. The open interval shrinks around the
/// secret after every wrong guess.
#[derive(Debug)]
pub struct GuessGame {
    secret: i64,
    low: i64,
    high: i64,
    attempts: u32,
}

impl GuessGame {
    pub fn new(secret: i64) -> Self {
        GuessGame {
            secret,
            low: *SECRET_RANGE.start(),
            high: *SECRET_RANGE.end(),
            attempts: 0,
        }
    }

    pub fn random<G: Rng>(rng: &mut G) -> Self {
        GuessGame::new(rng.random_range(SECRET_RANGE))
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn range(&self) -> (i64, i64) {
        (self.low, self.high)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Count an attempt whose input was not a number at all.
    pub fn reject(&mut self) -> Feedback {
        self.attempts += 1;
        Feedback::OutOfRange {
            low: self.low,
            high: self.high,
        }
    }

    /// Every call counts as an attempt, out-of-range guesses included.
    pub fn guess(&mut self, n: i64) -> Feedback {
        self.attempts += 1;

        if n < self.low || n > self.high {
            return Feedback::OutOfRange {
                low: self.low,
                high: self.high,
            };
        }

        if n > self.secret {
            self.high = n - 1;
            Feedback::TooHigh
        } else if n < self.secret {
            self.low = n + 1;
            Feedback::TooLow
        } else {
            Feedback::Correct {
                attempts: self.attempts,
            }
        }
    }
}

/// Run the interactive loop until the secret is found. Returns the number
/// of attempts.
pub fn play<R: BufRead, W: Write>(console: &mut Console<R, W>, secret: i64) -> Result<u32> {
    let mut game = GuessGame::new(secret);
    let (low, high) = game.range();

    console.say("=== Guess the Number ===")?;
    console.say(&format!("I'm thinking of a number between {low} and {high}, take a guess!"))?;
    console.say("")?;

    loop {
        let (low, high) = game.range();
        console.prompt(&format!("Enter a number between {low} and {high}: "))?;

        let feedback = match console.try_next::<i64>()? {
            Some(n) => {
                let feedback = game.guess(n);
                log::debug!("attempt {}: {n} -> {feedback:?}", game.attempts());
                feedback
            }
            None => {
                let feedback = game.reject();
                log::debug!("attempt {}: not a number -> {feedback:?}", game.attempts());
                feedback
            }
        };

        match feedback {
            Feedback::OutOfRange { low, high } => {
                console.say(&format!("Wrong input! Enter a number between {low} and {high}."))?;
                continue;
            }
            // The bound just moved to one past the guess.
            Feedback::TooHigh => {
                let (low, high) = game.range();
                console.say(&format!(
                    "It's smaller than {}! Try again between {low} and {high}.",
                    high + 1
                ))?;
            }
            Feedback::TooLow => {
                let (low, high) = game.range();
                console.say(&format!(
                    "It's bigger than {}! Try again between {low} and {high}.",
                    low - 1
                ))?;
            }
            Feedback::Correct { attempts } => {
                console.say("")?;
                console.say("Congratulations! You got it!")?;
                console.say(&format!("The answer is: {}", game.secret()))?;
                console.say(&format!("You guessed {attempts} times."))?;
                console.say(Rating::for_attempts(attempts).message())?;
                console.say("")?;
                return Ok(attempts);
            }
        }
        console.say("")?;
    }
}

#[cfg(test)]
mod tests {
    use super::{Feedback, GuessGame, Rating, SECRET_RANGE, play};
    use crate::console::Console;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play_with(input: &str, secret: i64) -> (u32, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let attempts = play(&mut console, secret).unwrap();
        (attempts, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn range_narrows() {
        let mut game = GuessGame::new(42);
        assert_eq!(game.guess(50), Feedback::TooHigh);
        assert_eq!(game.range(), (1, 49));
        assert_eq!(game.guess(25), Feedback::TooLow);
        assert_eq!(game.range(), (26, 49));
        assert_eq!(game.guess(42), Feedback::Correct { attempts: 3 });
    }

    #[test]
    fn out_of_range_counts_as_attempt() {
        let mut game = GuessGame::new(10);
        game.guess(20);
        assert_eq!(game.guess(30), Feedback::OutOfRange { low: 1, high: 19 });
        assert_eq!(game.guess(0), Feedback::OutOfRange { low: 1, high: 19 });
        assert_eq!(game.range(), (1, 19));
        assert_eq!(game.guess(10), Feedback::Correct { attempts: 4 });
    }

    #[test]
    fn bisection_finds_any_secret_in_seven() {
        for secret in SECRET_RANGE {
            let mut game = GuessGame::new(secret);
            loop {
                let (low, high) = game.range();
                if let Feedback::Correct { attempts } = game.guess((low + high) / 2) {
                    assert!(attempts <= 7, "secret {secret} took {attempts}");
                    break;
                }
            }
        }
    }

    #[test]
    fn random_secret_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(SECRET_RANGE.contains(&GuessGame::random(&mut rng).secret()));
        }
    }

    #[test]
    fn rejected_input_counts_without_moving_range() {
        let mut game = GuessGame::new(5);
        assert_eq!(game.guess(50), Feedback::TooHigh);
        assert_eq!(game.reject(), Feedback::OutOfRange { low: 1, high: 49 });
        assert_eq!(game.attempts(), 2);
        assert_eq!(game.range(), (1, 49));
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::for_attempts(1), Rating::Genius);
        assert_eq!(Rating::for_attempts(3), Rating::Genius);
        assert_eq!(Rating::for_attempts(4), Rating::Lucky);
        assert_eq!(Rating::for_attempts(7), Rating::Lucky);
        assert_eq!(Rating::for_attempts(8), Rating::Fair);
        assert_eq!(Rating::for_attempts(15), Rating::Fair);
        assert_eq!(Rating::for_attempts(16), Rating::Slow);
    }

    #[test]
    fn interactive_session() {
        let (attempts, out) = play_with("50\n25\n37\n", 37);
        assert_eq!(attempts, 3);
        assert!(out.contains("It's smaller than 50! Try again between 1 and 49."));
        assert!(out.contains("It's bigger than 25! Try again between 26 and 49."));
        assert!(out.contains("The answer is: 37"));
        assert!(out.contains("You guessed 3 times."));
        assert!(out.contains(Rating::Genius.message()));
    }

    #[test]
    fn garbage_and_out_of_range_input() {
        let (attempts, out) = play_with("abc 500 70 60\n", 60);
        assert_eq!(attempts, 4);
        assert_eq!(out.matches("Wrong input!").count(), 2);
        assert!(out.contains("Wrong input! Enter a number between 1 and 100."));
        assert!(out.contains("It's smaller than 70! Try again between 1 and 69."));
    }

    #[test]
    fn input_ends_before_correct_guess() {
        let mut console = Console::new("1\n2\n".as_bytes(), Vec::new());
        assert!(play(&mut console, 99).is_err());
    }
}
