//! Random games played against the console.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::RngCore;

use crate::core::games::{Coin, Guess, judge_guess};
use crate::io::input::InputSession;
use crate::io::random::BoundedRandomSource;

/// Attempts allowed by [`guess_the_number_limited`].
pub const LIMITED_ATTEMPTS: u32 = 3;
/// Tosses made by [`heads_or_tails`].
pub const COIN_TOSSES: u32 = 3;

/// Guess a secret in 1..=20 with unlimited attempts.
pub fn guess_the_number<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let secret = source.next_in_range(1, 20);
    writeln!(session.out(), "Secret number generated. Now guess it!")?;

    let mut attempts: u32 = 0;
    loop {
        let guess = session.read_int("Enter a number from 1 to 20: \n")?;
        attempts += 1;
        match judge_guess(secret, guess) {
            Guess::Correct => break,
            Guess::TooHigh => {
                writeln!(session.out(), "Attempt failed, try with a lower number.")?;
            }
            Guess::TooLow => {
                writeln!(session.out(), "Attempt failed, try with a higher number.")?;
            }
        }
    }

    writeln!(session.out(), "You guessed in {attempts} attempts")?;
    Ok(())
}

/// Guess a secret in 1..=10 within [`LIMITED_ATTEMPTS`] tries.
pub fn guess_the_number_limited<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let secret = source.next_in_range(1, 10);

    for attempt in 1..=LIMITED_ATTEMPTS {
        let guess = session.read_int("Enter a number between 1 and 10:\n")?;
        let out = session.out();
        match judge_guess(secret, guess) {
            Guess::Correct => {
                writeln!(out, "\nYou won with {attempt} attempts.")?;
                return Ok(());
            }
            _ if attempt == LIMITED_ATTEMPTS => writeln!(out, "You have finished the attempts")?,
            Guess::TooLow => writeln!(out, "\nWrong, try again with a larger number.")?,
            Guess::TooHigh => writeln!(out, "\nWrong, try again with a smaller number.")?,
        }
    }
    Ok(())
}

pub fn heads_or_tails<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let out = session.out();
    let mut heads: u32 = 0;
    for _ in 0..COIN_TOSSES {
        let coin = Coin::from_draw(source.next_in_range(0, 1));
        if coin == Coin::Heads {
            heads += 1;
        }
        writeln!(out, "{coin}")?;
    }

    writeln!(out, "\nNumber of heads: {heads}")?;
    writeln!(out, "Number of tails: {}", COIN_TOSSES - heads)?;
    Ok(())
}

pub fn dice_roll<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let rolls = session.read_int("How many times do you want to roll the dice?\n")?;
    let out = session.out();
    let mut sixes: u32 = 0;
    for _ in 0..rolls {
        let face = source.next_in_range(1, 6);
        writeln!(out, "The extracted number is: {face}")?;
        if face == 6 {
            sixes += 1;
        }
    }
    writeln!(out, "The number 6 came out {sixes} times.")?;
    Ok(())
}
