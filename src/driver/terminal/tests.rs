use std::{io::Cursor, sync::atomic::Ordering, time::Duration};

use super::{super::Driver, TerminalDriver};
use crate::{
    config::PROMPTS_PER_ROUND,
    game::{data::BUILTIN_PROMPTS, Game},
    interrupt::Interrupt,
    timer::{testing::FakeClock, Countdown},
};

fn countdown() -> Countdown {
    Countdown::new(Duration::from_secs(2), Duration::from_millis(500))
}

fn play(input: &str, clock: &mut FakeClock, interrupt: Interrupt) -> String {
    let game = Game::new(BUILTIN_PROMPTS.clone(), 42).unwrap();
    let mut output = Vec::new();
    {
        let mut driver = TerminalDriver::new(
            game,
            Cursor::new(input.to_owned()),
            &mut output,
            clock,
            countdown(),
            interrupt,
        );
        driver.play().unwrap();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn no_input_ends_session() {
    let mut clock = FakeClock::new();
    let output = play("", &mut clock, Interrupt::detached());
    assert!(output.starts_with("Welcome to Scattergories!\n"));
    assert!(output.contains("Press enter to start a round."));
    assert!(output.ends_with("Thanks for playing! 0 rounds played.\n"));
    assert!(!output.contains("Letter:"));
    assert_eq!(clock.sleeps, 0);
}

#[test]
fn one_round_then_end_of_input() {
    let mut clock = FakeClock::new();
    let output = play("\n", &mut clock, Interrupt::detached());

    assert_eq!(output.matches("===\n").count(), 2);
    assert_eq!(output.matches("Letter: ").count(), 1);
    assert!(output.contains("Prompts:\n  1.\t"));
    assert!(output.contains(&format!("\n  {}.\t", PROMPTS_PER_ROUND)));
    assert!(!output.contains(&format!("\n  {}.\t", PROMPTS_PER_ROUND + 1)));
    assert!(output.contains("\rRemaining time: 0m2s"));
    assert!(output.contains("Time's up!\n===\n"));
    assert!(output.ends_with("Thanks for playing! 1 round played.\n"));
    assert_eq!(clock.elapsed, Duration::from_secs(2));
}

#[test]
fn any_line_starts_a_round_until_quit() {
    let mut clock = FakeClock::new();
    let output = play("\nready\n  Quit \n\n", &mut clock, Interrupt::detached());

    assert_eq!(output.matches("Letter: ").count(), 2);
    assert_eq!(output.matches("Time's up!").count(), 2);
    assert!(output.ends_with("Thanks for playing! 2 rounds played.\n"));
    assert_eq!(clock.elapsed, Duration::from_secs(4));
}

#[test]
fn invalid_utf8_line_starts_a_round() {
    let game = Game::new(BUILTIN_PROMPTS.clone(), 42).unwrap();
    let mut clock = FakeClock::new();
    let mut output = Vec::new();
    {
        let mut driver = TerminalDriver::new(
            game,
            Cursor::new(b"\xff\n".to_vec()),
            &mut output,
            &mut clock,
            countdown(),
            Interrupt::detached(),
        );
        driver.play().unwrap();
    }
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Letter: ").count(), 1);
    assert!(output.ends_with("Thanks for playing! 1 round played.\n"));
}

#[test]
fn cancelled_round_moves_on() {
    let interrupt = Interrupt::detached();
    let mut clock = FakeClock::new();
    clock.cancel_after = Some((1, interrupt.cancelled_flag()));
    let output = play("\n", &mut clock, interrupt.clone());

    assert!(output.contains("Round canceled.\n===\n"));
    assert!(!output.contains("Time's up!"));
    assert!(output.ends_with("Thanks for playing! 1 round played.\n"));
    assert!(!interrupt.is_counting());
    assert!(!interrupt.cancelled().load(Ordering::Relaxed));
}

#[test]
fn rounds_differ() {
    let mut clock = FakeClock::new();
    let output = play("\n\n", &mut clock, Interrupt::detached());
    let letters: Vec<&str> = output
        .lines()
        .filter_map(|l| l.strip_prefix("Letter: "))
        .collect();
    assert_eq!(letters.len(), 2);
    assert_ne!(letters[0], letters[1]);
}
