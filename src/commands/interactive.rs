//! Interactive solving session
//!
//! The driver loop: present ranked suggestions, read the guess that was
//! actually played and the score the game reported, narrow the candidate
//! set, repeat until the game is decided.

use crate::core::{Score, Word};
use crate::output::display;
use crate::solver::Game;
use std::io::{self, Write};

/// How many suggestions to show each turn
const SUGGESTION_LIMIT: usize = 12;

/// What a prompt produced: a usable value, or a session command
enum Prompted<T> {
    Entered(T),
    Quit,
    New,
}

/// Run the interactive solving loop
///
/// Guess length is validated here with re-prompting; scores of the right
/// length are accepted loosely (uppercase = Hit, lowercase = Present,
/// anything else = Miss). An all-Hit score ends the session immediately.
///
/// # Errors
///
/// Returns an error only for I/O failures on stdin/stdout.
pub fn run_interactive(mut game: Game) -> Result<(), String> {
    let fresh = game.clone();
    print_intro(&game);

    let mut turn = 1;
    while game.remaining_count() > 1 {
        display::print_turn_header(turn, game.remaining_count());
        display::print_suggestions(&game.suggestions(), SUGGESTION_LIMIT);
        if game.remaining_count() <= 10 {
            display::print_remaining(game.remaining());
        }

        let guess = match prompt_guess(game.length())? {
            Prompted::Entered(word) => word,
            Prompted::Quit => return Ok(()),
            Prompted::New => {
                game = fresh.clone();
                turn = 1;
                println!("New game started.\n");
                continue;
            }
        };

        let score = match prompt_score(game.length())? {
            Prompted::Entered(score) => score,
            Prompted::Quit => return Ok(()),
            Prompted::New => {
                game = fresh.clone();
                turn = 1;
                println!("New game started.\n");
                continue;
            }
        };

        display::print_score_line(&guess, &score);

        if score.is_all_hits() {
            display::print_confirmed(&guess);
            return Ok(());
        }

        game.apply_score(&guess, &score).map_err(|e| e.to_string())?;
        turn += 1;
    }

    if let Some(solution) = game.solution() {
        display::print_solved(solution);
    } else {
        display::print_exhausted();
    }
    Ok(())
}

fn print_intro(game: &Game) {
    println!(
        "\nSolving a {}-letter game over {} words.",
        game.length(),
        game.universe().len()
    );
    println!("Score each guess with one character per letter:");
    println!("  uppercase = right letter, right spot");
    println!("  lowercase = letter occurs elsewhere");
    println!("  anything else = letter absent");
    println!("Commands: 'quit' to exit, 'new' to restart.\n");
}

/// Prompt until the input is a word of the game length
fn prompt_guess(length: usize) -> Result<Prompted<Word>, String> {
    loop {
        let Some(input) = read_line("Your guess")? else {
            return Ok(Prompted::Quit);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Prompted::Quit),
            "new" | "restart" => return Ok(Prompted::New),
            _ => {}
        }

        match Word::new(&input, length) {
            Ok(word) => return Ok(Prompted::Entered(word)),
            Err(err) => println!("Invalid guess '{input}': {err}"),
        }
    }
}

/// Prompt until the input has one character per letter, then normalize it
fn prompt_score(length: usize) -> Result<Prompted<Score>, String> {
    loop {
        let Some(input) = read_line("Score of the guess")? else {
            return Ok(Prompted::Quit);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Prompted::Quit),
            "new" | "restart" => return Ok(Prompted::New),
            _ => {}
        }

        if input.chars().count() == length {
            return Ok(Prompted::Entered(Score::from_loose(&input)));
        }
        println!("Invalid length score '{input}'");
    }
}

/// Read one trimmed line; None on end of input
fn read_line(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
