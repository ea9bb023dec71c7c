//! Terminal rendering for the interactive driver and CLI commands

use super::formatters::{suggestion_header, suggestion_row, word_list_preview};
use crate::commands::solve::SolveOutcome;
use crate::core::{Mark, Score, Word};
use crate::solver::RankedGuess;
use colored::Colorize;

/// Print the top of the suggestion list as a table
pub fn print_suggestions(ranked: &[RankedGuess], limit: usize) {
    if ranked.is_empty() {
        println!("No guessable words available.");
        return;
    }

    println!("{}", suggestion_header().bold());
    for (i, suggestion) in ranked.iter().take(limit).enumerate() {
        println!("{}", suggestion_row(i + 1, suggestion));
    }
    println!();
}

/// Print the turn separator with the current candidate count
pub fn print_turn_header(turn: usize, remaining: usize) {
    println!("{}", "─".repeat(60).bright_black());
    println!(
        "Turn {turn}: {} candidate{} remaining",
        remaining.to_string().bright_cyan(),
        if remaining == 1 { "" } else { "s" }
    );
    println!("{}", "─".repeat(60).bright_black());
}

/// Print the remaining candidates when the set is small
pub fn print_remaining(words: &[Word]) {
    println!("Remaining candidates: {}", word_list_preview(words, 10));
    println!();
}

/// Print a guess with its score, one colored cell per letter
pub fn print_score_line(guess: &Word, score: &Score) {
    let mut line = String::new();
    for (letter, &mark) in guess.text().chars().zip(score.marks()) {
        let cell = format!(" {letter} ");
        let cell = match mark {
            Mark::Hit => cell.black().on_bright_green(),
            Mark::Present => cell.black().on_bright_yellow(),
            Mark::Miss => cell.white().on_bright_black(),
        };
        line.push_str(&cell.to_string());
    }
    println!("\n  {line}  {score}\n");
}

/// Report the solution once a single candidate remains
pub fn print_solved(solution: &Word) {
    println!(
        "\n{} {}\n",
        "The solution is:".bright_green().bold(),
        solution.text().bright_white().bold()
    );
}

/// Report an all-Hit score: the just-guessed word was the solution
pub fn print_confirmed(guess: &Word) {
    println!(
        "\n{} {}\n",
        "Solved! The word was:".bright_green().bold(),
        guess.text().bright_white().bold()
    );
}

/// Report the terminal failure state: no candidate fits the feedback
pub fn print_exhausted() {
    println!(
        "\n{}",
        "No solution is consistent with the scores entered.".bright_red()
    );
    println!("One of the scores was probably mistyped.\n");
}

/// Print the step-by-step result of a self-play simulation
pub fn print_solve_outcome(outcome: &SolveOutcome) {
    println!("Solving for: {}\n", outcome.target.text().bold());

    for (i, step) in outcome.steps.iter().enumerate() {
        println!(
            "Guess {}: {} → {}  ({} → {} candidates)",
            i + 1,
            step.guess.text(),
            step.score,
            step.candidates_before,
            step.candidates_after
        );
    }

    println!();
    if outcome.solved {
        let n = outcome.steps.len();
        println!(
            "{}",
            format!("Solved in {n} guess{}.", if n == 1 { "" } else { "es" }).bright_green()
        );
    } else {
        println!("{}", "Failed to solve within the guess limit.".bright_red());
    }
}
