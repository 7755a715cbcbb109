use crate::cli::{TaskArgs, TaskCommands};
use crate::error::Result;
use anyhow::Context;
use loopkata::tasks::arrays::{balance_index, sort_ascending};
use loopkata::tasks::chess::can_queen_capture_king;
use loopkata::tasks::digits::{contains_digit, nearest_bigger, number_to_words};
use loopkata::tasks::numeric::{is_isosceles_triangle, is_positive, max_of_three};
use loopkata::tasks::roman::to_roman;
use loopkata::tasks::text::{index_of, is_palindrome, shuffle_chars};
use std::io::Write;
use tracing::debug;

const NOT_FOUND: &str = "none";

pub fn run(args: TaskArgs, out: &mut impl Write) -> Result<()> {
    let answer = answer(args.command)?;
    writeln!(out, "{answer}").context("Failed to write task result")?;
    Ok(())
}

fn answer(command: TaskCommands) -> Result<String> {
    debug!(?command, "Running task.");

    let answer = match command {
        TaskCommands::Positive { number } => is_positive(number).to_string(),
        TaskCommands::Max { a, b, c } => max_of_three(a, b, c).to_string(),
        TaskCommands::Queen { queen, king } => can_queen_capture_king(queen, king).to_string(),
        TaskCommands::Isosceles { a, b, c } => is_isosceles_triangle(a, b, c).to_string(),
        TaskCommands::Roman { number } => to_roman(number)?,
        TaskCommands::Words { number } => number_to_words(&number),
        TaskCommands::Palindrome { text } => is_palindrome(&text).to_string(),
        TaskCommands::IndexOf { text, letter } => {
            index_of(&text, letter).map_or_else(|| NOT_FOUND.to_string(), |i| i.to_string())
        }
        TaskCommands::ContainsDigit { number, digit } => {
            contains_digit(number, digit).to_string()
        }
        TaskCommands::NearestBigger { number } => nearest_bigger(number)?.to_string(),
        TaskCommands::Balance { values } => {
            balance_index(&values).map_or_else(|| NOT_FOUND.to_string(), |i| i.to_string())
        }
        TaskCommands::Sort { mut values } => {
            sort_ascending(&mut values);
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }
        TaskCommands::Shuffle { text, iterations } => shuffle_chars(&text, iterations),
    };

    Ok(answer)
}
