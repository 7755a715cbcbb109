use crate::utils::parser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use loopkata::core::grid::Grid;
use loopkata::tasks::chess::Position;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "kata",
    version,
    about = "kata - Spiral grids, in-place rotation and a catalog of small control-flow drills.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an N×N grid holding 1..=N² in clockwise spiral order.
    Spiral(SpiralArgs),
    /// Rotate a square grid clockwise by quarter turns.
    Rotate(RotateArgs),
    /// Run one of the small numeric and string drills.
    Task(TaskArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Right-aligned columns, one row per line.
    #[default]
    Text,
    /// A TOML document with `size` and `grid` keys.
    Toml,
}

/// Arguments for the `spiral` subcommand.
#[derive(Args, Debug)]
pub struct SpiralArgs {
    /// Side length of the grid.
    #[arg(value_name = "SIZE")]
    pub size: usize,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `rotate` subcommand.
#[derive(Args, Debug)]
pub struct RotateArgs {
    /// The grid, rows separated by ';' and cells by ',' (e.g., '1,2,3;4,5,6;7,8,9').
    #[arg(value_name = "GRID", allow_hyphen_values = true, value_parser = parser::parse_grid)]
    pub grid: Grid<i64>,

    /// Number of clockwise quarter turns to apply.
    #[arg(short, long, default_value_t = 1, value_name = "INT")]
    pub turns: usize,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `task` subcommand.
#[derive(Args, Debug)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

/// Available drills.
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Check whether a number is zero or positive.
    Positive {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },
    /// Print the largest of three numbers.
    Max {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Check whether a queen attacks a king (positions as 'x,y').
    Queen {
        #[arg(value_parser = parser::parse_position)]
        queen: Position,
        #[arg(value_parser = parser::parse_position)]
        king: Position,
    },
    /// Check whether three side lengths form an isosceles triangle.
    Isosceles { a: f64, b: f64, c: f64 },
    /// Write a number in Roman numerals.
    Roman { number: u32 },
    /// Spell out a written number symbol by symbol.
    Words {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Check whether a text is a palindrome.
    Palindrome { text: String },
    /// Find the character index of the first occurrence of a letter.
    IndexOf { text: String, letter: char },
    /// Check whether a number contains a digit.
    ContainsDigit {
        #[arg(allow_negative_numbers = true)]
        number: i64,
        digit: u8,
    },
    /// Find the next larger number made of the same digits.
    NearestBigger { number: u64 },
    /// Find the index whose left and right sums are equal.
    Balance {
        #[arg(
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true,
            value_name = "VALUES"
        )]
        values: Vec<i64>,
    },
    /// Sort numbers in ascending order.
    Sort {
        #[arg(
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true,
            value_name = "VALUES"
        )]
        values: Vec<i64>,
    },
    /// Apply the even/odd character shuffle a number of times.
    Shuffle { text: String, iterations: usize },
}
