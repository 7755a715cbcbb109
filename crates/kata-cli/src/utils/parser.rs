use loopkata::core::grid::{Grid, GridError};
use loopkata::tasks::chess::Position;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid cell '{cell}' in row {row}. Expected an integer.")]
    InvalidCell { row: usize, cell: String },

    #[error(transparent)]
    Shape(#[from] GridError),

    #[error("Invalid position '{0}'. Expected 'x,y' (e.g., '4,7').")]
    InvalidPosition(String),
}

/// Parses a grid written as rows separated by `;` and cells separated by `,`,
/// e.g. `1,2,3;4,5,6;7,8,9`. Whitespace around cells is ignored and an empty
/// string denotes the empty grid.
pub fn parse_grid(input: &str) -> Result<Grid<i64>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Grid::from_rows(Vec::new())?);
    }

    let rows = input
        .split(';')
        .enumerate()
        .map(|(row, line)| {
            line.split(',')
                .map(|cell| {
                    let cell = cell.trim();
                    cell.parse::<i64>().map_err(|_| ParseError::InvalidCell {
                        row,
                        cell: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(rows)?)
}

/// Parses a board square written as `x,y`.
pub fn parse_position(input: &str) -> Result<Position, ParseError> {
    let invalid = || ParseError::InvalidPosition(input.to_string());
    let (x, y) = input.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(x, y))
}
