use crate::cli::OutputFormat;
use crate::error::Result;
use loopkata::core::grid::Grid;
use serde::Serialize;
use std::fmt::Display;

#[derive(Serialize)]
struct GridDocument<'a, T: Serialize + Clone> {
    size: usize,
    grid: &'a Grid<T>,
}

pub fn render_grid<T>(grid: &Grid<T>, format: OutputFormat) -> Result<String>
where
    T: Display + Serialize + Clone,
{
    match format {
        OutputFormat::Text => Ok(grid.to_string()),
        OutputFormat::Toml => {
            let document = GridDocument {
                size: grid.size(),
                grid,
            };
            Ok(toml::to_string(&document)?)
        }
    }
}
