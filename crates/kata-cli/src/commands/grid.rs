use crate::cli::{RotateArgs, SpiralArgs};
use crate::error::Result;
use crate::render::render_grid;
use anyhow::Context;
use loopkata::core::rotation::rotate_clockwise_times;
use loopkata::core::spiral::spiral_fill;
use std::io::Write;
use tracing::info;

pub fn run_spiral(args: SpiralArgs, out: &mut impl Write) -> Result<()> {
    info!(size = args.size, "Filling spiral grid.");
    let grid = spiral_fill(args.size)?;

    let rendered = render_grid(&grid, args.format)?;
    writeln!(out, "{rendered}").context("Failed to write spiral grid")?;
    Ok(())
}

pub fn run_rotate(args: RotateArgs, out: &mut impl Write) -> Result<()> {
    let RotateArgs {
        mut grid,
        turns,
        format,
    } = args;
    info!(size = grid.size(), turns, "Rotating grid clockwise.");
    rotate_clockwise_times(&mut grid, turns);

    let rendered = render_grid(&grid, format)?;
    writeln!(out, "{rendered}").context("Failed to write rotated grid")?;
    Ok(())
}
