use super::grid::{Grid, GridError};
use tracing::{instrument, trace};

/// Builds a `size`×`size` grid holding `1..=size²` in clockwise spiral order.
///
/// Filling starts in the top-left corner, runs right along the top row, then
/// down, left and up, and keeps turning inward until every cell has been
/// written exactly once.
///
/// ```
/// use loopkata::core::spiral::spiral_fill;
///
/// let grid = spiral_fill(3).unwrap();
/// assert_eq!(grid.into_rows(), vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
/// ```
///
/// # Errors
///
/// Returns [`GridError::SizeOverflow`] if `size²` does not fit in a `u64` cell
/// or in the addressable cell count.
#[instrument(level = "debug", skip_all, fields(size = size))]
pub fn spiral_fill(size: usize) -> Result<Grid<u64>, GridError> {
    let total = size
        .checked_mul(size)
        .and_then(|cells| u64::try_from(cells).ok())
        .ok_or(GridError::SizeOverflow { size })?;

    let mut grid = Grid::new(size, 0u64);
    if size == 0 {
        return Ok(grid);
    }

    // Unfilled cells always form the rectangle top..=bottom × left..=right.
    let (mut top, mut bottom) = (0, size - 1);
    let (mut left, mut right) = (0, size - 1);
    let mut next = 1u64;

    while next <= total {
        for col in left..=right {
            grid[(top, col)] = next;
            next += 1;
        }
        top += 1;

        for row in top..=bottom {
            grid[(row, right)] = next;
            next += 1;
        }
        if next > total {
            break;
        }
        right -= 1;

        for col in (left..=right).rev() {
            grid[(bottom, col)] = next;
            next += 1;
        }
        if next > total {
            break;
        }
        bottom -= 1;

        for row in (top..=bottom).rev() {
            grid[(row, left)] = next;
            next += 1;
        }
        left += 1;

        trace!(top, bottom, left, right, next, "Completed spiral lap.");
    }

    Ok(grid)
}
