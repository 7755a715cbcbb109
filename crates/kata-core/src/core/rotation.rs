use super::grid::Grid;
use tracing::instrument;

/// Rotates `grid` 90 degrees clockwise in place and returns it.
///
/// After the call, the cell at `(row, col)` holds the value that was at
/// `(size - 1 - col, row)`. The grid is processed ring by ring from the border
/// inward; along each ring's top edge, every position starts a 4-cycle
/// (top → right → bottom → left) that is resolved with three swaps, so no
/// second grid is allocated and `T` need not be `Clone`. A lone centre cell of
/// an odd-sized grid is never touched.
///
/// ```
/// use loopkata::core::grid::Grid;
/// use loopkata::core::rotation::rotate_clockwise;
///
/// let mut grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
/// rotate_clockwise(&mut grid);
/// assert_eq!(grid.into_rows(), vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
/// ```
#[instrument(level = "debug", skip_all, fields(size = grid.size()))]
pub fn rotate_clockwise<T>(grid: &mut Grid<T>) -> &mut Grid<T> {
    let size = grid.size();
    for ring in 0..size / 2 {
        let last = size - 1 - ring;
        for offset in 0..last - ring {
            let top = (ring, ring + offset);
            let right = (ring + offset, last);
            let bottom = (last, last - offset);
            let left = (last - offset, ring);

            grid.swap(top, right);
            grid.swap(top, bottom);
            grid.swap(top, left);
        }
    }
    grid
}

/// Applies [`rotate_clockwise`] `quarter_turns % 4` times.
pub fn rotate_clockwise_times<T>(grid: &mut Grid<T>, quarter_turns: usize) -> &mut Grid<T> {
    for _ in 0..quarter_turns % 4 {
        rotate_clockwise(grid);
    }
    grid
}
