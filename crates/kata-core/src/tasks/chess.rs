/// A square on the board, as file (`x`) and rank (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Checks whether a queen on `queen` attacks `king`: same file, same rank or
/// same diagonal. Blocking pieces are not modelled.
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    let dx = queen.x.abs_diff(king.x);
    let dy = queen.y.abs_diff(king.y);
    dx == 0 || dy == 0 || dx == dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_along_diagonal() {
        assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
        assert!(can_queen_capture_king(Position::new(6, 2), Position::new(2, 6)));
        assert!(can_queen_capture_king(Position::new(8, 8), Position::new(1, 1)));
    }

    #[test]
    fn captures_along_file_and_rank() {
        assert!(can_queen_capture_king(Position::new(2, 1), Position::new(2, 8)));
        assert!(can_queen_capture_king(Position::new(1, 4), Position::new(7, 4)));
    }

    #[test]
    fn misses_off_line_squares() {
        assert!(!can_queen_capture_king(Position::new(1, 1), Position::new(2, 8)));
        assert!(!can_queen_capture_king(Position::new(4, 4), Position::new(6, 5)));
    }
}
