/// Returns `true` for zero and every positive number.
///
/// `-0.0` compares equal to zero and is therefore positive; `NaN` is not.
pub fn is_positive(number: f64) -> bool {
    number >= 0.0
}

/// Returns the largest of three values using comparisons only.
///
/// Ties resolve to the earliest argument. Values that do not compare (such as
/// `NaN`) never replace the current maximum.
pub fn max_of_three<T: PartialOrd + Copy>(a: T, b: T, c: T) -> T {
    let mut max = a;
    if b > max {
        max = b;
    }
    if c > max {
        max = c;
    }
    max
}

/// Checks whether three side lengths describe a non-degenerate isosceles triangle.
///
/// Every side must be strictly positive, at least two sides must be equal, and
/// the two equal sides together must be longer than the third.
pub fn is_isosceles_triangle(a: f64, b: f64, c: f64) -> bool {
    if !(a > 0.0 && b > 0.0 && c > 0.0) {
        return false;
    }
    (a == b && a + b > c) || (a == c && a + c > b) || (b == c && b + c > a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_as_positive() {
        assert!(is_positive(10.0));
        assert!(is_positive(0.0));
        assert!(is_positive(-0.0));
        assert!(!is_positive(-5.0));
        assert!(!is_positive(f64::NAN));
    }

    #[test]
    fn max_of_three_picks_largest() {
        assert_eq!(max_of_three(1, 2, 3), 3);
        assert_eq!(max_of_three(-5, 0, 5), 5);
        assert_eq!(max_of_three(-0.1, 0.0, 0.2), 0.2);
        assert_eq!(max_of_three(9, 2, 3), 9);
        assert_eq!(max_of_three(1, 7, 3), 7);
    }

    #[test]
    fn max_of_three_ignores_nan_challengers() {
        assert_eq!(max_of_three(1.0, f64::NAN, 0.5), 1.0);
    }

    #[test]
    fn isosceles_requires_equal_pair_and_triangle_inequality() {
        assert!(!is_isosceles_triangle(1.0, 2.0, 3.0));
        assert!(!is_isosceles_triangle(3.0, 1.0, 2.0));
        assert!(is_isosceles_triangle(2.0, 3.0, 2.0));
        assert!(is_isosceles_triangle(3.0, 2.0, 2.0));
        assert!(is_isosceles_triangle(2.0, 2.0, 3.0));
        assert!(!is_isosceles_triangle(2.0, 2.0, 5.0));
    }

    #[test]
    fn isosceles_rejects_non_positive_sides() {
        assert!(!is_isosceles_triangle(3.0, 0.0, 3.0));
        assert!(!is_isosceles_triangle(-2.0, -2.0, 1.0));
    }
}
