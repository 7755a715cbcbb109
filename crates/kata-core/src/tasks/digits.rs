use super::error::TaskError;
use itertools::Itertools;
use phf::phf_map;

static SYMBOL_WORDS: phf::Map<char, &'static str> = phf_map! {
    '0' => "zero",
    '1' => "one",
    '2' => "two",
    '3' => "three",
    '4' => "four",
    '5' => "five",
    '6' => "six",
    '7' => "seven",
    '8' => "eight",
    '9' => "nine",
    '.' => "point",
    ',' => "point",
    '-' => "minus",
};

/// Spells out a written number symbol by symbol.
///
/// Digits become their English names, both `.` and `,` become `point`, and `-`
/// becomes `minus`. Words are separated by single spaces; any other character
/// is dropped.
///
/// ```
/// use loopkata::tasks::digits::number_to_words;
///
/// assert_eq!(number_to_words("-10,5"), "minus one zero point five");
/// ```
pub fn number_to_words(number: &str) -> String {
    number
        .chars()
        .filter_map(|symbol| SYMBOL_WORDS.get(&symbol).copied())
        .join(" ")
}

/// Checks whether the decimal form of `number` contains `digit`.
///
/// The sign is ignored. A `digit` above 9 never matches.
pub fn contains_digit(number: i64, digit: u8) -> bool {
    if digit > 9 {
        return false;
    }
    let digit = u64::from(digit);
    let mut rest = number.unsigned_abs();
    loop {
        if rest % 10 == digit {
            return true;
        }
        rest /= 10;
        if rest == 0 {
            return false;
        }
    }
}

/// Returns the smallest number greater than `number` that uses exactly the same
/// digits, or `number` itself when its digits are already in descending order.
///
/// # Errors
///
/// Returns [`TaskError::Overflow`] when the rearranged digits exceed `u64::MAX`.
pub fn nearest_bigger(number: u64) -> Result<u64, TaskError> {
    let mut digits = decimal_digits(number);

    let Some(pivot) = (0..digits.len().saturating_sub(1))
        .rev()
        .find(|&i| digits[i] < digits[i + 1])
    else {
        return Ok(number);
    };

    // The suffix after `pivot` is non-increasing, so the last larger digit is
    // the smallest one that still exceeds the pivot.
    let successor = (pivot + 1..digits.len())
        .rev()
        .find(|&j| digits[j] > digits[pivot])
        .unwrap_or(pivot + 1);
    digits.swap(pivot, successor);
    digits[pivot + 1..].reverse();

    digits
        .iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
        .ok_or(TaskError::Overflow { value: number })
}

fn decimal_digits(number: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    let mut rest = number;
    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spells_digits_and_separators() {
        assert_eq!(number_to_words("1"), "one");
        assert_eq!(number_to_words("10"), "one zero");
        assert_eq!(number_to_words("-10"), "minus one zero");
        assert_eq!(number_to_words("10.5"), "one zero point five");
        assert_eq!(number_to_words("10,5"), "one zero point five");
        assert_eq!(number_to_words("1950.2"), "one nine five zero point two");
    }

    #[test]
    fn skips_unknown_symbols_without_doubling_spaces() {
        assert_eq!(number_to_words("1 000"), "one zero zero zero");
        assert_eq!(number_to_words("+7e"), "seven");
        assert_eq!(number_to_words(""), "");
    }

    #[test]
    fn finds_contained_digits() {
        assert!(contains_digit(123450, 5));
        assert!(contains_digit(123450, 1));
        assert!(contains_digit(123450, 0));
        assert!(!contains_digit(12345, 0));
        assert!(!contains_digit(12345, 6));
    }

    #[test]
    fn contains_digit_handles_zero_sign_and_range() {
        assert!(contains_digit(0, 0));
        assert!(contains_digit(-908, 9));
        assert!(contains_digit(i64::MIN, 8));
        assert!(!contains_digit(12345, 12));
    }

    #[test]
    fn nearest_bigger_rearranges_digits() {
        assert_eq!(nearest_bigger(12345), Ok(12354));
        assert_eq!(nearest_bigger(123450), Ok(123504));
        assert_eq!(nearest_bigger(12344), Ok(12434));
        assert_eq!(nearest_bigger(123440), Ok(124034));
        assert_eq!(nearest_bigger(90822), Ok(92028));
        assert_eq!(nearest_bigger(321321), Ok(322113));
    }

    #[test]
    fn nearest_bigger_returns_input_when_no_larger_arrangement_exists() {
        assert_eq!(nearest_bigger(0), Ok(0));
        assert_eq!(nearest_bigger(7), Ok(7));
        assert_eq!(nearest_bigger(54321), Ok(54321));
        assert_eq!(nearest_bigger(1000), Ok(1000));
    }

    #[test]
    fn nearest_bigger_reports_overflow() {
        assert_eq!(
            nearest_bigger(u64::MAX),
            Err(TaskError::Overflow { value: u64::MAX })
        );
    }
}
