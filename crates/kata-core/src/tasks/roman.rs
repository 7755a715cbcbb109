use super::error::TaskError;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Writes `number` in subtractive Roman notation.
///
/// # Errors
///
/// Returns [`TaskError::RomanOutOfRange`] for zero and for values above 3999,
/// which classical numerals cannot express.
pub fn to_roman(number: u32) -> Result<String, TaskError> {
    if !(1..=3999).contains(&number) {
        return Err(TaskError::RomanOutOfRange(number));
    }

    let mut remaining = number;
    let mut numeral = String::new();
    for &(value, symbol) in &NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(numeral)
}
