use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TaskError {
    #[error("{0} cannot be written in Roman numerals (supported range is 1..=3999)")]
    RomanOutOfRange(u32),

    #[error("The next permutation of the digits of {value} does not fit in a u64")]
    Overflow { value: u64 },
}
