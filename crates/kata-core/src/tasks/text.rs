use tracing::{instrument, trace};

/// Checks whether `text` reads the same forwards and backwards, character by character.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// Returns the character index of the first occurrence of `letter`.
pub fn index_of(text: &str, letter: char) -> Option<usize> {
    text.chars().position(|c| c == letter)
}

/// Applies the even/odd shuffle to `text` `iterations` times.
///
/// One iteration moves every character at an even index to the front (keeping
/// their order) and every character at an odd index behind them. The shuffle
/// is a fixed permutation for a given length, so the text comes back to its
/// original form after some period `p`; only `iterations % p` steps are ever
/// materialised.
///
/// ```
/// use loopkata::tasks::text::shuffle_chars;
///
/// assert_eq!(shuffle_chars("012345", 1), "024135");
/// assert_eq!(shuffle_chars("qwerty", 3), "qrwtey");
/// ```
#[instrument(level = "trace", skip(text), fields(len = text.len()))]
pub fn shuffle_chars(text: &str, iterations: usize) -> String {
    let original: Vec<char> = text.chars().collect();
    let mut current = original.clone();

    for step in 1..=iterations {
        current = shuffle_once(&current);
        if current == original {
            let remaining = iterations % step;
            trace!(period = step, remaining, "Shuffle period detected.");
            for _ in 0..remaining {
                current = shuffle_once(&current);
            }
            break;
        }
    }

    current.into_iter().collect()
}

fn shuffle_once(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .step_by(2)
        .chain(chars.iter().skip(1).step_by(2))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_palindromes() {
        assert!(is_palindrome("abcba"));
        assert!(is_palindrome("0123210"));
        assert!(is_palindrome("abba"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("qweqwe"));
    }

    #[test]
    fn palindrome_compares_characters_not_bytes() {
        assert!(is_palindrome("ёжё"));
        assert!(!is_palindrome("ёж"));
    }

    #[test]
    fn index_of_finds_first_occurrence() {
        assert_eq!(index_of("qwerty", 'q'), Some(0));
        assert_eq!(index_of("qwerty", 'e'), Some(2));
        assert_eq!(index_of("qwertye", 'e'), Some(2));
        assert_eq!(index_of("qwerty", 'Q'), None);
        assert_eq!(index_of("qwerty", 'p'), None);
    }

    #[test]
    fn index_of_counts_characters() {
        assert_eq!(index_of("привет", 'е'), Some(4));
    }

    #[test]
    fn shuffle_matches_known_sequences() {
        assert_eq!(shuffle_chars("012345", 1), "024135");
        assert_eq!(shuffle_chars("012345", 2), "043215");
        assert_eq!(shuffle_chars("012345", 3), "031425");
        assert_eq!(shuffle_chars("qwerty", 1), "qetwry");
        assert_eq!(shuffle_chars("qwerty", 2), "qtrewy");
        assert_eq!(shuffle_chars("qwerty", 3), "qrwtey");
    }

    #[test]
    fn zero_iterations_and_short_inputs_are_unchanged() {
        assert_eq!(shuffle_chars("qwerty", 0), "qwerty");
        assert_eq!(shuffle_chars("", 5), "");
        assert_eq!(shuffle_chars("a", 5), "a");
    }

    #[test]
    fn large_iteration_counts_agree_with_naive_application() {
        let text = "the quick brown fox";
        for iterations in [17usize, 100, 1_001] {
            let mut naive: Vec<char> = text.chars().collect();
            for _ in 0..iterations {
                naive = shuffle_once(&naive);
            }
            let expected: String = naive.into_iter().collect();
            assert_eq!(shuffle_chars(text, iterations), expected, "{iterations}");
        }
    }

    #[test]
    fn huge_iteration_counts_finish_quickly() {
        // Sixteen characters return to their starting order every four shuffles.
        let text = "0123456789abcdef";
        assert_eq!(shuffle_chars(text, 4_000_000_000), text);
        assert_eq!(shuffle_chars(text, 4_000_000_001), shuffle_chars(text, 1));
    }
}
