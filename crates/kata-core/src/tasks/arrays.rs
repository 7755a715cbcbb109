use tracing::{instrument, trace};

/// Finds the first index whose left-hand sum equals its right-hand sum.
///
/// The element at the returned index belongs to neither side, and an empty
/// side sums to zero. Sums are accumulated in `i128`, so no input overflows.
///
/// ```
/// use loopkata::tasks::arrays::balance_index;
///
/// assert_eq!(balance_index(&[1, 2, 5, 3, 0]), Some(2));
/// assert_eq!(balance_index(&[1, 2, 3, 4, 5]), None);
/// ```
pub fn balance_index(values: &[i64]) -> Option<usize> {
    let total: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let mut left = 0i128;
    for (index, &value) in values.iter().enumerate() {
        let right = total - left - i128::from(value);
        if left == right {
            return Some(index);
        }
        left += i128::from(value);
    }
    None
}

/// Sorts `values` in ascending order in place.
///
/// Quicksort with a middle-element pivot and two converging cursors. Pending
/// sub-ranges are kept on an explicit stack instead of the call stack, and the
/// larger half is pushed first so the stack stays logarithmic in the input
/// length. Incomparable values (such as `NaN`) leave their neighbours in an
/// unspecified but valid order.
#[instrument(level = "trace", skip_all, fields(len = values.len()))]
pub fn sort_ascending<T: PartialOrd + Clone>(values: &mut [T]) {
    if values.len() < 2 {
        return;
    }

    let mut pending = vec![(0usize, values.len() - 1)];
    let mut partitions = 0usize;

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let split = partition(values, low, high);
        partitions += 1;

        // `split` lies in low+1..=high, so both halves are strictly smaller.
        let left = (low, split - 1);
        let right = (split, high);
        if left.1 - left.0 > right.1 - right.0 {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }

    trace!(partitions, "Sort complete.");
}

/// Splits `values[low..=high]` around its middle element.
///
/// Returns the first index of the upper part: every element before it is `<=`
/// the pivot and every element from it onwards is `>=` the pivot.
fn partition<T: PartialOrd + Clone>(values: &mut [T], low: usize, high: usize) -> usize {
    let pivot = values[low + (high - low) / 2].clone();
    let mut i = low;
    let mut j = high;

    while i <= j {
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }
        if i <= j {
            values.swap(i, j);
            i += 1;
            if j == 0 {
                break;
            }
            j -= 1;
        }
    }
    i
}
