use rand::Rng;

/// Returns the `n`-th largest value of `values` using randomized quickselect.
///
/// # Arguments
/// * `values` - The slice to select from; it is partitioned in place and
///   callers must not rely on its order afterwards
/// * `n` - The 1-based rank: `n = 1` is the maximum, `n = values.len()`
///   is the minimum
///
/// # Returns
/// The value that would sit at position `n` if `values` were sorted in
/// descending order. Duplicates are counted positionally, so any one of
/// several equal elements may satisfy a tied rank; the returned value is
/// the same either way.
///
/// # Panics
/// If `n` is zero or exceeds `values.len()`, or if `values` is empty.
/// Callers that cannot guarantee the bound should validate first (the
/// query layer in this crate does).
///
/// # Examples
/// ```
/// use nmax::select::select_nth_largest;
///
/// let mut values = [5, 5, 5, 3, 1];
/// assert_eq!(select_nth_largest(&mut values, 2), 5);
/// assert_eq!(select_nth_largest(&mut values, 4), 3);
/// ```
///
/// # Complexity
/// * Time: expected O(L), worst case O(L^2) where L is the slice length
/// * Space: O(1) beyond the slice itself; the search range shrinks in a
///   loop rather than by recursion, so stack depth stays constant
pub fn select_nth_largest<T: Ord + Copy>(values: &mut [T], n: usize) -> T {
    assert!(n >= 1 && n <= values.len(), "n is out of bounds");
    let mut rng = rand::thread_rng();
    let mut left = 0;
    let mut right = values.len() - 1;
    let mut n = n;
    loop {
        if left == right {
            return values[left];
        }
        let pivot_index = partition(values, left, right, &mut rng);
        // Elements at pivot_index..=right are >= every element left of the
        // pivot, so this many of the largest values live on the right.
        let count_from_right = right - pivot_index + 1;
        if count_from_right == n {
            return values[pivot_index];
        } else if count_from_right > n {
            left = pivot_index + 1;
        } else {
            n -= count_from_right;
            right = pivot_index - 1;
        }
    }
}

/// Lomuto partition of `values[left..=right]` around a randomly chosen
/// pivot. Elements `<=` the pivot end up to its left, the rest to its
/// right. Returns the pivot's final index.
fn partition<T: Ord + Copy, R: Rng>(
    values: &mut [T],
    left: usize,
    right: usize,
    rng: &mut R,
) -> usize {
    let pivot_index = rng.gen_range(left..=right);
    values.swap(pivot_index, right);
    let pivot = values[right];
    let mut i = left;
    for j in left..right {
        if values[j] <= pivot {
            values.swap(i, j);
            i += 1;
        }
    }
    values.swap(i, right);
    i
}
