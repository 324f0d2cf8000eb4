//! Subset generation for the `subsets` CLI.
//!
//! The power set is built by recursive backtracking over a single shared path
//! buffer. For every element the routine first explores the branch that leaves
//! the element out, then the branch that takes it, and pops it again before
//! returning. That order fixes the enumeration: for `[1, 2, 3]` the result is
//! `[]`, `[3]`, `[2]`, `[2, 3]`, `[1]`, `[1, 3]`, `[1, 2]`, `[1, 2, 3]`.

use crate::input::MAX_ELEMENTS;

/// Append every subset of `items[index..]`, prefixed by `current`, to `result`.
///
/// `current` is the path buffer for the branch being explored. It is restored
/// to its entry state before this function returns, so a call with `index == 0`
/// and an empty buffer leaves the buffer empty and `result` holding all
/// `2^n` subsets.
pub fn generate_subsets<T: Clone>(
    items: &[T],
    index: usize,
    current: &mut Vec<T>,
    result: &mut Vec<Vec<T>>,
) {
    if index == items.len() {
        result.push(current.clone());
        return;
    }

    generate_subsets(items, index + 1, current, result);

    current.push(items[index].clone());
    generate_subsets(items, index + 1, current, result);
    current.pop();
}

/// Return every subset of `items` in enumeration order, using fresh buffers.
pub fn all_subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut current = Vec::with_capacity(items.len());
    let mut result = Vec::with_capacity(result_capacity(items.len()));
    generate_subsets(items, 0, &mut current, &mut result);
    debug_assert!(current.is_empty());
    result
}

/// Up-front reservation for the result collection. Larger listings grow on demand.
fn result_capacity(n: usize) -> usize {
    if n > MAX_ELEMENTS {
        return 0;
    }
    subset_count(n).unwrap_or(0)
}

/// Number of subsets of an `n`-element sequence, or `None` if `2^n` overflows.
pub fn subset_count(n: usize) -> Option<usize> {
    u32::try_from(n)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_for_three() {
        let out = all_subsets(&[1, 2, 3]);
        let expected: Vec<Vec<i32>> = vec![
            vec![],
            vec![3],
            vec![2],
            vec![2, 3],
            vec![1],
            vec![1, 3],
            vec![1, 2],
            vec![1, 2, 3],
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_input() {
        let out = all_subsets::<i64>(&[]);
        assert_eq!(out, vec![Vec::<i64>::new()]);
    }

    #[test]
    fn test_buffer_unwound() {
        let items = [4, 5, 6, 7];
        let mut current = Vec::new();
        let mut result = Vec::new();
        generate_subsets(&items, 0, &mut current, &mut result);
        assert!(current.is_empty());
        assert_eq!(result.len(), 16);
    }

    #[test]
    fn test_prefix_is_kept() {
        // Entering mid-way extends whatever the caller already put in the buffer.
        let items = [1, 2, 3];
        let mut current = vec![9];
        let mut result = Vec::new();
        generate_subsets(&items, 2, &mut current, &mut result);
        assert_eq!(result, vec![vec![9], vec![9, 3]]);
        assert_eq!(current, vec![9]);
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(subset_count(0), Some(1));
        assert_eq!(subset_count(3), Some(8));
        assert_eq!(subset_count(usize::BITS as usize), None);
    }

    #[test]
    fn test_result_capacity_is_bounded() {
        assert_eq!(result_capacity(3), 8);
        assert_eq!(result_capacity(MAX_ELEMENTS), 1 << MAX_ELEMENTS);
        assert_eq!(result_capacity(MAX_ELEMENTS + 1), 0);
        assert_eq!(result_capacity(62), 0);
    }

    #[test]
    fn test_repeated_elements_not_deduplicated() {
        let out = all_subsets(&[7, 7]);
        assert_eq!(out, vec![vec![], vec![7], vec![7], vec![7, 7]]);
    }
}
