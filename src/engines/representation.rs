// src/engines/representation.rs
use crate::types::{IndexSet, FIBONACCI_SEQUENCE};

/// Candidate indices in descending value order. Index 1 comes before
/// index 0, so a single "1" is always taken from index 1.
pub const TRAVERSAL_ORDER: [usize; 5] = [4, 3, 2, 1, 0];

/// Greedy selection of squares whose values sum to `target`.
///
/// Falls back to [`approximate`] when the greedy pass leaves a remainder,
/// which only happens for targets above 12.
pub fn represent(target: u32) -> IndexSet {
    let mut squares = IndexSet::new();
    let mut remaining = target;

    for &index in TRAVERSAL_ORDER.iter() {
        let value = FIBONACCI_SEQUENCE[index];
        // Guard is keyed by index so the two 1s stay distinct
        if value <= remaining && !squares.contains(index) {
            squares.insert(index);
            remaining -= value;
        }

        if remaining == 0 {
            break;
        }
    }

    if remaining > 0 {
        log::warn!(
            "Could not exactly represent {}, using approximation",
            target
        );
        return approximate(target);
    }

    squares
}

/// Best-effort fallback: largest subset (by the same traversal) whose sum
/// does not exceed `target`. May under-shoot.
pub fn approximate(target: u32) -> IndexSet {
    let mut squares = IndexSet::new();
    let mut sum = 0;

    for &index in TRAVERSAL_ORDER.iter() {
        let value = FIBONACCI_SEQUENCE[index];
        if sum + value <= target && !squares.contains(index) {
            squares.insert(index);
            sum += value;
        }

        if sum == target {
            break;
        }
    }

    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert!(represent(0).is_empty());
    }

    #[test]
    fn test_single_one_prefers_index_one() {
        let squares = represent(1);
        assert_eq!(squares, IndexSet::from_iter([1]));
        assert!(!squares.contains(0));
    }

    #[test]
    fn test_two_ones_use_both_indices() {
        // 12 needs every square, including both 1s
        assert_eq!(represent(12), IndexSet::full());
        // 11 = 5 + 3 + 2 + 1 leaves index 0 unused
        assert_eq!(represent(11), IndexSet::from_iter([4, 3, 2, 1]));
    }

    #[test]
    fn test_approximate_undershoots_out_of_range() {
        let squares = approximate(20);
        assert_eq!(squares, IndexSet::full());
        assert_eq!(squares.value_sum(), 12);
    }

    #[test]
    fn test_approximate_matches_represent_in_range() {
        for target in 0..=12 {
            assert_eq!(approximate(target), represent(target), "target {}", target);
        }
    }
}
