//! Enumeration of k-combinations in lexicographic index order.
//!
//! The order matters to callers: combinations are laid out on screen next to
//! the triangle cell whose value counts them, so the sequence has to be
//! deterministic and match the usual combinatorial generation order.

/// Iterator over the index tuples of all k-combinations of `0..n`.
///
/// Tuples are strictly increasing internally and are produced in
/// lexicographic order: the rightmost index that can still grow is advanced,
/// then every index to its right is reset to consecutive successors.
#[derive(Debug, Clone)]
pub struct Combinations {
    indices: Vec<usize>,
    n: usize,
    first: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            indices: (0..k).collect(),
            n,
            first: true,
            // k > n means zero ways to choose, not an error.
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.indices.clone());
        }
        let k = self.indices.len();
        // Find the rightmost index that has not reached its final position.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// All ways to choose `k` items from `items`.
///
/// Each combination is an owned sequence of clones in source order, so the
/// caller gets independent instances to lay out and animate. `k == 0` yields
/// a single empty combination; `k > items.len()` yields nothing.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    Combinations::new(items.len(), k)
        .map(|tuple| tuple.iter().map(|&i| items[i].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{combinations, Combinations};
    use crate::combinatorics::binomial;
    use num_bigint::BigUint;

    #[test]
    fn choose_two_of_four() {
        let items = ['A', 'B', 'C', 'D'];
        let all = combinations(&items, 2);
        assert_eq!(
            all,
            vec![
                vec!['A', 'B'],
                vec!['A', 'C'],
                vec!['A', 'D'],
                vec!['B', 'C'],
                vec!['B', 'D'],
                vec!['C', 'D'],
            ]
        );
    }

    #[test]
    fn choose_zero_yields_single_empty() {
        let items = [1, 2, 3];
        assert_eq!(combinations(&items, 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn choose_more_than_available_yields_nothing() {
        let items = [1, 2, 3];
        assert!(combinations(&items, 4).is_empty());
    }

    #[test]
    fn choose_all_yields_source_order() {
        let items = ["square", "circle", "triangle"];
        assert_eq!(
            combinations(&items, 3),
            vec![vec!["square", "circle", "triangle"]]
        );
    }

    #[test]
    fn tuples_are_lexicographically_increasing() {
        let all: Vec<Vec<usize>> = Combinations::new(7, 3).collect();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
        for tuple in &all {
            for w in tuple.windows(2) {
                assert!(w[0] < w[1]);
            }
        }
    }

    #[test]
    fn count_matches_binomial() {
        // Brute-force cross-check against the closed form.
        for n in 0..=10usize {
            let items: Vec<usize> = (0..n).collect();
            for k in 0..=n {
                let count = combinations(&items, k).len();
                assert_eq!(
                    BigUint::from(count),
                    binomial(n as u32, k as u32),
                    "C({n}, {k})"
                );
            }
        }
    }
}
