//! Simple combinatorial helper functions
//! on bit sets that allow to enumerate matchings
//! and vertex relabelings.
use itertools::Itertools;

use crate::graph::{EdgeSet, VertexIndex};

fn is_active(n: EdgeSet, index: u32) -> bool {
    (n & (1 << index)) > 0
}

/// Iterator over the indices of the set bits, lowest first.
#[derive(Debug, Clone)]
pub struct SetBits(EdgeSet);

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros();
            debug_assert!(is_active(self.0, index));
            self.0 &= self.0 - 1;
            Some(index as usize)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBits {}

pub fn set_bits(set: EdgeSet) -> SetBits {
    SetBits(set)
}

pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> EdgeSet {
    indices
        .into_iter()
        .fold(0, |set, index| set | (1 << index))
}

/// All subsets of `set` with exactly `size` elements, in
/// lexicographic order of their (increasing) index sequences.
pub fn combinations(set: EdgeSet, size: usize) -> impl Iterator<Item = EdgeSet> {
    set_bits(set)
        .combinations(size)
        .map(from_indices)
}

/// Every relabeling of `0..n` except the identity,
/// in lexicographic order.
pub fn nontrivial_permutations(n: usize) -> impl Iterator<Item = Vec<VertexIndex>> {
    (0..n as VertexIndex).permutations(n).skip(1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_active() {
        let x = 0b01;
        assert!(is_active(x, 0));
        assert!(!is_active(x, 1));

        let y = 0b1010101;
        assert!(is_active(y, 0));
        assert!(!is_active(y, 1));
        assert!(is_active(y, 2));
        assert!(!is_active(y, 3));
        assert!(is_active(y, 4));
        assert!(!is_active(y, 5));
        assert!(is_active(y, 6));
    }

    #[test]
    fn test_set_bits() {
        assert_eq!(set_bits(0).count(), 0);
        assert_eq!(set_bits(0b1010_0110).collect::<Vec<_>>(), vec![1, 2, 5, 7]);
        assert_eq!(set_bits(1 << 63).collect::<Vec<_>>(), vec![63]);
        assert_eq!(set_bits(0b111).len(), 3);
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(from_indices(vec![1, 2, 5, 7]), 0b1010_0110);
        assert_eq!(from_indices(set_bits(0xdead_beef)), 0xdead_beef);
    }

    #[test]
    fn test_combinations() {
        let pairs = combinations(0b1011, 2).collect::<Vec<_>>();
        assert_eq!(pairs, vec![0b0011, 0b1001, 0b1010]);

        assert_eq!(combinations(0b1011, 3).collect::<Vec<_>>(), vec![0b1011]);
        assert_eq!(combinations(0b1011, 4).count(), 0);
        // 6 choose 3
        assert_eq!(combinations(0b11_1111, 3).count(), 20);
    }

    #[test]
    fn test_nontrivial_permutations() {
        let permutations = nontrivial_permutations(3).collect::<Vec<_>>();
        assert_eq!(
            permutations,
            vec![
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0]
            ]
        );
        assert_eq!(nontrivial_permutations(4).count(), 23);
        assert_eq!(nontrivial_permutations(1).count(), 0);
    }
}
