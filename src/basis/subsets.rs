use super::check_share_count;
use crate::error::Result;

/// An ascending, immutable list of element indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    elements: Vec<u8>,
}

impl Subset {
    /// Decodes the subset whose membership bits are `mask` (bit i = element i).
    fn from_mask(mask: u32, n: usize) -> Self {
        let elements = (0..n as u8).filter(|&i| mask & (1 << i) != 0).collect();
        Self { elements }
    }

    pub fn elements(&self) -> &[u8] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: usize) -> bool {
        self.elements.iter().any(|&e| e as usize == element)
    }
}

/// All subsets of `{0, .., n-1}`, split by cardinality parity.
#[derive(Debug, Clone)]
pub struct SubsetCollection {
    n: usize,
    even: Vec<Subset>,
    odd: Vec<Subset>,
}

impl SubsetCollection {
    /// Size of the ground set.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Subsets of even cardinality (the empty set comes first).
    pub fn even(&self) -> &[Subset] {
        &self.even
    }

    /// Subsets of odd cardinality.
    pub fn odd(&self) -> &[Subset] {
        &self.odd
    }

    /// Number of subsets per group, `2^(n-1)`.
    pub fn group_len(&self) -> usize {
        self.even.len()
    }
}

/// Enumerates the `2^n` subsets of `{0, .., n-1}` by binary counting and
/// partitions them by the parity of their cardinality.
///
/// Each group receives exactly `2^(n-1)` subsets, in counting order.
///
/// # Errors
///
/// `n` outside `2..=8`.
pub fn build_subsets(n: usize) -> Result<SubsetCollection> {
    check_share_count(n)?;

    let half = 1usize << (n - 1);
    let mut even = Vec::with_capacity(half);
    let mut odd = Vec::with_capacity(half);

    for mask in 0u32..(1 << n) {
        let subset = Subset::from_mask(mask, n);

        if mask.count_ones() % 2 == 0 {
            even.push(subset);
        } else {
            odd.push(subset);
        }
    }

    Ok(SubsetCollection { n, even, odd })
}
