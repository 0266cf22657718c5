//! A weighted quick-union structure over flat cell identifiers.

/// A forest of disjoint sets over the identifiers `0..len`.
///
/// Union by size keeps every tree at depth `O(log len)`, and
/// [`find`](Self::find) additionally compresses the paths it walks.
///
/// Identifiers outside `0..len` are a contract violation and panic on
/// the out-of-range index.
#[derive(Clone, Debug)]
pub struct DisjointSets {
    /// The parent of each element. Roots are their own parent.
    parent: Vec<usize>,

    /// The number of elements in the tree rooted at each element.
    ///
    /// Only meaningful at root entries.
    size: Vec<usize>,
}

impl DisjointSets {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative of the set containing `i`,
    /// compressing the path behind it.
    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Merges the sets containing `i` and `j`.
    ///
    /// The root of the smaller set is attached under the root of the
    /// larger one; on a tie the first argument's root survives.
    /// Returns `false` when the two elements were already in the same
    /// set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut i = self.find(i);
        let mut j = self.find(j);
        if i == j {
            return false;
        }
        if self.size[i] < self.size[j] {
            (i, j) = (j, i);
        }
        self.parent[j] = i;
        self.size[i] += self.size[j];
        true
    }

    /// The size of the set containing `i`.
    pub fn set_size(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.size[root]
    }
}
