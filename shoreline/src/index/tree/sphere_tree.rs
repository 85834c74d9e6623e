use crate::index::tree::{QueryProbe, TreeEntry, TreeNode};

/// Bounding volume hierarchy over the vertices or segments of a coastline, embedded on the unit sphere.
///
/// Every node holds an axis-aligned 3D box enclosing its entries. As chord length is strictly monotone
/// in the central angle, the distance from a query to a box is an exact lower bound on the angle to
/// anything inside it. Branches that cannot beat the best entry found so far are skipped, which
/// keeps the search exact.
#[derive(Clone, Debug)]
pub struct SphereTree {
    root: TreeNode,
    entries: Vec<TreeEntry>,
    leaf_size: usize,
}

impl SphereTree {
    /// Builds a tree over `entries`. Leaves hold at most `leaf_size` entries.
    pub fn new(mut entries: Vec<TreeEntry>, leaf_size: usize) -> Self {
        assert!(!entries.is_empty(), "cannot build a tree without entries");
        let leaf_size = leaf_size.max(1);
        let root = TreeNode::new(&mut entries, 0, leaf_size);
        Self {
            root,
            entries,
            leaf_size,
        }
    }

    /// Returns the entry closest to the probe and the central angle (radians) to it.
    /// Ties are resolved in favor of the lowest (ring, index).
    pub fn nearest(&self, probe: &QueryProbe) -> (&TreeEntry, f64) {
        let mut best = None;
        self.root.search(probe, &self.entries, &mut best);
        let (angle, idx) = best.expect("a non-empty tree always yields a nearest entry");
        (&self.entries[idx], angle)
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }
}
