use itertools::Itertools;
use log::error;

use crate::entities::DistanceResult;
use crate::index::tree::{NodeContent, SphereTree, TreeNode};
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Every node encloses its children and entries, and every entry is covered by exactly one leaf
pub fn tree_is_consistent(tree: &SphereTree) -> bool {
    fn visit(node: &TreeNode, tree: &SphereTree, covered: &mut Vec<usize>) -> bool {
        match &node.content {
            NodeContent::Leaf(range) => {
                if range.is_empty() || range.len() > tree.leaf_size() {
                    error!("leaf covers {} entries", range.len());
                    return false;
                }
                covered.extend(range.clone());
                tree.entries()[range.clone()]
                    .iter()
                    .all(|e| node.bbox.contains_box(&e.bbox))
            }
            NodeContent::Split(children) => children
                .iter()
                .all(|c| node.bbox.contains_box(&c.bbox) && visit(c, tree, covered)),
        }
    }

    let mut covered = vec![];
    if !visit(tree.root(), tree, &mut covered) {
        error!("tree node does not enclose its content");
        return false;
    }
    let all_once = covered.iter().sorted().copied().eq(0..tree.entries().len());
    if !all_once {
        error!("tree leaves do not cover every entry exactly once");
    }
    all_once
}

/// Two results agree on the nearest feature and on the distance (within [`FPA`] tolerance)
pub fn results_match(a: &DistanceResult, b: &DistanceResult) -> bool {
    FPA::from(a) == FPA::from(b) && a.nearest == b.nearest
}
