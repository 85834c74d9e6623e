use std::ops::Range;

use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::ChordLowerBound;
use crate::geometry::geodesic;
use crate::geometry::primitives::AABox;
use crate::index::tree::{QueryProbe, TreeEntry};

/// Skip a node only if its lower bound exceeds the best angle found so far by more than this (radians).
/// Absorbs the rounding difference between the 3D bounding volumes and the haversine scoring.
pub const PRUNE_TOLERANCE: f64 = 1e-12;

/// Node of the [`SphereTree`](crate::index::tree::SphereTree)
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// Encloses the bounding boxes of all entries below this node
    pub bbox: AABox,
    pub content: NodeContent,
}

#[derive(Clone, Debug)]
pub enum NodeContent {
    /// Range of entries in the tree's entry array
    Leaf(Range<usize>),
    Split(Box<[TreeNode; 2]>),
}

impl TreeNode {
    /// Recursively builds a node over `entries`, which start at position `offset` in the tree's entry array.
    /// Reorders `entries` so that every node covers a contiguous range.
    pub fn new(entries: &mut [TreeEntry], offset: usize, leaf_size: usize) -> Self {
        debug_assert!(!entries.is_empty());
        let bbox = AABox::enclosing(entries.iter().map(|e| &e.bbox))
            .expect("a node is never built over zero entries");

        if entries.len() <= leaf_size {
            return TreeNode {
                bbox,
                content: NodeContent::Leaf(offset..offset + entries.len()),
            };
        }

        //split at the median centroid along the axis in which the centroids are spread the widest
        let axis = {
            let centroid_boxes = entries
                .iter()
                .map(|e| AABox::from_point(e.bbox.centroid()))
                .collect::<Vec<_>>();
            AABox::enclosing(centroid_boxes.iter())
                .expect("a node is never built over zero entries")
                .longest_axis()
        };
        let mid = entries.len() / 2;
        entries.select_nth_unstable_by_key(mid, |e| OrderedFloat(e.bbox.centroid().axis(axis)));

        let (left, right) = entries.split_at_mut(mid);
        let children = [
            TreeNode::new(left, offset, leaf_size),
            TreeNode::new(right, offset + mid, leaf_size),
        ];

        TreeNode {
            bbox,
            content: NodeContent::Split(Box::new(children)),
        }
    }

    /// Lower bound on the central angle between the probe and anything contained in this node
    #[inline(always)]
    pub fn angle_lower_bound(&self, probe: &QueryProbe) -> f64 {
        geodesic::chord_to_angle(self.bbox.sq_chord_lower_bound(&probe.vector).sqrt())
    }

    /// Depth-first branch-and-bound search, closest child first.
    /// `best` holds the closest `(angle, entry index)` found so far and is updated in place.
    pub fn search(&self, probe: &QueryProbe, entries: &[TreeEntry], best: &mut Option<(f64, usize)>) {
        match &self.content {
            NodeContent::Leaf(range) => {
                for i in range.clone() {
                    let angle = entries[i].angle_to(probe);
                    let improves = match *best {
                        None => true,
                        Some((best_angle, best_i)) => {
                            (angle, entries[i].feature) < (best_angle, entries[best_i].feature)
                        }
                    };
                    if improves {
                        *best = Some((angle, i));
                    }
                }
            }
            NodeContent::Split(children) => {
                let bounds = children.each_ref().map(|c| c.angle_lower_bound(probe));
                let order = match bounds[0] <= bounds[1] {
                    true => [0, 1],
                    false => [1, 0],
                };
                for c in order {
                    let prunable = match *best {
                        Some((best_angle, _)) => bounds[c] > best_angle + PRUNE_TOLERANCE,
                        None => false,
                    };
                    if !prunable {
                        children[c].search(probe, entries, best);
                    }
                }
            }
        }
    }

    pub fn n_nodes(&self) -> usize {
        match &self.content {
            NodeContent::Leaf(_) => 1,
            NodeContent::Split(children) => 1 + children.iter().map(|c| c.n_nodes()).sum::<usize>(),
        }
    }

    pub fn depth(&self) -> usize {
        match &self.content {
            NodeContent::Leaf(_) => 1,
            NodeContent::Split(children) => 1 + children.iter().map(|c| c.depth()).max().unwrap_or(0),
        }
    }
}
