//! Chaining with a binary search tree per bucket.

use crate::chain::{ChainDrain, ChainNode, NodeKey};
use crate::error::TableError;
use crate::hashing::bucket_index;
use crate::strategy::{chained_fraction, empty_slots, CollisionStrategy, Counts, Placement};
use core::cmp::Ordering;
use slotmap::SlotMap;

#[derive(Debug)]
pub struct TreeNode {
    key: Box<str>,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl TreeNode {
    fn leaf(key: Box<str>) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

impl ChainNode for TreeNode {
    fn into_parts(self) -> (Box<str>, [Option<NodeKey>; 2]) {
        (self.key, [self.left, self.right])
    }
}

/// Each home slot roots a tree ordered by byte-wise string comparison.
/// Smaller keys descend left, everything else right.
#[derive(Debug)]
pub struct TreeChaining {
    roots: Vec<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, TreeNode>,
}

impl CollisionStrategy for TreeChaining {
    type Drain = ChainDrain<TreeNode>;

    const MAX_OCCUPANCY: f64 = 0.5;

    fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Ok(Self {
            roots: empty_slots(capacity)?,
            nodes: SlotMap::with_key(),
        })
    }

    fn capacity(&self) -> usize {
        self.roots.len()
    }

    fn insert(&mut self, key: Box<str>) -> Placement {
        let home = bucket_index(&key, self.capacity());
        let Some(mut at) = self.roots[home] else {
            self.roots[home] = Some(self.nodes.insert(TreeNode::leaf(key)));
            return Placement::Home;
        };

        // Descend to the first missing child; an equal key anywhere aborts.
        let side = loop {
            let node = &self.nodes[at];
            let ord = key.cmp(&node.key);
            let next = match ord {
                Ordering::Equal => return Placement::Duplicate,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => at = child,
                None => break ord,
            }
        };

        let child = self.nodes.insert(TreeNode::leaf(key));
        let parent = &mut self.nodes[at];
        if side == Ordering::Less {
            parent.left = Some(child);
        } else {
            parent.right = Some(child);
        }
        Placement::Overflow
    }

    fn search(&self, key: &str) -> Option<usize> {
        let mut link = self.roots[bucket_index(key, self.capacity())];
        let mut probes = 0;
        while let Some(at) = link {
            probes += 1;
            let node = &self.nodes[at];
            link = match key.cmp(&*node.key) {
                Ordering::Equal => return Some(probes),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn occupancy(counts: Counts) -> f64 {
        chained_fraction(counts)
    }

    fn drain(self) -> Self::Drain {
        ChainDrain::new(self.roots, self.nodes)
    }
}

#[cfg(test)]
impl TreeChaining {
    /// Depth of `key` in its bucket's tree, root = 1, found by a
    /// breadth-first sweep rather than a descent.
    pub(crate) fn depth_of(&self, key: &str) -> Option<usize> {
        let mut level: Vec<NodeKey> = self.roots[bucket_index(key, self.capacity())]
            .into_iter()
            .collect();
        let mut depth = 1;
        while !level.is_empty() {
            let mut next = Vec::new();
            for k in level {
                let node = &self.nodes[k];
                if &*node.key == key {
                    return Some(depth);
                }
                next.extend(node.left);
                next.extend(node.right);
            }
            level = next;
            depth += 1;
        }
        None
    }

    /// Checks the search-tree ordering of every bucket.
    pub(crate) fn assert_ordered(&self) {
        for root in self.roots.iter().flatten() {
            let mut stack = vec![(*root, None::<&str>, None::<&str>)];
            while let Some((k, lo, hi)) = stack.pop() {
                let node = &self.nodes[k];
                let key: &str = &node.key;
                assert!(lo.map_or(true, |lo| key >= lo), "{key} below {lo:?}");
                assert!(hi.map_or(true, |hi| key < hi), "{key} not below {hi:?}");
                if let Some(l) = node.left {
                    stack.push((l, lo, Some(key)));
                }
                if let Some(r) = node.right {
                    stack.push((r, Some(key), hi));
                }
            }
        }
    }
}
