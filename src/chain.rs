//! Node arena shared by the chaining strategies.
//!
//! Home slots link to their first node; every node, head or overflow,
//! lives in one `SlotMap` owned by the strategy. Links are arena
//! keys, so each node has exactly one owner (the arena) and exactly one
//! parent link. Releasing the arena releases every chain at once without
//! walking it.

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Link from a home slot or parent node to a chained node.
    pub struct NodeKey;
}

/// A chained node that can give up its key and child links.
pub trait ChainNode {
    /// Splits the node into its key and its links, in visiting order.
    fn into_parts(self) -> (Box<str>, [Option<NodeKey>; 2]);
}

/// Pre-order drain over every chain of a store, bucket by bucket.
///
/// Traversal uses an explicit stack; chains of any length or depth are
/// drained without recursion. Keys move out of the arena as they are
/// yielded.
pub struct ChainDrain<N> {
    heads: std::vec::IntoIter<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, N>,
    stack: Vec<NodeKey>,
}

impl<N: ChainNode> ChainDrain<N> {
    pub(crate) fn new(heads: Vec<Option<NodeKey>>, nodes: SlotMap<NodeKey, N>) -> Self {
        Self {
            heads: heads.into_iter(),
            nodes,
            stack: Vec::new(),
        }
    }
}

impl<N: ChainNode> Iterator for ChainDrain<N> {
    type Item = Box<str>;

    fn next(&mut self) -> Option<Box<str>> {
        loop {
            if let Some(k) = self.stack.pop() {
                let Some(node) = self.nodes.remove(k) else {
                    continue;
                };
                let (key, [first, second]) = node.into_parts();
                // Push in reverse so `first` is visited next.
                self.stack.extend(second);
                self.stack.extend(first);
                return Some(key);
            }
            let head = self.heads.next()?;
            self.stack.extend(head);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}
