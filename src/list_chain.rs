//! Chaining with a singly linked list per bucket.

use crate::chain::{ChainDrain, ChainNode, NodeKey};
use crate::error::TableError;
use crate::hashing::bucket_index;
use crate::strategy::{chained_fraction, empty_slots, CollisionStrategy, Counts, Placement};
use slotmap::SlotMap;

#[derive(Debug)]
pub struct ListNode {
    key: Box<str>,
    next: Option<NodeKey>,
}

impl ChainNode for ListNode {
    fn into_parts(self) -> (Box<str>, [Option<NodeKey>; 2]) {
        (self.key, [self.next, None])
    }
}

/// Each home slot heads a list kept in insertion order.
///
/// Known quirk: an insert is compared against the head only. A key that
/// already sits further down the list is appended again, counted as a new
/// word, and carried through later resizes. Lookups still stop at the
/// first copy.
#[derive(Debug)]
pub struct ListChaining {
    heads: Vec<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, ListNode>,
}

impl CollisionStrategy for ListChaining {
    type Drain = ChainDrain<ListNode>;

    const MAX_OCCUPANCY: f64 = 0.5;

    fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Ok(Self {
            heads: empty_slots(capacity)?,
            nodes: SlotMap::with_key(),
        })
    }

    fn capacity(&self) -> usize {
        self.heads.len()
    }

    fn insert(&mut self, key: Box<str>) -> Placement {
        let home = bucket_index(&key, self.capacity());
        let Some(head) = self.heads[home] else {
            let node = self.nodes.insert(ListNode { key, next: None });
            self.heads[home] = Some(node);
            return Placement::Home;
        };
        if self.nodes[head].key == key {
            return Placement::Duplicate;
        }

        let mut tail = head;
        while let Some(next) = self.nodes[tail].next {
            tail = next;
        }
        let node = self.nodes.insert(ListNode { key, next: None });
        self.nodes[tail].next = Some(node);
        Placement::Overflow
    }

    fn search(&self, key: &str) -> Option<usize> {
        let mut link = self.heads[bucket_index(key, self.capacity())];
        let mut probes = 0;
        while let Some(at) = link {
            probes += 1;
            let node = &self.nodes[at];
            if &*node.key == key {
                return Some(probes);
            }
            link = node.next;
        }
        None
    }

    fn occupancy(counts: Counts) -> f64 {
        chained_fraction(counts)
    }

    fn drain(self) -> Self::Drain {
        ChainDrain::new(self.heads, self.nodes)
    }
}

#[cfg(test)]
impl ListChaining {
    /// Keys of `key`'s bucket, head first.
    pub(crate) fn chain_of(&self, key: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut link = self.heads[bucket_index(key, self.capacity())];
        while let Some(at) = link {
            out.push(&*self.nodes[at].key);
            link = self.nodes[at].next;
        }
        out
    }
}
