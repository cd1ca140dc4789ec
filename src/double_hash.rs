//! Open addressing with double hashing.

use crate::error::TableError;
use crate::hashing::{bucket_index, probe_step};
use crate::strategy::{empty_slots, CollisionStrategy, Counts, Placement};

/// Keys live directly in the backing array. A collision advances by a
/// per-key stride until an empty slot or the key itself is reached.
#[derive(Debug)]
pub struct DoubleHashing {
    slots: Vec<Option<Box<str>>>,
}

impl DoubleHashing {
    /// Slot indices visited for `key`, home first. Ends after one full cycle.
    fn probe_sequence(&self, key: &str) -> impl Iterator<Item = usize> {
        let capacity = self.capacity();
        let home = bucket_index(key, capacity);
        let step = probe_step(key, capacity);
        let mut pos = Some(home);
        core::iter::from_fn(move || {
            let at = pos?;
            let next = (at + step) % capacity;
            pos = (next != home).then_some(next);
            Some(at)
        })
    }
}

impl CollisionStrategy for DoubleHashing {
    type Drain = core::iter::Flatten<std::vec::IntoIter<Option<Box<str>>>>;

    const MAX_OCCUPANCY: f64 = 0.6;

    fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Ok(Self {
            slots: empty_slots(capacity)?,
        })
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn insert(&mut self, key: Box<str>) -> Placement {
        let mut placement = Placement::Home;
        let mut vacant = None;
        for at in self.probe_sequence(&key) {
            match &self.slots[at] {
                None => {
                    vacant = Some(at);
                    break;
                }
                Some(stored) if *stored == key => return Placement::Duplicate,
                Some(_) => placement = Placement::Overflow,
            }
        }
        let at = vacant.expect("table grows before every slot is occupied");
        self.slots[at] = Some(key);
        placement
    }

    fn search(&self, key: &str) -> Option<usize> {
        for (probes, at) in self.probe_sequence(key).enumerate() {
            match &self.slots[at] {
                None => return None,
                Some(stored) if &**stored == key => return Some(probes + 1),
                Some(_) => {}
            }
        }
        None
    }

    fn occupancy(counts: Counts) -> f64 {
        counts.words as f64 / counts.capacity as f64
    }

    fn drain(self) -> Self::Drain {
        self.slots.into_iter().flatten()
    }
}

#[cfg(test)]
impl DoubleHashing {
    /// Number of slots the probe sequence visits before landing on the
    /// slot that holds `key`, found by locating the slot first.
    pub(crate) fn insertion_probes(&self, key: &str) -> Option<usize> {
        let target = self
            .slots
            .iter()
            .position(|s| s.as_deref() == Some(key))?;
        let capacity = self.capacity();
        let step = probe_step(key, capacity);
        let mut at = bucket_index(key, capacity);
        let mut visited = 1;
        while at != target {
            at = (at + step) % capacity;
            visited += 1;
        }
        Some(visited)
    }
}
