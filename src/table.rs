//! HashTable: counters, occupancy checks and growth on top of a
//! collision strategy.

use crate::error::TableError;
use crate::prime::next_prime;
use crate::strategy::{CollisionStrategy, Counts, Placement};

/// Capacity of a freshly created table.
pub const INITIAL_CAPACITY: usize = 31;

/// A set of words that reports how many comparisons each lookup took.
///
/// The table owns exactly one backing store at a time. Every insert that
/// stores a word checks the strategy's occupancy and, when it is exceeded,
/// grows to the next prime above twice the capacity before returning.
#[derive(Debug)]
pub struct HashTable<S> {
    pub(crate) buckets: S,
    word_count: usize,
    overflow_count: usize,
}

impl<S: CollisionStrategy> HashTable<S> {
    /// Empty table with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Result<Self, TableError> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Ok(Self {
            buckets: S::with_capacity(capacity)?,
            word_count: 0,
            overflow_count: 0,
        })
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of home slots; always prime.
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    /// Words stored away from their home slot.
    pub fn overflow_count(&self) -> usize {
        self.overflow_count
    }

    /// Current load ratio as the strategy measures it.
    pub fn occupancy(&self) -> f64 {
        S::occupancy(self.counts())
    }

    fn counts(&self) -> Counts {
        Counts {
            words: self.word_count,
            overflow: self.overflow_count,
            capacity: self.capacity(),
        }
    }

    /// Inserts `word` unless its placement path already holds it.
    ///
    /// The returned placement describes where the word went before any
    /// growth this insert triggered.
    pub fn insert(&mut self, word: impl Into<Box<str>>) -> Result<Placement, TableError> {
        let placement = self.buckets.insert(word.into());
        match placement {
            Placement::Duplicate => return Ok(placement),
            Placement::Home => {}
            Placement::Overflow => self.overflow_count += 1,
        }
        self.word_count += 1;

        if self.occupancy() > S::MAX_OCCUPANCY {
            self.resize()?;
        }
        Ok(placement)
    }

    /// 1-based number of comparisons needed to find `word`, or `None`.
    pub fn search(&self, word: &str) -> Option<usize> {
        self.buckets.search(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Consumes the table, yielding every stored word in rehash order.
    pub fn into_keys(self) -> S::Drain {
        self.buckets.drain()
    }

    /// Grows to the next prime capacity and re-inserts every word.
    ///
    /// The grown table replaces this one before re-insertion, so inserts
    /// made during the rehash may grow it again. Keys move from the old
    /// store; the old store is released once drained. On error the table
    /// holds the words re-inserted so far.
    fn resize(&mut self) -> Result<(), TableError> {
        let current = self.capacity();
        let capacity = next_prime(current).ok_or(TableError::CapacityOverflow { current })?;
        let grown = Self::with_capacity(capacity)?;
        let old = core::mem::replace(self, grown);
        for key in old.into_keys() {
            self.insert(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DoubleHashing, ListChaining, TreeChaining};

    fn words(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| {
                let mut w = String::new();
                let mut i = i + 1;
                while i > 0 {
                    w.push(char::from(b'a' + (i % 26) as u8));
                    i /= 26;
                }
                w
            })
            .collect()
    }

    /// Invariant: A new table has the initial capacity and no words.
    #[test]
    fn new_table_is_empty() {
        let t: HashTable<TreeChaining> = HashTable::new().unwrap();
        assert_eq!(t.capacity(), INITIAL_CAPACITY);
        assert!(t.is_empty());
        assert_eq!(t.overflow_count(), 0);
        assert_eq!(t.search("cat"), None);
    }

    /// Invariant: Double hashing grows as soon as words / capacity exceeds 0.6.
    #[test]
    fn double_hashing_grows_past_sixty_percent() {
        let mut t: HashTable<DoubleHashing> = HashTable::new().unwrap();
        let ws = words(19);
        // 18 / 31 = 0.58; 19 / 31 = 0.61.
        for w in &ws[..18] {
            t.insert(w.as_str()).unwrap();
        }
        assert_eq!(t.capacity(), 31);
        t.insert(ws[18].as_str()).unwrap();
        assert_eq!(t.capacity(), 67);
        assert_eq!(t.len(), 19);
        for w in &ws {
            assert!(t.contains(w), "{w} lost across resize");
        }
    }

    /// Invariant: Duplicates leave counters untouched and trigger no growth.
    #[test]
    fn duplicate_insert_changes_nothing() {
        let mut t: HashTable<TreeChaining> = HashTable::new().unwrap();
        assert_eq!(t.insert("cat").unwrap(), Placement::Home);
        let before = (t.len(), t.overflow_count(), t.capacity(), t.search("cat"));
        assert_eq!(t.insert("cat").unwrap(), Placement::Duplicate);
        assert_eq!(before, (t.len(), t.overflow_count(), t.capacity(), t.search("cat")));
    }

    /// Invariant: Chaining tables grow once more than half the words overflow,
    /// and every word survives, counted exactly once.
    #[test]
    fn chaining_grows_on_overflow_fraction() {
        let w = crate::hashing::colliding_words(31, 3);
        let mut t: HashTable<ListChaining> = HashTable::new().unwrap();
        t.insert(w[0].as_str()).unwrap();
        t.insert(w[1].as_str()).unwrap();
        // 1 overflow of 2 words is exactly 0.5: no growth yet.
        assert_eq!(t.capacity(), 31);
        assert_eq!(t.overflow_count(), 1);
        assert_eq!(t.insert(w[2].as_str()).unwrap(), Placement::Overflow);
        assert!(t.capacity() > 31);
        assert_eq!(t.len(), 3);
        for word in &w {
            assert!(t.contains(word));
        }
    }

    /// Invariant: `into_keys` yields every stored word exactly once.
    #[test]
    fn into_keys_yields_every_word() {
        let mut t: HashTable<TreeChaining> = HashTable::new().unwrap();
        let ws = words(500);
        for w in &ws {
            t.insert(w.as_str()).unwrap();
        }
        let mut keys: Vec<String> = t.into_keys().map(String::from).collect();
        keys.sort();
        let mut expected = ws.clone();
        expected.sort();
        assert_eq!(keys, expected);
    }
}
