//! Runtime choice of collision strategy.

use crate::error::TableError;
use crate::strategy::Placement;
use crate::table::HashTable;
use crate::{DoubleHashing, ListChaining, TreeChaining};

/// Collision-resolution policy, selectable at runtime.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Binary search tree per bucket; grows when over half the words overflow.
    #[default]
    TreeChaining,
    /// Linked list per bucket; grows when over half the words overflow.
    ListChaining,
    /// Open addressing with a per-key stride; grows above 60% load.
    DoubleHashing,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::TreeChaining,
        Strategy::ListChaining,
        Strategy::DoubleHashing,
    ];
}

/// A [`HashTable`] whose strategy was picked at runtime.
#[derive(Debug)]
pub enum WordTable {
    Tree(HashTable<TreeChaining>),
    List(HashTable<ListChaining>),
    Double(HashTable<DoubleHashing>),
}

macro_rules! each_table {
    ($table:expr, $t:ident => $body:expr) => {
        match $table {
            WordTable::Tree($t) => $body,
            WordTable::List($t) => $body,
            WordTable::Double($t) => $body,
        }
    };
}

impl WordTable {
    pub fn new(strategy: Strategy) -> Result<Self, TableError> {
        Ok(match strategy {
            Strategy::TreeChaining => WordTable::Tree(HashTable::new()?),
            Strategy::ListChaining => WordTable::List(HashTable::new()?),
            Strategy::DoubleHashing => WordTable::Double(HashTable::new()?),
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            WordTable::Tree(_) => Strategy::TreeChaining,
            WordTable::List(_) => Strategy::ListChaining,
            WordTable::Double(_) => Strategy::DoubleHashing,
        }
    }

    pub fn insert(&mut self, word: impl Into<Box<str>>) -> Result<Placement, TableError> {
        each_table!(self, t => t.insert(word))
    }

    pub fn search(&self, word: &str) -> Option<usize> {
        each_table!(self, t => t.search(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        each_table!(self, t => t.contains(word))
    }

    pub fn len(&self) -> usize {
        each_table!(self, t => t.len())
    }

    pub fn is_empty(&self) -> bool {
        each_table!(self, t => t.is_empty())
    }

    pub fn capacity(&self) -> usize {
        each_table!(self, t => t.capacity())
    }

    pub fn overflow_count(&self) -> usize {
        each_table!(self, t => t.overflow_count())
    }

    pub fn occupancy(&self) -> f64 {
        each_table!(self, t => t.occupancy())
    }
}
