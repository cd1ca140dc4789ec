//! wordprobe: a word-membership hash table that reports how many
//! comparisons each lookup took.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: measure average search cost of a word list against a
//!   dictionary under three collision strategies that share hashing and
//!   growth rules.
//! - Layers:
//!   - `hashing` / `prime`: stateless bucket, stride and capacity maths.
//!   - `CollisionStrategy`: bucket storage plus placement, lookup and
//!     drain rules. Implemented by `TreeChaining`, `ListChaining` and
//!     `DoubleHashing`.
//!   - `HashTable<S>`: word and overflow counters, occupancy checks and
//!     prime-sized growth on top of any strategy.
//!   - `WordTable`: picks the strategy at runtime.
//!   - `driver`: reads and validates word lists and aggregates probe
//!     counts.
//!
//! Constraints
//! - Single-threaded and synchronous; each table exclusively owns its
//!   storage.
//! - Stores presence only; no values, no deletion.
//! - Capacity is prime and more than doubles on every resize.
//!
//! Ownership
//! - Chained nodes live in a `SlotMap` arena owned by the strategy;
//!   links are arena keys. There are no recursive owning pointers, so
//!   teardown and rehash never recurse.
//! - Resize swaps a freshly allocated table in and drains the old one
//!   into it. Keys move across; nothing is copied.
//!
//! Probe counts
//! - A probe is one key comparison. Search follows exactly the path
//!   insert used, so the count for a word is its tree depth, list
//!   position, or probe-sequence length, counting from 1.
//!
//! Failure
//! - Backing arrays are reserved fallibly and surface as
//!   `TableError::OutOfMemory`. Callers should treat any `TableError` as
//!   fatal to the table.

mod chain;
mod double_hash;
pub mod driver;
mod error;
pub mod hashing;
mod list_chain;
pub mod prime;
mod strategy;
mod table;
mod table_proptest;
mod tree_chain;
mod word_table;

// Public surface
pub use double_hash::DoubleHashing;
pub use error::{DriverError, TableError};
pub use list_chain::ListChaining;
pub use strategy::{CollisionStrategy, Counts, Placement};
pub use table::{HashTable, INITIAL_CAPACITY};
pub use tree_chain::TreeChaining;
pub use word_table::{Strategy, WordTable};
