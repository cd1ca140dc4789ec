//! Error types for the table core and the word-list driver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the table core. Both are fatal to the table: a caller
/// that receives one should discard the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("cannot allocate a backing array of {slots} slots")]
    OutOfMemory { slots: usize },
    #[error("no prime capacity above {current} fits in usize")]
    CapacityOverflow { current: usize },
}

/// Failures while reading and validating word lists.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line in {} too long", path.display())]
    LineTooLong { path: PathBuf },
    #[error("{} contains invalid character(s)", path.display())]
    InvalidCharacter { path: PathBuf },
    #[error(transparent)]
    Table(#[from] TableError),
}
