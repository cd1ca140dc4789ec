//! Word-list driver: builds a table from a dictionary and measures the
//! average lookup cost of a query list against it.

use crate::error::DriverError;
use crate::word_table::{Strategy, WordTable};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line buffer size of the word lists. A raw line, terminator included,
/// must be shorter than `MAX_LINE - 1` bytes.
pub const MAX_LINE: usize = 200;

/// Probe totals over a query list.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LookupStats {
    /// Query lines read.
    pub queried: u64,
    /// Queries found in the table.
    pub matched: u64,
    /// Sum of probe counts over matched queries.
    pub total_probes: u64,
}

impl LookupStats {
    /// Mean probes per matched query; `None` if nothing matched.
    pub fn average(&self) -> Option<f64> {
        (self.matched > 0).then(|| self.total_probes as f64 / self.matched as f64)
    }
}

/// Validates one raw line and returns its lowercased word.
///
/// Trailing `\n`/`\r` are stripped. The remainder must be ASCII letters.
pub fn normalize_line(raw: &[u8], path: &Path) -> Result<String, DriverError> {
    if raw.len() >= MAX_LINE - 1 {
        return Err(DriverError::LineTooLong {
            path: path.to_path_buf(),
        });
    }
    let end = raw
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    let word = &raw[..end];
    if !word.iter().all(u8::is_ascii_alphabetic) {
        return Err(DriverError::InvalidCharacter {
            path: path.to_path_buf(),
        });
    }
    Ok(word.iter().map(|&b| char::from(b.to_ascii_lowercase())).collect())
}

/// Calls `f` with every validated word of `reader`, stopping at the first error.
pub fn for_each_word<R, F>(mut reader: R, path: &Path, mut f: F) -> Result<(), DriverError>
where
    R: BufRead,
    F: FnMut(String) -> Result<(), DriverError>,
{
    let mut raw = Vec::with_capacity(MAX_LINE);
    loop {
        raw.clear();
        let n = reader
            .read_until(b'\n', &mut raw)
            .map_err(|source| DriverError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            return Ok(());
        }
        f(normalize_line(&raw, path)?)?;
    }
}

/// Inserts every word of `reader` into `table`.
pub fn load_dictionary<R: BufRead>(
    table: &mut WordTable,
    reader: R,
    path: &Path,
) -> Result<(), DriverError> {
    for_each_word(reader, path, |word| {
        table.insert(word)?;
        Ok(())
    })
}

/// Searches every word of `reader`, summing probe counts over hits.
pub fn measure<R: BufRead>(
    table: &WordTable,
    reader: R,
    path: &Path,
) -> Result<LookupStats, DriverError> {
    let mut stats = LookupStats::default();
    for_each_word(reader, path, |word| {
        stats.queried += 1;
        if let Some(probes) = table.search(&word) {
            stats.matched += 1;
            stats.total_probes += probes as u64;
        }
        Ok(())
    })?;
    Ok(stats)
}

fn open(path: &Path) -> Result<BufReader<File>, DriverError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DriverError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds a table from `dictionary` and measures `queries` against it.
pub fn run(strategy: Strategy, dictionary: &Path, queries: &Path) -> Result<LookupStats, DriverError> {
    let mut table = WordTable::new(strategy)?;
    load_dictionary(&mut table, open(dictionary)?, dictionary)?;
    measure(&table, open(queries)?, queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("words.txt")
    }

    /// Invariant: Terminators are stripped and letters lowercased.
    #[test]
    fn normalizes_letters() {
        assert_eq!(normalize_line(b"Cat\n", path()).unwrap(), "cat");
        assert_eq!(normalize_line(b"DOG\r\n", path()).unwrap(), "dog");
        assert_eq!(normalize_line(b"bird", path()).unwrap(), "bird");
        assert_eq!(normalize_line(b"\n", path()).unwrap(), "");
    }

    /// Invariant: Non-letters anywhere in the word are rejected.
    #[test]
    fn rejects_non_letters() {
        let bad: [&[u8]; 4] = [b"can't\n", b"two words\n", b"x1\n", b"caf\xc3\xa9\n"];
        for raw in bad {
            assert!(matches!(
                normalize_line(raw, path()),
                Err(DriverError::InvalidCharacter { .. })
            ));
        }
    }

    /// Invariant: Lines of `MAX_LINE - 1` bytes or more are rejected.
    #[test]
    fn rejects_long_lines() {
        let mut ok = vec![b'a'; MAX_LINE - 3];
        ok.push(b'\n');
        assert!(normalize_line(&ok, path()).is_ok());

        let mut long = vec![b'a'; MAX_LINE - 2];
        long.push(b'\n');
        let err = normalize_line(&long, path()).unwrap_err();
        assert!(matches!(err, DriverError::LineTooLong { .. }));
        assert_eq!(err.to_string(), "line in words.txt too long");
    }

    /// Invariant: Average is only defined when something matched.
    #[test]
    fn average_needs_a_match() {
        assert_eq!(LookupStats::default().average(), None);
        let s = LookupStats {
            queried: 5,
            matched: 2,
            total_probes: 3,
        };
        assert_eq!(s.average(), Some(1.5));
    }

    /// Invariant: Misses count as queries but add no probes.
    #[test]
    fn measure_sums_hits_only() {
        let mut table = WordTable::new(Strategy::TreeChaining).unwrap();
        load_dictionary(&mut table, &b"cat\ndog\nbird\n"[..], path()).unwrap();
        let stats = measure(&table, &b"cat\nfish\ndog\n"[..], path()).unwrap();
        assert_eq!(stats.queried, 3);
        assert_eq!(stats.matched, 2);
        let expected = (table.search("cat").unwrap() + table.search("dog").unwrap()) as u64;
        assert_eq!(stats.total_probes, expected);
    }
}
