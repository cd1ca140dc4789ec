//! Hash functions driving bucket and probe selection.
//!
//! Both hashes read the key as bytes widened to `u32` and wrap on
//! overflow. Results only need to be stable within one process.

/// Multiplier of the polynomial rolling hash.
const MULTIPLIER: u32 = 31;

/// Polynomial rolling hash over every byte of `key`:
/// `hash = byte + 31 * hash`, left to right, modulo 2^32.
#[inline]
pub fn primary_hash(key: &str) -> u32 {
    key.bytes().fold(0u32, |hash, b| {
        u32::from(b).wrapping_add(MULTIPLIER.wrapping_mul(hash))
    })
}

/// Step hash for double hashing, built from the first two and last two
/// bytes: `((c0 * c1) + (c[n-1] * c[n-2])) * n`.
///
/// Positions outside the key read as 0, so keys shorter than two bytes
/// still produce a value (0 for one- and zero-byte keys).
#[inline]
pub fn secondary_step(key: &str) -> u32 {
    let bytes = key.as_bytes();
    let n = bytes.len();
    let at = |i: Option<usize>| -> u32 {
        i.and_then(|i| bytes.get(i)).map_or(0, |&b| u32::from(b))
    };
    let head = at(Some(0)).wrapping_mul(at(Some(1)));
    let tail = at(n.checked_sub(1)).wrapping_mul(at(n.checked_sub(2)));
    head.wrapping_add(tail).wrapping_mul(n as u32)
}

/// Home bucket of `key` in a table of `capacity` slots.
#[inline]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    primary_hash(key) as usize % capacity
}

/// Probe stride for double hashing, always in `1..capacity`.
///
/// With a prime `capacity` any such stride visits every slot before
/// returning to the start.
#[inline]
pub fn probe_step(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 1);
    secondary_step(key) as usize % (capacity - 1) + 1
}

/// `n` distinct three-letter words sharing one home bucket at `capacity`.
#[cfg(test)]
pub(crate) fn colliding_words(capacity: usize, n: usize) -> Vec<String> {
    let words = (0..26u32 * 26 * 26).map(|i| {
        [i / 676, i / 26 % 26, i % 26]
            .iter()
            .map(|&c| char::from(b'a' + c as u8))
            .collect::<String>()
    });
    let target = bucket_index("cat", capacity);
    let found: Vec<String> = words
        .filter(|w| bucket_index(w, capacity) == target)
        .take(n)
        .collect();
    assert_eq!(found.len(), n, "not enough colliding words");
    found
}
