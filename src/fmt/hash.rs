//! 32-bit FNV-1a, used only to pick a palette slot for a tag.
//!
//! Changing the hash recolors every existing tag, so the constants are fixed.

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

/// FNV-1a over the UTF-8 bytes of `s`.
#[must_use]
pub const fn fnv1a_32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut hash = OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(PRIME);
        i += 1;
    }
    hash
}

/// `hash(tag) mod len`. `len` must be non-zero.
#[must_use]
pub const fn palette_index(tag: &str, len: usize) -> usize {
    fnv1a_32(tag) as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(fnv1a_32(""), OFFSET_BASIS);
    }

    #[test]
    fn known_vectors() {
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
        assert_eq!(fnv1a_32("svc"), 3_947_336_941);
        assert_eq!(fnv1a_32("http"), 3_378_792_613);
    }

    #[test]
    fn index_stays_in_range() {
        for tag in ["", "a", "svc", "db", "http", "worker", "ünïcode"] {
            assert!(palette_index(tag, 7) < 7);
        }
    }
}
