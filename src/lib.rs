//! Argon2 block compression function (RFC 9106, §3.5)
//!
//! `G(X, Y) = P(P(X ⊕ Y)) ⊕ X ⊕ Y` over 1024-byte blocks, where the inner `P`
//! applications run the BlaMka round permutation first over the 8 rows of a
//! block and then over its 8 strided column groups. This crate only provides
//! that kernel; the memory-filling loop, addressing and hashing belong to the
//! caller.
//!
//! ```
//! use blamka::{compress, Block};
//!
//! let a = Block::from([1u64; 128]);
//! let b = Block::from([2u64; 128]);
//! let z = compress(&a, &b);
//! assert_eq!(z, compress(&b, &a));
//! ```

#![no_std]
#![cfg_attr(all(feature = "simd", not(blamka_force_soft)), feature(portable_simd))]

pub use zeroize; // Re-export zeroize for downstream users

// --- Block type and entry points ---

mod block;
pub use block::{compress, compress_into, compress_xor_into, Block};

// --- Error type ---

mod error;
pub use error::{Error, Result};

// --- Round function ---

pub(crate) mod arx;

// --- Backends ---

pub(crate) mod backends;

// --- Constants ---

/// Number of 64-bit words in a block.
pub const BLOCK_WORDS: usize = 128;
/// Size of a block in bytes.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 8;

const GROUP_WORDS: usize = 16;
const GROUPS: usize = BLOCK_WORDS / GROUP_WORDS;

/// Row layout: group `r` is words `[16r, 16r + 16)`.
const ROWS: [[usize; GROUP_WORDS]; GROUPS] = row_groups();
/// Column layout: group `g` takes words `2g` and `2g + 1` from each of the 8 rows.
const COLUMNS: [[usize; GROUP_WORDS]; GROUPS] = column_groups();

const fn row_groups() -> [[usize; GROUP_WORDS]; GROUPS] {
    let mut groups = [[0; GROUP_WORDS]; GROUPS];
    let mut g = 0;
    while g < GROUPS {
        let mut i = 0;
        while i < GROUP_WORDS {
            groups[g][i] = GROUP_WORDS * g + i;
            i += 1;
        }
        g += 1;
    }
    groups
}

const fn column_groups() -> [[usize; GROUP_WORDS]; GROUPS] {
    let mut groups = [[0; GROUP_WORDS]; GROUPS];
    let mut g = 0;
    while g < GROUPS {
        let mut row = 0;
        while row < GROUPS {
            groups[g][2 * row] = 2 * g + GROUP_WORDS * row;
            groups[g][2 * row + 1] = 2 * g + 1 + GROUP_WORDS * row;
            row += 1;
        }
        g += 1;
    }
    groups
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::{COLUMNS, ROWS, BLOCK_WORDS};

    #[test]
    fn test_layouts_cover_every_word_once() {
        for layout in [ROWS, COLUMNS] {
            let mut seen = [0u8; BLOCK_WORDS];
            for group in layout.iter() {
                for &i in group.iter() {
                    seen[i] += 1;
                }
            }
            assert!(seen.iter().all(|&n| n == 1));
        }
    }

    #[test]
    fn test_column_layout_matches_stride() {
        assert_eq!(
            COLUMNS[0],
            [0, 1, 16, 17, 32, 33, 48, 49, 64, 65, 80, 81, 96, 97, 112, 113]
        );
        assert_eq!(
            COLUMNS[7],
            [14, 15, 30, 31, 46, 47, 62, 63, 78, 79, 94, 95, 110, 111, 126, 127]
        );
        assert_eq!(ROWS[3][0], 48);
        assert_eq!(ROWS[3][15], 63);
    }
}
