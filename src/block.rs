//! The 1024-byte Argon2 memory block and the compression entry points.

use core::ops::{BitXor, BitXorAssign};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends::{self, Output};
use crate::{Error, Result, BLOCK_BYTES, BLOCK_WORDS};

/// A 1024-byte memory block (128 × 64-bit words).
///
/// Word `i` holds bytes `[8i, 8i + 8)` of the block in little-endian order.
/// Blocks are wiped on drop.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[repr(C, align(64))]
pub struct Block([u64; BLOCK_WORDS]);

impl Block {
    /// The all-zero block.
    pub const ZERO: Self = Self([0; BLOCK_WORDS]);

    /// Wraps 128 words as a block.
    pub const fn new(words: [u64; BLOCK_WORDS]) -> Self {
        Self(words)
    }

    pub const fn as_words(&self) -> &[u64; BLOCK_WORDS] {
        &self.0
    }

    pub fn as_words_mut(&mut self) -> &mut [u64; BLOCK_WORDS] {
        &mut self.0
    }

    /// Decodes a block from its little-endian byte form.
    pub fn from_bytes(bytes: &[u8; BLOCK_BYTES]) -> Self {
        Self(core::array::from_fn(|i| {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            u64::from_le_bytes(word)
        }))
    }

    /// Encodes the block as 1024 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; BLOCK_BYTES] {
        let mut out = [0u8; BLOCK_BYTES];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Compression function G (RFC 9106 §3.5).
    ///
    /// Computes `G(X, Y) = P(P(X ⊕ Y)) ⊕ X ⊕ Y`, where the first `P` runs over
    /// the 8 rows of 16 consecutive words and the second over the 8 column
    /// groups made of words `2i`, `2i + 1` of every row. Neither input is
    /// modified. `G(X, Y) == G(Y, X)` and `G(X, X)` is the zero block.
    pub fn compress(x: &Self, y: &Self) -> Self {
        let mut z = Self::ZERO;
        backends::compress(&mut z.0, &x.0, &y.0, Output::Overwrite);
        z
    }

    /// Writes `G(x, y)` into `self` without a temporary block.
    pub fn compress_from(&mut self, x: &Self, y: &Self) {
        backends::compress(&mut self.0, &x.0, &y.0, Output::Overwrite);
    }

    /// XORs `G(x, y)` into `self`.
    ///
    /// This is the Argon2 version 1.3 update for every pass after the first.
    pub fn compress_xor_from(&mut self, x: &Self, y: &Self) {
        backends::compress(&mut self.0, &x.0, &y.0, Output::Xor);
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[u64; BLOCK_WORDS]> for Block {
    fn from(words: [u64; BLOCK_WORDS]) -> Self {
        Self(words)
    }
}

impl From<&[u8; BLOCK_BYTES]> for Block {
    fn from(bytes: &[u8; BLOCK_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; BLOCK_BYTES] = bytes
            .try_into()
            .map_err(|_| Error::InvalidLength { len: bytes.len() })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl BitXorAssign<&Block> for Block {
    fn bitxor_assign(&mut self, rhs: &Block) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a ^= b;
        }
    }
}

impl BitXor<&Block> for &Block {
    type Output = Block;

    fn bitxor(self, rhs: &Block) -> Block {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

/// Compression function G: returns a fresh block, leaving `a` and `b` untouched.
#[inline]
pub fn compress(a: &Block, b: &Block) -> Block {
    Block::compress(a, b)
}

/// Overwrites `dst` with `G(a, b)`.
#[inline]
pub fn compress_into(dst: &mut Block, a: &Block, b: &Block) {
    dst.compress_from(a, b);
}

/// Sets `dst ^= G(a, b)`.
#[inline]
pub fn compress_xor_into(dst: &mut Block, a: &Block, b: &Block) {
    dst.compress_xor_from(a, b);
}
