use super::{compress_with, Output};
use crate::{arx::permute_simd, BLOCK_WORDS};

/// The portable SIMD backend: each group is processed as four `u64x4` rows.
#[inline]
pub(crate) fn compress(
    dst: &mut [u64; BLOCK_WORDS],
    a: &[u64; BLOCK_WORDS],
    b: &[u64; BLOCK_WORDS],
    output: Output,
) {
    compress_with(dst, a, b, output, permute_simd);
}

#[cfg(test)]
mod tests {
    use super::{compress, Output};
    use crate::{arx::permute, backends::compress_with, BLOCK_WORDS};

    #[test]
    fn test_simd_matches_scalar() {
        let a: [u64; BLOCK_WORDS] = core::array::from_fn(|i| (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        let b: [u64; BLOCK_WORDS] = core::array::from_fn(|i| !(i as u64) << 7);

        let mut scalar = [0u64; BLOCK_WORDS];
        compress_with(&mut scalar, &a, &b, Output::Overwrite, permute);
        let mut vector = [0u64; BLOCK_WORDS];
        compress(&mut vector, &a, &b, Output::Overwrite);

        assert_eq!(scalar, vector);
    }
}
