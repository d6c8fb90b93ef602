use super::{compress_with, Output};
use crate::{arx::permute, BLOCK_WORDS};

/// The scalar backend: one 16-word group at a time.
#[inline]
pub(crate) fn compress(
    dst: &mut [u64; BLOCK_WORDS],
    a: &[u64; BLOCK_WORDS],
    b: &[u64; BLOCK_WORDS],
    output: Output,
) {
    compress_with(dst, a, b, output, permute);
}

#[cfg(test)]
mod tests {
    use super::super::permute_groups;
    use super::{compress, Output};
    use crate::{arx::permute, BLOCK_WORDS, COLUMNS, ROWS};

    fn sample(seed: u64) -> [u64; BLOCK_WORDS] {
        core::array::from_fn(|i| (i as u64 + seed).wrapping_mul(0x9e37_79b9_7f4a_7c15).rotate_left(17))
    }

    #[test]
    fn test_group_order_does_not_matter() {
        let start = sample(3);

        let mut forward = start;
        permute_groups(&mut forward, &ROWS, permute);
        permute_groups(&mut forward, &COLUMNS, permute);

        let mut rows = ROWS;
        rows.reverse();
        let mut columns = COLUMNS;
        columns.swap(0, 5);
        columns.swap(2, 7);
        let mut shuffled = start;
        permute_groups(&mut shuffled, &rows, permute);
        permute_groups(&mut shuffled, &columns, permute);

        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_xor_output_accumulates() {
        let a = sample(1);
        let b = sample(2);

        let mut fresh = [0u64; BLOCK_WORDS];
        compress(&mut fresh, &a, &b, Output::Overwrite);

        let prior = sample(9);
        let mut acc = prior;
        compress(&mut acc, &a, &b, Output::Xor);
        for i in 0..BLOCK_WORDS {
            assert_eq!(acc[i], prior[i] ^ fresh[i]);
        }
    }

    #[test]
    fn test_unit_word_diffuses() {
        let mut e = [0u64; BLOCK_WORDS];
        e[0] = 1;
        let mut z = [0u64; BLOCK_WORDS];
        compress(&mut z, &e, &[0; BLOCK_WORDS], Output::Overwrite);
        assert_eq!(z[0], 0x13f7_22ff_1cf4_c6f4);
        assert_eq!(z[1], 0x05ce_51cf_32da_98b2);
        assert_eq!(z[2], 0xbd35_e511_5d7a_0a6b);
        assert_eq!(z[127], 0x4b12_eb43_09e1_bc7a);
    }
}
