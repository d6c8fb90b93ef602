use cfg_if::cfg_if;
use zeroize::Zeroize;

use crate::{BLOCK_WORDS, COLUMNS, GROUP_WORDS, GROUPS, ROWS};

cfg_if! {
    if #[cfg(all(feature = "simd", not(blamka_force_soft)))] {
        pub(crate) mod simd;
        pub(crate) use simd::compress;
    } else {
        pub(crate) mod soft;
        pub(crate) use soft::compress;
    }
}

/// How the compression result is written to the destination block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    /// `dst = G(a, b)`
    Overwrite,
    /// `dst ^= G(a, b)`
    Xor,
}

/// Applies `permute` to each group of `layout`, in table order.
///
/// Groups within one layout are disjoint, so the order is irrelevant to the result.
#[inline(always)]
pub(crate) fn permute_groups(
    z: &mut [u64; BLOCK_WORDS],
    layout: &[[usize; GROUP_WORDS]; GROUPS],
    permute: impl Fn(&mut [u64; GROUP_WORDS]),
) {
    for group in layout.iter() {
        let mut v: [u64; GROUP_WORDS] = core::array::from_fn(|i| z[group[i]]);
        permute(&mut v);
        for (&i, w) in group.iter().zip(v) {
            z[i] = w;
        }
    }
}

/// The compression driver shared by every backend.
#[inline(always)]
pub(crate) fn compress_with(
    dst: &mut [u64; BLOCK_WORDS],
    a: &[u64; BLOCK_WORDS],
    b: &[u64; BLOCK_WORDS],
    output: Output,
    permute: impl Fn(&mut [u64; GROUP_WORDS]) + Copy,
) {
    // 1. R = A ⊕ B, kept for the final XOR.
    let mut r = [0u64; BLOCK_WORDS];
    for ((r, a), b) in r.iter_mut().zip(a).zip(b) {
        *r = a ^ b;
    }
    let mut z = r;

    // 2. P over the 8 rows, all of which must finish before step 3.
    permute_groups(&mut z, &ROWS, permute);

    // 3. P over the 8 strided column groups.
    permute_groups(&mut z, &COLUMNS, permute);

    // 4. Z ⊕ R
    match output {
        Output::Overwrite => {
            for ((d, z), r) in dst.iter_mut().zip(&z).zip(&r) {
                *d = z ^ r;
            }
        }
        Output::Xor => {
            for ((d, z), r) in dst.iter_mut().zip(&z).zip(&r) {
                *d ^= z ^ r;
            }
        }
    }

    r.zeroize();
    z.zeroize();
}
