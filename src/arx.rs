#[cfg(all(feature = "simd", not(blamka_force_soft)))]
use core::simd::prelude::*;

use crate::GROUP_WORDS;

/// BlaMka multiply-add: `x + y + 2 * lo32(x) * lo32(y)` modulo 2^64.
#[cfg_attr(all(feature = "simd", not(blamka_force_soft)), allow(dead_code))]
#[inline(always)]
fn fblamka(x: u64, y: u64) -> u64 {
    let m = u64::from(x as u32) * u64::from(y as u32);
    x.wrapping_add(y).wrapping_add(m.wrapping_mul(2))
}

/// The scalar quarter-round (Argon2's `GB`), applied to one quad of words.
#[cfg_attr(all(feature = "simd", not(blamka_force_soft)), allow(dead_code))]
#[inline(always)]
pub(crate) fn mix(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    let a = fblamka(a, b);
    let d = (d ^ a).rotate_right(32);
    let c = fblamka(c, d);
    let b = (b ^ c).rotate_right(24);

    let a = fblamka(a, b);
    let d = (d ^ a).rotate_right(16);
    let c = fblamka(c, d);
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// The scalar round permutation `P` over a 16-word group.
///
/// The column sub-pass must finish before the diagonal one starts.
#[cfg_attr(all(feature = "simd", not(blamka_force_soft)), allow(dead_code))]
#[inline(always)]
pub(crate) fn permute(v: &mut [u64; GROUP_WORDS]) {
    // Columns.
    (v[0], v[4], v[8], v[12]) = mix(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = mix(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = mix(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = mix(v[3], v[7], v[11], v[15]);

    // Diagonals.
    (v[0], v[5], v[10], v[15]) = mix(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = mix(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = mix(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = mix(v[3], v[4], v[9], v[14]);
}

/// The portable SIMD quarter-round: four independent quads, one per lane.
#[cfg(all(feature = "simd", not(blamka_force_soft)))]
#[inline(always)]
pub(crate) fn mix_simd(a: u64x4, b: u64x4, c: u64x4, d: u64x4) -> (u64x4, u64x4, u64x4, u64x4) {
    const LO: u64x4 = u64x4::splat(0xffff_ffff);
    const WORD_BITS: u64x4 = u64x4::splat(64);

    #[inline(always)]
    fn fblamka(x: u64x4, y: u64x4) -> u64x4 {
        let m = (x & LO) * (y & LO);
        x + y + (m << u64x4::splat(1))
    }

    #[inline(always)]
    fn rotate_right(val: u64x4, amount: u32) -> u64x4 {
        let n = u64x4::splat(u64::from(amount));
        (val >> n) | (val << (WORD_BITS - n))
    }

    let a = fblamka(a, b);
    let d = rotate_right(d ^ a, 32);
    let c = fblamka(c, d);
    let b = rotate_right(b ^ c, 24);

    let a = fblamka(a, b);
    let d = rotate_right(d ^ a, 16);
    let c = fblamka(c, d);
    let b = rotate_right(b ^ c, 63);

    (a, b, c, d)
}

/// The round permutation `P` with the 4x4 group held as four row vectors.
#[cfg(all(feature = "simd", not(blamka_force_soft)))]
#[inline(always)]
pub(crate) fn permute_simd(v: &mut [u64; GROUP_WORDS]) {
    let a = u64x4::from_slice(&v[0..4]);
    let b = u64x4::from_slice(&v[4..8]);
    let c = u64x4::from_slice(&v[8..12]);
    let d = u64x4::from_slice(&v[12..16]);

    // Columns: lane i holds (v[i], v[4 + i], v[8 + i], v[12 + i]).
    let (a, b, c, d) = mix_simd(a, b, c, d);

    // Diagonals: rotate rows 1..3 left by their index so each lane holds one diagonal.
    let b = simd_swizzle!(b, [1, 2, 3, 0]);
    let c = simd_swizzle!(c, [2, 3, 0, 1]);
    let d = simd_swizzle!(d, [3, 0, 1, 2]);
    let (a, b, c, d) = mix_simd(a, b, c, d);
    let b = simd_swizzle!(b, [3, 0, 1, 2]);
    let c = simd_swizzle!(c, [2, 3, 0, 1]);
    let d = simd_swizzle!(d, [1, 2, 3, 0]);

    a.copy_to_slice(&mut v[0..4]);
    b.copy_to_slice(&mut v[4..8]);
    c.copy_to_slice(&mut v[8..12]);
    d.copy_to_slice(&mut v[12..16]);
}
