use archmage::prelude::*;
use ::safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::scalar::gray_bgra_tail;
use crate::luma::{ALPHA_MASK, LumaWeights, ROUND, SPLAT_RGB};

// ===========================================================================
// x86-64 AVX2 — rite row implementation
// ===========================================================================

// 8 pixels per iteration. Each 32-bit lane is one 0xAARRGGBB word; the
// multiply-accumulate stays below 2^25 so 32-bit lanes never overflow.
#[rite]
pub(super) fn gray_bgra_row_v3(_token: X64V3Token, row: &mut [u8], w: LumaWeights) {
    let low_byte = _mm256_set1_epi32(0xFF);
    let alpha = _mm256_set1_epi32(ALPHA_MASK as i32);
    let wr = _mm256_set1_epi32(w.r() as i32);
    let wg = _mm256_set1_epi32(w.g() as i32);
    let wb = _mm256_set1_epi32(w.b() as i32);
    let round = _mm256_set1_epi32(ROUND as i32);
    let splat = _mm256_set1_epi32(SPLAT_RGB as i32);
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let b = _mm256_and_si256(v, low_byte);
        let g = _mm256_and_si256(_mm256_srli_epi32::<8>(v), low_byte);
        let r = _mm256_and_si256(_mm256_srli_epi32::<16>(v), low_byte);
        let rg = _mm256_add_epi32(_mm256_mullo_epi32(r, wr), _mm256_mullo_epi32(g, wg));
        let br = _mm256_add_epi32(_mm256_mullo_epi32(b, wb), round);
        let y = _mm256_srli_epi32::<16>(_mm256_add_epi32(rg, br));
        let gray = _mm256_or_si256(
            _mm256_and_si256(v, alpha),
            _mm256_mullo_epi32(y, splat),
        );
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, gray);
        i += 32;
    }
    gray_bgra_tail(&mut row[i..], w);
}

// x86-64 arcane wrappers

#[arcane]
pub(super) fn gray_bgra_impl_v3(t: X64V3Token, b: &mut [u8], w: LumaWeights) {
    gray_bgra_row_v3(t, b, w);
}

#[arcane]
pub(super) fn gray_bgra_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: LumaWeights,
) {
    for y in 0..height {
        gray_bgra_row_v3(t, &mut buf[y * stride..][..width * 4], w);
    }
}
