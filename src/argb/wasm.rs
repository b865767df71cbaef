use core::arch::wasm32::{i32x4_add, i32x4_mul, u32x4_shr, u32x4_splat, v128_and, v128_or};

use ::safe_unaligned_simd::wasm32::{v128_load, v128_store};
use archmage::prelude::*;

use super::scalar::gray_bgra_tail;
use crate::luma::{ALPHA_MASK, LumaWeights, ROUND, SPLAT_RGB};

// ===========================================================================
// WASM SIMD128 — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn gray_bgra_row_wasm128(_token: Wasm128Token, row: &mut [u8], w: LumaWeights) {
    let low_byte = u32x4_splat(0xFF);
    let alpha = u32x4_splat(ALPHA_MASK);
    let wr = u32x4_splat(w.r());
    let wg = u32x4_splat(w.g());
    let wb = u32x4_splat(w.b());
    let round = u32x4_splat(ROUND);
    let splat = u32x4_splat(SPLAT_RGB);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let b = v128_and(v, low_byte);
        let g = v128_and(u32x4_shr(v, 8), low_byte);
        let r = v128_and(u32x4_shr(v, 16), low_byte);
        let acc = i32x4_add(
            i32x4_add(i32x4_mul(r, wr), i32x4_mul(g, wg)),
            i32x4_add(i32x4_mul(b, wb), round),
        );
        let y = u32x4_shr(acc, 16);
        let gray = v128_or(v128_and(v, alpha), i32x4_mul(y, splat));
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, gray);
        i += 16;
    }
    gray_bgra_tail(&mut row[i..], w);
}

// WASM arcane wrappers

#[arcane]
pub(super) fn gray_bgra_impl_wasm128(t: Wasm128Token, b: &mut [u8], w: LumaWeights) {
    gray_bgra_row_wasm128(t, b, w);
}

#[arcane]
pub(super) fn gray_bgra_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: LumaWeights,
) {
    for y in 0..height {
        gray_bgra_row_wasm128(t, &mut buf[y * stride..][..width * 4], w);
    }
}
