use archmage::prelude::*;

use super::scalar::gray_bgra_tail;
use crate::luma::{ALPHA_MASK, LumaWeights, ROUND, SPLAT_RGB};

// ===========================================================================
// ARM NEON — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn gray_bgra_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], w: LumaWeights) {
    use core::arch::aarch64::{
        vandq_u32, vdupq_n_u32, vmlaq_n_u32, vmulq_n_u32, vorrq_u32, vreinterpretq_u8_u32,
        vreinterpretq_u32_u8, vshrq_n_u32,
    };
    let low_byte = vdupq_n_u32(0xFF);
    let alpha = vdupq_n_u32(ALPHA_MASK);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = vreinterpretq_u32_u8(::safe_unaligned_simd::aarch64::vld1q_u8(arr));
        let b = vandq_u32(v, low_byte);
        let g = vandq_u32(vshrq_n_u32::<8>(v), low_byte);
        let r = vandq_u32(vshrq_n_u32::<16>(v), low_byte);
        let mut acc = vdupq_n_u32(ROUND);
        acc = vmlaq_n_u32(acc, r, w.r());
        acc = vmlaq_n_u32(acc, g, w.g());
        acc = vmlaq_n_u32(acc, b, w.b());
        let y = vshrq_n_u32::<16>(acc);
        let gray = vorrq_u32(vandq_u32(v, alpha), vmulq_n_u32(y, SPLAT_RGB));
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        ::safe_unaligned_simd::aarch64::vst1q_u8(out, vreinterpretq_u8_u32(gray));
        i += 16;
    }
    gray_bgra_tail(&mut row[i..], w);
}

// ARM arcane wrappers

#[arcane]
pub(super) fn gray_bgra_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], w: LumaWeights) {
    gray_bgra_row_arm_v2(t, b, w);
}

#[arcane]
pub(super) fn gray_bgra_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: LumaWeights,
) {
    for y in 0..height {
        gray_bgra_row_arm_v2(t, &mut buf[y * stride..][..width * 4], w);
    }
}
