use archmage::prelude::*;

use crate::luma::{LumaWeights, gray_argb};

// ===========================================================================
// Scalar row implementation
// ===========================================================================

/// Shared by every tier for the tail that doesn't fill a vector.
#[inline(always)]
pub(super) fn gray_bgra_tail(row: &mut [u8], w: LumaWeights) {
    for px in row.chunks_exact_mut(4) {
        let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&gray_argb(v, w).to_le_bytes());
    }
}

pub(super) fn gray_bgra_row_scalar(_token: ScalarToken, row: &mut [u8], w: LumaWeights) {
    gray_bgra_tail(row, w);
}

// ===========================================================================
// Scalar wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn gray_bgra_impl_scalar(t: ScalarToken, b: &mut [u8], w: LumaWeights) {
    gray_bgra_row_scalar(t, b, w);
}

pub(super) fn gray_bgra_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: LumaWeights,
) {
    for y in 0..height {
        gray_bgra_row_scalar(t, &mut buf[y * stride..][..width * 4], w);
    }
}
