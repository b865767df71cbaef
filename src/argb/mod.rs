// ---------------------------------------------------------------------------
// In-place grayscale with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops over BGRA
// bytes (the little-endian image of a 0xAARRGGBB word). #[arcane] wrappers
// dispatch via incant!: contiguous is a single call, strided loops over
// rows inside one dispatch. Packed u32 buffers are viewed as bytes on
// little-endian targets; big-endian targets take the word loop.
// ---------------------------------------------------------------------------

use crate::GrayError;
use crate::luma::LumaWeights;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_len(declared: usize, actual: usize) -> Result<(), GrayError> {
    if declared != actual {
        Err(GrayError::LengthMismatch { declared, actual })
    } else {
        Ok(())
    }
}

#[inline]
fn check_sized(len: usize, width: usize, height: usize) -> Result<(), GrayError> {
    let declared = width
        .checked_mul(height)
        .ok_or(GrayError::LengthMismatch {
            declared: usize::MAX,
            actual: len,
        })?;
    check_len(declared, len)
}

#[inline]
fn check_bytes(len: usize) -> Result<(), GrayError> {
    if !len.is_multiple_of(4) {
        Err(GrayError::NotPixelAligned)
    } else {
        Ok(())
    }
}

/// `len`, `stride` and the row size are in the same unit; `bpp` converts
/// `width` to that unit. Zero-area images pass and are no-ops.
#[inline]
pub(crate) fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), GrayError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    let row = width.checked_mul(bpp).ok_or(GrayError::InvalidStride)?;
    if row > stride {
        return Err(GrayError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(GrayError::InvalidStride)?
        .checked_add(row)
        .ok_or(GrayError::InvalidStride)?;
    if len < total {
        return Err(GrayError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Dispatch
// ===========================================================================

#[inline]
pub(crate) fn gray_bgra(buf: &mut [u8], w: LumaWeights) {
    if buf.is_empty() {
        return;
    }
    incant!(gray_bgra_impl(buf, w), [v3, arm_v2, wasm128, scalar]);
}

#[inline]
fn gray_bgra_strided(buf: &mut [u8], width: usize, height: usize, stride: usize, w: LumaWeights) {
    if width == 0 || height == 0 {
        return;
    }
    incant!(
        gray_bgra_strided(buf, width, height, stride, w),
        [v3, arm_v2, wasm128, scalar]
    );
}

#[cfg(target_endian = "little")]
#[inline]
pub(crate) fn gray_words(buf: &mut [u32], w: LumaWeights) {
    gray_bgra(bytemuck::cast_slice_mut(buf), w);
}

#[cfg(target_endian = "big")]
#[inline]
pub(crate) fn gray_words(buf: &mut [u32], w: LumaWeights) {
    for px in buf.iter_mut() {
        *px = crate::luma::gray_argb(*px, w);
    }
}

#[cfg(target_endian = "little")]
#[inline]
fn gray_words_strided(buf: &mut [u32], width: usize, height: usize, stride: usize, w: LumaWeights) {
    // With a single row the stride is never multiplied by a nonzero index.
    gray_bgra_strided(
        bytemuck::cast_slice_mut(buf),
        width,
        height,
        stride.saturating_mul(4),
        w,
    );
}

#[cfg(target_endian = "big")]
#[inline]
fn gray_words_strided(buf: &mut [u32], width: usize, height: usize, stride: usize, w: LumaWeights) {
    for y in 0..height {
        gray_words(&mut buf[y * stride..][..width], w);
    }
}

// ===========================================================================
// Public API — packed ARGB words
// ===========================================================================

/// Grayscale packed `0xAARRGGBB` pixels in-place with BT.601 weights.
///
/// Alpha is preserved and every output pixel has R = G = B. An empty slice
/// is a no-op.
pub fn grayscale_argb_inplace(buf: &mut [u32]) {
    gray_words(buf, LumaWeights::BT601);
}

/// [`grayscale_argb_inplace`] with explicit weights.
pub fn grayscale_argb_inplace_with(buf: &mut [u32], weights: LumaWeights) {
    gray_words(buf, weights);
}

/// Grayscale the buffer after checking the caller's element count.
///
/// `len` must equal `buf.len()`; a mismatch fails with
/// [`GrayError::LengthMismatch`] and writes nothing.
pub fn grayscale_argb_inplace_len(buf: &mut [u32], len: usize) -> Result<(), GrayError> {
    check_len(len, buf.len())?;
    gray_words(buf, LumaWeights::BT601);
    Ok(())
}

/// Grayscale a contiguous `width × height` image.
///
/// `width * height` must equal `buf.len()`, otherwise
/// [`GrayError::LengthMismatch`] and nothing is written.
pub fn grayscale_argb_inplace_sized(
    buf: &mut [u32],
    width: usize,
    height: usize,
) -> Result<(), GrayError> {
    grayscale_argb_inplace_sized_with(buf, width, height, LumaWeights::BT601)
}

/// [`grayscale_argb_inplace_sized`] with explicit weights.
pub fn grayscale_argb_inplace_sized_with(
    buf: &mut [u32],
    width: usize,
    height: usize,
    weights: LumaWeights,
) -> Result<(), GrayError> {
    check_sized(buf.len(), width, height)?;
    gray_words(buf, weights);
    Ok(())
}

/// Grayscale a strided image of packed ARGB words.
///
/// `stride` is the distance in **pixels** between the start of consecutive
/// rows and must be ≥ `width`. The buffer must hold at least
/// `(height - 1) * stride + width` pixels. Padding pixels are never read or
/// written. Zero width or height is a no-op.
pub fn grayscale_argb_inplace_strided(
    buf: &mut [u32],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), GrayError> {
    grayscale_argb_inplace_strided_with(buf, width, height, stride, LumaWeights::BT601)
}

/// [`grayscale_argb_inplace_strided`] with explicit weights.
pub fn grayscale_argb_inplace_strided_with(
    buf: &mut [u32],
    width: usize,
    height: usize,
    stride: usize,
    weights: LumaWeights,
) -> Result<(), GrayError> {
    check_strided(buf.len(), width, height, stride, 1)?;
    gray_words_strided(buf, width, height, stride, weights);
    Ok(())
}

// ===========================================================================
// Public API — byte buffers
// ===========================================================================

/// Grayscale BGRA bytes (`[b, g, r, a]` per pixel) in-place, BT.601.
///
/// This is the memory layout of packed ARGB words on little-endian machines
/// and of 32BGRA camera frames. Length must be a multiple of 4.
pub fn grayscale_bgra_inplace(buf: &mut [u8]) -> Result<(), GrayError> {
    grayscale_bgra_inplace_with(buf, LumaWeights::BT601)
}

/// [`grayscale_bgra_inplace`] with explicit weights.
pub fn grayscale_bgra_inplace_with(buf: &mut [u8], weights: LumaWeights) -> Result<(), GrayError> {
    check_bytes(buf.len())?;
    gray_bgra(buf, weights);
    Ok(())
}

/// Grayscale RGBA bytes (`[r, g, b, a]` per pixel) in-place, BT.601.
pub fn grayscale_rgba_inplace(buf: &mut [u8]) -> Result<(), GrayError> {
    grayscale_rgba_inplace_with(buf, LumaWeights::BT601)
}

/// [`grayscale_rgba_inplace`] with explicit weights.
pub fn grayscale_rgba_inplace_with(buf: &mut [u8], weights: LumaWeights) -> Result<(), GrayError> {
    check_bytes(buf.len())?;
    gray_bgra(buf, weights.swap_rb());
    Ok(())
}

/// Grayscale a strided BGRA image in-place, BT.601.
///
/// `stride` is in **bytes** and must be ≥ `width × 4`. The buffer must be at
/// least `(height - 1) * stride + width * 4` bytes. Padding bytes between
/// rows are never read or written.
pub fn grayscale_bgra_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), GrayError> {
    grayscale_bgra_inplace_strided_with(buf, width, height, stride, LumaWeights::BT601)
}

/// [`grayscale_bgra_inplace_strided`] with explicit weights.
pub fn grayscale_bgra_inplace_strided_with(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    weights: LumaWeights,
) -> Result<(), GrayError> {
    check_strided(buf.len(), width, height, stride, 4)?;
    gray_bgra_strided(buf, width, height, stride, weights);
    Ok(())
}

/// Grayscale a strided RGBA image in-place, BT.601. Stride in bytes.
pub fn grayscale_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), GrayError> {
    grayscale_rgba_inplace_strided_with(buf, width, height, stride, LumaWeights::BT601)
}

/// [`grayscale_rgba_inplace_strided`] with explicit weights.
pub fn grayscale_rgba_inplace_strided_with(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    weights: LumaWeights,
) -> Result<(), GrayError> {
    check_strided(buf.len(), width, height, stride, 4)?;
    gray_bgra_strided(buf, width, height, stride, weights.swap_rb());
    Ok(())
}
