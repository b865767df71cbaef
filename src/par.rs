//! Parallel grayscale over [`rayon`].
//!
//! Pixels are independent, so the buffer is split into fixed-size chunks and
//! each chunk runs the same SIMD-dispatched kernel as the serial functions.
//! Results are bit-identical to the crate-root functions.
//!
//! ```rust
//! let mut frame = vec![0xFF20_40A0u32; 1920 * 1080];
//! gris::par::grayscale_argb_inplace(&mut frame);
//! assert_eq!(frame[0], gris::gray_argb(0xFF20_40A0, gris::LumaWeights::BT601));
//! ```

use rayon::prelude::*;

use crate::argb::gray_words;
use crate::{GrayError, LumaWeights};

/// Pixels per parallel task.
pub const CHUNK_PIXELS: usize = 64 * 1024;

/// Parallel [`crate::grayscale_argb_inplace`].
pub fn grayscale_argb_inplace(buf: &mut [u32]) {
    grayscale_argb_inplace_with(buf, LumaWeights::BT601);
}

/// Parallel [`crate::grayscale_argb_inplace_with`].
pub fn grayscale_argb_inplace_with(buf: &mut [u32], weights: LumaWeights) {
    if buf.len() <= CHUNK_PIXELS {
        gray_words(buf, weights);
        return;
    }
    buf.par_chunks_mut(CHUNK_PIXELS)
        .for_each(|chunk| gray_words(chunk, weights));
}

/// Parallel [`crate::grayscale_argb_inplace_strided`], one task per row.
pub fn grayscale_argb_inplace_strided(
    buf: &mut [u32],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), GrayError> {
    grayscale_argb_inplace_strided_with(buf, width, height, stride, LumaWeights::BT601)
}

/// Parallel [`crate::grayscale_argb_inplace_strided_with`].
pub fn grayscale_argb_inplace_strided_with(
    buf: &mut [u32],
    width: usize,
    height: usize,
    stride: usize,
    weights: LumaWeights,
) -> Result<(), GrayError> {
    if height <= 1 {
        return crate::grayscale_argb_inplace_strided_with(buf, width, height, stride, weights);
    }
    // Validates, and guarantees every row below is at least `width` long.
    crate::argb::check_strided(buf.len(), width, height, stride, 1)?;
    if width == 0 {
        return Ok(());
    }
    buf.par_chunks_mut(stride)
        .take(height)
        .for_each(|row| gray_words(&mut row[..width], weights));
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use alloc::vec::Vec;

    fn make_argb(n: usize) -> Vec<u32> {
        (0..n as u32).map(|i| i.wrapping_mul(0x0101_7F3D)).collect()
    }

    #[test]
    fn matches_serial_across_chunk_boundaries() {
        for n in [0, 1, CHUNK_PIXELS - 1, CHUNK_PIXELS, CHUNK_PIXELS * 3 + 17] {
            let mut serial = make_argb(n);
            let mut parallel = serial.clone();
            crate::grayscale_argb_inplace_with(&mut serial, LumaWeights::BT709);
            grayscale_argb_inplace_with(&mut parallel, LumaWeights::BT709);
            assert_eq!(serial, parallel, "n={n}");
        }
    }

    #[test]
    fn strided_matches_serial() {
        let (w, h, stride) = (300, 70, 320);
        let mut serial = make_argb(stride * (h - 1) + w);
        let mut parallel = serial.clone();
        crate::grayscale_argb_inplace_strided(&mut serial, w, h, stride).unwrap();
        grayscale_argb_inplace_strided(&mut parallel, w, h, stride).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn strided_errors_match_serial() {
        let mut buf = make_argb(100);
        let orig = buf.clone();
        assert_eq!(
            grayscale_argb_inplace_strided(&mut buf, 20, 6, 19),
            Err(GrayError::InvalidStride)
        );
        assert_eq!(
            grayscale_argb_inplace_strided(&mut buf, 20, 6, 20),
            Err(GrayError::InvalidStride)
        );
        assert_eq!(buf, orig);
        assert_eq!(grayscale_argb_inplace_strided(&mut buf, 20, 5, 20), Ok(()));
    }
}
