//! Whole-image grayscale using [`imgref`] types.
//!
//! Strided images are processed row by row through the SIMD-optimized core;
//! padding between rows is never touched. Nothing is allocated; the caller
//! owns every buffer.
//!
//! ```rust
//! use rgb::Bgra;
//! use ::imgref::ImgRefMut;
//! use gris::imgref;
//!
//! // 2×2 image in a buffer with a stride of 3 pixels.
//! let mut buf = vec![Bgra { b: 0, g: 0, r: 255, a: 255 }; 5];
//! imgref::grayscale_img_bgra(ImgRefMut::new_stride(&mut buf, 2, 2, 3));
//! assert_eq!(buf[0].r, 76);
//! assert_eq!(buf[2].r, 255); // padding
//! ```

use imgref::{ImgRefMut, ImgVec};
use rgb::{Bgra, Rgba};

use crate::LumaWeights;
use crate::argb::{gray_bgra, gray_words};

/// Grayscale a `Bgra<u8>` image in-place with BT.601 weights.
pub fn grayscale_img_bgra(img: ImgRefMut<'_, Bgra<u8>>) {
    grayscale_img_bgra_with(img, LumaWeights::BT601);
}

/// [`grayscale_img_bgra`] with explicit weights.
pub fn grayscale_img_bgra_with(mut img: ImgRefMut<'_, Bgra<u8>>, weights: LumaWeights) {
    for row in img.rows_mut() {
        gray_bgra(bytemuck::cast_slice_mut(row), weights);
    }
}

/// Grayscale an `Rgba<u8>` image in-place with BT.601 weights.
pub fn grayscale_img_rgba(img: ImgRefMut<'_, Rgba<u8>>) {
    grayscale_img_rgba_with(img, LumaWeights::BT601);
}

/// [`grayscale_img_rgba`] with explicit weights.
pub fn grayscale_img_rgba_with(mut img: ImgRefMut<'_, Rgba<u8>>, weights: LumaWeights) {
    let weights = weights.swap_rb();
    for row in img.rows_mut() {
        gray_bgra(bytemuck::cast_slice_mut(row), weights);
    }
}

/// Grayscale an owned image of packed `0xAARRGGBB` words.
///
/// Returns the same buffer with the same stride.
pub fn grayscale_imgvec_argb(mut img: ImgVec<u32>) -> ImgVec<u32> {
    for row in img.rows_mut() {
        gray_words(row, LumaWeights::BT601);
    }
    img
}
