//! Type-safe grayscale on [`rgb`] crate pixel types via bytemuck.
//!
//! Zero-copy: the pixel slice is reinterpreted as bytes and handed to the
//! SIMD-dispatched core. A typed slice is always a whole number of pixels,
//! so these functions cannot fail.
//!
//! ```rust
//! use rgb::Bgra;
//! use gris::typed_rgb;
//!
//! let mut frame: Vec<Bgra<u8>> = vec![Bgra { b: 0, g: 0, r: 255, a: 200 }; 100];
//! typed_rgb::grayscale_bgra_mut(&mut frame);
//! assert_eq!(frame[0], Bgra { b: 76, g: 76, r: 76, a: 200 });
//! ```

use rgb::{Bgra, Rgba};

use crate::LumaWeights;
use crate::argb::gray_bgra;

/// Grayscale `&mut [Bgra<u8>]` in-place with BT.601 weights.
pub fn grayscale_bgra_mut(pixels: &mut [Bgra<u8>]) {
    grayscale_bgra_mut_with(pixels, LumaWeights::BT601);
}

/// [`grayscale_bgra_mut`] with explicit weights.
pub fn grayscale_bgra_mut_with(pixels: &mut [Bgra<u8>], weights: LumaWeights) {
    gray_bgra(bytemuck::cast_slice_mut(pixels), weights);
}

/// Grayscale `&mut [Rgba<u8>]` in-place with BT.601 weights.
pub fn grayscale_rgba_mut(pixels: &mut [Rgba<u8>]) {
    grayscale_rgba_mut_with(pixels, LumaWeights::BT601);
}

/// [`grayscale_rgba_mut`] with explicit weights.
pub fn grayscale_rgba_mut_with(pixels: &mut [Rgba<u8>], weights: LumaWeights) {
    gray_bgra(bytemuck::cast_slice_mut(pixels), weights.swap_rb());
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn bgra_matches_packed_words() {
        let mut typed = vec![
            Bgra { b: 0, g: 0, r: 255, a: 255 },
            Bgra { b: 0, g: 255, r: 0, a: 0 },
            Bgra { b: 128, g: 128, r: 128, a: 128 },
        ];
        grayscale_bgra_mut(&mut typed);
        assert_eq!(typed[0], Bgra { b: 76, g: 76, r: 76, a: 255 });
        assert_eq!(typed[1], Bgra { b: 150, g: 150, r: 150, a: 0 });
        assert_eq!(typed[2], Bgra { b: 128, g: 128, r: 128, a: 128 });
    }

    #[test]
    fn rgba_uses_rgb_order() {
        let mut typed = vec![Rgba::new(0, 0, 255, 9); 17];
        grayscale_rgba_mut(&mut typed);
        assert!(typed.iter().all(|&p| p == Rgba::new(29, 29, 29, 9)));
    }

    #[test]
    fn empty_slices() {
        grayscale_bgra_mut(&mut []);
        grayscale_rgba_mut_with(&mut [], LumaWeights::BT709);
    }
}
