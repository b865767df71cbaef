//! # gris
//!
//! *Take the color out of your pixels.*
//!
//! In-place grayscale for packed 32-bit ARGB pixels (`0xAARRGGBB`), the
//! format Android hands you from `Bitmap::getPixels` and the one a
//! little-endian BGRA camera frame already is in memory. Red, green and blue
//! are replaced by one luminance value; alpha and the buffer layout are left
//! exactly as they were.
//!
//! SIMD-optimized for x86-64 AVX2, ARM NEON and WASM SIMD128 with automatic
//! fallback to scalar code. Every tier is bit-identical to the scalar path.
//!
//! ```rust
//! let mut pixels = vec![0xFFFF_0000u32, 0x0000_FF00, 0x8080_8080];
//! gris::grayscale_argb_inplace(&mut pixels);
//! assert_eq!(pixels, [0xFF4C_4C4C, 0x0096_9696, 0x8080_8080]);
//! ```
//!
//! ## Luminance
//!
//! [`LumaWeights::BT601`] by default, in 16-bit fixed point with
//! round-half-up. The weights sum to exactly `1 << 16`, so a gray pixel maps
//! to itself and the transform is idempotent.
//!
//! ## Core operations (always available)
//!
//! Functions in the crate root take `&mut [u32]` packed words or `&mut [u8]`
//! BGRA/RGBA bytes. Validation happens before the first write: on error the
//! buffer is untouched.
//!
//! ## Feature flags
//!
//! - **`rayon`** — [`par`]: the same transform split across threads.
//! - **`rgb`** — Type-safe conversions on [`rgb`] crate pixel types
//!   (`Bgra<u8>`, `Rgba<u8>`) via bytemuck.
//! - **`imgref`** — Whole-image conversions on [`imgref`] types. Implies `rgb`.
//! - **`c-exports`** — C ABI in [`c_api`] for managed callers (JNI, Swift,
//!   .NET) that hand over a raw pixel array.

#![no_std]
#![cfg_attr(not(feature = "c-exports"), forbid(unsafe_code))]
#![cfg_attr(feature = "c-exports", deny(unsafe_code))]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod argb;
mod luma;

pub use argb::*;
pub use luma::{LumaWeights, gray_argb, pack_argb, unpack_argb};

#[cfg(feature = "rayon")]
pub mod par;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

#[cfg(feature = "c-exports")]
#[allow(unsafe_code)]
pub mod c_api;

/// Invalid-argument errors from the grayscale operations.
///
/// Every fallible function checks its arguments before touching the buffer,
/// so receiving one of these means no pixel was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GrayError {
    /// The declared pixel count does not match the buffer.
    #[error("declared {declared} pixels, buffer holds {actual}")]
    LengthMismatch {
        /// Pixel count the caller asked for (length or width × height).
        declared: usize,
        /// Pixels actually present in the buffer.
        actual: usize,
    },
    /// A byte buffer whose length is not a multiple of 4.
    #[error("byte length is not a multiple of 4")]
    NotPixelAligned,
    /// Stride smaller than width, or buffer too short for the strided image.
    #[error("stride or buffer too small for image dimensions")]
    InvalidStride,
    /// Luminance weights that do not sum to `1 << 16`.
    #[error("luminance weights must sum to 65536")]
    InvalidWeights,
    /// Null pixel pointer handed over a foreign boundary.
    #[error("null pixel pointer")]
    NullPointer,
}
