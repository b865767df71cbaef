//! C API for managed callers.
//!
//! *Only available with the `c-exports` feature.*
//!
//! The caller owns the pixel memory. Each function borrows it for the
//! duration of the call, converts it in place, and keeps no pointer after
//! returning. Arguments are validated before the first write, so a failed
//! call leaves the buffer exactly as it was and the host can fall back to
//! showing the original image.
//!
//! ## Example: JNI
//!
//! ```c
//! JNIEXPORT void JNICALL
//! Java_com_example_ImgProc_grayscale(JNIEnv *env, jobject obj, jintArray pixels) {
//!     jsize len = (*env)->GetArrayLength(env, pixels);
//!     jint *data = (*env)->GetIntArrayElements(env, pixels, NULL);
//!     GrisResult r = gris_grayscale_argb((uint32_t *)data, (size_t)len);
//!     // JNI_ABORT discards the copy if nothing was converted
//!     (*env)->ReleaseIntArrayElements(env, pixels, data,
//!         r.error_code == GRIS_SUCCESS ? 0 : JNI_ABORT);
//! }
//! ```
//!
//! ## Example: camera frame
//!
//! ```c
//! uint8_t *base = CVPixelBufferGetBaseAddress(frame);
//! size_t stride = CVPixelBufferGetBytesPerRow(frame);
//! GrisResult r = gris_grayscale_bgra_strided(
//!     base, stride * height, width, height, stride, GRIS_LUMA_BT601);
//! if (r.error_code != GRIS_SUCCESS) {
//!     fprintf(stderr, "%s\n", gris_error_message(r.error_code));
//! }
//! ```

use core::ffi::c_char;
use core::slice;

use tracing::debug;

use crate::{GrayError, LumaWeights};

// =============================================================================
// Type Definitions
// =============================================================================

/// C-compatible error codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrisErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Null pixel pointer with a non-zero length
    NullPixelPointer = 1,
    /// Declared pixel count (length or width × height) differs from the buffer capacity
    LengthMismatch = 2,
    /// Byte length is not a multiple of 4
    NotPixelAligned = 3,
    /// Stride smaller than a row, or buffer too short for the image
    InvalidStride = 4,
    /// Luminance weights do not sum to 65536
    InvalidWeights = 5,
}

/// C-compatible result type.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrisResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: GrisErrorCode,
}

impl GrisResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: GrisErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: GrisErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, GrisErrorCode::Success)
    }
}

impl From<GrayError> for GrisResult {
    fn from(error: GrayError) -> Self {
        let error_code = match error {
            GrayError::LengthMismatch { .. } => GrisErrorCode::LengthMismatch,
            GrayError::NotPixelAligned => GrisErrorCode::NotPixelAligned,
            GrayError::InvalidStride => GrisErrorCode::InvalidStride,
            GrayError::InvalidWeights => GrisErrorCode::InvalidWeights,
            GrayError::NullPointer => GrisErrorCode::NullPixelPointer,
        };
        Self::from_error_code(error_code)
    }
}

impl From<Result<(), GrayError>> for GrisResult {
    fn from(result: Result<(), GrayError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(e) => e.into(),
        }
    }
}

/// Luminance formula selector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrisLuma {
    /// ITU-R BT.601 (0.299, 0.587, 0.114)
    Bt601 = 0,
    /// ITU-R BT.709 (0.2126, 0.7152, 0.0722)
    Bt709 = 1,
}

impl From<GrisLuma> for LumaWeights {
    fn from(luma: GrisLuma) -> Self {
        match luma {
            GrisLuma::Bt601 => LumaWeights::BT601,
            GrisLuma::Bt709 => LumaWeights::BT709,
        }
    }
}

/// Borrow caller memory as a mutable slice.
///
/// A zero length never dereferences `ptr`, so an empty array may arrive as
/// null.
///
/// # Safety
/// - `ptr` must be null or valid for reads and writes of `len` elements
/// - nothing else may access that memory until the call returns
unsafe fn borrow_mut<'a, T>(ptr: *mut T, len: usize) -> Result<&'a mut [T], GrayError> {
    if len == 0 {
        return Ok(&mut []);
    }
    if ptr.is_null() {
        return Err(GrayError::NullPointer);
    }
    Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

// =============================================================================
// Packed ARGB words
// =============================================================================

/// Grayscale `len` packed `0xAARRGGBB` pixels in place, BT.601.
///
/// # Parameters
/// - `pixels`: Pointer to the caller's pixel array
/// - `len`: Number of pixels in the array
///
/// # Returns
/// A [`GrisResult`]; `NullPixelPointer` if `pixels` is null and `len > 0`.
///
/// # Safety
/// - `pixels` must be valid for reads and writes of `len` `u32` values
/// - the array must not be accessed by another thread during the call
///
/// # Remarks
/// This function corresponds to [`crate::grayscale_argb_inplace`] in the Rust API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gris_grayscale_argb(pixels: *mut u32, len: usize) -> GrisResult {
    match unsafe { borrow_mut(pixels, len) } {
        Ok(buf) => {
            crate::grayscale_argb_inplace(buf);
            GrisResult::success()
        }
        Err(e) => {
            debug!(len, error = %e, "gris_grayscale_argb rejected");
            e.into()
        }
    }
}

/// Grayscale `len` packed ARGB pixels with caller-supplied weights.
///
/// `r`, `g` and `b` are 16-bit fixed-point weights that must sum to exactly
/// 65536; anything else returns `InvalidWeights` without touching the array.
///
/// # Safety
/// - `pixels` must be valid for reads and writes of `len` `u32` values
/// - the array must not be accessed by another thread during the call
///
/// # Remarks
/// This function corresponds to [`crate::grayscale_argb_inplace_with`] in the Rust API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gris_grayscale_argb_weights(
    pixels: *mut u32,
    len: usize,
    r: u32,
    g: u32,
    b: u32,
) -> GrisResult {
    let result = LumaWeights::new(r, g, b).and_then(|weights| {
        let buf = unsafe { borrow_mut(pixels, len) }?;
        crate::grayscale_argb_inplace_with(buf, weights);
        Ok(())
    });
    if let Err(e) = result {
        debug!(len, r, g, b, error = %e, "gris_grayscale_argb_weights rejected");
    }
    result.into()
}

/// Grayscale a `width × height` image of packed ARGB pixels.
///
/// `capacity` is the real length of the array (for example from
/// `GetArrayLength`); `width * height` must match it exactly.
///
/// # Safety
/// - `pixels` must be valid for reads and writes of `capacity` `u32` values
/// - the array must not be accessed by another thread during the call
///
/// # Remarks
/// This function corresponds to [`crate::grayscale_argb_inplace_sized_with`] in the Rust API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gris_grayscale_argb_sized(
    pixels: *mut u32,
    capacity: usize,
    width: usize,
    height: usize,
    luma: GrisLuma,
) -> GrisResult {
    let result = unsafe { borrow_mut(pixels, capacity) }.and_then(|buf| {
        crate::grayscale_argb_inplace_sized_with(buf, width, height, luma.into())
    });
    if let Err(e) = result {
        debug!(capacity, width, height, error = %e, "gris_grayscale_argb_sized rejected");
    }
    result.into()
}

/// Grayscale a strided image of packed ARGB pixels. `stride` is in pixels.
///
/// # Safety
/// - `pixels` must be valid for reads and writes of `capacity` `u32` values
/// - the array must not be accessed by another thread during the call
///
/// # Remarks
/// This function corresponds to [`crate::grayscale_argb_inplace_strided_with`] in the Rust API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gris_grayscale_argb_strided(
    pixels: *mut u32,
    capacity: usize,
    width: usize,
    height: usize,
    stride: usize,
    luma: GrisLuma,
) -> GrisResult {
    let result = unsafe { borrow_mut(pixels, capacity) }.and_then(|buf| {
        crate::grayscale_argb_inplace_strided_with(buf, width, height, stride, luma.into())
    });
    if let Err(e) = result {
        debug!(capacity, width, height, stride, error = %e, "gris_grayscale_argb_strided rejected");
    }
    result.into()
}

// =============================================================================
// BGRA bytes
// =============================================================================

/// Grayscale `len` bytes of BGRA pixels in place.
///
/// # Safety
/// - `bytes` must be valid for reads and writes of `len` bytes
/// - the buffer must not be accessed by another thread during the call
///
/// # Remarks
/// This function corresponds to [`crate::grayscale_bgra_inplace_with`] in the Rust API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gris_grayscale_bgra(
    bytes: *mut u8,
    len: usize,
    luma: GrisLuma,
) -> GrisResult {
    let result = unsafe { borrow_mut(bytes, len) }
        .and_then(|buf| crate::grayscale_bgra_inplace_with(buf, luma.into()));
    if let Err(e) = result {
        debug!(len, error = %e, "gris_grayscale_bgra rejected");
    }
    result.into()
}

/// Grayscale a strided BGRA image in place. `stride` is in bytes.
///
/// # Safety
/// - `bytes` must be valid for reads and writes of `capacity` bytes
/// - the buffer must not be accessed by another thread during the call
///
/// # Remarks
/// This function corresponds to [`crate::grayscale_bgra_inplace_strided_with`] in the Rust API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gris_grayscale_bgra_strided(
    bytes: *mut u8,
    capacity: usize,
    width: usize,
    height: usize,
    stride: usize,
    luma: GrisLuma,
) -> GrisResult {
    let result = unsafe { borrow_mut(bytes, capacity) }.and_then(|buf| {
        crate::grayscale_bgra_inplace_strided_with(buf, width, height, stride, luma.into())
    });
    if let Err(e) = result {
        debug!(capacity, width, height, stride, error = %e, "gris_grayscale_bgra_strided rejected");
    }
    result.into()
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
#[unsafe(no_mangle)]
pub extern "C" fn gris_error_message(error_code: GrisErrorCode) -> *const c_char {
    let msg = match error_code {
        GrisErrorCode::Success => c"Success",
        GrisErrorCode::NullPixelPointer => c"Null pointer provided for pixel buffer",
        GrisErrorCode::LengthMismatch => c"Declared pixel count does not match buffer capacity",
        GrisErrorCode::NotPixelAligned => c"Byte length is not a multiple of 4",
        GrisErrorCode::InvalidStride => c"Stride or buffer too small for image dimensions",
        GrisErrorCode::InvalidWeights => c"Luminance weights must sum to 65536",
    };
    msg.as_ptr()
}
