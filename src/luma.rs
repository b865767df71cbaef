// ---------------------------------------------------------------------------
// Luminance policy and per-pixel packing.
//
// Fixed-point weights with 16 fractional bits. The three weights must sum
// to exactly ONE so that luma(v, v, v) == v: gray stays gray and the
// transform is idempotent.
// ---------------------------------------------------------------------------

use crate::GrayError;

pub(crate) const SHIFT: u32 = 16;
pub(crate) const ONE: u32 = 1 << SHIFT;
pub(crate) const ROUND: u32 = ONE / 2;

/// Replicates an 8-bit value into bits 0–23 (R = G = B).
pub(crate) const SPLAT_RGB: u32 = 0x0001_0101;
pub(crate) const ALPHA_MASK: u32 = 0xFF00_0000;

/// Red/green/blue luminance weights in 16-bit fixed point.
///
/// `luma = (r·R + g·G + b·B + 32768) >> 16`. The sum of the weights is
/// always `65536`, which keeps the result within `0..=255` without a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LumaWeights {
    r: u32,
    g: u32,
    b: u32,
}

impl LumaWeights {
    /// ITU-R BT.601: 0.299 R + 0.587 G + 0.114 B. The default.
    pub const BT601: Self = Self {
        r: 19595,
        g: 38470,
        b: 7471,
    };

    /// ITU-R BT.709: 0.2126 R + 0.7152 G + 0.0722 B.
    pub const BT709: Self = Self {
        r: 13933,
        g: 46871,
        b: 4732,
    };

    /// Custom weights. Rejected unless `r + g + b == 65536`.
    pub const fn new(r: u32, g: u32, b: u32) -> Result<Self, GrayError> {
        // Each weight is at most ONE, so the sum cannot overflow.
        if r > ONE || g > ONE || b > ONE || r + g + b != ONE {
            return Err(GrayError::InvalidWeights);
        }
        Ok(Self { r, g, b })
    }

    /// Red weight.
    #[inline]
    pub const fn r(self) -> u32 {
        self.r
    }

    /// Green weight.
    #[inline]
    pub const fn g(self) -> u32 {
        self.g
    }

    /// Blue weight.
    #[inline]
    pub const fn b(self) -> u32 {
        self.b
    }

    /// Luminance of one pixel.
    #[inline(always)]
    pub const fn luma(self, r: u8, g: u8, b: u8) -> u8 {
        ((self.r * r as u32 + self.g * g as u32 + self.b * b as u32 + ROUND) >> SHIFT) as u8
    }

    /// Weights with red and blue exchanged.
    ///
    /// An RGBA byte pixel read as a little-endian word is `0xAABBGGRR`;
    /// running the ARGB kernel with swapped weights gives the right luma,
    /// and the write-back is the same since R = G = B afterwards.
    #[inline]
    pub(crate) const fn swap_rb(self) -> Self {
        Self {
            r: self.b,
            g: self.g,
            b: self.r,
        }
    }
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self::BT601
    }
}

/// Split a packed `0xAARRGGBB` word into `[a, r, g, b]`.
#[inline(always)]
pub const fn unpack_argb(px: u32) -> [u8; 4] {
    [(px >> 24) as u8, (px >> 16) as u8, (px >> 8) as u8, px as u8]
}

/// Pack four channels into a `0xAARRGGBB` word.
#[inline(always)]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Grayscale one packed ARGB pixel, keeping alpha.
#[inline(always)]
pub const fn gray_argb(px: u32, w: LumaWeights) -> u32 {
    let r = (px >> 16) & 0xFF;
    let g = (px >> 8) & 0xFF;
    let b = px & 0xFF;
    let y = (w.r * r + w.g * g + w.b * b + ROUND) >> SHIFT;
    (px & ALPHA_MASK) | (y * SPLAT_RGB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        for w in [LumaWeights::BT601, LumaWeights::BT709] {
            assert_eq!(w.r() + w.g() + w.b(), ONE);
        }
        assert_eq!(LumaWeights::default(), LumaWeights::BT601);
    }

    #[test]
    fn custom_weights_validated() {
        assert_eq!(
            LumaWeights::new(21845, 21846, 21845),
            Ok(LumaWeights {
                r: 21845,
                g: 21846,
                b: 21845
            })
        );
        assert_eq!(LumaWeights::new(1, 2, 3), Err(GrayError::InvalidWeights));
        assert_eq!(
            LumaWeights::new(u32::MAX, 1, 0),
            Err(GrayError::InvalidWeights)
        );
    }

    #[test]
    fn bt601_pinned_values() {
        let w = LumaWeights::BT601;
        assert_eq!(w.luma(255, 0, 0), 76);
        assert_eq!(w.luma(0, 255, 0), 150);
        assert_eq!(w.luma(0, 0, 255), 29);
        assert_eq!(w.luma(255, 255, 255), 255);
        assert_eq!(w.luma(0, 0, 0), 0);
    }

    #[test]
    fn gray_maps_to_itself() {
        for w in [LumaWeights::BT601, LumaWeights::BT709] {
            for v in 0..=255u8 {
                assert_eq!(w.luma(v, v, v), v, "v={v} w={w:?}");
            }
        }
    }

    #[test]
    fn pack_unpack() {
        assert_eq!(unpack_argb(0x80FF_4C01), [0x80, 0xFF, 0x4C, 0x01]);
        assert_eq!(pack_argb(0x80, 0xFF, 0x4C, 0x01), 0x80FF_4C01);
    }

    #[test]
    fn gray_argb_examples() {
        let w = LumaWeights::BT601;
        assert_eq!(gray_argb(0xFFFF_0000, w), 0xFF4C_4C4C);
        assert_eq!(gray_argb(0x0000_FF00, w), 0x0096_9696);
        assert_eq!(gray_argb(0x8080_8080, w), 0x8080_8080);
        assert_eq!(gray_argb(0xFF00_00FF, w), 0xFF1D_1D1D);
    }

    #[test]
    fn swapped_weights_read_rgba_words() {
        // RGBA bytes [255, 0, 0, 0xFF] as a little-endian word.
        let px = u32::from_le_bytes([255, 0, 0, 0xFF]);
        let out = gray_argb(px, LumaWeights::BT601.swap_rb());
        assert_eq!(out.to_le_bytes(), [76, 76, 76, 0xFF]);
    }
}
