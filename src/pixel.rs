//! Per-pixel update pipeline
//!
//! The inner loop of a strip refresh. For each pixel: blend the two
//! received frames, pass each channel through its calibration table, fold
//! in the rounding error carried from the last refresh and reduce to one
//! packed 8-bit-per-channel word.

use crate::Rgb;
use crate::lut::{CalibrationLut, ChannelLut, interpolate};
use crate::math16::{expand8, sat_round8};
use crate::weights::BlendWeights;

/// Carried rounding error for one LED position, one value per channel.
///
/// Rewritten on every dithered update. Must stay associated with the same
/// physical LED across frames; a fresh slot starts at zero.
pub type Residual = [i16; 3];

/// Packed output word: green in bits 16-23, red in 8-15, blue in 0-7.
pub type GrbWord = u32;

/// Run the full pipeline for one pixel
///
/// Blends `prev` and `next` per channel, calibrates through `lut`, folds
/// in the carried error, rounds with saturation and repacks. The residual
/// slot is rewritten with the exact leftover error so that the output
/// tracks sub-LSB intensity over successive refreshes.
pub fn update_pixel(
    weights: BlendWeights,
    prev: Rgb,
    next: Rgb,
    lut: &CalibrationLut,
    residual: &mut Residual,
) -> GrbWord {
    let r = update_channel(weights.blend(prev.r, next.r), &lut.r, &mut residual[0]);
    let g = update_channel(weights.blend(prev.g, next.g), &lut.g, &mut residual[1]);
    let b = update_channel(weights.blend(prev.b, next.b), &lut.b, &mut residual[2]);

    pack_grb(r, g, b)
}

/// Pipeline variant without error diffusion
///
/// Same blend, calibration and saturating round, but no residual state is
/// read or written; sub-LSB detail is rounded away every refresh.
pub fn update_pixel_undithered(
    weights: BlendWeights,
    prev: Rgb,
    next: Rgb,
    lut: &CalibrationLut,
) -> GrbWord {
    let r = round_channel(weights.blend(prev.r, next.r), &lut.r);
    let g = round_channel(weights.blend(prev.g, next.g), &lut.g);
    let b = round_channel(weights.blend(prev.b, next.b), &lut.b);

    pack_grb(r, g, b)
}

/// Pack three channel bytes in GRB transmission order
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack_grb(r: u8, g: u8, b: u8) -> GrbWord {
    ((g as u32) << 16) | ((r as u32) << 8) | (b as u32)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn update_channel(intensity: u16, lut: &ChannelLut, residual: &mut i16) -> u8 {
    // The sum may leave [0, 0xFFFF]; the saturating round clamps it.
    let injected = i32::from(interpolate(lut, intensity)) + i32::from(*residual);
    let byte = sat_round8(injected);

    // Exact leftover error after expanding the byte back to 16 bits.
    // Always representable in i16: the byte tracks injected / 257.
    *residual = (injected - i32::from(expand8(byte))) as i16;

    byte
}

#[inline]
fn round_channel(intensity: u16, lut: &ChannelLut) -> u8 {
    sat_round8(i32::from(interpolate(lut, intensity)))
}
