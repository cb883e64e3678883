#![no_std]

pub mod composer;
pub mod lut;
pub mod math16;
pub mod pixel;
pub mod weights;

pub use composer::{ComposerConfig, PixelComposer};
pub use lut::{CalibrationLut, ChannelLut, LUT_ENTRIES};
pub use math16::{expand8, sat_round8};
pub use pixel::{GrbWord, Residual, pack_grb, update_pixel, update_pixel_undithered};
pub use weights::{BLEND_UNIT, BlendWeights};

pub use embassy_time::{Duration, Instant};

/// Source pixel: one LED's color in a received frame buffer
pub type Rgb = smart_leds::RGB8;
