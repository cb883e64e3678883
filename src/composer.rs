//! Strip-level composition
//!
//! Owns the per-LED error state and the packed output buffer, and runs
//! the pixel pipeline across a whole strip each refresh.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Rgb;
use crate::lut::CalibrationLut;
use crate::pixel::{GrbWord, Residual, update_pixel, update_pixel_undithered};
use crate::weights::BlendWeights;

/// Configuration for a pixel composer
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Blend between the previous and next frame; disabled, the next
    /// frame is output directly.
    pub interpolation: bool,
    /// Carry sub-LSB rounding error between refreshes.
    pub dithering: bool,
    /// Initial calibration tables.
    pub lut: CalibrationLut,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            interpolation: true,
            dithering: true,
            lut: CalibrationLut::identity(),
        }
    }
}

/// Per-strip pixel pipeline state
///
/// Holds one residual slot and one packed-output slot per LED position.
/// `MAX_LEDS` is the number of LEDs in the strip. A composer must be
/// driven from a single execution context; distinct composers are fully
/// independent.
pub struct PixelComposer<const MAX_LEDS: usize> {
    lut: CalibrationLut,
    interpolation: bool,
    dithering: bool,
    residuals: [Residual; MAX_LEDS],
    packed: [GrbWord; MAX_LEDS],
}

impl<const MAX_LEDS: usize> PixelComposer<MAX_LEDS> {
    /// Create a new composer with zeroed error state
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            lut: config.lut,
            interpolation: config.interpolation,
            dithering: config.dithering,
            residuals: [[0; 3]; MAX_LEDS],
            packed: [0; MAX_LEDS],
        }
    }

    /// Compose one refresh of the strip
    ///
    /// Runs the pipeline for each LED over the shorter of the two frames
    /// and returns the packed words ready for the output transport.
    pub fn compose(&mut self, weights: BlendWeights, prev: &[Rgb], next: &[Rgb]) -> &[GrbWord] {
        let weights = if self.interpolation {
            weights
        } else {
            BlendWeights::fully_next()
        };

        let count = prev.len().min(next.len()).min(MAX_LEDS);
        let frames = prev.iter().zip(next.iter()).take(count);

        if self.dithering {
            let slots = self.packed.iter_mut().zip(self.residuals.iter_mut());
            for ((packed, residual), (&prev, &next)) in slots.zip(frames) {
                *packed = update_pixel(weights, prev, next, &self.lut, residual);
            }
        } else {
            for (packed, (&prev, &next)) in self.packed.iter_mut().zip(frames) {
                *packed = update_pixel_undithered(weights, prev, next, &self.lut);
            }
        }

        &self.packed[..count]
    }

    /// Replace the calibration tables
    ///
    /// Takes effect on the next refresh. Carried error state is kept.
    pub fn set_lut(&mut self, lut: CalibrationLut) {
        #[cfg(feature = "esp32-log")]
        println!("[PixelComposer.set_lut] replacing calibration tables");
        self.lut = lut;
    }

    /// Enable or disable frame interpolation
    pub fn set_interpolation(&mut self, enabled: bool) {
        self.interpolation = enabled;
    }

    /// Enable or disable error-diffusion dithering
    pub fn set_dithering(&mut self, enabled: bool) {
        self.dithering = enabled;
    }

    /// Zero the carried error state for every LED position
    pub fn reset_residuals(&mut self) {
        self.residuals = [[0; 3]; MAX_LEDS];
    }

    /// Carried error state for one LED position
    pub fn residual(&self, index: usize) -> Residual {
        self.residuals[index]
    }
}
