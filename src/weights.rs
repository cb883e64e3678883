use embassy_time::Duration;

/// Fixed-point unit for a pair of blend weights.
///
/// The two weights of a [`BlendWeights`] always sum to this constant. The
/// scale is chosen so that a full-scale weight times an 8-bit channel
/// value, shifted right by 16, expands the byte to 16-bit range:
/// `(byte * BLEND_UNIT) >> 16 == byte * 257`.
pub const BLEND_UNIT: u32 = 0x0101_0000;

/// Temporal blend position between the previous and next received frame
///
/// A convex combination over the [`BLEND_UNIT`] scale: both weights are
/// non-negative and their sum is constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendWeights {
    ic_prev: u32,
    ic_next: u32,
}

impl BlendWeights {
    /// Weights selecting the previous frame only
    pub const fn fully_prev() -> Self {
        Self {
            ic_prev: BLEND_UNIT,
            ic_next: 0,
        }
    }

    /// Weights selecting the next frame only
    pub const fn fully_next() -> Self {
        Self {
            ic_prev: 0,
            ic_next: BLEND_UNIT,
        }
    }

    /// Weights at an explicit position on the unit scale
    ///
    /// `ic_next` is clamped to [`BLEND_UNIT`]; the previous-frame weight
    /// is derived so the pair stays a convex combination.
    pub const fn from_position(ic_next: u32) -> Self {
        let ic_next = if ic_next > BLEND_UNIT {
            BLEND_UNIT
        } else {
            ic_next
        };
        Self {
            ic_prev: BLEND_UNIT - ic_next,
            ic_next,
        }
    }

    /// Weights derived from time elapsed within a blend window
    ///
    /// `elapsed == 0` selects the previous frame; `elapsed >= window`
    /// selects the next frame. A zero-length window is immediate.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_elapsed(elapsed: Duration, window: Duration) -> Self {
        if window.as_millis() == 0 || elapsed.as_millis() >= window.as_millis() {
            return Self::fully_next();
        }

        let position = (elapsed.as_millis() * BLEND_UNIT as u64) / window.as_millis();
        Self::from_position(position as u32)
    }

    /// Previous-frame weight
    pub const fn ic_prev(self) -> u32 {
        self.ic_prev
    }

    /// Next-frame weight
    pub const fn ic_next(self) -> u32 {
        self.ic_next
    }

    /// Blend one channel of the two source frames
    ///
    /// Produces a 16-bit intermediate intensity. Both products fit in a
    /// `u32` and their sum is bounded by `255 * BLEND_UNIT`.
    #[inline]
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn blend(self, prev: u8, next: u8) -> u16 {
        ((prev as u32 * self.ic_prev + next as u32 * self.ic_next) >> 16) as u16
    }
}
