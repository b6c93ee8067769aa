//! Volume conversion between slider percent and mixer decibels
//!
//! Sliders run linearly from 0 to 100 percent while the mixer attenuates in
//! decibels. Zero percent is a hard mute at [`MIN_DB`].

/// Mixer level used for a muted channel
pub const MIN_DB: f32 = -80.0;

/// Top of the slider range
pub const MAX_PERCENT: f32 = 100.0;

/// Smallest non-zero percent fed to the logarithm
pub const MIN_PERCENT_NON_ZERO: f32 = 0.0001;

/// Convert a slider percent (0-100) into a mixer level in decibels
///
/// Values at or below zero (and NaN) map to [`MIN_DB`]; everything else is clamped to
/// `[MIN_PERCENT_NON_ZERO, MAX_PERCENT]` before the conversion, so the result
/// never exceeds 0 dB.
pub fn percent_to_decibels(percent: f32) -> f32 {
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    if !(percent > 0.0) {
        return MIN_DB;
    }

    let normalized = percent.clamp(MIN_PERCENT_NON_ZERO, MAX_PERCENT) / 100.0;
    normalized.log10() * 20.0
}

/// Convert a mixer level in decibels into a slider percent (0-100)
///
/// Levels at or below [`MIN_DB`] (and NaN) map to zero; levels above 0 dB saturate at
/// [`MAX_PERCENT`].
pub fn decibels_to_percent(db: f32) -> f32 {
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    if !(db > MIN_DB) {
        return 0.0;
    }

    let normalized = 10.0_f32.powf(db / 20.0);
    normalized.clamp(0.0, 1.0) * 100.0
}
