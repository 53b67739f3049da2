/// Application-wide constants. Dimensions are CSS pixels, delays are
/// milliseconds; the delays are cosmetic pacing only.
pub const BOARD_SIZE_PX: f64 = 500.0;
/// Pause between the last tile landing and the celebration modal.
pub const COMPLETION_DELAY_MS: i32 = 500;
/// Lifetime of the shake class applied to a rejected drop target.
pub const SHAKE_DURATION_MS: i32 = 500;
