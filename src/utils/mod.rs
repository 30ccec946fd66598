// imgedit/src/utils/mod.rs

/// Clamps an integer accumulator into the 8-bit sample range.
#[inline]
pub fn clamp_to_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Drops the fractional part and saturates into the 8-bit sample range.
#[inline]
pub fn truncate_to_u8(value: f64) -> u8 {
    // `as` truncates toward zero and saturates at both ends
    value as u8
}

/// Signed brightness offset for a percentage of full scale.
#[inline]
pub fn percent_of_full_scale(percent: i32) -> f64 {
    255.0 * f64::from(percent) / 100.0
}
