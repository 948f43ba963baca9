/// Truncates an `f64` toward zero and narrows it to an `i32`.
///
/// Fractions are dropped. Values beyond the `i32` range saturate at
/// `i32::MIN` / `i32::MAX`, and `NaN` becomes `0`. This is the conversion the
/// `%` operator applies to both of its operands.
///
/// ## Parameters
/// - `value`: The floating-point value to narrow.
///
/// ## Returns
/// The truncated integer.
///
/// ## Example
/// ```
/// use reckon::util::num::truncate_to_i32;
///
/// assert_eq!(truncate_to_i32(7.9), 7);
/// assert_eq!(truncate_to_i32(-7.9), -7);
/// assert_eq!(truncate_to_i32(0.5), 0);
/// assert_eq!(truncate_to_i32(1e12), i32::MAX);
/// assert_eq!(truncate_to_i32(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate_to_i32(value: f64) -> i32 {
    value as i32
}
