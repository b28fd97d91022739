//! Odometer and age step functions.

/// Depreciation percentage for total kilometers driven.
///
/// Boundaries are strict greater-than: a reading of exactly 20,000 km falls
/// in the lowest band and yields 0.
///
/// # Examples
///
/// ```
/// use carworth::depreciation::odometer_depreciation;
///
/// assert_eq!(odometer_depreciation(20_000), 0.0);
/// assert_eq!(odometer_depreciation(20_001), 1.5);
/// assert_eq!(odometer_depreciation(150_000), 9.0);
/// ```
pub fn odometer_depreciation(km: u32) -> f64 {
    match km {
        k if k > 100_000 => 9.0,
        k if k > 80_000 => 6.0,
        k if k > 60_000 => 5.0,
        k if k > 40_000 => 3.0,
        k if k > 20_000 => 1.5,
        _ => 0.0,
    }
}

/// Depreciation percentage for vehicle age in years.
///
/// Brackets are inclusive on their upper bound; anything past 15 years takes
/// the terminal 55% rate.
pub fn age_depreciation(age_years: u16) -> f64 {
    match age_years {
        0..=1 => 2.5,
        2 => 5.0,
        3 => 7.5,
        4 => 11.5,
        5 => 16.0,
        6 => 23.0,
        7 => 30.0,
        8 => 35.0,
        9 => 40.0,
        10 => 43.0,
        11..=15 => 46.0,
        _ => 55.0,
    }
}
