//! Single-formula physics and finance helpers.

/// Value of π used by the pendulum program.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.1416;
/// Gravitational acceleration in m/s².
pub const G: f64 = 9.81;
/// Yearly growth factor of a painting's value.
pub const APPRECIATION_RATE: f64 = 1.05;

/// Period in seconds of a simple pendulum whose length is given in cm.
pub fn pendulum_period(length_cm: f64) -> f64 {
    let length_m = length_cm / 100.0;
    2.0 * PI * (length_m / G).sqrt()
}

/// Value at the end of each year, compounding [`APPRECIATION_RATE`].
///
/// Values are produced lazily, one per year.
pub fn appreciation(value: f64, years: u64) -> impl Iterator<Item = f64> {
    (0..years).scan(value, |value, _| {
        *value *= APPRECIATION_RATE;
        Some(*value)
    })
}
