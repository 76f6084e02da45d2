//! Damage arithmetic.
//!
//! Multipliers are integer percentages and are combined exactly: the final
//! value is `ceil(base × m1 × m2 × … / 100^k)` with no intermediate rounding.

/// Applies percentage multipliers to `base`, rounding up once at the end.
///
/// # Example
///
/// ```text
/// scale(10, &[75])        = ceil(7.5)   = 8
/// scale(10, &[200, 150])  = ceil(30.0)  = 30
/// scale(7,  &[75, 150])   = ceil(7.875) = 8
/// ```
pub fn scale(base: u32, multipliers_pct: &[u32]) -> u32 {
    let mut numerator = base as u128;
    let mut denominator = 1u128;
    for &pct in multipliers_pct {
        numerator *= pct as u128;
        denominator *= 100;
    }
    let scaled = numerator.div_ceil(denominator);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// `ceil(damage × pct / 100)`.
pub fn percent_of(damage: u32, pct: u32) -> u32 {
    scale(damage, &[pct])
}
