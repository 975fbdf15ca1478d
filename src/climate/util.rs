//! Shared helpers for temperature computations.

/// Seasonal phase sine for a 1-based `month`.
///
/// Returns values in [-1, 1]: -1 in January, +1 in July.
pub fn season_effect(month: u8) -> f64 {
    let phase = (f64::from(month) - 1.0) / 12.0 * std::f64::consts::TAU;
    (phase - std::f64::consts::FRAC_PI_2).sin()
}

/// Rounds to one decimal place, halves toward +inf.
#[inline]
pub fn round_tenth(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_extremes() {
        assert!((season_effect(1) + 1.0).abs() < 1e-12);
        assert!((season_effect(7) - 1.0).abs() < 1e-12);
        assert!(season_effect(4).abs() < 1e-12);
        assert!(season_effect(10).abs() < 1e-12);
    }

    #[test]
    fn round_tenth_halves_go_up() {
        assert_eq!(round_tenth(12.34), 12.3);
        assert_eq!(round_tenth(12.36), 12.4);
        assert_eq!(round_tenth(-12.25), -12.2);
        assert_eq!(round_tenth(0.0), 0.0);
    }
}
