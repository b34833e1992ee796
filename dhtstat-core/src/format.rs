//! Rounding and one-decimal formatting
//!
//! Two rounding rules are in play and they differ on purpose:
//!
//! - [`round_half_up`] seeds the integer setpoint from a temperature.
//!   A fraction of exactly .5 goes up, everything below goes down (floor).
//! - [`format_one_decimal`] rounds a real value to the nearest tenth with
//!   halves going away from zero, for display.

use core::fmt;

use crate::reading::Temperature;

/// Round a real value to the nearest integer, halves away from zero
///
/// Works without `libm`: the truncating cast supplies the integer part
/// and the remaining fraction decides the step. Out-of-range values
/// saturate at the `i32` limits.
pub fn round_half_away_from_zero(value: f32) -> i32 {
    let whole = value as i32;
    let frac = value - whole as f32;

    if frac >= 0.5 {
        whole.saturating_add(1)
    } else if frac <= -0.5 {
        whole.saturating_sub(1)
    } else {
        whole
    }
}

/// Integer setpoint seed for a temperature
///
/// Floor of the value, plus one when the fractional part is .5 or more.
/// `20.5 -> 21`, `20.3 -> 20`, `-1.5 -> -1`, `-1.7 -> -2`.
pub fn round_half_up(temp: Temperature) -> i16 {
    let tenths = temp.tenths();
    let floor = tenths.div_euclid(10);

    if tenths.rem_euclid(10) >= 5 {
        floor + 1
    } else {
        floor
    }
}

/// A value split into integer part and a single decimal digit
///
/// The integer part keeps the sign; the digit is always non-negative.
/// `negative` is tracked separately so that `-0.4` does not lose its sign
/// when the integer part is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneDecimal {
    pub integer: i32,
    pub tenths: u8,
    pub negative: bool,
}

impl OneDecimal {
    /// Split a value given in tenths
    pub const fn from_tenths(scaled: i32) -> Self {
        Self {
            integer: scaled / 10,
            tenths: (scaled % 10).unsigned_abs() as u8,
            negative: scaled < 0,
        }
    }

    /// An integer with a literal zero decimal digit
    pub const fn whole(integer: i32) -> Self {
        Self {
            integer,
            tenths: 0,
            negative: integer < 0,
        }
    }

    /// Exact one-decimal form of a temperature
    pub const fn from_temperature(temp: Temperature) -> Self {
        Self::from_tenths(temp.tenths() as i32)
    }

    /// The value in tenths, sign included
    pub const fn scaled(&self) -> i32 {
        let magnitude = self.integer.unsigned_abs() as i32 * 10 + self.tenths as i32;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<Temperature> for OneDecimal {
    fn from(temp: Temperature) -> Self {
        Self::from_temperature(temp)
    }
}

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && self.integer == 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.{}", self.integer, self.tenths)
    }
}

/// Round to the nearest tenth and split for display
pub fn format_one_decimal(value: f32) -> OneDecimal {
    OneDecimal::from_tenths(round_half_away_from_zero(value * 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(value: OneDecimal) -> std::string::String {
        std::format!("{}", value)
    }

    #[test]
    fn test_round_half_up_examples() {
        assert_eq!(round_half_up(Temperature::from_tenths(205)), 21);
        assert_eq!(round_half_up(Temperature::from_tenths(203)), 20);
        assert_eq!(round_half_up(Temperature::from_tenths(-15)), -1);
        assert_eq!(round_half_up(Temperature::from_tenths(-17)), -2);
        assert_eq!(round_half_up(Temperature::from_tenths(200)), 20);
        assert_eq!(round_half_up(Temperature::from_tenths(226)), 23);
    }

    #[test]
    fn test_round_half_up_from_celsius() {
        assert_eq!(round_half_up(Temperature::from_celsius(20.5)), 21);
        assert_eq!(round_half_up(Temperature::from_celsius(20.3)), 20);
        assert_eq!(round_half_up(Temperature::from_celsius(-1.5)), -1);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away_from_zero(2.5), 3);
        assert_eq!(round_half_away_from_zero(-2.5), -3);
        assert_eq!(round_half_away_from_zero(2.49), 2);
        assert_eq!(round_half_away_from_zero(-2.49), -2);
        assert_eq!(round_half_away_from_zero(0.0), 0);
        assert_eq!(round_half_away_from_zero(1.0e12), i32::MAX);
    }

    #[test]
    fn test_format_one_decimal() {
        let v = format_one_decimal(23.7);
        assert_eq!((v.integer, v.tenths), (23, 7));
        assert_eq!(text(v), "23.7");

        let v = format_one_decimal(23.96);
        assert_eq!((v.integer, v.tenths), (24, 0));

        let v = format_one_decimal(-3.25);
        assert_eq!((v.integer, v.tenths), (-3, 3));
        assert_eq!(text(v), "-3.3");
    }

    #[test]
    fn test_negative_below_one_keeps_sign() {
        let v = format_one_decimal(-0.4);
        assert_eq!(v.integer, 0);
        assert_eq!(v.tenths, 4);
        assert!(v.negative);
        assert_eq!(text(v), "-0.4");

        assert_eq!(text(format_one_decimal(-0.04)), "0.0");
    }

    #[test]
    fn test_whole_has_zero_digit() {
        assert_eq!(text(OneDecimal::whole(22)), "22.0");
        assert_eq!(text(OneDecimal::whole(-2)), "-2.0");
        assert_eq!(text(OneDecimal::whole(0)), "0.0");
    }

    #[test]
    fn test_from_temperature_is_exact() {
        let v = OneDecimal::from(Temperature::from_tenths(237));
        assert_eq!(v, format_one_decimal(23.7));
        assert_eq!(v.scaled(), 237);
    }

    proptest! {
        #[test]
        fn prop_split_reassembles(value in -1000.0f32..1000.0) {
            let v = format_one_decimal(value);
            let expected = round_half_away_from_zero(value * 10.0);
            let sign = if v.negative { -1 } else { 1 };
            prop_assert_eq!(v.integer * 10 + sign * v.tenths as i32, expected);
            prop_assert!(v.tenths < 10);
        }

        #[test]
        fn prop_round_half_up_bounds(tenths in -1000i16..3000) {
            let seed = round_half_up(Temperature::from_tenths(tenths)) as i32;
            let t = tenths as i32;
            // seed is the nearest integer, ties upward
            prop_assert!(seed * 10 - 5 <= t && t < seed * 10 + 5);
        }
    }
}
