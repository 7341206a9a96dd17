/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The Doodson 7-tuple and its XDO string encodings.

/// Degrees-per-hour rate of each astronomic primary (`tau, s, h, p, n, p1`).
/// `n` regresses, so its Doodson-number rate is negative even though the
/// catalogue stores the digit as it conventionally appears in the tuple.
pub mod speed {
    /// Mean lunar node argument tau (mean solar minus mean lunar time), deg/hr.
    pub const TAU: f64 = 14.492_052_120_693_59;
    pub const S: f64 = 0.549_016_519_507_186_9;
    pub const H: f64 = 0.041_068_640_200_775_72;
    pub const P: f64 = 0.004_641_813_826_146_475;
    /// Regression rate of the Moon's node; stored positive, applied negated.
    pub const N: f64 = 0.002_206_406_570_841_889;
    pub const P1: f64 = 0.000_001_960_985_626_283_367_8;
}

/// A Doodson 7-tuple: six small-integer multipliers onto the astronomic
/// primaries `(tau, s, h, p, n, p1)`, plus a phase `shift` in units of 90
/// degrees (values outside `{-1, 0, 1, 2}` are reduced mod 4 by [`Doodson::new`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Doodson {
    pub tau: i8,
    pub s: i8,
    pub h: i8,
    pub p: i8,
    pub n: i8,
    pub p1: i8,
    pub shift: i8,
}

impl Doodson {
    pub const fn new(tau: i8, s: i8, h: i8, p: i8, n: i8, p1: i8, shift: i8) -> Self {
        let shift = ((shift % 4) + 4) % 4;
        let shift = if shift == 3 { -1 } else { shift };
        Self { tau, s, h, p, n, p1, shift }
    }

    /// The species (tau digit): 0 = long period, 1 = diurnal, 2 = semidiurnal,
    /// 3 = terdiurnal, and so on.
    pub fn species(&self) -> i8 {
        self.tau
    }

    /// Frequency in radians per hour, `sum(multiplier_k * speed_k)`.
    pub fn frequency_rad_per_hour(&self) -> f64 {
        let deg_per_hour = self.tau as f64 * speed::TAU
            + self.s as f64 * speed::S
            + self.h as f64 * speed::H
            + self.p as f64 * speed::P
            + self.n as f64 * (-speed::N)
            + self.p1 as f64 * speed::P1;
        deg_per_hour.to_radians()
    }

    /// Sum of two Doodson tuples scaled by integer coefficients; used to build
    /// shallow-water / compound constituents from their generating waves.
    pub fn combine(parts: &[(i8, Doodson)]) -> Self {
        let mut tau = 0i32;
        let mut s = 0i32;
        let mut h = 0i32;
        let mut p = 0i32;
        let mut n = 0i32;
        let mut p1 = 0i32;
        let mut shift = 0i32;
        for (coef, d) in parts {
            let c = *coef as i32;
            tau += c * d.tau as i32;
            s += c * d.s as i32;
            h += c * d.h as i32;
            p += c * d.p as i32;
            n += c * d.n as i32;
            p1 += c * d.p1 as i32;
            shift += c * d.shift as i32;
        }
        Doodson::new(tau as i8, s as i8, h as i8, p as i8, n as i8, p1 as i8, shift as i8)
    }

    /// Numerical XDO string: 7 digits, each component offset by +5.
    pub fn xdo_numerical(&self) -> String {
        let digit = |v: i8| -> char {
            let shifted = v + 5;
            char::from_digit(shifted.clamp(0, 9) as u32, 10).unwrap_or('?')
        };
        [self.tau, self.s, self.h, self.p, self.n, self.p1, self.shift]
            .into_iter()
            .map(digit)
            .collect()
    }

    /// Alphabetical XDO string: `A` = -5 ... up to the component's value,
    /// offset the same way as the numerical form but rendered as a letter.
    pub fn xdo_alphabetical(&self) -> String {
        let letter = |v: i8| -> char {
            let shifted = (v + 5).clamp(0, 25) as u8;
            (b'A' + shifted) as char
        };
        [self.tau, self.s, self.h, self.p, self.n, self.p1, self.shift]
            .into_iter()
            .map(letter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m2_frequency_matches_schureman() {
        // M2: tau=2, rest 0 -> frequency = 2 * tau_speed deg/hr = 28.9841 deg/hr
        let m2 = Doodson::new(2, 0, 0, 0, 0, 0, 0);
        let deg_per_hour = m2.frequency_rad_per_hour().to_degrees();
        assert!((deg_per_hour - 28.984_104).abs() < 1e-4, "{deg_per_hour}");
    }

    #[test]
    fn test_xdo_numerical_offset() {
        let m2 = Doodson::new(2, 0, 0, 0, 0, 0, 0);
        assert_eq!(m2.xdo_numerical(), "7555555");
    }

    #[test]
    fn test_combine_m4_is_double_m2() {
        let m2 = Doodson::new(2, 0, 0, 0, 0, 0, 0);
        let m4 = Doodson::combine(&[(2, m2)]);
        assert_eq!(m4, Doodson::new(4, 0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn test_shift_reduces_mod_four() {
        let d = Doodson::new(2, 2, -2, 0, 0, 0, 5);
        assert_eq!(d.shift, 1);
    }
}
