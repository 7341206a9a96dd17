/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `is_same(a, b, epsilon)` from the design notes, expressed as a trait so
//! callers never compare floats by bit-equality.

pub trait IsClose {
    const DEFAULT_RELATIVE: f64;
    const DEFAULT_ABSOLUTE: f64;

    fn is_close_with_tolerances(&self, rhs: &Self, rel_tol: f64, abs_tol: f64) -> bool;

    fn is_close_abs(&self, rhs: &Self, abs_tol: f64) -> bool {
        self.is_close_with_tolerances(rhs, Self::DEFAULT_RELATIVE, abs_tol)
    }

    fn is_close_rel(&self, rhs: &Self, rel_tol: f64) -> bool {
        self.is_close_with_tolerances(rhs, rel_tol, Self::DEFAULT_ABSOLUTE)
    }

    fn is_close(&self, rhs: &Self) -> bool {
        self.is_close_with_tolerances(rhs, Self::DEFAULT_RELATIVE, Self::DEFAULT_ABSOLUTE)
    }
}

impl IsClose for f64 {
    const DEFAULT_RELATIVE: f64 = 1e-8;
    const DEFAULT_ABSOLUTE: f64 = 0.0;

    fn is_close_with_tolerances(&self, rhs: &Self, rel_tol: f64, abs_tol: f64) -> bool {
        (self - rhs).abs() <= f64::max(rel_tol * f64::max(self.abs(), rhs.abs()), abs_tol)
    }
}

/// NaN-aware: two NaNs compare close (used to assert "both undefined").
pub fn is_same(a: f64, b: f64, epsilon: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    a.is_close_abs(&b, epsilon)
}

#[macro_export]
macro_rules! assert_close {
    ($lhs:expr, $rhs:expr) => {
        assert!($lhs.is_close(&$rhs), "{:?} \u{2249} {:?}", $lhs, $rhs);
    };
    ($lhs:expr, $rhs:expr, $abs_tol:expr) => {
        assert!(
            $lhs.is_close_abs(&$rhs, $abs_tol),
            "{:?} \u{2249} {:?}",
            $lhs,
            $rhs
        );
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, 1.0 + f64::EPSILON, true)]
    #[case(0.0, 1.0, false)]
    fn test_is_close_f64(#[case] a: f64, #[case] b: f64, #[case] expected: bool) {
        assert_eq!(a.is_close(&b), expected);
    }

    #[test]
    fn test_is_same_nan() {
        assert!(is_same(f64::NAN, f64::NAN, 1e-9));
        assert!(!is_same(f64::NAN, 0.0, 1e-9));
    }

    #[test]
    fn test_assert_close() {
        assert_close!(1.0, 1.0 + f64::EPSILON);
        assert_close!(0.0, 0.0 + f64::EPSILON, 2.0 * f64::EPSILON);
    }
}
