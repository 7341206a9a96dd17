/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Harmonic analysis: least-squares extraction of `W` complex harmonic
//! constants from an `N`-sample time series, given each constituent's
//! per-sample nodal amplitude factor `f` and phase argument `v+u`.

pub mod errors;

use num::complex::Complex64;
use tidal_math::DenseMatrix;

pub use errors::TidalAnalysisError;

/// Builds the `(2W, N)` design matrix: rows `0..W` are `f·cos(vu)`, rows
/// `W..2W` are `f·sin(vu)`.
fn design_matrix(f: &[Vec<f64>], vu: &[Vec<f64>], w: usize, n: usize) -> Vec<Vec<f64>> {
    let mut rows = Vec::with_capacity(2 * w);
    for k in 0..w {
        rows.push((0..n).map(|i| f[k][i] * vu[k][i].cos()).collect());
    }
    for k in 0..w {
        rows.push((0..n).map(|i| f[k][i] * vu[k][i].sin()).collect());
    }
    rows
}

/// Extracts `W` complex harmonic constants from the observation series `h`
/// (length `N`), given per-constituent nodal amplitude factors `f` and
/// Greenwich-plus-nodal phase arguments `vu` (both `W × N`, row `k` for
/// constituent `k`).
///
/// Returns a vector of `W` NaN complex values if `h` contains any NaN
/// (a gap-filled or otherwise invalid series, handled the same way the
/// rest of this library treats undefined data, rather than as an error).
/// Shape mismatches and a singular normal-equations system are errors.
pub fn harmonic_analysis(
    h: &[f64],
    f: &[Vec<f64>],
    vu: &[Vec<f64>],
) -> Result<Vec<Complex64>, TidalAnalysisError> {
    let n = h.len();
    let w = f.len();

    if vu.len() != w {
        return Err(TidalAnalysisError::RowCountMismatch { w, f_rows: f.len(), vu_rows: vu.len() });
    }
    for (row, values) in f.iter().enumerate() {
        if values.len() != n {
            return Err(TidalAnalysisError::RowLengthMismatch { row, expected: n, got: values.len() });
        }
    }
    for (row, values) in vu.iter().enumerate() {
        if values.len() != n {
            return Err(TidalAnalysisError::RowLengthMismatch { row, expected: n, got: values.len() });
        }
    }

    if h.iter().any(|v| v.is_nan()) {
        return Ok(vec![Complex64::new(f64::NAN, f64::NAN); w]);
    }

    let design = design_matrix(f, vu, w, n);
    let dim = 2 * w;

    let mut normal = DenseMatrix::zeros(dim);
    for i in 0..dim {
        for j in 0..=i {
            let sum: f64 = (0..n).map(|k| design[i][k] * design[j][k]).sum();
            normal.set(i, j, sum);
            normal.set(j, i, sum);
        }
    }

    let rhs: Vec<f64> = (0..dim).map(|i| (0..n).map(|k| design[i][k] * h[k]).sum()).collect();

    let x = normal.solve_symmetric(&rhs)?;

    Ok((0..w).map(|k| Complex64::new(x[k], x[w + k])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::TAU;

    /// Synthesises a clean single-constituent signal and checks that
    /// analysis recovers its known amplitude and phase.
    #[test]
    fn test_recovers_a_single_known_constituent() {
        let n = 200;
        let amplitude = 1.7;
        let phase = 0.4_f64;
        let omega = TAU / 12.42;

        let vu: Vec<f64> = (0..n).map(|i| omega * i as f64).collect();
        let f = vec![vec![1.0; n]];
        let h: Vec<f64> = vu.iter().map(|&arg| amplitude * (arg - phase).cos()).collect();

        let result = harmonic_analysis(&h, &f, &[vu]).unwrap();
        assert_eq!(result.len(), 1);
        assert_float_eq!(result[0].re, amplitude * phase.cos(), abs <= 1e-8);
        assert_float_eq!(result[0].im, amplitude * phase.sin(), abs <= 1e-8);
    }

    #[test]
    fn test_nan_observation_returns_nan_vector() {
        let f = vec![vec![1.0, 1.0, 1.0]];
        let vu = vec![vec![0.0, 1.0, 2.0]];
        let h = vec![1.0, f64::NAN, 3.0];
        let result = harmonic_analysis(&h, &f, &vu).unwrap();
        assert!(result[0].re.is_nan());
    }

    #[test]
    fn test_row_count_mismatch_errors() {
        let f = vec![vec![1.0, 1.0]];
        let vu = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        let h = vec![1.0, 2.0];
        let err = harmonic_analysis(&h, &f, &vu).unwrap_err();
        assert_eq!(err, TidalAnalysisError::RowCountMismatch { w: 1, f_rows: 1, vu_rows: 2 });
    }

    #[test]
    fn test_row_length_mismatch_errors() {
        let f = vec![vec![1.0, 1.0, 1.0]];
        let vu = vec![vec![1.0, 1.0]];
        let h = vec![1.0, 2.0, 3.0];
        let err = harmonic_analysis(&h, &f, &vu).unwrap_err();
        assert_eq!(err, TidalAnalysisError::RowLengthMismatch { row: 0, expected: 3, got: 2 });
    }

    #[test]
    fn test_singular_system_propagates() {
        // Two identical constituents make the normal-equations matrix singular.
        let n = 10;
        let vu: Vec<f64> = (0..n).map(|i| i as f64 * 0.3).collect();
        let f = vec![vec![1.0; n], vec![1.0; n]];
        let h: Vec<f64> = vu.iter().map(|v| v.cos()).collect();
        let err = harmonic_analysis(&h, &f, &[vu.clone(), vu]).unwrap_err();
        assert!(matches!(err, TidalAnalysisError::Numeric(_)));
    }
}
