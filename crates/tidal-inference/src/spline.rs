/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! FES-style spline admittance: a constant coefficient triplet combines
//! the three majors' raw tides directly, `tide_minor = c_1·t_1 + c_2·t_2 + c_3·t_3`.
//!
//! The literal FES cubic-spline coefficient tables (the `SplineInference`
//! class's generated data) were not present in the retrieved source — only
//! the `inference_factory` dispatch that selects it was. What the contract
//! does give us is the shape: a fixed per-minor triplet applied to the
//! majors' raw tides, precomputed once from frequency alone. A natural
//! cubic spline through exactly three knots has no interior knot left to
//! bend around, so it reduces to the unique quadratic through those three
//! points — the same Lagrange basis [`crate::admittance::fourier`] evaluates
//! on the fly against the admittance ratio. This module precomputes that
//! basis as a constant triplet (folding in the `minor/major` amplitude
//! rescale) instead of inventing an unrelated weighting, and is the
//! principled degenerate case rather than a transcription of the real
//! tables; see `DESIGN.md`.

use num::complex::Complex64;

use crate::majors::Majors;

fn lagrange_weights(freq: [f64; 3], x: f64) -> [f64; 3] {
    let mut w = [0.0; 3];
    for i in 0..3 {
        let mut li = 1.0;
        for j in 0..3 {
            if i != j {
                li *= (x - freq[j]) / (freq[i] - freq[j]);
            }
        }
        w[i] = li;
    }
    w
}

/// The constant `(c_1, c_2, c_3)` triplet for a minor at `minor_freq` with
/// equilibrium amplitude `minor_amplitude_cm`, against `majors`.
pub fn coefficients(majors: &Majors, minor_freq: f64, minor_amplitude_cm: f64) -> [f64; 3] {
    let weights = lagrange_weights(majors.freq, minor_freq);
    [
        weights[0] * minor_amplitude_cm / majors.amp[0],
        weights[1] * minor_amplitude_cm / majors.amp[1],
        weights[2] * minor_amplitude_cm / majors.amp[2],
    ]
}

/// Applies a precomputed coefficient triplet to the majors' raw tides.
pub fn combine(majors: &Majors, coefficients: [f64; 3]) -> Complex64 {
    majors.tide[0] * coefficients[0] + majors.tide[1] * coefficients[1] + majors.tide[2] * coefficients[2]
}
