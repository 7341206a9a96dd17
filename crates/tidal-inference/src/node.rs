/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The 18.6-year equilibrium node tide, used in place of admittance
//! inference when the `Node` constituent is missing from the atlas.

use num::complex::Complex64;

const GAMMA2: f64 = 0.682;
const AMPLITUDE_M: f64 = 0.0279;

/// In-phase/quadrature components of the equilibrium node tide at
/// latitude `lat_radians`.
pub fn node_tide(lat_radians: f64) -> Complex64 {
    let p20 = 0.5 - 1.5 * lat_radians.sin().powi(2);
    let xi = GAMMA2 * p20 * (1.25 / std::f64::consts::PI).sqrt();
    Complex64::new(xi * AMPLITUDE_M, 0.0)
}
