/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A single tidal wave: its constant Doodson identity plus the transient
//! nodal state computed once per (time, worker) pair.

use std::f64::consts::FRAC_PI_2;

use num::complex::Complex64;
use tidal_astro::AstronomicAngles;
use tidal_constituents::{ConstituentId, Doodson, WaveKind};
use tidal_math::constants::Schureman;

use crate::factors::nodal_factor;

/// Per-constituent transient state plus its constant catalogue identity.
#[derive(Clone, Copy, Debug)]
pub struct Wave {
    pub id: ConstituentId,
    pub doodson: Doodson,
    /// Nodal amplitude factor, always `> 0` once `compute_nodal_corrections`
    /// has run.
    pub f: f64,
    /// Nodal phase correction, radians.
    pub u: f64,
    /// Greenwich argument, radians.
    pub v: f64,
    /// Complex harmonic coefficient, loaded from the atlas or inference.
    pub tide: Complex64,
    /// Whether `tide` came from the atlas (`true`) or was inferred/zeroed.
    pub is_modeled: bool,
    /// Whether the wave was excluded from the long-period equilibrium sum
    /// because it is carried dynamically in this wave table.
    pub dynamic: bool,
}

impl Wave {
    pub fn new(id: ConstituentId) -> Self {
        Self {
            id,
            doodson: id.doodson(),
            f: 1.0,
            u: 0.0,
            v: 0.0,
            tide: Complex64::new(0.0, 0.0),
            is_modeled: false,
            dynamic: false,
        }
    }

    pub fn kind(&self) -> WaveKind {
        self.id.kind()
    }

    pub fn frequency_rad_per_hour(&self) -> f64 {
        self.doodson.frequency_rad_per_hour()
    }

    /// Computes `(f, u, v)` for this wave at the given astronomic angles.
    /// `group_modulations` is accepted for interface symmetry with the
    /// Doodson/Perth engine but has no effect here: no side-band admittance
    /// group tables were available to ground a distinct implementation, so
    /// both engines share one nodal-correction path (documented in
    /// `DESIGN.md`).
    pub fn compute_nodal_corrections(
        &mut self,
        angles: &AstronomicAngles,
        k: &Schureman,
        _group_modulations: bool,
    ) {
        let d = self.doodson;
        let v = d.tau as f64 * angles.tau
            + d.s as f64 * angles.s
            + d.h as f64 * angles.h
            + d.p as f64 * angles.p
            + d.p1 as f64 * angles.p1
            + d.shift as f64 * FRAC_PI_2;

        let (f, u) = nodal_factor(self.id, angles, k);

        self.v = v;
        self.f = f;
        self.u = u;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidal_astro::{angles, AstronomicFormula};
    use tidal_math::constants::SCHUREMAN_1958;

    #[test]
    fn test_invariants_hold_after_correction() {
        let mut wave = Wave::new(ConstituentId::M2);
        let a = angles(1_000_000.0, AstronomicFormula::Schureman1);
        wave.compute_nodal_corrections(&a, &SCHUREMAN_1958, false);
        assert!(wave.f > 0.0);
        assert!((wave.v + wave.u).is_finite());
    }
}
