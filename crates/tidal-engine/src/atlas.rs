/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The atlas: a read-only coefficient source, either a regular Cartesian
//! grid or an unstructured LGP mesh, behind one `interpolate` call.

use num::complex::Complex64;
use tidal_constituents::ConstituentId;
use tidal_spatial::{Cartesian, LgpModel};

/// A per-worker accelerator; only meaningful for the LGP variant, but
/// carried uniformly so the evaluator doesn't need to match on atlas kind.
#[derive(Clone, Debug, Default)]
pub struct AtlasAccelerator {
    lgp: tidal_spatial::Accelerator,
}

#[derive(Clone, Debug)]
pub enum Atlas {
    Cartesian(Cartesian),
    Lgp(LgpModel),
}

impl Atlas {
    pub fn interpolate(
        &self,
        lon: f64,
        lat: f64,
        accelerator: &mut AtlasAccelerator,
    ) -> (Vec<(ConstituentId, Complex64)>, tidal_spatial::Quality) {
        match self {
            Atlas::Cartesian(model) => model.interpolate(lon, lat),
            Atlas::Lgp(model) => model.interpolate(lon, lat, &mut accelerator.lgp),
        }
    }
}
