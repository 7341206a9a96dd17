/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Per-worker state: a private clone of the base wave table, an atlas
//! accelerator, and a cached astronomic-angle bundle.

use tidal_astro::{angles_with_constants, AstronomicAngles, AstronomicFormula};
use tidal_math::constants::{Schureman, IERS_2010, SCHUREMAN_1958};
use tidal_waves::WaveTable;

use crate::atlas::AtlasAccelerator;

pub(crate) fn constants_for(formula: AstronomicFormula) -> &'static Schureman {
    match formula {
        AstronomicFormula::Iers => &IERS_2010,
        _ => &SCHUREMAN_1958,
    }
}

pub struct WorkerState {
    pub wave_table: WaveTable,
    pub atlas_accelerator: AtlasAccelerator,
    cached: Option<(f64, AstronomicAngles)>,
}

impl WorkerState {
    pub fn new(base_table: &WaveTable) -> Self {
        Self {
            wave_table: base_table.clone(),
            atlas_accelerator: AtlasAccelerator::default(),
            cached: None,
        }
    }

    /// Returns the astronomic angles for `epoch_seconds`, reusing the
    /// cached bundle if within `tolerance_seconds` of the last computed one.
    pub fn angles_for(
        &mut self,
        epoch_seconds: f64,
        tolerance_seconds: f64,
        formula: AstronomicFormula,
    ) -> AstronomicAngles {
        if let Some((cached_epoch, cached_angles)) = self.cached {
            if (epoch_seconds - cached_epoch).abs() <= tolerance_seconds {
                return cached_angles;
            }
        }
        let k = constants_for(formula);
        let computed = angles_with_constants(epoch_seconds, formula, k);
        self.cached = Some((epoch_seconds, computed));
        computed
    }
}
