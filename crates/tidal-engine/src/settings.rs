/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Evaluation settings: a plain value struct with builder-style `with_*`
//! methods and two named presets, constructed programmatically (no
//! file-based configuration format).

use tidal_astro::AstronomicFormula;
use tidal_constituents::EngineFamily;
use tidal_inference::InferenceType;

/// Which wave catalogue family to evaluate against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum EngineType {
    #[default]
    Darwin,
    Doodson,
}

impl From<EngineType> for EngineFamily {
    fn from(value: EngineType) -> Self {
        match value {
            EngineType::Darwin => EngineFamily::Darwin,
            EngineType::Doodson => EngineFamily::Doodson,
        }
    }
}

/// Evaluation settings. See the field docs for defaults; [`FesSettings`]
/// and [`PerthSettings`] are the two named presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub engine_type: EngineType,
    pub astronomic_formulae: AstronomicFormula,
    /// Seconds. Cached astronomic angles are reused across queries whose
    /// epochs fall within this interval of each other.
    pub time_tolerance: f64,
    /// Doodson/Perth-only side-band admittance modulations. Has no effect
    /// on the Darwin engine.
    pub group_modulations: bool,
    pub compute_long_period_equilibrium: bool,
    pub inference_type: InferenceType,
    /// 0 selects the default Rayon pool (hardware concurrency).
    pub num_threads: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_type: EngineType::Darwin,
            astronomic_formulae: AstronomicFormula::Schureman1,
            time_tolerance: 0.0,
            group_modulations: false,
            compute_long_period_equilibrium: true,
            inference_type: InferenceType::Spline,
            num_threads: 0,
        }
    }
}

impl Settings {
    pub fn with_engine_type(mut self, engine_type: EngineType) -> Self {
        self.engine_type = engine_type;
        self
    }

    pub fn with_astronomic_formulae(mut self, formula: AstronomicFormula) -> Self {
        self.astronomic_formulae = formula;
        self
    }

    pub fn with_time_tolerance(mut self, seconds: f64) -> Self {
        self.time_tolerance = seconds;
        self
    }

    pub fn with_group_modulations(mut self, enabled: bool) -> Self {
        self.group_modulations = enabled;
        self
    }

    pub fn with_compute_long_period_equilibrium(mut self, enabled: bool) -> Self {
        self.compute_long_period_equilibrium = enabled;
        self
    }

    pub fn with_inference_type(mut self, inference_type: InferenceType) -> Self {
        self.inference_type = inference_type;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Darwin engine, Schureman-1 angles, spline inference, long-period
    /// equilibrium on: matches the FES reference configuration.
    pub fn fes() -> Self {
        Self::default()
    }

    /// Doodson/Perth engine, IERS angles, linear admittance, long-period
    /// equilibrium off, side-band group modulations on.
    pub fn perth() -> Self {
        Self {
            engine_type: EngineType::Doodson,
            astronomic_formulae: AstronomicFormula::Iers,
            time_tolerance: 0.0,
            group_modulations: true,
            compute_long_period_equilibrium: false,
            inference_type: InferenceType::Linear,
            num_threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fes_settings() {
        assert_eq!(Settings::default(), Settings::fes());
    }

    #[test]
    fn test_perth_settings_disables_long_period_equilibrium() {
        assert!(!Settings::perth().compute_long_period_equilibrium);
    }

    #[test]
    fn test_builder_methods_chain() {
        let settings = Settings::default().with_num_threads(4).with_time_tolerance(60.0);
        assert_eq!(settings.num_threads, 4);
        assert_eq!(settings.time_tolerance, 60.0);
    }
}
