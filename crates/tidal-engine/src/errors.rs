/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The engine's aggregate error type: one `#[from]` conversion per leaf
//! crate error, so callers see a single top-level error.

use thiserror::Error;
use tidal_analysis::TidalAnalysisError;
use tidal_constituents::TidalConstituentsError;
use tidal_spatial::TidalSpatialError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TidalError {
    #[error("constituent catalogue: {0}")]
    Constituent(#[from] TidalConstituentsError),
    #[error("spatial interpolation: {0}")]
    Spatial(#[from] TidalSpatialError),
    #[error("harmonic analysis: {0}")]
    Analysis(#[from] TidalAnalysisError),
    #[error("evaluator input arrays must have equal length: epochs={epochs} lons={lons} lats={lats}")]
    QueryShapeMismatch { epochs: usize, lons: usize, lats: usize },
}
