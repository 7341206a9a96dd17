/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Top-level tidal prediction engine: ties the constituent catalogue,
//! astronomic angles, wave tables, spatial atlases, admittance inference
//! and harmonic analysis crates together behind one evaluator.

pub mod atlas;
pub mod errors;
pub mod evaluator;
pub mod settings;
pub mod worker;

pub use atlas::{Atlas, AtlasAccelerator};
pub use errors::TidalError;
pub use evaluator::{evaluate_tide, evaluate_tide_from_constituents};
pub use settings::{EngineType, Settings};
pub use worker::WorkerState;
