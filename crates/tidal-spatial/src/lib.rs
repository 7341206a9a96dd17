/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Spatial interpolation of tidal constituent grids: evenly-spaced
//! Cartesian axes and unstructured LGP meshes, both exposing the same
//! interpolation-with-quality-flag contract.

pub mod axis;
pub mod cartesian;
pub mod errors;
pub mod lgp;
pub mod mesh;
pub mod quality;

pub use axis::Axis;
pub use cartesian::Cartesian;
pub use errors::TidalSpatialError;
pub use lgp::{Accelerator, LgpModel, LgpOrder};
pub use mesh::Mesh;
pub use quality::Quality;
