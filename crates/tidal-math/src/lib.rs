/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Numeric primitives shared across the tidal-rs crates: angle
//! normalisation, the `IsClose` float-comparison trait, the Schureman
//! physical constant table, and a small hand-rolled dense linear-algebra
//! routine for harmonic analysis.

pub mod angle;
pub mod constants;
pub mod is_close;
pub mod linalg;

pub use angle::{mod_two_pi, normalize_angle, normalize_two_pi};
pub use is_close::{IsClose, is_same};
pub use linalg::{DenseMatrix, LinalgError};
