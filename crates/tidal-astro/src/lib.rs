/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Astronomic angle and Delta T computation: stateless, deterministic,
//! no failure modes (§4.1).

pub mod angles;
pub mod delta_time;

pub use angles::{angles, angles_with_constants, AstronomicAngles, AstronomicFormula};
pub use delta_time::fetch_delta_time;
