/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Wave and wave-table: per-constituent nodal corrections and the
//! Rayleigh-criterion subsetting used to pick a separable constituent set
//! for a given record length.

pub mod factors;
pub mod table;
pub mod wave;

pub use table::WaveTable;
pub use wave::Wave;
