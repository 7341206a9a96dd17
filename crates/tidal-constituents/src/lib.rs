/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The tidal constituent catalogue: stable identifiers, Doodson numbers,
//! name parsing, and XDO string encoding.

pub mod catalogue;
pub mod doodson;
pub mod errors;

pub use catalogue::{compound_parts, ConstituentId, EngineFamily, WaveKind};
pub use doodson::Doodson;
pub use errors::TidalConstituentsError;
