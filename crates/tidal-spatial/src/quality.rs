/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The interpolation quality flag: `0` undefined, `+N` interpolated from
//! `N` points, `-N` extrapolated from `N` points.

pub type Quality = i8;

pub const UNDEFINED: Quality = 0;

pub fn interpolated(n: usize) -> Quality {
    n.min(127) as Quality
}

pub fn extrapolated(n: usize) -> Quality {
    -(n.min(127) as Quality)
}
