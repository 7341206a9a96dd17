/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TidalSpatialError {
    #[error("axis requires at least 2 points, got {0}")]
    TooFewAxisPoints(usize),
    #[error("axis points are not evenly spaced")]
    NotEvenlySpaced,
    #[error("grid length {got} does not match lon.len() * lat.len() = {expected}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("triangle index {0} out of bounds for {1} vertices")]
    TriangleIndexOutOfBounds(usize, usize),
    #[error("negative LGP code {0}")]
    NegativeCode(i64),
}
