/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;
use tidal_math::LinalgError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TidalAnalysisError {
    #[error("f and vu must both have W={w} rows, got f={f_rows} vu={vu_rows}")]
    RowCountMismatch { w: usize, f_rows: usize, vu_rows: usize },
    #[error("row {row} has length {got}, expected N={expected} (len(h))")]
    RowLengthMismatch { row: usize, expected: usize, got: usize },
    #[error("normal-equations solve failed: {0}")]
    Numeric(#[from] LinalgError),
}
