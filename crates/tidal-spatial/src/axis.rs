/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An evenly-spaced 1-D grid, with periodic-longitude wrap support.

use tidal_math::normalize_angle;

use crate::errors::TidalSpatialError;

const PERIOD_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    start: f64,
    step: f64,
    size: usize,
    is_longitude: bool,
    is_ascending: bool,
    period: Option<f64>,
}

impl Axis {
    /// Builds an axis from explicit, evenly-spaced values. `is_longitude`
    /// enables 360-degree periodic wrap detection.
    pub fn new(values: &[f64], is_longitude: bool) -> Result<Self, TidalSpatialError> {
        if values.len() < 2 {
            return Err(TidalSpatialError::TooFewAxisPoints(values.len()));
        }
        let step = values[1] - values[0];
        if step == 0.0 {
            return Err(TidalSpatialError::NotEvenlySpaced);
        }
        for w in values.windows(2) {
            if (w[1] - w[0] - step).abs() > 1e-9 * step.abs().max(1.0) {
                return Err(TidalSpatialError::NotEvenlySpaced);
            }
        }

        let start = values[0];
        let size = values.len();
        let is_ascending = step > 0.0;

        let period = if is_longitude && (step.abs() * size as f64 - 360.0).abs() < PERIOD_EPSILON {
            Some(360.0)
        } else {
            None
        };

        Ok(Self { start, step, size, is_longitude, is_ascending, period })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_longitude(&self) -> bool {
        self.is_longitude
    }

    pub fn is_ascending(&self) -> bool {
        self.is_ascending
    }

    pub fn is_periodic(&self) -> bool {
        self.period.is_some()
    }

    pub fn value(&self, i: i64) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Wraps `coordinate` into the axis's periodic range; a no-op for
    /// non-periodic axes.
    pub fn normalize_coordinate(&self, coordinate: f64) -> f64 {
        match self.period {
            Some(period) => normalize_angle(coordinate, self.start, period),
            None => coordinate,
        }
    }

    /// The (possibly out-of-range) index nearest `coordinate`.
    pub fn find_index(&self, coordinate: f64) -> i64 {
        let c = self.normalize_coordinate(coordinate);
        ((c - self.start) / self.step).round() as i64
    }

    /// `find_index`, but `None` if out of `[0, size)` for a non-periodic axis.
    pub fn find_index_bounded(&self, coordinate: f64) -> Option<usize> {
        let idx = self.find_index(coordinate);
        if idx < 0 || idx as usize >= self.size {
            None
        } else {
            Some(idx as usize)
        }
    }

    /// The bracketing pair `(i, i+1)` for `coordinate`, wrapping the upper
    /// index to 0 on a periodic axis. `None` if the lower index would be
    /// out of bounds on a non-periodic axis.
    pub fn find_indices(&self, coordinate: f64) -> Option<(usize, usize)> {
        let c = self.normalize_coordinate(coordinate);
        let raw = (c - self.start) / self.step;
        let i = raw.floor() as i64;
        let i1 = i;
        let i2 = i + 1;

        let wrap = |idx: i64| -> Option<usize> {
            if let Some(_period) = self.period {
                Some((idx.rem_euclid(self.size as i64)) as usize)
            } else if idx >= 0 && (idx as usize) < self.size {
                Some(idx as usize)
            } else {
                None
            }
        };

        Some((wrap(i1)?, wrap(i2)?))
    }
}
