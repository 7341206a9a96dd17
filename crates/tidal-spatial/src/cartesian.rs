/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The Cartesian tidal model: one complex-valued grid per constituent over
//! a `(lon, lat)` axis pair, with bilinear interpolation.
//!
//! Grid storage is generic over `T` (`f32` or `f64`), matching the
//! original's `tidal_model::Cartesian<T>` template: an atlas can be loaded
//! at `f32` precision to halve its memory footprint without losing
//! interpolation accuracy, since the bilinear arithmetic itself is always
//! carried out in `f64` and only the stored corner values narrow to `T`.

use std::collections::HashMap;

use num::complex::{Complex, Complex64};
use num::Float;
use tidal_constituents::ConstituentId;

use crate::axis::Axis;
use crate::errors::TidalSpatialError;
use crate::quality::{self, Quality};

/// A per-constituent grid, stored row-major over `(lon, lat)`:
/// `grid[i * lat.len() + j]` is the value at `(lon[i], lat[j])`.
#[derive(Clone, Debug)]
pub struct Cartesian<T = f64> {
    lon: Axis,
    lat: Axis,
    constituents: HashMap<ConstituentId, Vec<Complex<T>>>,
}

impl<T> Cartesian<T>
where
    T: Float + Into<f64>,
{
    pub fn new(lon: Axis, lat: Axis) -> Self {
        Self { lon, lat, constituents: HashMap::new() }
    }

    pub fn lon(&self) -> &Axis {
        &self.lon
    }

    pub fn lat(&self) -> &Axis {
        &self.lat
    }

    /// Adds a constituent's grid; `grid.len()` must equal `lon.len() * lat.len()`.
    pub fn add_constituent(
        &mut self,
        id: ConstituentId,
        grid: Vec<Complex<T>>,
    ) -> Result<(), TidalSpatialError> {
        let expected = self.lon.len() * self.lat.len();
        if grid.len() != expected {
            return Err(TidalSpatialError::ShapeMismatch { expected, got: grid.len() });
        }
        self.constituents.insert(id, grid);
        Ok(())
    }

    pub fn constituent_ids(&self) -> impl Iterator<Item = ConstituentId> + '_ {
        self.constituents.keys().copied()
    }

    fn at(&self, grid: &[Complex<T>], i: usize, j: usize) -> Complex64 {
        let value = grid[i * self.lat.len() + j];
        Complex64::new(value.re.into(), value.im.into())
    }

    /// Bilinear-interpolates every loaded constituent at `(lon, lat)`.
    /// Out-of-bounds (non-periodic) queries return all-NaN with quality 0.
    /// NaN grid corners are skipped and the remaining weights renormalised;
    /// if all four corners are NaN, that constituent returns NaN. The
    /// interpolated output is always `f64`, regardless of the grid's
    /// storage precision.
    pub fn interpolate(&self, lon: f64, lat: f64) -> (Vec<(ConstituentId, Complex64)>, Quality) {
        let lon_idx = self.lon.find_indices(lon);
        let lat_idx = self.lat.find_indices(lat);

        let (Some((i1, i2)), Some((j1, j2))) = (lon_idx, lat_idx) else {
            let nan = Complex64::new(f64::NAN, f64::NAN);
            return (self.constituent_ids().map(|c| (c, nan)).collect(), quality::UNDEFINED);
        };

        let lon_norm = self.lon.normalize_coordinate(lon);
        let lon0 = self.lon.value(i1 as i64);
        let lat0 = self.lat.value(j1 as i64);
        let tx = ((lon_norm - lon0) / self.lon.step()).clamp(0.0, 1.0);
        let ty = ((lat - lat0) / self.lat.step()).clamp(0.0, 1.0);

        let w11 = (1.0 - tx) * (1.0 - ty);
        let w21 = tx * (1.0 - ty);
        let w12 = (1.0 - tx) * ty;
        let w22 = tx * ty;

        let mut results = Vec::with_capacity(self.constituents.len());
        let mut max_quality = 0usize;

        for (id, grid) in &self.constituents {
            let corners = [
                (self.at(grid, i1, j1), w11),
                (self.at(grid, i2, j1), w21),
                (self.at(grid, i1, j2), w12),
                (self.at(grid, i2, j2), w22),
            ];

            let mut sum = Complex64::new(0.0, 0.0);
            let mut weight_sum = 0.0;
            let mut used = 0usize;
            for (value, weight) in corners {
                if value.re.is_nan() || value.im.is_nan() {
                    continue;
                }
                sum += value * weight;
                weight_sum += weight;
                used += 1;
            }

            let value = if used == 0 {
                Complex64::new(f64::NAN, f64::NAN)
            } else {
                sum / weight_sum
            };
            max_quality = max_quality.max(used);
            results.push((*id, value));
        }

        (results, quality::interpolated(max_quality))
    }
}
