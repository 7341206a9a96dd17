/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The LGP (Lagrange P1/P2) tidal model: mesh-based interpolation with
//! barycentric basis functions inside the domain and inverse-distance
//! extrapolation just outside it.

use std::collections::HashMap;

use num::complex::Complex64;
use tidal_constituents::ConstituentId;

use crate::errors::TidalSpatialError;
use crate::mesh::Mesh;
use crate::quality::{self, Quality};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LgpOrder {
    /// 3 dofs per triangle (vertices only).
    One,
    /// 6 dofs per triangle (vertices + mid-edges).
    Two,
}

impl LgpOrder {
    fn dofs_per_triangle(self) -> usize {
        match self {
            LgpOrder::One => 3,
            LgpOrder::Two => 6,
        }
    }
}

/// Per-worker cache: the last triangle hit, and the bounds for reusing it.
#[derive(Clone, Debug, Default)]
pub struct Accelerator {
    last_triangle: Option<usize>,
}

impl Accelerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct LgpModel {
    mesh: Mesh,
    order: LgpOrder,
    /// `codes[triangle][k]` is the global dof index for local dof `k`, or
    /// `-1` if masked out by a bounding box.
    codes: Vec<Vec<i64>>,
    dof_count: usize,
    constituents: HashMap<ConstituentId, Vec<Complex64>>,
    max_distance_m: f64,
}

fn barycentric(px: f64, py: f64, tri: [(f64, f64); 3]) -> (f64, f64, f64) {
    let (x0, y0) = tri[0];
    let (x1, y1) = tri[1];
    let (x2, y2) = tri[2];
    let denom = (y1 - y2) * (x0 - x2) + (x2 - x1) * (y0 - y2);
    let w0 = ((y1 - y2) * (px - x2) + (x2 - x1) * (py - y2)) / denom;
    let w1 = ((y2 - y0) * (px - x2) + (x0 - x2) * (py - y2)) / denom;
    let w2 = 1.0 - w0 - w1;
    (w0, w1, w2)
}

fn lgp1_basis(xi: f64, eta: f64) -> [f64; 3] {
    [1.0 - xi - eta, xi, eta]
}

fn lgp2_basis(xi: f64, eta: f64) -> [f64; 6] {
    [
        2.0 * (xi + eta - 0.5) * (xi + eta - 1.0),
        -4.0 * xi * (xi + eta - 1.0),
        2.0 * xi * (xi - 0.5),
        4.0 * xi * eta,
        2.0 * eta * (eta - 0.5),
        -4.0 * eta * (xi + eta - 1.0),
    ]
}

impl LgpModel {
    pub fn new(
        mesh: Mesh,
        order: LgpOrder,
        codes: Vec<Vec<i64>>,
        dof_count: usize,
        max_distance_m: f64,
    ) -> Result<Self, TidalSpatialError> {
        let dofs = order.dofs_per_triangle();
        for row in &codes {
            if row.len() != dofs {
                return Err(TidalSpatialError::ShapeMismatch { expected: dofs, got: row.len() });
            }
            for &code in row {
                if code < -1 {
                    return Err(TidalSpatialError::NegativeCode(code));
                }
            }
        }
        Ok(Self { mesh, order, codes, dof_count, constituents: HashMap::new(), max_distance_m })
    }

    pub fn add_constituent(
        &mut self,
        id: ConstituentId,
        coefficients: Vec<Complex64>,
    ) -> Result<(), TidalSpatialError> {
        if coefficients.len() != self.dof_count {
            return Err(TidalSpatialError::ShapeMismatch {
                expected: self.dof_count,
                got: coefficients.len(),
            });
        }
        self.constituents.insert(id, coefficients);
        Ok(())
    }

    fn triangle_vertices(&self, triangle: usize) -> [(f64, f64); 3] {
        let [v0, v1, v2] = self.mesh.triangle(triangle);
        [
            self.mesh.vertex_lon_lat(v0),
            self.mesh.vertex_lon_lat(v1),
            self.mesh.vertex_lon_lat(v2),
        ]
    }

    fn try_triangle(&self, triangle: usize, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let verts = self.triangle_vertices(triangle);
        // Try the query longitude as-is and shifted by +-360 to tolerate a
        // mesh whose vertices span the dateline.
        for shift in [0.0, 360.0, -360.0] {
            let (w0, w1, w2) = barycentric(lon + shift, lat, verts);
            let eps = 1e-9;
            if w0 >= -eps && w1 >= -eps && w2 >= -eps {
                return Some((w1, w2));
            }
        }
        None
    }

    fn value_at(&self, id: ConstituentId, triangle: usize, local_dof: usize) -> Complex64 {
        let code = self.codes[triangle][local_dof];
        if code < 0 {
            return Complex64::new(f64::NAN, f64::NAN);
        }
        self.constituents
            .get(&id)
            .map(|coeffs| coeffs[code as usize])
            .unwrap_or(Complex64::new(f64::NAN, f64::NAN))
    }

    /// Interpolates every loaded constituent at `(lon, lat)`, consulting
    /// and updating `accelerator`'s last-triangle cache.
    pub fn interpolate(
        &self,
        lon: f64,
        lat: f64,
        accelerator: &mut Accelerator,
    ) -> (Vec<(ConstituentId, Complex64)>, Quality) {
        if let Some(cached) = accelerator.last_triangle {
            if let Some((xi, eta)) = self.try_triangle(cached, lon, lat) {
                return (self.evaluate_inside(cached, xi, eta), quality::interpolated(self.order.dofs_per_triangle()));
            }
        }

        let candidates = self.mesh.nearest_vertices(lon, lat, 11);
        let mut seen_triangles = Vec::new();
        for (vertex, _) in &candidates {
            for &tri in self.mesh.triangles_at_vertex(*vertex) {
                if !seen_triangles.contains(&tri) {
                    seen_triangles.push(tri);
                }
            }
        }

        for &tri in &seen_triangles {
            if let Some((xi, eta)) = self.try_triangle(tri, lon, lat) {
                accelerator.last_triangle = Some(tri);
                return (self.evaluate_inside(tri, xi, eta), quality::interpolated(self.order.dofs_per_triangle()));
            }
        }

        self.extrapolate(lon, lat, &candidates)
    }

    fn evaluate_inside(&self, triangle: usize, xi: f64, eta: f64) -> Vec<(ConstituentId, Complex64)> {
        let mut results = Vec::with_capacity(self.constituents.len());
        match self.order {
            LgpOrder::One => {
                let basis = lgp1_basis(xi, eta);
                for &id in self.constituents.keys().collect::<Vec<_>>() {
                    let value = (0..3)
                        .map(|k| self.value_at(id, triangle, k) * basis[k])
                        .fold(Complex64::new(0.0, 0.0), |acc, v| acc + v);
                    results.push((id, value));
                }
            }
            LgpOrder::Two => {
                let basis = lgp2_basis(xi, eta);
                for &id in self.constituents.keys().collect::<Vec<_>>() {
                    let value = (0..6)
                        .map(|k| self.value_at(id, triangle, k) * basis[k])
                        .fold(Complex64::new(0.0, 0.0), |acc, v| acc + v);
                    results.push((id, value));
                }
            }
        }
        results
    }

    fn extrapolate(
        &self,
        lon: f64,
        lat: f64,
        candidates: &[(usize, f64)],
    ) -> (Vec<(ConstituentId, Complex64)>, Quality) {
        let min_distance_m = candidates.first().map(|(_, d)| *d).unwrap_or(f64::INFINITY);
        if min_distance_m > self.max_distance_m {
            return (self.constituent_ids().map(|c| (c, Complex64::new(f64::NAN, f64::NAN))).collect(), quality::UNDEFINED);
        }

        let extra_k = ((16.0 * (min_distance_m / 1000.0 / 10.0)) as usize).clamp(candidates.len(), 128);
        let extended = self.mesh.nearest_vertices(lon, lat, extra_k);
        let retained: Vec<(usize, f64)> = extended
            .into_iter()
            .filter(|(_, d)| *d <= self.max_distance_m)
            .collect();

        if retained.is_empty() {
            return (self.constituent_ids().map(|c| (c, Complex64::new(f64::NAN, f64::NAN))).collect(), quality::UNDEFINED);
        }

        let weights: Vec<f64> = retained.iter().map(|(_, d)| 1.0 / (d * d).max(1e-9)).collect();
        let weight_sum: f64 = weights.iter().sum();

        let mut results = Vec::with_capacity(self.constituents.len());
        for (&id, coeffs) in &self.constituents {
            let mut sum = Complex64::new(0.0, 0.0);
            for ((vertex, _), w) in retained.iter().zip(&weights) {
                let dof = self.vertex_dof(*vertex);
                let value = dof.map(|d| coeffs[d]).unwrap_or(Complex64::new(f64::NAN, f64::NAN));
                sum += value * *w;
            }
            results.push((id, sum / weight_sum));
        }

        (results, quality::extrapolated(retained.len().min(127)))
    }

    /// The global dof index for a mesh vertex's own (corner) dof, found via
    /// any incident triangle's first matching local slot.
    fn vertex_dof(&self, vertex: usize) -> Option<usize> {
        for &tri in self.mesh.triangles_at_vertex(vertex) {
            let verts = self.mesh.triangle(tri);
            if let Some(local) = verts.iter().position(|&v| v == vertex) {
                let code = self.codes[tri][local];
                if code >= 0 {
                    return Some(code as usize);
                }
            }
        }
        None
    }

    fn constituent_ids(&self) -> impl Iterator<Item = ConstituentId> + '_ {
        self.constituents.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_disk_model() -> LgpModel {
        let lon = vec![0.0, 1.0, 1.0, -1.0, -1.0];
        let lat = vec![0.0, 1.0, -1.0, -1.0, 1.0];
        let triangles = vec![[0, 1, 4], [0, 2, 1], [0, 3, 2], [0, 4, 3]];
        let mesh = Mesh::new(lon, lat, triangles).unwrap();
        let codes = vec![
            vec![0, 1, 4],
            vec![0, 2, 1],
            vec![0, 3, 2],
            vec![0, 4, 3],
        ];
        let mut model = LgpModel::new(mesh, LgpOrder::One, codes, 5, 50_000.0).unwrap();
        let coeffs: Vec<Complex64> = (0..5).map(|i| Complex64::new(i as f64, 0.0)).collect();
        model.add_constituent(ConstituentId::M2, coeffs).unwrap();
        model
    }

    #[test]
    fn test_interior_interpolation_is_finite() {
        let model = small_disk_model();
        let mut accel = Accelerator::new();
        let (results, quality) = model.interpolate(0.3, 0.1, &mut accel);
        assert_eq!(quality, 3);
        assert!(results[0].1.re.is_finite());
    }

    #[test]
    fn test_vertex_query_returns_exact_dof() {
        let model = small_disk_model();
        let mut accel = Accelerator::new();
        let (results, quality) = model.interpolate(1.0, 1.0, &mut accel);
        assert_eq!(quality, 3);
        assert_eq!(results[0].1.re, 1.0);
    }

    #[test]
    fn test_far_outside_with_tight_max_distance_is_undefined() {
        let lon = vec![0.0, 1.0, 1.0, -1.0, -1.0];
        let lat = vec![0.0, 1.0, -1.0, -1.0, 1.0];
        let triangles = vec![[0, 1, 4], [0, 2, 1], [0, 3, 2], [0, 4, 3]];
        let mesh = Mesh::new(lon, lat, triangles).unwrap();
        let codes = vec![vec![0, 1, 4], vec![0, 2, 1], vec![0, 3, 2], vec![0, 4, 3]];
        let mut model = LgpModel::new(mesh, LgpOrder::One, codes, 5, 1.0).unwrap();
        model.add_constituent(ConstituentId::M2, vec![Complex64::new(0.0, 0.0); 5]).unwrap();

        let mut accel = Accelerator::new();
        let (_, quality) = model.interpolate(80.0, 80.0, &mut accel);
        assert_eq!(quality, 0);
    }
}
