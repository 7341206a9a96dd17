/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An unstructured triangulation, indexed by an R-tree over vertex ECEF
//! positions for nearest-vertex queries.

use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::errors::TidalSpatialError;

/// Mean Earth radius, metres - used only to give nearest-neighbour
/// distances a physical (not angular) scale.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

type VertexPoint = GeomWithData<[f64; 3], usize>;

fn to_ecef(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    [
        EARTH_RADIUS_M * lat.cos() * lon.cos(),
        EARTH_RADIUS_M * lat.cos() * lon.sin(),
        EARTH_RADIUS_M * lat.sin(),
    ]
}

#[derive(Clone, Debug)]
pub struct Mesh {
    lon: Vec<f64>,
    lat: Vec<f64>,
    triangles: Vec<[usize; 3]>,
    rtree: RTree<VertexPoint>,
    vertex_triangles: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn new(lon: Vec<f64>, lat: Vec<f64>, triangles: Vec<[usize; 3]>) -> Result<Self, TidalSpatialError> {
        let n = lon.len();
        for t in &triangles {
            for &v in t {
                if v >= n {
                    return Err(TidalSpatialError::TriangleIndexOutOfBounds(v, n));
                }
            }
        }

        let mut vertex_triangles = vec![Vec::new(); n];
        for (ti, t) in triangles.iter().enumerate() {
            for &v in t {
                vertex_triangles[v].push(ti);
            }
        }

        let points: Vec<VertexPoint> = (0..n)
            .map(|i| GeomWithData::new(to_ecef(lon[i], lat[i]), i))
            .collect();
        let rtree = RTree::bulk_load(points);

        Ok(Self { lon, lat, triangles, rtree, vertex_triangles })
    }

    pub fn vertex_count(&self) -> usize {
        self.lon.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangle(&self, i: usize) -> [usize; 3] {
        self.triangles[i]
    }

    pub fn vertex_lon_lat(&self, i: usize) -> (f64, f64) {
        (self.lon[i], self.lat[i])
    }

    /// Up to `k` nearest vertices to `(lon, lat)`, as `(vertex_index, distance_m)`.
    pub fn nearest_vertices(&self, lon: f64, lat: f64, k: usize) -> Vec<(usize, f64)> {
        let query = to_ecef(lon, lat);
        self.rtree
            .nearest_neighbor_iter(&query)
            .take(k)
            .map(|p| {
                let d2: f64 = (0..3).map(|i| (p.geom()[i] - query[i]).powi(2)).sum();
                (p.data, d2.sqrt())
            })
            .collect()
    }

    /// Every triangle incident to `vertex`.
    pub fn triangles_at_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertex_triangles[vertex]
    }
}
