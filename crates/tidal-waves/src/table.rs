/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An ordered collection of waves belonging to one engine family.

use std::collections::HashMap;

use tidal_astro::AstronomicAngles;
use tidal_constituents::{ConstituentId, EngineFamily};
use tidal_math::constants::Schureman;

use crate::wave::Wave;

#[derive(Clone, Debug)]
pub struct WaveTable {
    waves: Vec<Wave>,
    index: HashMap<ConstituentId, usize>,
}

impl WaveTable {
    /// Builds a table from an explicit constituent list; errors are
    /// impossible here because `ConstituentId` is already validated.
    pub fn new(ids: impl IntoIterator<Item = ConstituentId>) -> Self {
        let waves: Vec<Wave> = ids.into_iter().map(Wave::new).collect();
        let index = waves.iter().enumerate().map(|(i, w)| (w.id, i)).collect();
        Self { waves, index }
    }

    /// All catalogued constituents supported by `family`.
    pub fn for_engine(family: EngineFamily) -> Self {
        let ids = ConstituentId::ALL.iter().copied().filter(|c| match family {
            EngineFamily::Darwin => c.engine_family().supports_darwin(),
            EngineFamily::Doodson => c.engine_family().supports_doodson(),
            EngineFamily::Both => true,
        });
        Self::new(ids)
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Wave> {
        self.waves.iter_mut()
    }

    pub fn get(&self, id: ConstituentId) -> Option<&Wave> {
        self.index.get(&id).map(|&i| &self.waves[i])
    }

    pub fn get_mut(&mut self, id: ConstituentId) -> Option<&mut Wave> {
        self.index.get(&id).copied().map(move |i| &mut self.waves[i])
    }

    pub fn contains(&self, id: ConstituentId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates waves ordered by ascending frequency.
    pub fn frequency_sorted(&self) -> Vec<&Wave> {
        let mut sorted: Vec<&Wave> = self.waves.iter().collect();
        sorted.sort_by(|a, b| {
            a.frequency_rad_per_hour()
                .partial_cmp(&b.frequency_rad_per_hour())
                .unwrap()
        });
        sorted
    }

    pub fn compute_nodal_corrections(&mut self, angles: &AstronomicAngles, k: &Schureman, group_modulations: bool) {
        for wave in &mut self.waves {
            wave.compute_nodal_corrections(angles, k, group_modulations);
        }
    }

    /// Selects the subset of waves separable at record duration `duration_hours`
    /// under the Rayleigh criterion `rayleigh_factor` (commonly 1.0): a wave
    /// survives iff its frequency exceeds `rayleigh_factor * 2*pi / duration_hours`
    /// and is separated from every already-selected lower-frequency wave by at
    /// least that same threshold.
    pub fn rayleigh_subset(&self, duration_hours: f64, rayleigh_factor: f64) -> Vec<ConstituentId> {
        let threshold = rayleigh_factor * std::f64::consts::TAU / duration_hours;
        let sorted = self.frequency_sorted();
        let mut selected: Vec<&Wave> = Vec::new();
        for wave in sorted {
            let freq = wave.frequency_rad_per_hour();
            if freq <= threshold {
                continue;
            }
            let separable = selected
                .last()
                .map(|prev| freq - prev.frequency_rad_per_hour() >= threshold)
                .unwrap_or(true);
            if separable {
                selected.push(wave);
            }
        }
        selected.into_iter().map(|w| w.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidal_constituents::ConstituentId::*;

    #[test]
    fn test_indexable_by_id() {
        let table = WaveTable::new([M2, S2, K1]);
        assert_eq!(table.len(), 3);
        assert!(table.contains(M2));
        assert!(!table.contains(N2));
    }

    #[test]
    fn test_rayleigh_separates_close_lines() {
        // One year of hourly data comfortably separates S2 from K2, and
        // K1 from P1, but not M2 from S2 at a very short duration.
        let table = WaveTable::new([M2, S2, K1, P1]);
        let one_year = 365.25 * 24.0;
        let subset = table.rayleigh_subset(one_year, 1.0);
        assert!(subset.contains(&M2));
        assert!(subset.contains(&K1));

        let one_day = 24.0;
        let subset_short = table.rayleigh_subset(one_day, 1.0);
        assert!(subset_short.len() <= subset.len());
    }
}
