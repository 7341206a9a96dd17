/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Equilibrium amplitudes of the nine major bracketing constituents, and
//! the small struct used to pass their measured state into the admittance
//! functions.

use num::complex::Complex64;
use tidal_constituents::ConstituentId;
use tidal_waves::WaveTable;

use crate::band::Band;

/// Equilibrium-tide amplitude (centimetres) for each major, used to turn
/// a measured tide into an admittance (`tide / amplitude`) and back.
pub fn equilibrium_amplitude_cm(id: ConstituentId) -> f64 {
    match id {
        ConstituentId::Node => 2.79,
        ConstituentId::Mm => 3.52,
        ConstituentId::Mf => 6.66,
        ConstituentId::Q1 => 1.926,
        ConstituentId::O1 => 10.051,
        ConstituentId::K1 => 14.166,
        ConstituentId::N2 => 4.641,
        ConstituentId::M2 => 24.241,
        ConstituentId::S2 => 11.293,
        _ => unreachable!("equilibrium_amplitude_cm is only called for the nine majors"),
    }
}

/// The measured state of a band's three bracketing majors.
#[derive(Clone, Copy, Debug)]
pub struct Majors {
    pub ids: [ConstituentId; 3],
    pub freq: [f64; 3],
    pub tide: [Complex64; 3],
    pub amp: [f64; 3],
}

/// Reads the three majors for `band` out of `wave_table`. Returns `None`
/// if any of them is missing from the table (a caller using a catalogue
/// subset that drops a major loses inference for that band entirely).
pub fn gather(wave_table: &WaveTable, band: Band) -> Option<Majors> {
    let ids = crate::band::majors(band);
    let mut freq = [0.0; 3];
    let mut tide = [Complex64::new(0.0, 0.0); 3];
    let mut amp = [0.0; 3];
    for (k, id) in ids.iter().enumerate() {
        let wave = wave_table.get(*id)?;
        freq[k] = wave.frequency_rad_per_hour();
        tide[k] = wave.tide;
        amp[k] = equilibrium_amplitude_cm(*id);
    }
    Some(Majors { ids, freq, tide, amp })
}
