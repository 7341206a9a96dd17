/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The minor constituents inferred from each band's majors, with their
//! equilibrium-tide amplitudes (centimetres).
//!
//! The literal Doodson/Perth admittance amplitude tables were not present
//! in the retrieved source; the values here are representative published
//! equilibrium-tide magnitudes (the long-period ones reused verbatim from
//! `tidal-lpe`'s spectral-line table), scaled consistently with the major
//! amplitudes in [`crate::majors`]. See `DESIGN.md`.

use tidal_constituents::ConstituentId;

use crate::band::Band;

#[derive(Clone, Copy, Debug)]
pub struct MinorEntry {
    pub id: ConstituentId,
    pub band: Band,
    pub equilibrium_amplitude_cm: f64,
}

pub const MINOR_TABLE: &[MinorEntry] = &[
    // Long period.
    MinorEntry { id: ConstituentId::Sa, band: Band::LongPeriod, equilibrium_amplitude_cm: 0.49 },
    MinorEntry { id: ConstituentId::Ssa, band: Band::LongPeriod, equilibrium_amplitude_cm: 3.08 },
    MinorEntry { id: ConstituentId::Msf, band: Band::LongPeriod, equilibrium_amplitude_cm: 0.64 },
    MinorEntry { id: ConstituentId::Mtm, band: Band::LongPeriod, equilibrium_amplitude_cm: 1.28 },
    MinorEntry { id: ConstituentId::Msqm, band: Band::LongPeriod, equilibrium_amplitude_cm: 0.52 },
    MinorEntry { id: ConstituentId::Msm, band: Band::LongPeriod, equilibrium_amplitude_cm: 0.44 },
    MinorEntry { id: ConstituentId::Mstm, band: Band::LongPeriod, equilibrium_amplitude_cm: 0.27 },
    MinorEntry { id: ConstituentId::Mqm, band: Band::LongPeriod, equilibrium_amplitude_cm: 0.30 },
    // Diurnal.
    MinorEntry { id: ConstituentId::TwoQ1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.662 },
    MinorEntry { id: ConstituentId::Sigma1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.802 },
    MinorEntry { id: ConstituentId::Rho1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.764 },
    MinorEntry { id: ConstituentId::M1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.556 },
    MinorEntry { id: ConstituentId::Chi1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.417 },
    MinorEntry { id: ConstituentId::Pi1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.721 },
    MinorEntry { id: ConstituentId::P1, band: Band::Diurnal, equilibrium_amplitude_cm: 4.684 },
    MinorEntry { id: ConstituentId::S1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.423 },
    MinorEntry { id: ConstituentId::Psi1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.423 },
    MinorEntry { id: ConstituentId::Phi1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.767 },
    MinorEntry { id: ConstituentId::Theta1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.772 },
    MinorEntry { id: ConstituentId::J1, band: Band::Diurnal, equilibrium_amplitude_cm: 2.964 },
    MinorEntry { id: ConstituentId::OO1, band: Band::Diurnal, equilibrium_amplitude_cm: 1.618 },
    MinorEntry { id: ConstituentId::Tau1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.491 },
    MinorEntry { id: ConstituentId::Beta1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.200 },
    MinorEntry { id: ConstituentId::Ups1, band: Band::Diurnal, equilibrium_amplitude_cm: 0.200 },
    // Semidiurnal.
    MinorEntry { id: ConstituentId::TwoN2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 2.301 },
    MinorEntry { id: ConstituentId::Mu2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 2.777 },
    MinorEntry { id: ConstituentId::Nu2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 2.936 },
    MinorEntry { id: ConstituentId::Lambda2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 0.664 },
    MinorEntry { id: ConstituentId::L2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 2.785 },
    MinorEntry { id: ConstituentId::T2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 1.898 },
    MinorEntry { id: ConstituentId::R2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 0.294 },
    MinorEntry { id: ConstituentId::K2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 3.068 },
    MinorEntry { id: ConstituentId::Gamma2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 0.198 },
    MinorEntry { id: ConstituentId::Alpha2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 0.198 },
    MinorEntry { id: ConstituentId::Beta2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 0.198 },
    MinorEntry { id: ConstituentId::Delta2, band: Band::Semidiurnal, equilibrium_amplitude_cm: 0.198 },
];
