/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Inference: filling the minor constituents of a wave table from its
//! modelled majors, by one of four admittance strategies.

pub mod admittance;
pub mod band;
pub mod majors;
pub mod minors;
pub mod node;
pub mod spline;

use num::complex::Complex64;
use tidal_constituents::ConstituentId;
use tidal_waves::WaveTable;

use band::Band;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum InferenceType {
    /// Unmodelled minors are set to `(0, 0)`.
    Zero,
    /// Piecewise-linear admittance interpolation between bracketing majors.
    Linear,
    /// Quadratic (three-point) admittance interpolation across a band's majors.
    Fourier,
    /// Constant coefficient triplet applied directly to the majors' tides.
    #[default]
    Spline,
}

/// Fills every unmodelled constituent of `wave_table` by inference from its
/// modelled majors, and the `Node` constituent from the equilibrium node
/// tide if it is present but unmodelled. Never fails: a band whose majors
/// are not present in `wave_table` is simply skipped, leaving its minors
/// untouched.
pub fn apply(wave_table: &mut WaveTable, lat_deg: f64, inference_type: InferenceType) {
    if let Some(node_wave) = wave_table.get_mut(ConstituentId::Node) {
        if !node_wave.is_modeled {
            node_wave.tide = node::node_tide(lat_deg.to_radians());
        }
    }

    if inference_type == InferenceType::Zero {
        for entry in minors::MINOR_TABLE {
            if let Some(wave) = wave_table.get_mut(entry.id) {
                if !wave.is_modeled {
                    wave.tide = Complex64::new(0.0, 0.0);
                }
            }
        }
        return;
    }

    for band in [Band::LongPeriod, Band::Diurnal, Band::Semidiurnal] {
        let Some(band_majors) = majors::gather(wave_table, band) else { continue };

        for entry in minors::MINOR_TABLE.iter().filter(|e| e.band == band) {
            let freq = entry.id.frequency_rad_per_hour();
            let value = match inference_type {
                InferenceType::Zero => unreachable!("handled above"),
                InferenceType::Linear => {
                    admittance::linear(&band_majors, freq, entry.equilibrium_amplitude_cm)
                }
                InferenceType::Fourier => {
                    admittance::fourier(&band_majors, freq, entry.equilibrium_amplitude_cm)
                }
                InferenceType::Spline => {
                    let coefficients =
                        spline::coefficients(&band_majors, freq, entry.equilibrium_amplitude_cm);
                    spline::combine(&band_majors, coefficients)
                }
            };

            if let Some(wave) = wave_table.get_mut(entry.id) {
                if !wave.is_modeled {
                    wave.tide = value;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidal_constituents::ConstituentId::*;

    fn table_with_majors() -> WaveTable {
        let mut table = WaveTable::new([
            Q1, O1, K1, N2, M2, S2, Node, Mm, Mf, Rho1, Tau1, Nu2, Mu2, Ssa, Msf,
        ]);
        for (id, re, im) in [
            (Q1, 2.044581413269043, -2.3776917457580566),
            (O1, 7.7220735549926758, 1.2257133722305298),
            (K1, -7.9487228393554688, 5.2526679039001465),
            (N2, -18.638496398925781, 3.0053455829620361),
            (M2, -90.521110534667969, -20.603012084960938),
            (S2, -24.581066131591797, -25.664165496826172),
        ] {
            let wave = table.get_mut(id).unwrap();
            wave.tide = Complex64::new(re, im);
            wave.is_modeled = true;
        }
        table
    }

    #[test]
    fn test_linear_inference_fills_minors() {
        let mut table = table_with_majors();
        apply(&mut table, 45.0, InferenceType::Linear);
        assert_ne!(table.get(Rho1).unwrap().tide, Complex64::new(0.0, 0.0));
        assert_ne!(table.get(Tau1).unwrap().tide, Complex64::new(0.0, 0.0));
        assert_ne!(table.get(Nu2).unwrap().tide, Complex64::new(0.0, 0.0));
        assert_ne!(table.get(Mu2).unwrap().tide, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_minors_are_smaller_than_their_majors() {
        let mut table = table_with_majors();
        apply(&mut table, 45.0, InferenceType::Linear);
        let m2_mag = table.get(M2).unwrap().tide.norm();
        let nu2_mag = table.get(Nu2).unwrap().tide.norm();
        let mu2_mag = table.get(Mu2).unwrap().tide.norm();
        assert!(nu2_mag < m2_mag);
        assert!(mu2_mag < m2_mag);
    }

    #[test]
    fn test_zero_inference_leaves_minors_at_zero() {
        let mut table = table_with_majors();
        apply(&mut table, 45.0, InferenceType::Zero);
        assert_eq!(table.get(Rho1).unwrap().tide, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_input_values_infer_to_zero() {
        let mut table = WaveTable::new([Q1, O1, K1, N2, M2, S2, Rho1, Tau1, Nu2, Mu2]);
        apply(&mut table, 0.0, InferenceType::Linear);
        for id in [Rho1, Tau1, Nu2, Mu2] {
            let tide = table.get(id).unwrap().tide;
            assert_eq!(tide.re, 0.0);
            assert_eq!(tide.im, 0.0);
        }
    }

    #[test]
    fn test_fourier_and_linear_stay_same_order_of_magnitude() {
        let mut linear_table = table_with_majors();
        let mut fourier_table = table_with_majors();
        apply(&mut linear_table, 45.0, InferenceType::Linear);
        apply(&mut fourier_table, 45.0, InferenceType::Fourier);

        for id in [Rho1, Tau1] {
            let linear_mag = linear_table.get(id).unwrap().tide.norm();
            let fourier_mag = fourier_table.get(id).unwrap().tide.norm();
            assert!(linear_mag > 0.0);
            assert!(fourier_mag > 0.0);
            let relative = (linear_mag - fourier_mag).abs() / linear_mag.max(fourier_mag);
            assert!(relative < 2.0);
        }
    }

    #[test]
    fn test_missing_majors_skip_the_band_without_panicking() {
        let mut table = WaveTable::new([Q1, O1, K1, Rho1]);
        apply(&mut table, 0.0, InferenceType::Spline);
        assert_eq!(table.get(Rho1).unwrap().tide, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_node_tide_fills_unmodelled_node() {
        let mut table = WaveTable::new([Node]);
        apply(&mut table, 30.0, InferenceType::Zero);
        assert!(table.get(Node).unwrap().tide.re.is_finite());
    }
}
