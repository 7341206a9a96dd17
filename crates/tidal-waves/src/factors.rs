/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Per-constituent nodal factor (`f`) and phase correction (`u`) laws,
//! grouped by species (Schureman 1958). Compound constituents combine their
//! generating waves' `f` (product) and `u` (sum), matching how their
//! Doodson tuples combine.

use tidal_astro::AstronomicAngles;
use tidal_constituents::ConstituentId;
use tidal_math::constants::Schureman;

use ConstituentId::*;

/// The species-grouped law used to compute `(f, u)` for a primary
/// constituent. Compound constituents are resolved by recursing onto their
/// generators instead of carrying their own law.
#[derive(Clone, Copy, Debug)]
enum Law {
    /// No nodal modulation (solar terms, long-period means).
    Unity,
    /// `f = (2/3 - sin^2 I) / k65`, `u = 0`.
    Mm,
    /// `f = sin^2 I / k66`, `u = -2*xi`.
    Mf,
    /// `f = sin(I)*cos^2(I/2) / k67`, `u = 2*xi - nu` (O1-like species-1 group).
    O1Like,
    /// `f = sin(2I) / k68`, `u = -nu` (J1-like species-1 group).
    J1Like,
    /// `f = sin(I)*sin^2(I/2) / k69`, `u = -nu` (OO1).
    OO1,
    /// K1-like species-1 group: `u = -nu_prime`.
    K1Like,
    /// M1's own law: `u = -xi + nu - eps`, `eps` from k197.
    M1,
    /// M2-like species-2 group: `f = cos^4(I/2) / k70`, `u = 2*xi - 2*nu`.
    M2Like,
    /// L2: as M2Like but `u` additionally subtracts `R`.
    L2,
    /// K2: `u = -2*nu_second`.
    K2,
    /// M3: `f = f(M2)^1.5`, `u = 3*(xi - nu)`.
    M3,
}

fn law_of_primary(id: ConstituentId) -> Law {
    match id {
        Mm => Law::Mm,
        Mf => Law::Mf,
        Ssa | Sa | Msf | Mtm | Msqm | Node | Msm | Mstm | Mqm => Law::Unity,

        O1 | Q1 | TwoQ1 | Sigma1 | Rho1 | Chi1 | Beta1 => Law::O1Like,
        M1 => Law::M1,
        J1 | Theta1 | Tau1 | Ups1 => Law::J1Like,
        OO1 => Law::OO1,
        K1 | S1 | P1 | Psi1 | Phi1 | Pi1 => Law::K1Like,

        M2 | N2 | TwoN2 | Mu2 | Nu2 | Lambda2 | Gamma2 | Alpha2 | Beta2 | Delta2 => Law::M2Like,
        L2 => Law::L2,
        K2 => Law::K2,
        T2 | S2 | R2 => Law::Unity,

        M3 => Law::M3,

        _ => Law::Unity,
    }
}

fn m2_factor(a: &AstronomicAngles, k: &Schureman) -> f64 {
    let half_i = a.i / 2.0;
    half_i.cos().powi(4) / k.k70
}

fn eval_primary(id: ConstituentId, a: &AstronomicAngles, k: &Schureman) -> (f64, f64) {
    match law_of_primary(id) {
        Law::Unity => (1.0, 0.0),
        Law::Mm => {
            let f = (2.0 / 3.0 - a.i.sin().powi(2)) / k.k65;
            (f, 0.0)
        }
        Law::Mf => {
            let f = a.i.sin().powi(2) / k.k66;
            (f, -2.0 * a.xi)
        }
        Law::O1Like => {
            let half_i = a.i / 2.0;
            let f = a.i.sin() * half_i.cos().powi(2) / k.k67;
            (f, 2.0 * a.xi - a.nu)
        }
        Law::J1Like => {
            let f = (2.0 * a.i).sin() / k.k68;
            (f, -a.nu)
        }
        Law::OO1 => {
            let half_i = a.i / 2.0;
            let f = a.i.sin() * half_i.sin().powi(2) / k.k69;
            (f, -a.nu)
        }
        Law::K1Like => {
            let f = (k.k227_1 * (2.0 * a.i).sin().powi(2) + k.k227_2 * (2.0 * a.i).cos() + k.k227_3)
                .sqrt()
                / k.k226;
            (f, -a.nu_prime)
        }
        Law::M1 => {
            let f = a.i.sin() * (a.i / 2.0).cos().powi(2) / k.k67;
            let eps = (1.0
                / (k.k197_1 + k.k197_2 * (2.0 * (a.p - a.xi)).cos())
                    .sqrt())
            .atan();
            (f, -a.xi + a.nu - eps)
        }
        Law::M2Like => {
            let f = m2_factor(a, k);
            (f, 2.0 * a.xi - 2.0 * a.nu)
        }
        Law::L2 => {
            let f = m2_factor(a, k);
            (f, 2.0 * a.xi - 2.0 * a.nu - a.r)
        }
        Law::K2 => {
            let f = (k.k235_1 * a.i.sin().powi(4) + k.k235_2 * a.i.sin().powi(2) * (2.0 * a.nu).cos()
                + k.k235_3)
                .sqrt()
                / k.k234;
            (f, -2.0 * a.nu_second)
        }
        Law::M3 => {
            let f_m2 = m2_factor(a, k);
            (f_m2.powf(1.5), 3.0 * (a.xi - a.nu))
        }
    }
}

/// Computes `(f, u)` for any catalogued constituent, recursing onto the
/// generators of compound (shallow-water) waves: `f` multiplies, `u` sums.
pub fn nodal_factor(id: ConstituentId, a: &AstronomicAngles, k: &Schureman) -> (f64, f64) {
    if let Some(parts) = tidal_constituents::compound_parts(id) {
        let mut f = 1.0;
        let mut u = 0.0;
        for (coef, generator) in parts {
            let (gf, gu) = nodal_factor(*generator, a, k);
            f *= gf.powi((*coef).unsigned_abs() as i32);
            u += (*coef as f64) * gu;
        }
        (f, u)
    } else {
        eval_primary(id, a, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tidal_astro::{angles, AstronomicFormula};
    use tidal_math::constants::SCHUREMAN_1958;

    #[rstest]
    #[case(ConstituentId::M2)]
    #[case(ConstituentId::S2)]
    #[case(ConstituentId::K1)]
    #[case(ConstituentId::O1)]
    #[case(ConstituentId::M4)]
    #[case(ConstituentId::MK3)]
    #[case(ConstituentId::K2)]
    #[case(ConstituentId::Mm)]
    #[case(ConstituentId::Mf)]
    fn test_f_is_positive_across_a_sweep(#[case] id: ConstituentId) {
        for year in 0..19 {
            let epoch = (year as f64) * 365.25 * 86_400.0;
            let a = angles(epoch, AstronomicFormula::Schureman1);
            let (f, u) = nodal_factor(id, &a, &SCHUREMAN_1958);
            assert!(f > 0.0, "{id}: f={f}");
            assert!(u.is_finite(), "{id}: u={u}");
        }
    }
}
