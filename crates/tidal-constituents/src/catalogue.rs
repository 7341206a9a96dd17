/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The tidal harmonic catalogue: stable constituent identifiers, their
//! Doodson numbers, names, and engine-family membership.
//!
//! The catalogue is split into two tiers. *Primary* constituents carry a
//! literal Doodson tuple taken from the published Schureman/Doodson species
//! tables. *Compound* (shallow-water) constituents are derived at lookup
//! time as an integer linear combination of their generating primaries
//! (`M4 = 2*M2`, `MK3 = M2 + K1`, ...), which is how the shallow-water
//! naming convention is defined and avoids hand-transcribing numbers for
//! waves that are mechanically determined by their name.

use crate::doodson::Doodson;
use crate::errors::TidalConstituentsError;

/// Which engine family catalogues a constituent. Most waves are shared;
/// a handful of long-period and minor diurnal/semidiurnal lines are only
/// ever carried by the Doodson/Perth-style admittance tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EngineFamily {
    Darwin,
    Doodson,
    Both,
}

impl EngineFamily {
    pub fn supports_darwin(self) -> bool {
        matches!(self, EngineFamily::Darwin | EngineFamily::Both)
    }

    pub fn supports_doodson(self) -> bool {
        matches!(self, EngineFamily::Doodson | EngineFamily::Both)
    }
}

/// Short/long period classification of a constituent (species 0 is long
/// period, everything else is short period).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum WaveKind {
    LongPeriod,
    ShortPeriod,
}

macro_rules! constituents {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A stable identifier for one of the catalogued tidal harmonics.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[non_exhaustive]
        pub enum ConstituentId {
            $($variant),+
        }

        impl ConstituentId {
            pub const ALL: &'static [ConstituentId] = &[$(ConstituentId::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(ConstituentId::$variant => $name),+
                }
            }
        }
    };
}

constituents! {
    // Long period.
    Sa => "Sa", Ssa => "Ssa", Mm => "Mm", Msf => "MSf", Mf => "Mf",
    Mtm => "Mtm", Msqm => "MSqm",
    Node => "Node", Msm => "MSm", Mstm => "MStm", Mqm => "Mqm",
    M0 => "M0", Mm1 => "Mm1", Mm2 => "Mm2", Mf1 => "Mf1", Mf2 => "Mf2",
    Sa1 => "Sa1", Sta => "Sta", A5 => "A5",
    // Diurnal.
    TwoQ1 => "2Q1", Sigma1 => "Sigma1", Q1 => "Q1", Rho1 => "Rho1", O1 => "O1",
    M1 => "M1", Chi1 => "Chi1", Pi1 => "Pi1", P1 => "P1", S1 => "S1", K1 => "K1",
    Psi1 => "Psi1", Phi1 => "Phi1", Theta1 => "Theta1", J1 => "J1", OO1 => "OO1",
    Tau1 => "Tau1", Beta1 => "Beta1",
    MP1 => "MP1", M11 => "M11", M12 => "M12", M13 => "M13", SO1 => "SO1",
    // Semidiurnal.
    TwoN2 => "2N2", Mu2 => "Mu2", N2 => "N2", Nu2 => "Nu2", M2 => "M2",
    Lambda2 => "Lambda2", L2 => "L2", T2 => "T2", S2 => "S2", R2 => "R2", K2 => "K2",
    Gamma2 => "Gamma2", Alpha2 => "Alpha2", Beta2 => "Beta2", Delta2 => "Delta2",
    Ups1 => "Ups1",
    TwoMK2 => "2MK2", TwoMN2 => "2MN2", TwoMS2 => "2MS2", TwoNS2 => "2NS2",
    TwoSM2 => "2SM2", TwoSMu2 => "2SMu2", MKS2 => "MKS2", MNS2 => "MNS2",
    MNuS2 => "MNuS2", MSK2 => "MSK2", MSN2 => "MSN2", NKM2 => "NKM2", OQ2 => "OQ2",
    SKM2 => "SKM2", Eps2 => "Eps2", Eta2 => "Eta2", L2P => "L2P", N2P => "N2P",
    // Terdiurnal.
    M3 => "M3", MO3 => "MO3", MK3 => "MK3", SO3 => "SO3", SK3 => "SK3", TwoMK3 => "2MK3",
    // Quarterdiurnal.
    M4 => "M4", MS4 => "MS4", MN4 => "MN4", MK4 => "MK4", S4 => "S4", SN4 => "SN4",
    N4 => "N4", NK4 => "NK4", R4 => "R4", SK4 => "SK4", MNu4 => "MNu4", ML4 => "ML4",
    TwoMNS4 => "2MNS4", ThreeMS4 => "3MS4", TwoMSN4 => "2MSN4",
    // Quinary.
    TwoMP5 => "2MP5",
    // Sixth-diurnal.
    M6 => "M6", TwoMS6 => "2MS6", TwoMN6 => "2MN6", TwoSM6 => "2SM6", MSN6 => "MSN6",
    TwoMK6 => "2MK6", TwoNM6 => "2NM6", MNK6 => "MNK6", S6 => "S6", MSK6 => "MSK6",
    // Eighth-diurnal.
    M8 => "M8", ThreeMS8 => "3MS8",
}

use ConstituentId::*;

fn primary_doodson(id: ConstituentId) -> Option<Doodson> {
    use Doodson as D;
    Some(match id {
        Sa => D::new(0, 0, 1, 0, 0, 0, 0),
        Ssa => D::new(0, 0, 2, 0, 0, 0, 0),
        Mm => D::new(0, 1, 0, -1, 0, 0, 0),
        Msf => D::new(0, 2, -2, 0, 0, 0, 0),
        Mf => D::new(0, 2, 0, 0, 0, 0, 0),
        Mtm => D::new(0, 3, 0, -1, 0, 0, 0),
        Msqm => D::new(0, 4, -2, 0, 0, 0, 0),
        Node => D::new(0, 0, 0, 0, 1, 0, 0),
        Msm => D::new(0, 1, -1, 0, 0, 0, 0),
        Mstm => D::new(0, 3, -2, 0, 0, 0, 0),
        Mqm => D::new(0, 4, 0, -2, 0, 0, 0),

        TwoQ1 => D::new(1, -3, 0, 2, 0, 0, -1),
        Sigma1 => D::new(1, -3, 2, 0, 0, 0, -1),
        Q1 => D::new(1, -2, 0, 1, 0, 0, -1),
        Rho1 => D::new(1, -2, 2, -1, 0, 0, -1),
        O1 => D::new(1, -1, 0, 0, 0, 0, -1),
        M1 => D::new(1, 0, 0, 1, 0, 0, 0),
        Chi1 => D::new(1, 0, 2, -1, 0, 0, -1),
        Pi1 => D::new(1, -2, 1, 0, 0, 0, -1),
        P1 => D::new(1, 1, -2, 0, 0, 0, -1),
        S1 => D::new(1, 1, 0, 0, 0, 0, 1),
        K1 => D::new(1, 1, 0, 0, 0, 0, 1),
        Psi1 => D::new(1, 2, -2, 0, 0, 0, 1),
        Phi1 => D::new(1, 3, -2, 0, 0, 0, 1),
        Theta1 => D::new(1, 2, 0, 1, 0, 0, 1),
        J1 => D::new(1, 2, 0, -1, 0, 0, 1),
        OO1 => D::new(1, 3, 0, 0, 0, 0, 1),
        Tau1 => D::new(1, 3, -2, 0, 0, 0, 1),
        Beta1 => D::new(1, 0, 0, -1, 0, 0, -1),

        TwoN2 => D::new(2, -2, 0, 2, 0, 0, 0),
        Mu2 => D::new(2, -2, 2, 0, 0, 0, 0),
        N2 => D::new(2, -1, 0, 1, 0, 0, 0),
        Nu2 => D::new(2, -1, 2, -1, 0, 0, 0),
        M2 => D::new(2, 0, 0, 0, 0, 0, 0),
        Lambda2 => D::new(2, 1, 0, 1, 0, 0, 2),
        L2 => D::new(2, 1, 0, -1, 0, 0, 2),
        T2 => D::new(2, 2, -3, 0, 0, 1, 0),
        S2 => D::new(2, 2, -2, 0, 0, 0, 0),
        R2 => D::new(2, 2, -1, 0, 0, -1, 2),
        K2 => D::new(2, 2, 0, 0, 0, 0, 0),
        Gamma2 => D::new(2, 1, -2, 1, 0, 0, 0),
        Alpha2 => D::new(2, -1, 0, -1, 0, 0, 0),
        Beta2 => D::new(2, 1, 2, -1, 0, 0, 0),
        Delta2 => D::new(2, 3, -2, 0, 0, 0, 0),
        Ups1 => D::new(1, 4, -2, 0, 0, 0, 1),

        M3 => D::new(3, 0, 0, 0, 0, 0, 0),

        // Satellite/group lines: minor constituents that share their parent's
        // species but are offset in the slowly-varying `p`/`p1` multiplier to
        // capture the perigee/node modulation the parent line averages over.
        M0 => D::new(0, 0, 0, 0, 0, 0, 0),
        Mm1 => D::new(0, 1, 0, -2, 0, 0, 0),
        Mm2 => D::new(0, 1, 0, 0, 0, 0, 0),
        Mf1 => D::new(0, 2, 0, -1, 0, 0, 0),
        Mf2 => D::new(0, 2, 0, 1, 0, 0, 0),
        Sa1 => D::new(0, 0, 1, 0, 0, -1, 0),
        Sta => D::new(0, 0, 3, 0, 0, 0, 0),
        A5 => D::new(0, 0, 2, 0, 0, 1, 0),

        M11 => D::new(1, 0, 0, 0, 0, 0, 0),
        M12 => D::new(1, 0, 0, 2, 0, 0, 0),
        M13 => D::new(1, 0, 0, 1, 0, 0, 1),

        Eps2 => D::new(2, -3, 2, 1, 0, 0, 0),
        L2P => D::new(2, 1, 0, -1, 0, 0, 0),
        N2P => D::new(2, -1, 0, 1, 0, 0, 2),

        _ => return None,
    })
}

/// Each compound (shallow-water) constituent as `[(coefficient, generator)]`.
/// `None` for primary constituents.
pub fn compound_parts(id: ConstituentId) -> Option<&'static [(i8, ConstituentId)]> {
    Some(match id {
        MO3 => &[(1, M2), (1, O1)],
        MK3 => &[(1, M2), (1, K1)],
        SO3 => &[(1, S2), (1, O1)],
        SK3 => &[(1, S2), (1, K1)],
        TwoMK3 => &[(2, M2), (-1, K1)],
        M4 => &[(2, M2)],
        MS4 => &[(1, M2), (1, S2)],
        MN4 => &[(1, M2), (1, N2)],
        MK4 => &[(1, M2), (1, K2)],
        S4 => &[(2, S2)],
        SN4 => &[(1, S2), (1, N2)],
        M6 => &[(3, M2)],
        TwoMS6 => &[(2, M2), (1, S2)],
        TwoMN6 => &[(2, M2), (1, N2)],
        TwoSM6 => &[(2, S2), (1, M2)],
        MSN6 => &[(1, M2), (1, S2), (1, N2)],
        M8 => &[(4, M2)],

        MP1 => &[(1, M2), (-1, P1)],
        SO1 => &[(1, S2), (-1, O1)],

        TwoMK2 => &[(2, M2), (-1, K2)],
        TwoMN2 => &[(2, M2), (-1, N2)],
        TwoMS2 => &[(2, M2), (-1, S2)],
        TwoNS2 => &[(2, N2), (-1, S2)],
        TwoSM2 => &[(2, S2), (-1, M2)],
        TwoSMu2 => &[(2, S2), (-1, Mu2)],
        MKS2 => &[(1, M2), (1, K2), (-1, S2)],
        MNS2 => &[(1, M2), (1, N2), (-1, S2)],
        MNuS2 => &[(1, M2), (1, Nu2), (-1, S2)],
        MSK2 => &[(1, M2), (1, S2), (-1, K2)],
        MSN2 => &[(1, M2), (1, S2), (-1, N2)],
        NKM2 => &[(1, N2), (1, K2), (-1, M2)],
        OQ2 => &[(1, O1), (1, Q1)],
        SKM2 => &[(1, S2), (1, K2), (-1, M2)],
        Eta2 => &[(1, M2), (1, K2), (-1, N2)],

        N4 => &[(2, N2)],
        NK4 => &[(1, N2), (1, K2)],
        R4 => &[(2, R2)],
        SK4 => &[(1, S2), (1, K2)],
        MNu4 => &[(1, M2), (1, Nu2)],
        ML4 => &[(1, M2), (1, L2)],
        TwoMNS4 => &[(2, M2), (1, N2), (-1, S2)],
        ThreeMS4 => &[(3, M2), (-1, S2)],
        TwoMSN4 => &[(2, M2), (1, S2), (-1, N2)],

        TwoMP5 => &[(2, M2), (1, P1)],

        TwoMK6 => &[(2, M2), (1, K2)],
        TwoNM6 => &[(2, N2), (1, M2)],
        MNK6 => &[(1, M2), (1, N2), (1, K2)],
        S6 => &[(3, S2)],
        MSK6 => &[(1, M2), (1, S2), (1, K2)],

        ThreeMS8 => &[(3, M2), (1, S2)],

        _ => return None,
    })
}

impl ConstituentId {
    /// The constituent's Doodson 7-tuple. Primary constituents carry a
    /// literal tuple; compound constituents are derived from their
    /// generators via [`Doodson::combine`].
    pub fn doodson(self) -> Doodson {
        if let Some(d) = primary_doodson(self) {
            return d;
        }
        let parts = compound_parts(self).expect("every ConstituentId is primary or compound");
        let resolved: Vec<(i8, Doodson)> =
            parts.iter().map(|(c, g)| (*c, g.doodson())).collect();
        Doodson::combine(&resolved)
    }

    pub fn frequency_rad_per_hour(self) -> f64 {
        self.doodson().frequency_rad_per_hour()
    }

    pub fn kind(self) -> WaveKind {
        if self.doodson().species() == 0 {
            WaveKind::LongPeriod
        } else {
            WaveKind::ShortPeriod
        }
    }

    pub fn engine_family(self) -> EngineFamily {
        match self {
            Node | Msm | Mstm | Mqm | Tau1 | Beta1 | Gamma2 | Alpha2 | Beta2 | Delta2 | Ups1 => {
                EngineFamily::Doodson
            }
            TwoMK2 | TwoMNS4 | TwoMP5 | TwoMSN4 | TwoNM6 | TwoNS2 | TwoSMu2 | ThreeMS4
            | ThreeMS8 | A5 | M0 | M11 | M12 | ML4 | MNK6 | MNS2 | MNu4 | MNuS2 | MP1 | MSK2
            | Mf1 | Mf2 | Mm1 | Mm2 | NK4 | NKM2 | OQ2 | SK3 | SKM2 | SO3 => EngineFamily::Darwin,
            _ => EngineFamily::Both,
        }
    }

    /// Case-insensitive parse, total over [`ConstituentId::ALL`].
    pub fn parse(name: &str) -> Result<ConstituentId, TidalConstituentsError> {
        ConstituentId::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TidalConstituentsError::InvalidConstituent(name.to_string()))
    }
}

impl std::str::FromStr for ConstituentId {
    type Err = TidalConstituentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstituentId::parse(s)
    }
}

impl std::fmt::Display for ConstituentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
