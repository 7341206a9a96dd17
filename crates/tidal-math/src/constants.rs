/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The Schureman (1958) physical constant table used throughout nodal
//! factor/phase computation. A drop-in table, not derived from anything
//! else, so it lives on its own rather than inline in the formulas that
//! consume it.

/// Selects the Schureman 1958 constants (`true`) or the IERS 2010
/// conventions equivalents (`false`). Schureman 1958 is the default used by
/// [`crate::constants::Schureman`].
pub const USE_SCHUREMAN_CONSTANTS: bool = true;

/// Modified Julian Date epoch, in Julian days.
pub const MODIFIED_JULIAN_EPOCH: f64 = 2_400_000.5;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
pub const J2000_JULIAN_DAY: f64 = 2_451_545.0;
pub const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

/// Schureman (1958) obliquity-factor and nodal-correction constants
/// (formula numbers refer to Schureman 1958).
#[derive(Clone, Copy, Debug)]
pub struct Schureman {
    /// Formula 65/73: obliquity factor for Mm.
    pub k65: f64,
    /// Formula 66/74: obliquity factor for Mf.
    pub k66: f64,
    /// Formula 67/75: obliquity factor for O1.
    pub k67: f64,
    /// Formula 68/76: obliquity factor for J1.
    pub k68: f64,
    /// Formula 69/77: obliquity factor for OO1.
    pub k69: f64,
    /// Formula 70/78: obliquity factor for M2.
    pub k70: f64,
    /// Formula 71/79: obliquity factor shared by several semidiurnals.
    pub k71: f64,
    /// Formula 141/137.
    pub k141: f64,
    /// Formula 144/138: used by M1.
    pub k144: f64,
    /// Formula 146/139.
    pub k146: f64,
    /// Formula 147/139.
    pub k147: f64,
    /// Formula 149: node factor for M3.
    pub k149: f64,
    /// Formula 197, first component (M1 amplitude factor 1/Qa).
    pub k197_1: f64,
    /// Formula 197, second component.
    pub k197_2: f64,
    /// Formulae 216-219, lunisolar K1/K2 combination terms.
    pub k216: f64,
    pub k217: f64,
    pub k218: f64,
    pub k219: f64,
    /// Formula 224: solar/lunar ratio for K1.
    pub k224: f64,
    /// Formula 226: mean K1 coefficient.
    pub k226: f64,
    /// Formula 227: K1 node factor components.
    pub k227_1: f64,
    pub k227_2: f64,
    pub k227_3: f64,
    /// Formula 232: solar/lunar ratio for K2.
    pub k232: f64,
    /// Formula 234: mean K2 coefficient.
    pub k234: f64,
    /// Formula 235: K2 node factor components.
    pub k235_1: f64,
    pub k235_2: f64,
    pub k235_3: f64,
    pub cos_i_cos_w: f64,
    pub sin_i_sin_w: f64,
    pub tan1: f64,
    pub tan2: f64,
}

/// The Schureman 1958 constant set (matches `USE_SCHUREMAN_CONSTANTS = true`).
pub const SCHUREMAN_1958: Schureman = Schureman {
    k65: 0.5021,
    k66: 0.1578,
    k67: 0.3800,
    k68: 0.7214,
    k69: 0.0164,
    k70: 0.9154,
    k71: 0.1565,
    k141: 0.3192,
    k144: 0.5873,
    k146: 0.3658,
    k147: 0.1114,
    k149: 0.8758,
    k197_1: 2.310,
    k197_2: 1.435,
    k216: 0.5023,
    k217: 0.1681,
    k218: 0.5023,
    k219: 0.0365,
    k224: 0.3347,
    k226: 0.5305,
    k227_1: 0.8965,
    k227_2: 0.6001,
    k227_3: 0.1006,
    k232: 0.0727,
    k234: 0.1151,
    k235_1: 19.0444,
    k235_2: 2.7702,
    k235_3: 0.0981,
    cos_i_cos_w: 0.91370,
    sin_i_sin_w: 0.03569,
    tan1: 1.01883,
    tan2: 0.64412,
};

/// The IERS 2010 conventions equivalent constant set.
pub const IERS_2010: Schureman = Schureman {
    k65: 0.502306,
    k66: 0.157590,
    k67: 0.379830,
    k68: 0.721100,
    k69: 0.016346,
    k70: 0.915484,
    k71: 0.156318,
    k141: 0.319103,
    k144: 0.587656,
    k146: 0.365630,
    k147: 0.111387,
    k149: 0.875944,
    k197_1: 2.310512,
    k197_2: 1.435448,
    k216: 0.502261,
    k217: 0.167675,
    k218: 0.502261,
    k219: 0.036348,
    k224: 0.333840,
    k226: 0.529855,
    k227_1: 0.898554,
    k227_2: 0.599946,
    k227_3: 0.100143,
    k232: 0.072369,
    k234: 0.114860,
    k235_1: 19.121423,
    k235_2: 2.767581,
    k235_3: 0.100143,
    cos_i_cos_w: 0.913785,
    sin_i_sin_w: 0.035674,
    tan1: 1.018818,
    tan2: 0.643932,
};

impl Default for Schureman {
    fn default() -> Self {
        SCHUREMAN_1958
    }
}
