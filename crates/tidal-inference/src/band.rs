/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Frequency bands used to bracket minor constituents against their
//! modelled majors.

use tidal_constituents::ConstituentId;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Band {
    LongPeriod,
    Diurnal,
    Semidiurnal,
}

/// The band a constituent belongs to, by Doodson species. `None` for
/// terdiurnal and higher species: no admittance theory is applied there,
/// they are either atlas-modelled or left at zero.
pub fn band_of(id: ConstituentId) -> Option<Band> {
    match id.doodson().species() {
        0 => Some(Band::LongPeriod),
        1 => Some(Band::Diurnal),
        2 => Some(Band::Semidiurnal),
        _ => None,
    }
}

/// The three modelled-major constituent ids that bracket each band,
/// ordered by ascending frequency.
pub fn majors(band: Band) -> [ConstituentId; 3] {
    match band {
        Band::LongPeriod => [ConstituentId::Node, ConstituentId::Mm, ConstituentId::Mf],
        Band::Diurnal => [ConstituentId::Q1, ConstituentId::O1, ConstituentId::K1],
        Band::Semidiurnal => [ConstituentId::N2, ConstituentId::M2, ConstituentId::S2],
    }
}
