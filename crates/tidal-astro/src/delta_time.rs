/*
 * Copyright (c) 2024. The tidal-rs contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `Delta T = TT - UT1`, blending the IERS modern-era table with historical
//! polynomial fits and a long-term parabola outside the tabulated span.

use tidal_math::constants::{DAYS_PER_CENTURY, J2000_JULIAN_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JULIAN_DAY};

struct DeltaTEntry {
    year: f64,
    delta_t: f64,
}

/// Generated from IERS finals.all, 1973.0 through 2027.0.
const IERS_TABLE: &[DeltaTEntry] = &[
    DeltaTEntry { year: 1973.0, delta_t: 43.9444 },
    DeltaTEntry { year: 1974.0, delta_t: 44.9847 },
    DeltaTEntry { year: 1975.0, delta_t: 45.9713 },
    DeltaTEntry { year: 1976.0, delta_t: 46.9903 },
    DeltaTEntry { year: 1977.0, delta_t: 48.0236 },
    DeltaTEntry { year: 1978.0, delta_t: 49.0803 },
    DeltaTEntry { year: 1979.0, delta_t: 50.0844 },
    DeltaTEntry { year: 1980.0, delta_t: 50.9650 },
    DeltaTEntry { year: 1981.0, delta_t: 51.7885 },
    DeltaTEntry { year: 1982.0, delta_t: 52.5609 },
    DeltaTEntry { year: 1983.0, delta_t: 53.4066 },
    DeltaTEntry { year: 1984.0, delta_t: 54.0722 },
    DeltaTEntry { year: 1985.0, delta_t: 54.6134 },
    DeltaTEntry { year: 1986.0, delta_t: 55.1033 },
    DeltaTEntry { year: 1987.0, delta_t: 55.5703 },
    DeltaTEntry { year: 1988.0, delta_t: 56.0721 },
    DeltaTEntry { year: 1989.0, delta_t: 56.5631 },
    DeltaTEntry { year: 1990.0, delta_t: 57.2122 },
    DeltaTEntry { year: 1991.0, delta_t: 57.9439 },
    DeltaTEntry { year: 1992.0, delta_t: 58.7244 },
    DeltaTEntry { year: 1993.0, delta_t: 59.5665 },
    DeltaTEntry { year: 1994.0, delta_t: 60.3887 },
    DeltaTEntry { year: 1995.0, delta_t: 61.2232 },
    DeltaTEntry { year: 1996.0, delta_t: 61.9739 },
    DeltaTEntry { year: 1997.0, delta_t: 62.6409 },
    DeltaTEntry { year: 1998.0, delta_t: 63.2509 },
    DeltaTEntry { year: 1999.0, delta_t: 63.6502 },
    DeltaTEntry { year: 2000.0, delta_t: 63.9658 },
    DeltaTEntry { year: 2001.0, delta_t: 64.1971 },
    DeltaTEntry { year: 2002.0, delta_t: 64.3981 },
    DeltaTEntry { year: 2003.0, delta_t: 64.5366 },
    DeltaTEntry { year: 2004.0, delta_t: 64.6356 },
    DeltaTEntry { year: 2005.0, delta_t: 64.7790 },
    DeltaTEntry { year: 2006.0, delta_t: 64.9860 },
    DeltaTEntry { year: 2007.0, delta_t: 65.3179 },
    DeltaTEntry { year: 2008.0, delta_t: 65.6171 },
    DeltaTEntry { year: 2009.0, delta_t: 65.9295 },
    DeltaTEntry { year: 2010.0, delta_t: 66.2152 },
    DeltaTEntry { year: 2011.0, delta_t: 66.4592 },
    DeltaTEntry { year: 2012.0, delta_t: 66.7574 },
    DeltaTEntry { year: 2013.0, delta_t: 67.1050 },
    DeltaTEntry { year: 2014.0, delta_t: 67.4695 },
    DeltaTEntry { year: 2015.0, delta_t: 67.8619 },
    DeltaTEntry { year: 2016.0, delta_t: 68.3699 },
    DeltaTEntry { year: 2017.0, delta_t: 68.7985 },
    DeltaTEntry { year: 2018.0, delta_t: 69.0995 },
    DeltaTEntry { year: 2019.0, delta_t: 69.3231 },
    DeltaTEntry { year: 2020.0, delta_t: 69.3891 },
    DeltaTEntry { year: 2021.0, delta_t: 69.3312 },
    DeltaTEntry { year: 2022.0, delta_t: 69.2439 },
    DeltaTEntry { year: 2023.0, delta_t: 69.1967 },
    DeltaTEntry { year: 2024.0, delta_t: 69.1661 },
    DeltaTEntry { year: 2025.0, delta_t: 69.1252 },
    DeltaTEntry { year: 2026.0, delta_t: 69.1160 },
    DeltaTEntry { year: 2027.0, delta_t: 69.0928 },
];

fn morrison_stephenson_parabola(year: f64) -> f64 {
    let t_cent = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * t_cent * t_cent
}

fn polynomial_1900_1973(year: f64) -> f64 {
    let t = year - 1900.0;
    -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
}

fn polynomial_1800_1900(year: f64) -> f64 {
    let t = (year - 1900.0) / 100.0;
    -2.50
        + 228.95 * t
        + 5218.61 * t.powi(2)
        + 56282.84 * t.powi(3)
        + 324011.78 * t.powi(4)
        + 1061660.75 * t.powi(5)
        + 2087298.89 * t.powi(6)
        + 2513807.78 * t.powi(7)
        + 1818961.41 * t.powi(8)
        + 727058.63 * t.powi(9)
        + 123563.95 * t.powi(10)
}

fn polynomial_1700_1800(year: f64) -> f64 {
    let t = year - 1700.0;
    8.83 + 0.1603 * t - 0.0059285 * t * t + 0.00013336 * t.powi(3) - t.powi(4) / 1_174_000.0
}

fn polynomial_1600_1700(year: f64) -> f64 {
    let t = year - 1600.0;
    120.0 - 0.9808 * t - 0.01532 * t * t + t.powi(3) / 7129.0
}

/// Converts seconds since the Unix epoch to a decimal year.
pub fn epoch_to_year(epoch_seconds: f64) -> f64 {
    let jd = epoch_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JULIAN_DAY;
    let t = (jd - J2000_JULIAN_DAY) / DAYS_PER_CENTURY;
    2000.0 + t * 100.0
}

/// `Delta T = TT - UT1`, in seconds, for `epoch_seconds` since the Unix epoch.
pub fn fetch_delta_time(epoch_seconds: f64) -> f64 {
    let year = epoch_to_year(epoch_seconds);

    if year >= IERS_TABLE[0].year && year <= IERS_TABLE[IERS_TABLE.len() - 1].year {
        let idx = IERS_TABLE.partition_point(|e| e.year < year);
        if idx == 0 {
            return IERS_TABLE[0].delta_t;
        }
        let p1 = &IERS_TABLE[idx - 1];
        let p2 = &IERS_TABLE[idx];
        let fraction = (year - p1.year) / (p2.year - p1.year);
        return p1.delta_t + fraction * (p2.delta_t - p1.delta_t);
    }

    if year > IERS_TABLE[IERS_TABLE.len() - 1].year {
        return morrison_stephenson_parabola(year);
    }
    if year >= 1900.0 {
        return polynomial_1900_1973(year);
    }
    if year >= 1800.0 {
        return polynomial_1800_1900(year);
    }
    if year >= 1700.0 {
        return polynomial_1700_1800(year);
    }
    if year >= 1600.0 {
        return polynomial_1600_1700(year);
    }
    morrison_stephenson_parabola(year)
}
