//! Self-contained low-precision ephemeris.
//!
//! Mean orbital elements with secular rates, solved through Kepler's
//! equation, referred to the mean equinox of date. The Moon carries its
//! principal periodic terms; Jupiter and Saturn carry the great-inequality
//! terms. Accuracy is a few arcminutes for the Sun and planets and better
//! than half a degree for the Moon over 1900-2100, ample for sign-based work.
//! Time is treated as UT throughout (Delta T is ignored).

use std::f64::consts::PI;

use kundali_base::{ALL_GRAHAS, Graha, normalize_360};
use tracing::debug;

use crate::ayanamsha::{ayanamsha_deg, jd_to_centuries};
use crate::birth::EphemerisRequest;
use crate::error::EphemerisError;
use crate::provider::{EphemerisProvider, EphemerisSnapshot, PlanetPosition};
use crate::time::julian_day;

/// Day zero of the element epoch (1999 Dec 31.0).
const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

/// Half-width of the retrograde finite difference, in days.
const MOTION_HALF_STEP_DAYS: f64 = 0.5;

// ---------------------------------------------------------------------------
// Orbital elements
// ---------------------------------------------------------------------------

/// Bodies carried by the model (nodes are handled separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Osculating elements in degrees (and AU, or Earth radii for the Moon).
#[derive(Debug, Clone, Copy)]
struct Elements {
    node: f64,
    incl: f64,
    peri: f64,
    a: f64,
    e: f64,
    mean_anomaly: f64,
}

fn elements(body: Body, d: f64) -> Elements {
    match body {
        Body::Sun => Elements {
            node: 0.0,
            incl: 0.0,
            peri: 282.9404 + 4.70935e-5 * d,
            a: 1.0,
            e: 0.016709 - 1.151e-9 * d,
            mean_anomaly: 356.0470 + 0.9856002585 * d,
        },
        Body::Moon => Elements {
            node: 125.1228 - 0.0529538083 * d,
            incl: 5.1454,
            peri: 318.0634 + 0.1643573223 * d,
            a: 60.2666,
            e: 0.054900,
            mean_anomaly: 115.3654 + 13.0649929509 * d,
        },
        Body::Mercury => Elements {
            node: 48.3313 + 3.24587e-5 * d,
            incl: 7.0047 + 5.00e-8 * d,
            peri: 29.1241 + 1.01444e-5 * d,
            a: 0.387098,
            e: 0.205635 + 5.59e-10 * d,
            mean_anomaly: 168.6562 + 4.0923344368 * d,
        },
        Body::Venus => Elements {
            node: 76.6799 + 2.46590e-5 * d,
            incl: 3.3946 + 2.75e-8 * d,
            peri: 54.8910 + 1.38374e-5 * d,
            a: 0.723330,
            e: 0.006773 - 1.302e-9 * d,
            mean_anomaly: 48.0052 + 1.6021302244 * d,
        },
        Body::Mars => Elements {
            node: 49.5574 + 2.11081e-5 * d,
            incl: 1.8497 - 1.78e-8 * d,
            peri: 286.5016 + 2.92961e-5 * d,
            a: 1.523688,
            e: 0.093405 + 2.516e-9 * d,
            mean_anomaly: 18.6021 + 0.5240207766 * d,
        },
        Body::Jupiter => Elements {
            node: 100.4542 + 2.76854e-5 * d,
            incl: 1.3030 - 1.557e-7 * d,
            peri: 273.8777 + 1.64505e-5 * d,
            a: 5.20256,
            e: 0.048498 + 4.469e-9 * d,
            mean_anomaly: 19.8950 + 0.0830853001 * d,
        },
        Body::Saturn => Elements {
            node: 113.6634 + 2.38980e-5 * d,
            incl: 2.4886 - 1.081e-7 * d,
            peri: 339.3939 + 2.97661e-5 * d,
            a: 9.55475,
            e: 0.055546 - 9.499e-9 * d,
            mean_anomaly: 316.9670 + 0.0334442282 * d,
        },
    }
}

/// Eccentric anomaly (radians) by Newton iteration on Kepler's equation.
fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..20 {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Ecliptic rectangular position from elements.
fn orbital_xyz(el: &Elements) -> [f64; 3] {
    let m = normalize_360(el.mean_anomaly).to_radians();
    let ecc = solve_kepler(m, el.e);
    let xv = el.a * (ecc.cos() - el.e);
    let yv = el.a * (1.0 - el.e * el.e).sqrt() * ecc.sin();
    let v = yv.atan2(xv);
    let r = xv.hypot(yv);

    let (sn, cn) = el.node.to_radians().sin_cos();
    let (si, ci) = el.incl.to_radians().sin_cos();
    let (su, cu) = (v + el.peri.to_radians()).sin_cos();
    [
        r * (cn * cu - sn * su * ci),
        r * (sn * cu + cn * su * ci),
        r * (su * si),
    ]
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

// ---------------------------------------------------------------------------
// Longitudes
// ---------------------------------------------------------------------------

/// Geocentric rectangular position of the Sun (AU, ecliptic of date).
fn sun_xy(d: f64) -> (f64, f64) {
    let p = orbital_xyz(&elements(Body::Sun, d));
    (p[0], p[1])
}

fn moon_longitude(d: f64) -> f64 {
    let moon = elements(Body::Moon, d);
    let sun = elements(Body::Sun, d);
    let p = orbital_xyz(&moon);
    let lon = p[1].atan2(p[0]) * 180.0 / PI;

    let ms = sun.mean_anomaly;
    let mm = moon.mean_anomaly;
    let ls = sun.mean_anomaly + sun.peri;
    let lm = moon.mean_anomaly + moon.peri + moon.node;
    let dd = lm - ls;
    let f = lm - moon.node;

    let perturbation = -1.274 * sin_deg(mm - 2.0 * dd) + 0.658 * sin_deg(2.0 * dd)
        - 0.186 * sin_deg(ms)
        - 0.059 * sin_deg(2.0 * mm - 2.0 * dd)
        - 0.057 * sin_deg(mm - 2.0 * dd + ms)
        + 0.053 * sin_deg(mm + 2.0 * dd)
        + 0.046 * sin_deg(2.0 * dd - ms)
        + 0.041 * sin_deg(mm - ms)
        - 0.035 * sin_deg(dd)
        - 0.031 * sin_deg(mm + ms)
        - 0.015 * sin_deg(2.0 * f - 2.0 * dd)
        + 0.011 * sin_deg(mm - 4.0 * dd);

    normalize_360(lon + perturbation)
}

/// Great-inequality correction to heliocentric longitude, in degrees.
fn great_inequality(body: Body, mj: f64, ms: f64) -> f64 {
    match body {
        Body::Jupiter => {
            -0.332 * sin_deg(2.0 * mj - 5.0 * ms - 67.6) - 0.056 * sin_deg(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * sin_deg(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * sin_deg(mj - 2.0 * ms)
                + 0.022 * cos_deg(mj - ms)
                + 0.023 * sin_deg(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * sin_deg(mj - 5.0 * ms - 69.0)
        }
        Body::Saturn => {
            0.812 * sin_deg(2.0 * mj - 5.0 * ms - 67.6) - 0.229 * cos_deg(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * sin_deg(mj - 2.0 * ms - 3.0)
                + 0.046 * sin_deg(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * sin_deg(mj - 3.0 * ms + 32.0)
        }
        _ => 0.0,
    }
}

fn planet_longitude(body: Body, d: f64) -> f64 {
    let p = orbital_xyz(&elements(body, d));
    let mut helio_lon = p[1].atan2(p[0]) * 180.0 / PI;
    let planar = p[0].hypot(p[1]);

    if matches!(body, Body::Jupiter | Body::Saturn) {
        let mj = elements(Body::Jupiter, d).mean_anomaly;
        let ms = elements(Body::Saturn, d).mean_anomaly;
        helio_lon += great_inequality(body, mj, ms);
    }

    let (sx, sy) = sun_xy(d);
    let (hs, hc) = helio_lon.to_radians().sin_cos();
    let gx = planar * hc + sx;
    let gy = planar * hs + sy;
    normalize_360(gy.atan2(gx) * 180.0 / PI)
}

/// Mean longitude of the ascending lunar node, degrees of date.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(
        125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0,
    )
}

/// Tropical geocentric longitude of a graha at a Julian Date.
pub fn tropical_longitude(graha: Graha, jd: f64) -> f64 {
    let d = jd - ELEMENT_EPOCH_JD;
    match graha {
        Graha::Surya => {
            let (x, y) = sun_xy(d);
            normalize_360(y.atan2(x) * 180.0 / PI)
        }
        Graha::Chandra => moon_longitude(d),
        Graha::Mangal => planet_longitude(Body::Mars, d),
        Graha::Buddh => planet_longitude(Body::Mercury, d),
        Graha::Guru => planet_longitude(Body::Jupiter, d),
        Graha::Shukra => planet_longitude(Body::Venus, d),
        Graha::Shani => planet_longitude(Body::Saturn, d),
        Graha::Rahu => mean_rahu_deg(jd_to_centuries(jd)),
        Graha::Ketu => normalize_360(mean_rahu_deg(jd_to_centuries(jd)) + 180.0),
    }
}

/// Retrograde flag from the geocentric motion over +/- half a day.
///
/// Sun and Moon are never retrograde; the mean nodes always are.
pub fn is_retrograde(graha: Graha, jd: f64) -> bool {
    match graha {
        Graha::Surya | Graha::Chandra => false,
        Graha::Rahu | Graha::Ketu => true,
        _ => {
            let before = tropical_longitude(graha, jd - MOTION_HALF_STEP_DAYS);
            let after = tropical_longitude(graha, jd + MOTION_HALF_STEP_DAYS);
            let mut motion = after - before;
            if motion > 180.0 {
                motion -= 360.0;
            } else if motion < -180.0 {
                motion += 360.0;
            }
            motion < 0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Ascendant
// ---------------------------------------------------------------------------

/// Greenwich mean sidereal time in degrees.
pub fn gmst_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    normalize_360(
        280.46061837 + 360.98564736629 * (jd - 2_451_545.0) + 0.000387933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439291 - 0.0130042 * t
}

/// Tropical ascendant from local sidereal time, obliquity and latitude.
pub fn ascendant_from_lst(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let y = theta.cos();
    let x = -(theta.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(y.atan2(x).to_degrees())
}

/// Tropical ascendant at a Julian Date and place (east longitude positive).
pub fn tropical_ascendant(jd: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let lst = normalize_360(gmst_deg(jd) + longitude_deg);
    ascendant_from_lst(lst, mean_obliquity_deg(jd_to_centuries(jd)), latitude_deg)
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Provider backed by the analytic model above.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn snapshot(&self, request: &EphemerisRequest) -> Result<EphemerisSnapshot, EphemerisError> {
        let jd = julian_day(request.instant);
        if !jd.is_finite() {
            return Err(EphemerisError::CalculationFailed(format!(
                "non-finite Julian Date for {}",
                request.instant
            )));
        }
        let aya = ayanamsha_deg(request.ayanamsha, jd_to_centuries(jd));
        let asc = tropical_ascendant(jd, request.latitude, request.longitude) - aya;
        let planets = ALL_GRAHAS
            .iter()
            .map(|&g| PlanetPosition::new(g, tropical_longitude(g, jd) - aya, is_retrograde(g, jd)));
        let snapshot = EphemerisSnapshot::new(asc, planets);
        debug!(
            jd,
            ayanamsha = %request.ayanamsha,
            ayanamsha_deg = aya,
            ascendant = snapshot.ascendant_longitude,
            "analytic snapshot computed"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::angular_separation;

    const J2000: f64 = 2_451_545.0;

    #[test]
    fn kepler_circular_orbit() {
        assert!((solve_kepler(1.0, 0.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn kepler_satisfies_equation() {
        let (m, e) = (2.1, 0.2056);
        let ecc = solve_kepler(m, e);
        assert!((ecc - e * ecc.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn sun_at_j2000() {
        let lon = tropical_longitude(Graha::Surya, J2000);
        assert!(angular_separation(lon, 280.38) < 0.1, "got {lon}");
    }

    #[test]
    fn moon_near_mean_longitude() {
        let lon = tropical_longitude(Graha::Chandra, J2000);
        assert!(angular_separation(lon, 218.32) < 10.0, "got {lon}");
    }

    #[test]
    fn moon_moves_about_13_degrees_per_day() {
        let a = tropical_longitude(Graha::Chandra, J2000);
        let b = tropical_longitude(Graha::Chandra, J2000 + 1.0);
        let motion = normalize_360(b - a);
        assert!((11.5..15.5).contains(&motion), "got {motion}");
    }

    #[test]
    fn jupiter_and_saturn_early_2000() {
        let j = tropical_longitude(Graha::Guru, J2000);
        let s = tropical_longitude(Graha::Shani, J2000);
        assert!(angular_separation(j, 25.2) < 2.0, "jupiter {j}");
        assert!(angular_separation(s, 40.4) < 2.0, "saturn {s}");
    }

    #[test]
    fn inner_planets_stay_near_sun() {
        for jd in [J2000, J2000 + 100.0, J2000 + 2000.0] {
            let sun = tropical_longitude(Graha::Surya, jd);
            let mercury = tropical_longitude(Graha::Buddh, jd);
            let venus = tropical_longitude(Graha::Shukra, jd);
            assert!(angular_separation(sun, mercury) < 28.5, "mercury at {jd}");
            assert!(angular_separation(sun, venus) < 47.5, "venus at {jd}");
        }
    }

    #[test]
    fn ketu_opposes_rahu() {
        let r = tropical_longitude(Graha::Rahu, J2000);
        let k = tropical_longitude(Graha::Ketu, J2000);
        assert!((angular_separation(r, k) - 180.0).abs() < 1e-9);
        assert!(angular_separation(r, 125.04) < 0.01);
    }

    #[test]
    fn node_and_luminary_flags() {
        assert!(is_retrograde(Graha::Rahu, J2000));
        assert!(is_retrograde(Graha::Ketu, J2000));
        assert!(!is_retrograde(Graha::Surya, J2000));
        assert!(!is_retrograde(Graha::Chandra, J2000));
    }

    #[test]
    fn jupiter_retrograde_at_opposition() {
        // 2000-11-28, Jupiter opposite the Sun.
        assert!(is_retrograde(Graha::Guru, 2_451_876.5));
    }

    #[test]
    fn gmst_at_j2000() {
        assert!((gmst_deg(J2000) - 280.46061837).abs() < 1e-6);
    }

    #[test]
    fn ascendant_at_equator() {
        let eps = 23.44;
        assert!((ascendant_from_lst(0.0, eps, 0.0) - 90.0).abs() < 1e-9);
        assert!((ascendant_from_lst(90.0, eps, 0.0) - 180.0).abs() < 1e-9);
        assert!((ascendant_from_lst(180.0, eps, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn ascendant_advances_with_time() {
        let a = tropical_ascendant(J2000, 28.6, 77.2);
        let b = tropical_ascendant(J2000 + 1.0 / 24.0, 28.6, 77.2);
        let motion = normalize_360(b - a);
        assert!(motion > 5.0 && motion < 45.0, "got {motion}");
    }
}
