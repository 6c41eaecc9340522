use std::{fmt, ops};

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::units;

/// Offset between the Julian Date and Modified Julian Date scales.
const JD_OFFSET: f64 = 2_400_000.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A Modified Julian Date.
#[derive(Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Mjd(f64);

impl Mjd {
    /// The J2000.0 epoch.
    pub const J2000: Mjd = Mjd(units::J2000_MJD);

    pub fn new(days: f64) -> Self {
        Self(days)
    }

    pub fn days(self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since [`Mjd::J2000`]. Negative before
    /// the epoch.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - units::J2000_MJD) / units::DAYS_PER_CENTURY
    }

    pub fn into_julian_date(self) -> f64 {
        self.0 + JD_OFFSET
    }

    pub fn from_julian_date(jd: f64) -> Self {
        Self(jd - JD_OFFSET)
    }
}

impl ops::Sub<Mjd> for Mjd {
    type Output = Duration;

    fn sub(self, rhs: Mjd) -> Self::Output {
        Duration::seconds_f64((self.0 - rhs.0) * SECONDS_PER_DAY)
    }
}

impl ops::Sub<Duration> for Mjd {
    type Output = Mjd;

    fn sub(self, rhs: Duration) -> Self::Output {
        Mjd(self.0 - rhs.as_seconds_f64() / SECONDS_PER_DAY)
    }
}

impl ops::Add<Duration> for Mjd {
    type Output = Mjd;

    fn add(self, rhs: Duration) -> Self::Output {
        Mjd(self.0 + rhs.as_seconds_f64() / SECONDS_PER_DAY)
    }
}

impl fmt::Display for Mjd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MJD({})", self.0)
    }
}

impl fmt::Debug for Mjd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::Mjd;

    #[test]
    fn j2000_is_the_centuries_origin() {
        assert!(Mjd::J2000.centuries_since_j2000().abs() < 1e-15);
        let one_century = Mjd::new(51_544.5 + 36_525.0);
        assert!((one_century.centuries_since_j2000() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn julian_date_round_trip() {
        assert!((Mjd::J2000.into_julian_date() - 2_451_545.0).abs() < 1e-9);
        let back = Mjd::from_julian_date(2_451_545.0);
        assert!((back.days() - 51_544.5).abs() < 1e-9);
    }

    #[test]
    fn duration_arithmetic() {
        let later = Mjd::J2000 + Duration::days(10);
        assert!((later.days() - 51_554.5).abs() < 1e-9);
        let span = later - Mjd::J2000;
        assert!((span.as_seconds_f64() - 864_000.0).abs() < 1e-6);
        let earlier = later - Duration::days(10);
        assert!((earlier.days() - 51_544.5).abs() < 1e-9);
    }

    #[test]
    fn displays_with_scale_tag() {
        assert_eq!(Mjd::new(60_000.0).to_string(), "MJD(60000)");
    }
}
