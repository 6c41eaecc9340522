//! Definitions of celestial bodies.

use std::{collections::HashMap, f64::consts, path::Path, sync::Arc};

use color_eyre::eyre;
use itertools::Itertools;
use nalgebra::Vector3;
use num_enum::{FromPrimitive, IntoPrimitive};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use time::Duration;
use tracing::{debug, warn};

use crate::{
    catalog::{self, BodyRecord, ParameterFormatError},
    time::Mjd,
    units,
};

/// Category of a celestial body, as coded in catalog records.
///
/// Codes outside the known range resolve to [`BodyClass::SmallBody`];
/// fractional codes truncate.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum BodyClass {
    Planet = 0,
    DwarfPlanet = 1,
    LargeMoonOrAsteroid = 2,
    SmallMoon = 3,
    #[default]
    SmallBody = 4,
}

impl BodyClass {
    pub fn label(self) -> &'static str {
        match self {
            BodyClass::Planet => "planet",
            BodyClass::DwarfPlanet => "dwarf planet",
            BodyClass::LargeMoonOrAsteroid => "large moon/asteroid",
            BodyClass::SmallMoon => "small moon",
            BodyClass::SmallBody => "small body",
        }
    }
}

/// Element values captured at the catalog epoch, for resetting a body
/// after external perturbation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpochElements {
    /// Semi-major axis (`AU`).
    pub a: f64,
    /// Eccentricity (dimensionless).
    pub e: f64,
    /// Inclination (`rad`).
    pub i: f64,
    /// Longitude of ascending node (`rad`).
    pub lan: f64,
}

/// A celestial body.
///
/// Constructed once from a [`BodyRecord`]; the element fields stay
/// mutable so an external integrator can perturb them, while the derived
/// quantities change only through [`OrbitalBody::rederive`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    /// Name of this body as displayed to consumers.
    pub name: Arc<str>,
    /// Catalog category.
    pub class: BodyClass,
    /// Epoch the elements are valid at.
    pub epoch: Mjd,
    /// Semi-major axis (`AU`).
    pub a: f64,
    /// Eccentricity (dimensionless).
    pub e: f64,
    /// Inclination (`rad`).
    pub i: f64,
    /// Argument of periapsis (`rad`).
    pub argpe: f64,
    /// Longitude of ascending node (`rad`).
    pub lan: f64,
    /// Rotation rate about the spin axis (`rad/century`).
    pub theta_dot: f64,
    /// Right ascension of the spin axis (`rad`).
    pub axis_ra: f64,
    /// Declination of the spin axis (`rad`).
    pub axis_dec: f64,
    /// Absolute magnitude.
    pub absolute_mag: f64,
    /// Mean radius of the body's sphere (`km`).
    pub radius: f64,
    /// Mass (`kg`).
    pub mass: f64,
    /// Ring outer edge, as a multiple of `radius`. Zero when ringless.
    pub ring_radius: f64,
    /// Camera zoom hint for close-up views.
    pub zoom_ratio: f64,
    period: f64,
    mean_orbit: f64,
    periapsis: f64,
    apoapsis: f64,
    exag_radius: f64,
    start: EpochElements,
}

impl OrbitalBody {
    /// Normalize a raw catalog record into a fully populated body.
    ///
    /// Absent fields take their documented defaults; present angular
    /// fields are converted from degrees to radians; a missing radius is
    /// estimated from the absolute magnitude and a missing mass from the
    /// radius. The only failure is a present numeric field that does not
    /// parse, which rejects the whole record.
    pub fn from_record(rec: &BodyRecord) -> Result<Self, ParameterFormatError> {
        let name: Arc<str> = match rec.name.as_deref() {
            Some(s) if !s.is_empty() => Arc::from(s),
            _ => Arc::from("Unnamed"),
        };
        let class = match catalog::num_field("type", rec.class.as_deref())? {
            Some(code) if code >= 0.0 => BodyClass::from(code as u8),
            _ => BodyClass::SmallBody,
        };
        let epoch = Mjd::new(
            catalog::num_field("epoch", rec.epoch.as_deref())?.unwrap_or(units::J2000_MJD),
        );

        let a = catalog::num_field("a", rec.a.as_deref())?.unwrap_or(1.0);
        let e = catalog::num_field("e", rec.e.as_deref())?.unwrap_or(0.0);
        if !(0.0..1.0).contains(&e) {
            warn!("{name}: eccentricity {e} is outside [0, 1), orbit is not an ellipse");
        }
        let i = catalog::angle_field("inc", rec.inc.as_deref())?.unwrap_or(0.0);
        let argpe = catalog::angle_field("w", rec.w.as_deref())?.unwrap_or(0.0);
        let lan = catalog::angle_field("omega", rec.omega.as_deref())?.unwrap_or(0.0);

        let theta_dot =
            catalog::angle_field("thetaDot", rec.theta_dot.as_deref())?.unwrap_or(0.0);
        let axis_ra = catalog::angle_field("axisRA", rec.axis_ra.as_deref())?.unwrap_or(0.0);
        let axis_dec = catalog::angle_field("axisDec", rec.axis_dec.as_deref())?
            .unwrap_or(consts::FRAC_PI_2);

        let absolute_mag = catalog::num_field("H", rec.absolute_mag.as_deref())?.unwrap_or(10.0);
        let ring_radius =
            catalog::num_field("ringRadius", rec.ring_radius.as_deref())?.unwrap_or(0.0);
        let zoom_ratio =
            catalog::num_field("zoomRatio", rec.zoom_ratio.as_deref())?.unwrap_or(1000.0);

        let radius = match catalog::num_field("radius", rec.radius.as_deref())? {
            Some(r) => r,
            None => {
                debug!("{name}: no radius in record, estimating from magnitude {absolute_mag}");
                units::estimate_radius(absolute_mag)
            }
        };
        let mass = match catalog::num_field("mass", rec.mass.as_deref())? {
            Some(m) => m * units::MASS_UNIT_KG,
            None => units::DENSITY_MASS_COEFF * libm::pow(radius, 3.0),
        };

        let mut body = Self {
            name,
            class,
            epoch,
            a,
            e,
            i,
            argpe,
            lan,
            theta_dot,
            axis_ra,
            axis_dec,
            absolute_mag,
            radius,
            mass,
            ring_radius,
            zoom_ratio,
            period: 0.0,
            mean_orbit: 0.0,
            periapsis: 0.0,
            apoapsis: 0.0,
            exag_radius: 0.0,
            start: EpochElements { a, e, i, lan },
        };
        body.rederive();
        Ok(body)
    }

    /// Recompute the derived quantities from the live element and
    /// physical fields.
    pub fn rederive(&mut self) {
        self.period = libm::pow(self.a, 1.5) / 100.0;
        self.mean_orbit = self.a * (1.0 + self.e * self.e / 2.0);
        self.periapsis = (1.0 - self.e) * self.a;
        self.apoapsis = (1.0 + self.e) * self.a;
        self.exag_radius = self.radius / units::AU_KM * units::RENDER_EXAG_SCALE;
    }

    /// Copy the epoch elements back over the live fields and rederive.
    pub fn restore_epoch_elements(&mut self) {
        self.a = self.start.a;
        self.e = self.start.e;
        self.i = self.start.i;
        self.lan = self.start.lan;
        self.rederive();
    }

    /// Element values at [`Self::epoch`].
    pub fn epoch_elements(&self) -> EpochElements {
        self.start
    }

    /// Orbital period (Julian centuries).
    pub fn period_centuries(&self) -> f64 {
        self.period
    }

    /// Orbital period as a [`Duration`].
    pub fn orbital_period(&self) -> Duration {
        Duration::seconds_f64(self.period * units::DAYS_PER_CENTURY * 86_400.0)
    }

    /// Mean orbit radius (`AU`).
    pub fn mean_orbit_radius(&self) -> f64 {
        self.mean_orbit
    }

    /// Periapsis distance (`AU`).
    pub fn periapsis_distance(&self) -> f64 {
        self.periapsis
    }

    /// Apoapsis distance (`AU`).
    pub fn apoapsis_distance(&self) -> f64 {
        self.apoapsis
    }

    /// Radius exaggerated for display (scene units).
    pub fn exag_radius(&self) -> f64 {
        self.exag_radius
    }

    /// Unit direction of the rotation pole in equatorial coordinates.
    pub fn spin_axis(&self) -> Vector3<f64> {
        Vector3::new(
            libm::cos(self.axis_dec) * libm::cos(self.axis_ra),
            libm::cos(self.axis_dec) * libm::sin(self.axis_ra),
            libm::sin(self.axis_dec),
        )
    }
}

/// Every body in a loaded catalog, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    pub bodies: HashMap<Arc<str>, Arc<OrbitalBody>>,
}

impl SolarSystem {
    /// Construct every record in order. A later record with the same
    /// name replaces the earlier one.
    pub fn from_records(records: &[BodyRecord]) -> Result<Self, ParameterFormatError> {
        let mut bodies = HashMap::with_capacity(records.len());
        for rec in records {
            let body = Arc::new(OrbitalBody::from_record(rec)?);
            if let Some(prev) = bodies.insert(body.name.clone(), body) {
                warn!("duplicate catalog entry for {}", prev.name);
            }
        }
        Ok(Self { bodies })
    }

    /// Load a RON catalog file.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let records = catalog::read_records(path)?;
        Ok(Self::from_records(&records)?)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<OrbitalBody>> {
        self.bodies.get(name)
    }

    /// All bodies, innermost orbit first.
    pub fn bodies_by_orbit(&self) -> Vec<Arc<OrbitalBody>> {
        self.bodies
            .values()
            .cloned()
            .sorted_by_key(|body| OrderedFloat(body.a))
            .collect()
    }
}
