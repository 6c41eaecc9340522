//! Raw catalog records and their parsing rules.
//!
//! Catalog sources supply heterogeneous, optionally-missing textual
//! fields. A field counts as present only when it is supplied and
//! non-empty; absent fields fall back to the body model's documented
//! defaults.

use std::{fs, path::Path};

use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::units;

/// One body's raw catalog entry. Field names follow the catalog keys;
/// every field is optional and textual.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: Option<String>,
    /// Body class code, `0` through `4`.
    #[serde(rename = "type")]
    pub class: Option<String>,
    /// Element epoch (`MJD`).
    pub epoch: Option<String>,
    /// Semi-major axis (`AU`).
    pub a: Option<String>,
    /// Eccentricity (dimensionless).
    pub e: Option<String>,
    /// Inclination (`deg`).
    pub inc: Option<String>,
    /// Argument of periapsis (`deg`).
    pub w: Option<String>,
    /// Longitude of ascending node (`deg`).
    pub omega: Option<String>,
    /// Rotation rate (`deg/century`).
    #[serde(rename = "thetaDot")]
    pub theta_dot: Option<String>,
    /// Ring outer edge, as a multiple of the body radius.
    #[serde(rename = "ringRadius")]
    pub ring_radius: Option<String>,
    /// Absolute magnitude.
    #[serde(rename = "H")]
    pub absolute_mag: Option<String>,
    /// Right ascension of the spin axis (`deg`).
    #[serde(rename = "axisRA")]
    pub axis_ra: Option<String>,
    /// Declination of the spin axis (`deg`).
    #[serde(rename = "axisDec")]
    pub axis_dec: Option<String>,
    /// Mean radius (`km`).
    pub radius: Option<String>,
    /// Mass, in units of `1e18 kg`.
    pub mass: Option<String>,
    /// Camera zoom hint for close-up views.
    #[serde(rename = "zoomRatio")]
    pub zoom_ratio: Option<String>,
}

/// A present catalog field failed to parse as a number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("field `{field}` is not numeric: {value:?}")]
pub struct ParameterFormatError {
    /// Catalog key of the offending field.
    pub field: &'static str,
    /// The text that failed to parse.
    pub value: String,
}

/// Parse a numeric field, `Ok(None)` when absent. A present field that
/// does not parse is a [`ParameterFormatError`].
pub(crate) fn num_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<f64>, ParameterFormatError> {
    match value {
        Some(s) if !s.is_empty() => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(ParameterFormatError {
                field,
                value: s.to_owned(),
            }),
        },
        _ => Ok(None),
    }
}

/// [`num_field`] for angles supplied in degrees. Converts to radians
/// only when the field is present.
pub(crate) fn angle_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<f64>, ParameterFormatError> {
    Ok(num_field(field, value)?.map(|deg| deg * units::TO_RAD))
}

/// Parse a RON document containing a list of [`BodyRecord`]s.
pub fn parse_records(source: &str) -> eyre::Result<Vec<BodyRecord>> {
    let records: Vec<BodyRecord> = ron::from_str(source)?;
    debug!("parsed {} catalog records", records.len());
    Ok(records)
}

/// Read and parse a RON catalog file.
pub fn read_records(path: impl AsRef<Path>) -> eyre::Result<Vec<BodyRecord>> {
    parse_records(&fs::read_to_string(path)?)
}
