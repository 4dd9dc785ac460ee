use crate::designator::InternationalDesignator;
use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;

/// Satellite catalog number
pub type NoradId = u32;

/// Security classification letter from line 1
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum Classification {
    #[display(fmt = "U")]
    Unclassified,
    #[display(fmt = "C")]
    Classified,
    #[display(fmt = "S")]
    Secret,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("Unknown classification '{0}'")]
pub struct UnknownClassification(pub char);

impl TryFrom<char> for Classification {
    type Error = UnknownClassification;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Classification::Unclassified),
            'C' => Ok(Classification::Classified),
            'S' => Ok(Classification::Secret),
            _ => Err(UnknownClassification(c)),
        }
    }
}

/// A validated two-line element set
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Clone, PartialEq, Debug, Display, Serialize)]
#[display(
    fmt = "{{norad_id: {}, designator: {}, epoch: {}, inc: {}, raan: {}, ecc: {}, argp: {}, ma: {}, mm: {}}}",
    "norad_id",
    "designator",
    "epoch_date",
    "inclination_deg",
    "raan_deg",
    "eccentricity",
    "arg_perigee_deg",
    "mean_anomaly_deg",
    "mean_motion_rev_per_day"
)]
pub struct SatelliteRecord {
    /// Title line, only present for three-line input
    pub name: Option<String>,

    pub norad_id: NoradId,
    pub classification: Classification,
    pub designator: InternationalDesignator,

    /// Calendar date of the epoch, fractional day dropped
    pub epoch_date: NaiveDate,
    pub element_set_number: u32,

    /// Inclination [deg]
    pub inclination_deg: f64,
    /// Right ascension of the ascending node [deg]
    pub raan_deg: f64,
    /// Eccentricity, in [0, 1)
    pub eccentricity: f64,
    /// Argument of perigee [deg]
    pub arg_perigee_deg: f64,
    /// Mean anomaly [deg]
    pub mean_anomaly_deg: f64,
    /// Mean motion [rev/day]
    pub mean_motion_rev_per_day: f64,

    /// Revolution number at epoch
    pub revolution_number: u32,
}

impl SatelliteRecord {
    /// Name if present, otherwise the catalog number
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.norad_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iss() -> SatelliteRecord {
        SatelliteRecord {
            name: Some("ISS (ZARYA)".to_string()),
            norad_id: 25544,
            classification: Classification::Unclassified,
            designator: InternationalDesignator::new("98", "067", "A"),
            epoch_date: NaiveDate::from_ymd_opt(2020, 1, 29).unwrap(),
            element_set_number: 999,
            inclination_deg: 51.6442,
            raan_deg: 247.4627,
            eccentricity: 0.0006703,
            arg_perigee_deg: 130.536,
            mean_anomaly_deg: 325.0288,
            mean_motion_rev_per_day: 15.4918,
            revolution_number: 12345,
        }
    }

    #[test]
    fn classification_letters() {
        assert_eq!(Classification::try_from('U'), Ok(Classification::Unclassified));
        assert_eq!(Classification::try_from('C'), Ok(Classification::Classified));
        assert_eq!(Classification::try_from('S'), Ok(Classification::Secret));
        assert_eq!(Classification::try_from('X'), Err(UnknownClassification('X')));
        assert_eq!(Classification::Secret.to_string(), "S");
    }

    #[test]
    fn label_prefers_name() {
        let mut sat = iss();
        assert_eq!(sat.label(), "ISS (ZARYA)");
        sat.name = None;
        assert_eq!(sat.label(), "25544");
    }

    #[test]
    fn display() {
        let s = iss().to_string();
        assert!(s.starts_with("{norad_id: 25544, designator: 98067A, epoch: 2020-01-29"));
    }
}
