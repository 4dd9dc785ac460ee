use crate::{
    DATE_FORMAT, INCLINATION_HEADING, LAUNCHES_BY_YEAR_HEADING, OLDEST_EPOCH_HEADING,
    TOTAL_HEADING,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tletypes::prelude::SatelliteRecord;

/// Summary of a record collection.
///
/// The `Display` impl renders the text report: total, oldest epoch, launches
/// per year and satellites per whole degree of inclination, both histograms
/// in ascending key order.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    /// `None` only for an empty collection
    pub oldest_epoch: Option<NaiveDate>,
    /// Keyed by four-digit launch year. Records with a non-numeric
    /// designator year are left out.
    pub launches_by_year: BTreeMap<i32, usize>,
    /// Keyed by inclination rounded to the nearest degree, halves away from zero
    pub inclination_histogram: BTreeMap<i64, usize>,
}

impl Statistics {
    pub fn from_records(records: &[SatelliteRecord]) -> Self {
        let mut stats = Statistics {
            total: records.len(),
            oldest_epoch: records.iter().map(|sat| sat.epoch_date).min(),
            ..Default::default()
        };

        for sat in records {
            // Designator year, not the epoch year
            if let Some(year) = sat.designator.launch_year_full() {
                *stats.launches_by_year.entry(year).or_default() += 1;
            }

            let degree = sat.inclination_deg.round() as i64;
            *stats.inclination_histogram.entry(degree).or_default() += 1;
        }

        stats
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TOTAL_HEADING}: {}", self.total)?;

        let Some(oldest) = self.oldest_epoch else {
            return Ok(());
        };
        write!(f, "\n{OLDEST_EPOCH_HEADING}: {}", oldest.format(DATE_FORMAT))?;

        write!(f, "\n{LAUNCHES_BY_YEAR_HEADING}")?;
        for (year, count) in self.launches_by_year.iter() {
            write!(f, "\n{year}: {count}")?;
        }

        write!(f, "\n{INCLINATION_HEADING}")?;
        for (degree, count) in self.inclination_histogram.iter() {
            write!(f, "\n{degree}°: {count}")?;
        }

        Ok(())
    }
}

/// Render the statistics report for `records`
pub fn summarize(records: &[SatelliteRecord]) -> String {
    Statistics::from_records(records).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tletypes::prelude::*;

    fn sat(launch_year: &str, epoch: (i32, u32, u32), inclination_deg: f64) -> SatelliteRecord {
        SatelliteRecord {
            name: None,
            norad_id: 25544,
            classification: Classification::Unclassified,
            designator: InternationalDesignator::new(launch_year, "067", "A"),
            epoch_date: NaiveDate::from_ymd_opt(epoch.0, epoch.1, epoch.2).unwrap(),
            element_set_number: 999,
            inclination_deg,
            raan_deg: 247.4627,
            eccentricity: 0.0006703,
            arg_perigee_deg: 130.536,
            mean_anomaly_deg: 325.0288,
            mean_motion_rev_per_day: 15.4918,
            revolution_number: 12345,
        }
    }

    #[test]
    fn empty() {
        assert_eq!(summarize(&[]), "Total satellites: 0");
        assert_eq!(Statistics::from_records(&[]), Statistics::default());
    }

    #[test]
    fn report() {
        let records = vec![
            sat("98", (2020, 1, 29), 98.4),
            sat("57", (2019, 3, 2), 51.6),
            sat("98", (2021, 6, 1), 98.2),
        ];
        assert_eq!(
            summarize(&records),
            indoc! {"
                Total satellites: 3
                Oldest epoch date: 02.03.2019
                Launches by year:
                1957: 1
                1998: 2
                Satellites by inclination:
                52°: 1
                98°: 2"}
        );
    }

    #[test]
    fn histograms_are_key_ordered() {
        let mut records = vec![
            sat("20", (2020, 1, 1), 98.4),
            sat("99", (2020, 1, 1), 51.6),
            sat("00", (2020, 1, 1), 98.2),
        ];
        let stats = Statistics::from_records(&records);
        assert_eq!(
            stats.inclination_histogram.into_iter().collect::<Vec<_>>(),
            vec![(52, 1), (98, 2)]
        );
        assert_eq!(
            stats.launches_by_year.into_iter().collect::<Vec<_>>(),
            vec![(1999, 1), (2000, 1), (2020, 1)]
        );

        let forward = summarize(&records);
        records.reverse();
        assert_eq!(summarize(&records), forward);
    }

    #[test]
    fn idempotent() {
        let records = vec![sat("98", (2020, 1, 29), 51.6442), sat("11", (2023, 7, 9), 2.3847)];
        assert_eq!(summarize(&records), summarize(&records));
    }

    #[test]
    fn unparsable_launch_year_is_skipped() {
        let records = vec![sat("98", (2020, 1, 29), 51.6442), sat("X9", (2020, 1, 29), 51.6442)];
        let stats = Statistics::from_records(&records);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.launches_by_year.get(&1998), Some(&1));
        assert_eq!(stats.launches_by_year.len(), 1);
        assert_eq!(stats.inclination_histogram.get(&52), Some(&2));
    }

    #[test]
    fn launch_year_and_epoch_are_independent() {
        let stats = Statistics::from_records(&[sat("98", (2020, 1, 29), 51.6442)]);
        assert_eq!(stats.oldest_epoch, NaiveDate::from_ymd_opt(2020, 1, 29));
        assert_eq!(stats.launches_by_year.keys().copied().collect::<Vec<_>>(), vec![1998]);
    }

    #[test]
    fn nearest_degree_buckets() {
        let records = vec![
            sat("98", (2020, 1, 1), 98.7),
            sat("98", (2020, 1, 1), 51.6),
            sat("98", (2020, 1, 1), 98.2),
        ];
        let stats = Statistics::from_records(&records);
        assert_eq!(
            stats.inclination_histogram.into_iter().collect::<Vec<_>>(),
            vec![(52, 1), (98, 1), (99, 1)]
        );
    }

    #[test]
    fn half_degree_rounds_away_from_zero() {
        let stats = Statistics::from_records(&[sat("98", (2020, 1, 1), 97.5)]);
        assert_eq!(stats.inclination_histogram.get(&98), Some(&1));
    }
}
