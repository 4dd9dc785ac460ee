//! Report for the parser's catalog fixture

use indoc::indoc;
use tleparse::{non_blank_lines, parse};
use tlestats::{summarize, Statistics};

const CATALOG: &str = include_str!("../test_fixtures/catalog.txt");

#[test]
fn catalog_report() {
    let records = parse(&non_blank_lines(CATALOG)).unwrap();
    assert_eq!(
        summarize(&records),
        indoc! {"
            Total satellites: 4
            Oldest epoch date: 20.09.2008
            Launches by year:
            1958: 1
            1990: 1
            1998: 1
            2009: 1
            Satellites by inclination:
            28°: 1
            34°: 1
            52°: 1
            99°: 1"}
    );
}

#[test]
fn report_matches_statistics() {
    let records = parse(&non_blank_lines(CATALOG)).unwrap();
    let stats = Statistics::from_records(&records);
    assert_eq!(stats.total, records.len());
    assert_eq!(stats.to_string(), summarize(&records));
}
