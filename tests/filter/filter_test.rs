use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use equiptrack::filter::{
    AndFilter, DateRangeFilter, DateRangePreset, ExactMatchFilter, FilterCriteria, RecordFilter,
    Sentinels, apply_filters, filter_records,
};
use equiptrack::models::Column;
use equiptrack::{RawValue, RecordSet};

use crate::utils::{records, reference_now};

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

fn fleet() -> RecordSet {
    let row = |id: &str, site: &str, kind: &str, start: Option<NaiveDateTime>| {
        vec![
            ("Machine_ID", RawValue::text(id)),
            ("Site", RawValue::text(site)),
            ("Machine_Type", RawValue::text(kind)),
            (
                "Start_Date",
                start.map_or(RawValue::Missing, RawValue::Timestamp),
            ),
        ]
    };
    records(vec![
        row("EX-1", "North", "Excavator", Some(date(2024, 6, 1))),
        row("EX-2", "South", "Excavator", Some(date(2024, 1, 3))),
        row("CR-1", "North", "Crane", Some(date(2023, 7, 9))),
        row("CR-2", "South", "Crane", None),
    ])
}

fn ids(set: &RecordSet) -> Vec<&str> {
    set.iter().map(|r| r.machine_id.as_str()).collect()
}

#[test]
fn test_sentinels_return_input_unchanged() {
    let set = fleet();
    let criteria = FilterCriteria::new()
        .with_site("All Sites")
        .with_machine_type("All Equipment");

    let result = filter_records(&set, &criteria);
    assert_eq!(result.records(), set.records());
}

#[test]
fn test_and_composition() {
    let set = fleet();
    let criteria = FilterCriteria::new()
        .with_site("South")
        .with_machine_type("Excavator");
    assert_eq!(ids(&filter_records(&set, &criteria)), vec!["EX-2"]);

    let by_site = filter_records(&set, &FilterCriteria::new().with_site("North"));
    assert_eq!(ids(&by_site), vec!["EX-1", "CR-1"]);
}

#[test]
fn test_unknown_value_yields_empty_set() {
    let set = fleet();
    let result = filter_records(&set, &FilterCriteria::new().with_site("Nowhere"));
    assert!(result.is_empty());
    assert!(result.had_column(Column::Site));
}

#[test]
fn test_date_window_keeps_undated_records() {
    let set = fleet();
    let now = reference_now();

    let recent = FilterCriteria::new()
        .with_date_window(DateRangePreset::LastThirtyDays.window_at(now));
    assert_eq!(ids(&filter_records(&set, &recent)), vec!["EX-1", "CR-2"]);

    let this_year = FilterCriteria::new().with_date_window(DateRangePreset::ThisYear.window_at(now));
    assert_eq!(ids(&filter_records(&set, &this_year)), vec!["EX-1", "EX-2", "CR-2"]);

    let all_time = FilterCriteria::new().with_date_window(DateRangePreset::AllTime.window_at(now));
    assert_eq!(filter_records(&set, &all_time).len(), 4);
}

#[test]
fn test_custom_sentinels() {
    let set = fleet();
    let criteria = FilterCriteria::new()
        .with_sentinels(Sentinels {
            all_sites: "Everywhere".to_string(),
            all_equipment: "Anything".to_string(),
        })
        .with_site("Everywhere")
        .with_machine_type("Crane");
    assert_eq!(ids(&filter_records(&set, &criteria)), vec!["CR-1", "CR-2"]);
}

#[test]
fn test_filter_combinators() {
    let set = fleet();
    let filters: Vec<Arc<dyn RecordFilter + Send + Sync>> = vec![
        Arc::new(ExactMatchFilter::machine_type("Crane")),
        Arc::new(DateRangeFilter::new(
            DateRangePreset::AllTime.window_at(reference_now()),
        )),
    ];

    let combined = AndFilter::new(filters.clone());
    assert_eq!(combined.len(), 2);
    assert_eq!(
        combined.required_columns().into_iter().collect::<Vec<_>>(),
        vec![Column::MachineType, Column::StartDate]
    );
    assert_eq!(ids(&apply_filters(&set, &filters)), vec!["CR-1", "CR-2"]);

    // An empty conjunction keeps everything
    assert_eq!(AndFilter::default().filter(&set).len(), set.len());
}
