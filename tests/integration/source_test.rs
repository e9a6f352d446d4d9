use std::io::Write;
use std::path::Path;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use equiptrack::models::Column;
use equiptrack::{
    DashboardError, MachineStatus, compute_kpis, load_data, load_data_with_report, read_table,
};

use crate::utils::{Cell, FLEET_HEADER, fleet_csv, fleet_parquet, write_csv, write_xlsx};

#[test]
fn test_csv_end_to_end() {
    let file = fleet_csv();
    let (set, report) = load_data_with_report(file.path()).unwrap();

    assert_eq!(set.len(), 6);
    assert_eq!(report.status_repairs, 1);
    assert!(report.invalid_statuses.contains("Broken"));

    let loader = &set.records()[4];
    assert_eq!(loader.machine_id, "LD-001");
    assert_eq!(loader.status, MachineStatus::Working);
    assert!(loader.start_date.is_none());
    assert_eq!(loader.current_project, "Project A");

    let kpis = compute_kpis(&set).unwrap();
    assert_eq!(kpis.total, 6);
    assert_eq!(kpis.maintenance_count, 2);
    assert_eq!(kpis.available_count, 4);
}

#[test]
fn test_parquet_end_to_end() {
    let file = fleet_parquet();
    let set = load_data(file.path()).unwrap();

    assert_eq!(set.len(), 3);
    assert!(!set.had_column(Column::HoursDaily));
    assert!(set.had_column(Column::UtilizationPercent));
    assert!(set.has_date_information());

    let statuses: Vec<_> = set.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            MachineStatus::Working,
            MachineStatus::Working,
            MachineStatus::Idle
        ]
    );
    for record in &set {
        assert_relative_eq!(record.hours_daily, 8.0);
    }

    let kpis = compute_kpis(&set).unwrap();
    assert_relative_eq!(kpis.avg_utilization, 60.0, epsilon = 1e-9);
}

#[test]
fn test_workbook_end_to_end() {
    let file = write_xlsx(
        &["Machine_ID", "Status", "Hours_Daily", "Start_Date"],
        &[
            vec![
                Cell::Text("EX-1"),
                Cell::Text("Idle"),
                Cell::Number(12.0),
                Cell::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            ],
            vec![],
            vec![Cell::Text("EX-2"), Cell::Text("Broken")],
            vec![
                Cell::Text("EX-3"),
                Cell::Text("Maintenance"),
                Cell::Blank,
                Cell::Text("2024-05-20"),
            ],
        ],
    );
    let (set, report) = load_data_with_report(file.path()).unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(report.status_repairs, 1);

    let first = &set.records()[0];
    assert_eq!(first.machine_id, "EX-1");
    assert_eq!(first.status, MachineStatus::Idle);
    assert_relative_eq!(first.hours_daily, 12.0);
    assert_eq!(
        first.start_date.map(|ts| ts.date()),
        NaiveDate::from_ymd_opt(2024, 6, 1)
    );

    let second = &set.records()[1];
    assert_eq!(second.machine_id, "EX-2");
    assert_eq!(second.status, MachineStatus::Working);
    assert_relative_eq!(second.hours_daily, 0.0);
    assert!(second.start_date.is_none());

    let third = &set.records()[2];
    assert_eq!(third.status, MachineStatus::Maintenance);
    assert_eq!(
        third.start_date.map(|ts| ts.date()),
        NaiveDate::from_ymd_opt(2024, 5, 20)
    );
}

#[test]
fn test_csv_short_rows_get_fills() {
    let file = write_csv("Machine_ID,Site,Status", &["A,North,Working", "B,South"]);
    let set = load_data(file.path()).unwrap();

    assert_eq!(set.len(), 2);
    let short = &set.records()[1];
    assert_eq!(short.machine_id, "B");
    assert_eq!(short.site, "South");
    assert_eq!(short.status, MachineStatus::Working);
    assert_eq!(short.machine_type, "Unknown");
}

#[test]
fn test_csv_machine_ids_keep_leading_zeros() {
    let file = write_csv("Machine_ID,Site", &["007,North", "010,South"]);
    let set = load_data(file.path()).unwrap();

    let ids: Vec<_> = set.iter().map(|r| r.machine_id.as_str()).collect();
    assert_eq!(ids, vec!["007", "010"]);
}

#[test]
fn test_missing_source_is_not_found() {
    let err = load_data(Path::new("no/such/machine_data.xlsx")).unwrap_err();
    assert!(matches!(err, DashboardError::SourceNotFound { .. }));
    assert!(err.is_load_error());
}

#[test]
fn test_header_only_csv_is_malformed() {
    let file = write_csv(FLEET_HEADER, &[]);
    let err = read_table(file.path()).unwrap_err();
    assert!(matches!(err, DashboardError::SourceMalformed { .. }));
}

#[test]
fn test_unsupported_extension_is_malformed() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "Machine_ID").unwrap();
    let err = read_table(file.path()).unwrap_err();
    assert!(matches!(err, DashboardError::SourceMalformed { .. }));
}

#[test]
fn test_corrupt_workbook_is_malformed() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(b"this is not a zip archive").unwrap();
    file.flush().unwrap();
    let err = load_data(file.path()).unwrap_err();
    assert!(matches!(err, DashboardError::SourceMalformed { .. }));
}
