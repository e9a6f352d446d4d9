use approx::assert_relative_eq;
use equiptrack::models::Column;
use equiptrack::{MachineStatus, RawTable, RawValue, normalize_with_report};

use crate::utils::{records, with_statuses};

/// Every field is populated even when the source has no recognized column
#[test]
fn test_normalization_completeness() {
    let set = records(vec![
        vec![("Notes", RawValue::text("first"))],
        vec![("Notes", RawValue::text("second"))],
    ]);

    assert_eq!(set.len(), 2);
    let record = &set.records()[1];
    assert_eq!(record.machine_id, "Machine_2");
    assert_eq!(record.machine_type, "Unknown");
    assert_eq!(record.status, MachineStatus::Working);
    assert_eq!(record.site, "Default Site");
    assert_eq!(record.current_project, "Project A");
    assert_relative_eq!(record.hours_daily, 8.0);
    assert_relative_eq!(record.cost_daily, 1000.0);
    assert_relative_eq!(record.target_utilization, 75.0);
    assert_relative_eq!(record.hours_monthly, 240.0);
    assert_relative_eq!(record.hours_yearly, 2920.0);
    assert_relative_eq!(record.cost_monthly, 30000.0);
    assert_relative_eq!(record.utilization_percent, 100.0 / 3.0, epsilon = 1e-9);
    assert_eq!(record.start_date, None);
    assert_eq!(record.end_date, None);
}

#[test]
fn test_status_repair() {
    let set = with_statuses(&["Working", "Broken", "", "Idle", "maintenance"]);
    let statuses: Vec<_> = set.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            MachineStatus::Working,
            MachineStatus::Working,
            MachineStatus::Working,
            MachineStatus::Idle,
            MachineStatus::Working,
        ]
    );
}

#[test]
fn test_default_injection() {
    let set = records(vec![
        vec![
            ("Machine_ID", RawValue::text("A")),
            ("Cost_Daily", RawValue::Number(200.0)),
        ],
        vec![
            ("Machine_ID", RawValue::text("B")),
            ("Cost_Daily", RawValue::Number(300.0)),
        ],
    ]);

    assert!(!set.had_column(Column::HoursDaily));
    for record in &set {
        assert_relative_eq!(record.hours_daily, 8.0);
    }
    assert_relative_eq!(set.records()[0].cost_monthly, 6000.0);
    assert_relative_eq!(set.records()[1].cost_monthly, 9000.0);
}

#[test]
fn test_supplied_projections_are_kept() {
    let set = records(vec![vec![
        ("Hours_Daily", RawValue::Number(10.0)),
        ("Hours_Monthly", RawValue::Number(123.0)),
    ]]);
    let record = &set.records()[0];
    assert_relative_eq!(record.hours_monthly, 123.0);
    assert_relative_eq!(record.hours_yearly, 3650.0);
}

#[test]
fn test_report_counts_repairs() {
    let table = RawTable::from_rows(vec![
        vec![
            ("Status", RawValue::text("Broken")),
            ("Hours_Daily", RawValue::text("n/a")),
            ("Start_Date", RawValue::text("someday")),
            ("Extra", RawValue::text("x")),
        ],
        vec![
            ("Status", RawValue::text("Offline")),
            ("Hours_Daily", RawValue::text(" 7.5 ")),
            ("Start_Date", RawValue::text("2024-02-29")),
            ("Extra", RawValue::text("y")),
        ],
    ]);

    let (set, report) = normalize_with_report(&table);
    assert_eq!(report.rows, 2);
    assert_eq!(report.status_repairs, 2);
    assert!(report.invalid_statuses.contains("Broken"));
    assert!(report.invalid_statuses.contains("Offline"));
    assert_eq!(report.numeric_fills, 1);
    assert_eq!(report.unparsed_dates, 1);
    assert_eq!(report.unrecognized_columns, vec!["Extra".to_string()]);
    assert!(report.synthesized_columns.contains(&Column::Site));
    assert!(!report.synthesized_columns.contains(&Column::StartDate));
    assert!(report.has_repairs());

    assert_relative_eq!(set.records()[0].hours_daily, 0.0);
    assert_relative_eq!(set.records()[1].hours_daily, 7.5);
    assert!(set.records()[0].start_date.is_none());
    assert!(set.records()[1].start_date.is_some());
}
