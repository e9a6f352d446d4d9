use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use equiptrack::dashboard::{DashboardOutcome, DashboardView, SelectorOptions};
use equiptrack::{
    Dashboard, DashboardConfig, DashboardRequest, DateRangePreset, NumberFormat, format_number,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Equipment usage dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Equipment spreadsheet (xlsx, xls, ods, csv or parquet) [default: data/machine_data.xlsx]
    #[arg(long, env = "EQUIPTRACK_DATA")]
    data: Option<PathBuf>,
    /// Date range preset, e.g. "Last 30 Days" or "All Time"
    #[arg(long, default_value = "Last 30 Days")]
    range: String,
    /// Only machines at this site
    #[arg(long)]
    site: Option<String>,
    /// Only machines of this type
    #[arg(long)]
    machine_type: Option<String>,
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Print the selector options and exit
    #[arg(long)]
    options: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = cli.data {
        config = config.with_data_path(data);
    }
    let data_path = config.data_path.clone();

    let preset: DateRangePreset = cli.range.parse()?;

    let dashboard = Dashboard::load(config)
        .with_context(|| format!("Failed to load equipment data from {}", data_path.display()))?;

    if cli.options {
        let options = dashboard.options();
        return match cli.format {
            OutputFormat::Json => print_json(&options),
            OutputFormat::Text => {
                print_options(&options);
                Ok(())
            }
        };
    }

    let request = DashboardRequest {
        preset,
        site: cli.site,
        machine_type: cli.machine_type,
    };
    info!("Building dashboard for {preset}");
    let outcome = dashboard.build(&request)?;

    match cli.format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Text => match &outcome {
            DashboardOutcome::Ready(view) => print_view(view),
            DashboardOutcome::NoData { request_summary } => {
                println!("No data available for the selected filters ({request_summary})");
            }
        },
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn print_options(options: &SelectorOptions) {
    println!("Date ranges:   {}", options.date_ranges.join(", "));
    println!("Sites:         {}", options.sites.join(", "));
    println!("Machine types: {}", options.machine_types.join(", "));
}

fn print_view(view: &DashboardView) {
    let kpis = &view.kpis;
    println!("Total machines:  {}", kpis.total);
    println!("Available:       {}", kpis.available_count);
    println!("In maintenance:  {}", kpis.maintenance_count);
    println!(
        "Avg utilization: {}",
        format_number(kpis.avg_utilization, NumberFormat::Percentage)
    );
    println!(
        "Target:          {} ({})",
        format_number(view.utilization.target, NumberFormat::Percentage),
        view.utilization.status.label()
    );

    println!("\nStatus distribution");
    for count in &view.charts.status_histogram {
        println!("  {:<12} {}", count.status.to_string(), count.count);
    }

    println!("\nMonthly operating hours");
    for bucket in &view.charts.monthly_hours {
        println!(
            "  {:<4} {:>12}",
            bucket.month,
            format_number(bucket.hours, NumberFormat::Default)
        );
    }

    println!("\nUtilization trend");
    for week in &view.charts.weekly_trend {
        println!(
            "  {:<7} current {:>7}  baseline {:>7}",
            week.week,
            format_number(week.current, NumberFormat::Percentage),
            format_number(week.baseline, NumberFormat::Percentage)
        );
    }

    println!("\nEquipment");
    println!(
        "  {:<14} {:<16} {:<12} {:<16} {:>8}  {:<16} {:>7}",
        "Machine_ID", "Machine_Type", "Status", "Site", "Hours", "Project", "Target"
    );
    for row in &view.table {
        println!(
            "  {:<14} {:<16} {:<12} {:<16} {:>8.2}  {:<16} {:>7.2}",
            row.machine_id,
            row.machine_type,
            row.status.to_string(),
            row.site,
            row.hours_daily,
            row.current_project,
            row.target_utilization
        );
    }

    let totals = &view.totals;
    println!(
        "\n{} machines, {} daily cost, {:.1} daily hours",
        totals.records,
        format_number(totals.total_daily_cost, NumberFormat::Currency),
        totals.total_daily_hours
    );
}
