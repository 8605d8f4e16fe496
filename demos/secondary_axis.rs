//! Build a column chart with a secondary value axis and write its parts.
//!
//! The chart plots department head counts on the primary axis and budgets
//! on a secondary axis drawn on the right-hand side.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example secondary_axis -- -o out/
//! ```
//!
//! Draw the whole chart, both axis groups, as a line chart:
//! ```sh
//! cargo run --example secondary_axis -- -o out/ --chart-type line
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use xlsxchart::ooxml::xlsx::reference::parse_cell_reference;
use xlsxchart::{AxisGroup, ChartOptions, ChartType, Workbook};

/// Write chart parts for a workbook with a secondary-axis chart
#[derive(Parser, Debug)]
#[command(name = "secondary_axis", version)]
struct Args {
    /// Output directory for the generated parts
    #[arg(short, long, value_name = "OUTPUT")]
    output: PathBuf,

    /// Chart type of the whole chart
    #[arg(long, value_enum, default_value = "column")]
    chart_type: ChartTypeArg,

    /// YAML file with placement options
    #[arg(long, value_name = "YAML")]
    options: Option<PathBuf>,

    /// Top-left cell of the chart
    #[arg(long, default_value = "E9")]
    cell: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartTypeArg {
    Area,
    Bar,
    Column,
    Line,
    Scatter,
    Radar,
}

impl From<ChartTypeArg> for ChartType {
    fn from(arg: ChartTypeArg) -> Self {
        match arg {
            ChartTypeArg::Area => ChartType::Area,
            ChartTypeArg::Bar => ChartType::Bar,
            ChartTypeArg::Column => ChartType::Column,
            ChartTypeArg::Line => ChartType::Line,
            ChartTypeArg::Scatter => ChartType::ScatterStraightWithMarkers,
            ChartTypeArg::Radar => ChartType::Radar,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let options = match &args.options {
        Some(path) => ChartOptions::from_yaml(&std::fs::read_to_string(path)?)?,
        None => ChartOptions::default(),
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet(Some("Departments"))?;
    let chart_id = workbook.add_chart(args.chart_type.into());

    {
        let chart = workbook.chart_mut(chart_id)?;
        chart.title_set_name("Department Employees and Budget");

        let employees = chart.add_series(
            Some("=Departments!$A$2:$A$7"),
            Some("=Departments!$B$2:$B$7"),
        )?;
        chart.series_mut(employees)?.set_name_range("Departments", 0, 1);

        let budget = chart.add_series_on_axis(
            Some("=Departments!$A$2:$A$7"),
            Some("=Departments!$C$2:$C$7"),
            AxisGroup::Secondary,
        )?;
        chart.series_mut(budget)?.set_name_range("Departments", 0, 2);

        chart.x_axis_mut().set_name("Department");
        chart.y_axis_mut().set_name("Employees");
        chart
            .y2_axis_mut()
            .set_name("Budget ($M)")
            .set_num_format("#,##0.0");
    }

    let (row, col) = parse_cell_reference(&args.cell)?;
    workbook.insert_chart_opt(sheet, row, col, chart_id, &options)?;

    let package = workbook.close()?;
    package.write_to_dir(&args.output)?;
    for part in package.parts() {
        println!("{}", part.name);
    }
    Ok(())
}
