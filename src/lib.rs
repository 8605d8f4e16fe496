//! xlsxchart - Office Open XML chart writer for XLSX packages
//!
//! This library builds DrawingML chart parts for Excel workbooks, with full
//! support for plotting series against a secondary value axis.
//!
//! # Features
//!
//! - **Chart types**: area, bar, column, line, pie, doughnut, scatter and radar
//!   families, including stacked and percent-stacked variants
//! - **Secondary axes**: series can be assigned to a second X/Y axis pair;
//!   the secondary Y-axis is placed on the right-hand side
//! - **Formatting**: titles, legends, gridlines, number formats, markers,
//!   data labels, trendlines and error bars
//! - **Placement**: charts are anchored in worksheets or fill a chartsheet
//!
//! # Example - Column chart with a secondary axis
//!
//! ```no_run
//! use xlsxchart::{AxisGroup, ChartType, Workbook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workbook = Workbook::new();
//! let sheet = workbook.add_worksheet(Some("Data"))?;
//!
//! let chart = workbook.add_chart(ChartType::Column);
//! {
//!     let chart = workbook.chart_mut(chart)?;
//!     chart.add_series(Some("=Data!$A$2:$A$7"), Some("=Data!$B$2:$B$7"))?;
//!     chart.add_series_on_axis(
//!         Some("=Data!$A$2:$A$7"),
//!         Some("=Data!$C$2:$C$7"),
//!         AxisGroup::Secondary,
//!     )?;
//!     chart.y_axis_mut().set_name("Employees");
//!     chart.y2_axis_mut().set_name("Budget ($M)");
//! }
//! workbook.insert_chart_at(sheet, "E9", chart)?;
//!
//! let package = workbook.close()?;
//! package.write_to_dir(std::path::Path::new("out"))?;
//! # Ok(())
//! # }
//! ```

/// Shared error types, identifier allocation and XML helpers
pub mod common;

/// OOXML chart model, chart part writer and workbook placement
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use ooxml::charts::{Axis, AxisGroup, AxisSlot, Chart, ChartType, Series};
pub use ooxml::xlsx::{ChartId, ChartOptions, Package, SheetId, Workbook};
