//! Chart support for SpreadsheetML.
//!
//! This module builds DrawingML chart parts. It includes:
//!
//! - Core chart types and enumerations
//! - Data models for series, axes, and legends
//! - The axis-pair resolver that lays out primary and secondary axis groups
//! - The chart part writer
//!
//! # Secondary axes
//!
//! Every chart owns four axes: the primary X/Y pair and a secondary X/Y
//! pair. Series added with [`AxisGroup::Secondary`] are plotted against the
//! secondary Y-axis on the right-hand side. The secondary pair is written only
//! when at least one series uses it; its X-axis is present but hidden.
//!
//! # Example
//!
//! ```rust
//! use xlsxchart::ooxml::charts::{AxisGroup, Chart, ChartType};
//!
//! let mut chart = Chart::new(ChartType::Column);
//! chart.add_series(Some("=Data!$A$2:$A$7"), Some("=Data!$B$2:$B$7"))?;
//! chart.add_series_on_axis(
//!     Some("=Data!$A$2:$A$7"),
//!     Some("=Data!$C$2:$C$7"),
//!     AxisGroup::Secondary,
//! )?;
//! chart.y2_axis_mut().set_name("Budget ($M)");
//!
//! let xml = chart.assemble_xml()?;
//! assert!(xml.contains(r#"<c:axPos val="r"/>"#));
//! # Ok::<(), xlsxchart::Error>(())
//! ```

pub mod axis;
pub mod chart;
pub mod legend;
pub mod models;
pub mod plot_area;
pub mod series;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

pub use axis::{Axis, AxisCrossing, AxisGroup, AxisKind, AxisSlot, ResolvedAxis};
pub use chart::{Assembly, Chart, TypeGroupPlan};
pub use legend::Legend;
pub use models::{ChartFill, ChartLine, DataSourceRef, Layout, NumberFormat, Title, TitleText};
pub use plot_area::TypeGroupSpec;
pub use series::{
    DataLabels, ErrorBarDirection, ErrorBarValue, ErrorBars, Series, SeriesId, Trendline,
    TrendlineType,
};
pub use types::ChartType;
