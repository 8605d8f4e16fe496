//! Chart series models.
//!
//! A series is created by the owning chart and keeps the axis group it was
//! created with. Styling setters that the chart type cannot render are
//! ignored with a warning.

use tracing::warn;

use crate::ooxml::charts::axis::AxisGroup;
use crate::ooxml::charts::models::{
    ChartFill, ChartLine, DataSourceRef, NumberFormat, ShapeProperties, TitleText,
};
use crate::ooxml::charts::types::{ChartType, DataLabelPosition, MarkerStyle};
use crate::ooxml::xlsx::reference::{cell_formula, range_formula};

/// Handle to a series within its chart, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub(crate) usize);

impl SeriesId {
    /// Zero-based position in the chart's series list.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Series marker settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Marker {
    pub style: Option<MarkerStyle>,
    /// Size in points (2-72)
    pub size: Option<u8>,
    pub shape: ShapeProperties,
}

/// Data label settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataLabels {
    /// Position of data labels
    pub position: Option<DataLabelPosition>,
    /// Show legend key
    pub show_legend_key: bool,
    /// Show value
    pub show_value: bool,
    /// Show category name
    pub show_category_name: bool,
    /// Show series name
    pub show_series_name: bool,
    /// Show percentage (for pie charts)
    pub show_percent: bool,
    /// Show leader lines (for pie charts)
    pub show_leader_lines: bool,
    /// Separator between label components
    pub separator: Option<String>,
    pub num_format: Option<NumberFormat>,
}

impl DataLabels {
    /// Labels showing the point value.
    #[inline]
    pub fn values() -> Self {
        Self {
            show_value: true,
            ..Self::default()
        }
    }

    /// Set label position.
    #[inline]
    pub fn with_position(mut self, position: DataLabelPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// Trendline type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendlineType {
    /// Exponential
    Exponential,
    /// Linear
    Linear,
    /// Logarithmic
    Logarithmic,
    /// Moving average over the given period (2-255)
    MovingAverage(u8),
    /// Polynomial of the given order (2-6)
    Polynomial(u8),
    /// Power
    Power,
}

impl TrendlineType {
    /// Returns the XML value for this trendline type.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Exponential => "exp",
            Self::Linear => "linear",
            Self::Logarithmic => "log",
            Self::MovingAverage(_) => "movingAvg",
            Self::Polynomial(_) => "poly",
            Self::Power => "power",
        }
    }
}

/// Trendline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Trendline {
    pub trendline_type: TrendlineType,
    /// Legend name of the trendline
    pub name: Option<String>,
    /// Forward extrapolation
    pub forward: Option<f64>,
    /// Backward extrapolation
    pub backward: Option<f64>,
    /// Intercept value
    pub intercept: Option<f64>,
    /// Display equation on chart
    pub display_equation: bool,
    /// Display R-squared value on chart
    pub display_r_squared: bool,
    pub line: Option<ChartLine>,
}

impl Trendline {
    /// Create a trendline of the given type.
    #[inline]
    pub fn new(trendline_type: TrendlineType) -> Self {
        Self {
            trendline_type,
            name: None,
            forward: None,
            backward: None,
            intercept: None,
            display_equation: false,
            display_r_squared: false,
            line: None,
        }
    }
}

/// Error bar end points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorBarDirection {
    /// Both directions
    #[default]
    Both,
    /// Positive direction only
    Plus,
    /// Negative direction only
    Minus,
}

impl ErrorBarDirection {
    /// Returns the XML value for this direction.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Plus => "plus",
            Self::Minus => "minus",
        }
    }
}

/// How error bar lengths are computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorBarValue {
    /// Fixed value
    Fixed(f64),
    /// Percentage of the point value
    Percentage(f64),
    /// Multiple of the standard deviation
    StdDev(f64),
    /// Standard error
    StdErr,
}

impl ErrorBarValue {
    /// Returns the `errValType` value.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixedVal",
            Self::Percentage(_) => "percentage",
            Self::StdDev(_) => "stdDev",
            Self::StdErr => "stdErr",
        }
    }

    /// The `<c:val>` payload, if any.
    #[inline]
    pub const fn amount(&self) -> Option<f64> {
        match self {
            Self::Fixed(v) | Self::Percentage(v) | Self::StdDev(v) => Some(*v),
            Self::StdErr => None,
        }
    }
}

/// Error bar configuration for one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBars {
    pub value: ErrorBarValue,
    pub direction: ErrorBarDirection,
    /// Draw end caps
    pub end_cap: bool,
    pub line: Option<ChartLine>,
}

impl ErrorBars {
    #[inline]
    pub fn new(value: ErrorBarValue) -> Self {
        Self {
            value,
            direction: ErrorBarDirection::Both,
            end_cap: true,
            line: None,
        }
    }
}

/// A data series in a chart.
#[derive(Debug, Clone)]
pub struct Series {
    chart_type: ChartType,
    axis_group: AxisGroup,
    /// Category data (X values for scatter)
    pub categories: Option<DataSourceRef>,
    /// Value data (Y values for scatter)
    pub values: Option<DataSourceRef>,
    /// Series name
    pub name: Option<TitleText>,
    /// Series line and fill
    pub shape: ShapeProperties,
    pub marker: Option<Marker>,
    /// Smoothed line, for line and scatter charts
    pub smooth: Option<bool>,
    /// Invert colors if negative
    pub invert_if_negative: bool,
    pub data_labels: Option<DataLabels>,
    pub trendline: Option<Trendline>,
    pub y_error_bars: Option<ErrorBars>,
    pub x_error_bars: Option<ErrorBars>,
}

impl Series {
    pub(crate) fn new(
        chart_type: ChartType,
        axis_group: AxisGroup,
        categories: Option<DataSourceRef>,
        values: Option<DataSourceRef>,
    ) -> Self {
        Self {
            chart_type,
            axis_group,
            categories,
            values,
            name: None,
            shape: ShapeProperties::default(),
            marker: None,
            smooth: None,
            invert_if_negative: false,
            data_labels: None,
            trendline: None,
            y_error_bars: None,
            x_error_bars: None,
        }
    }

    /// Axis group chosen at creation. It cannot be changed afterwards.
    #[inline]
    pub fn axis_group(&self) -> AxisGroup {
        self.axis_group
    }

    /// Set the series name. A leading `=` makes it a cell reference.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(TitleText::parse(name));
        self
    }

    /// Set the series name from a worksheet cell.
    pub fn set_name_range(&mut self, sheet: &str, row: u32, col: u32) -> &mut Self {
        self.name = Some(TitleText::from_ref(cell_formula(sheet, row, col)));
        self
    }

    /// Set the categories from a worksheet range.
    pub fn set_categories(
        &mut self,
        sheet: &str,
        first_row: u32,
        first_col: u32,
        last_row: u32,
        last_col: u32,
    ) -> &mut Self {
        self.categories = Some(DataSourceRef::new(range_formula(
            sheet, first_row, first_col, last_row, last_col,
        )));
        self
    }

    /// Set the values from a worksheet range.
    pub fn set_values(
        &mut self,
        sheet: &str,
        first_row: u32,
        first_col: u32,
        last_row: u32,
        last_col: u32,
    ) -> &mut Self {
        self.values = Some(DataSourceRef::new(range_formula(
            sheet, first_row, first_col, last_row, last_col,
        )));
        self
    }

    pub fn set_line(&mut self, line: ChartLine) -> &mut Self {
        self.shape.line = Some(line);
        self
    }

    pub fn set_fill(&mut self, fill: ChartFill) -> &mut Self {
        self.shape.fill = Some(fill);
        self
    }

    pub fn set_marker_type(&mut self, style: MarkerStyle) -> &mut Self {
        if let Some(marker) = self.marker_mut("set_marker_type") {
            marker.style = Some(style);
        }
        self
    }

    pub fn set_marker_size(&mut self, size: u8) -> &mut Self {
        if let Some(marker) = self.marker_mut("set_marker_size") {
            marker.size = Some(size.clamp(2, 72));
        }
        self
    }

    pub fn set_marker_line(&mut self, line: ChartLine) -> &mut Self {
        if let Some(marker) = self.marker_mut("set_marker_line") {
            marker.shape.line = Some(line);
        }
        self
    }

    pub fn set_marker_fill(&mut self, fill: ChartFill) -> &mut Self {
        if let Some(marker) = self.marker_mut("set_marker_fill") {
            marker.shape.fill = Some(fill);
        }
        self
    }

    pub fn set_smooth(&mut self, smooth: bool) -> &mut Self {
        if self.chart_type.type_group_spec().smooth.is_some() {
            self.smooth = Some(smooth);
        } else {
            self.ignore("set_smooth");
        }
        self
    }

    pub fn set_invert_if_negative(&mut self) -> &mut Self {
        if self.chart_type.type_group_spec().supports_invert_if_negative {
            self.invert_if_negative = true;
        } else {
            self.ignore("set_invert_if_negative");
        }
        self
    }

    pub fn set_labels(&mut self, labels: DataLabels) -> &mut Self {
        self.data_labels = Some(labels);
        self
    }

    pub fn set_trendline(&mut self, trendline: Trendline) -> &mut Self {
        if self.chart_type.type_group_spec().supports_trendline {
            self.trendline = Some(trendline);
        } else {
            self.ignore("set_trendline");
        }
        self
    }

    pub fn set_y_error_bars(&mut self, error_bars: ErrorBars) -> &mut Self {
        if self.chart_type.type_group_spec().has_axes {
            self.y_error_bars = Some(error_bars);
        } else {
            self.ignore("set_y_error_bars");
        }
        self
    }

    /// X error bars, scatter charts only.
    pub fn set_x_error_bars(&mut self, error_bars: ErrorBars) -> &mut Self {
        if self.chart_type.type_group_spec().supports_x_error_bars {
            self.x_error_bars = Some(error_bars);
        } else {
            self.ignore("set_x_error_bars");
        }
        self
    }

    fn marker_mut(&mut self, setter: &'static str) -> Option<&mut Marker> {
        if self.chart_type.type_group_spec().supports_markers {
            Some(self.marker.get_or_insert_with(Marker::default))
        } else {
            self.ignore(setter);
            None
        }
    }

    fn ignore(&self, setter: &'static str) {
        warn!(chart_type = %self.chart_type, setter, "series option not supported by chart type, ignored");
    }
}
