//! Core chart types and enumerations.
//!
//! This module defines the chart types, axis placement values, grouping types,
//! and other enumerations used throughout the chart API, each with the literal
//! value it serializes to.

use std::fmt;

/// Chart type enumeration.
///
/// The type is fixed when a chart is created. Stacked and styled variants map
/// onto the same DrawingML element as their base type; see
/// [`crate::ooxml::charts::plot_area::TypeGroupSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Area chart
    Area,
    /// Stacked area chart
    AreaStacked,
    /// Percent stacked area chart
    AreaStackedPercent,
    /// Horizontal bar chart
    Bar,
    /// Stacked horizontal bar chart
    BarStacked,
    /// Percent stacked horizontal bar chart
    BarStackedPercent,
    /// Vertical column chart
    Column,
    /// Stacked column chart
    ColumnStacked,
    /// Percent stacked column chart
    ColumnStackedPercent,
    /// Doughnut chart
    Doughnut,
    /// Line chart
    Line,
    /// Stacked line chart
    LineStacked,
    /// Percent stacked line chart
    LineStackedPercent,
    /// Pie chart
    Pie,
    /// Scatter chart, markers only
    Scatter,
    /// Scatter chart with straight lines
    ScatterStraight,
    /// Scatter chart with straight lines and markers
    ScatterStraightWithMarkers,
    /// Scatter chart with smooth lines
    ScatterSmooth,
    /// Scatter chart with smooth lines and markers
    ScatterSmoothWithMarkers,
    /// Radar chart
    Radar,
    /// Radar chart with markers
    RadarWithMarkers,
    /// Filled radar chart
    RadarFilled,
}

impl ChartType {
    /// Returns the XML element name for this chart type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Area | Self::AreaStacked | Self::AreaStackedPercent => "areaChart",
            Self::Bar
            | Self::BarStacked
            | Self::BarStackedPercent
            | Self::Column
            | Self::ColumnStacked
            | Self::ColumnStackedPercent => "barChart",
            Self::Doughnut => "doughnutChart",
            Self::Line | Self::LineStacked | Self::LineStackedPercent => "lineChart",
            Self::Pie => "pieChart",
            Self::Scatter
            | Self::ScatterStraight
            | Self::ScatterStraightWithMarkers
            | Self::ScatterSmooth
            | Self::ScatterSmoothWithMarkers => "scatterChart",
            Self::Radar | Self::RadarWithMarkers | Self::RadarFilled => "radarChart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Axis position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
}

impl AxisPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
        }
    }

    /// Returns true for axes drawn vertically.
    #[inline]
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Tick mark style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMark {
    /// Cross tick mark
    Cross,
    /// Inside tick mark
    In,
    /// No tick mark
    None,
    /// Outside tick mark
    Out,
}

impl TickMark {
    /// Returns the XML value for this tick mark style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::In => "in",
            Self::None => "none",
            Self::Out => "out",
        }
    }
}

/// Tick label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabelPosition {
    /// High position
    High,
    /// Low position
    Low,
    /// Next to axis
    NextTo,
    /// No tick labels
    None,
}

impl TickLabelPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::NextTo => "nextTo",
            Self::None => "none",
        }
    }
}

/// Axis label alignment (category axes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLabelAlign {
    /// Center
    Center,
    /// Left
    Left,
    /// Right
    Right,
}

impl AxisLabelAlign {
    /// Returns the XML value for this alignment.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
            Self::Left => "l",
            Self::Right => "r",
        }
    }
}

/// Where a value axis crosses the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossBetween {
    /// Cross between categories
    Between,
    /// Cross at mid-category
    MidCategory,
}

impl CrossBetween {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::MidCategory => "midCat",
        }
    }
}

/// Built-in display units for value axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUnits {
    Hundreds,
    Thousands,
    TenThousands,
    HundredThousands,
    Millions,
    TenMillions,
    HundredMillions,
    Billions,
    Trillions,
}

impl DisplayUnits {
    /// Returns the XML value for this built-in unit.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Hundreds => "hundreds",
            Self::Thousands => "thousands",
            Self::TenThousands => "tenThousands",
            Self::HundredThousands => "hundredThousands",
            Self::Millions => "millions",
            Self::TenMillions => "tenMillions",
            Self::HundredMillions => "hundredMillions",
            Self::Billions => "billions",
            Self::Trillions => "trillions",
        }
    }
}

/// Bar/column direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarDirection {
    /// Horizontal bars
    Bar,
    /// Vertical bars (columns)
    Column,
}

impl BarDirection {
    /// Returns the XML value for this direction.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "col",
        }
    }
}

/// Series grouping within a chart-type block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Clustered bars
    Clustered,
    /// Stacked
    Stacked,
    /// 100% stacked
    PercentStacked,
    /// Standard grouping
    Standard,
}

impl Grouping {
    /// Returns the XML value for this grouping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
            Self::Stacked => "stacked",
            Self::PercentStacked => "percentStacked",
            Self::Standard => "standard",
        }
    }

    /// Returns true for stacked and percent stacked grouping.
    #[inline]
    pub const fn is_stacked(&self) -> bool {
        matches!(self, Self::Stacked | Self::PercentStacked)
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    /// No legend
    None,
    /// Right position
    Right,
    /// Left position
    Left,
    /// Top position
    Top,
    /// Bottom position
    Bottom,
    /// Top right corner
    TopRight,
    /// Right, drawn over the plot area
    OverlayRight,
    /// Left, drawn over the plot area
    OverlayLeft,
    /// Top right, drawn over the plot area
    OverlayTopRight,
}

impl LegendPosition {
    /// Returns the XML value for this position, `None` when no legend is drawn.
    #[inline]
    pub const fn xml_value(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Right | Self::OverlayRight => Some("r"),
            Self::Left | Self::OverlayLeft => Some("l"),
            Self::Top => Some("t"),
            Self::Bottom => Some("b"),
            Self::TopRight | Self::OverlayTopRight => Some("tr"),
        }
    }

    /// Returns true if the legend is drawn over the plot area.
    #[inline]
    pub const fn is_overlay(&self) -> bool {
        matches!(
            self,
            Self::OverlayRight | Self::OverlayLeft | Self::OverlayTopRight
        )
    }
}

/// Data label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLabelPosition {
    /// Center position
    Center,
    /// Right position
    Right,
    /// Left position
    Left,
    /// Above the point
    Above,
    /// Below the point
    Below,
    /// Inside base position
    InsideBase,
    /// Inside end position
    InsideEnd,
    /// Outside end position
    OutsideEnd,
    /// Best fit position (pie family)
    BestFit,
}

impl DataLabelPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Left => "l",
            Self::Above => "t",
            Self::Below => "b",
            Self::InsideBase => "inBase",
            Self::InsideEnd => "inEnd",
            Self::OutsideEnd => "outEnd",
            Self::BestFit => "bestFit",
        }
    }
}

/// Marker style for line, scatter, and radar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Automatic marker
    Automatic,
    /// No marker
    None,
    /// Square marker
    Square,
    /// Diamond marker
    Diamond,
    /// Triangle marker
    Triangle,
    /// X marker
    X,
    /// Star marker
    Star,
    /// Short dash marker
    ShortDash,
    /// Long dash marker
    LongDash,
    /// Circle marker
    Circle,
    /// Plus marker
    Plus,
}

impl MarkerStyle {
    /// Returns the XML value for this marker style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Automatic => "auto",
            Self::None => "none",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
            Self::X => "x",
            Self::Star => "star",
            Self::ShortDash => "dot",
            Self::LongDash => "dash",
            Self::Circle => "circle",
            Self::Plus => "plus",
        }
    }
}

/// Scatter chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterStyle {
    /// Line with markers; smoothing is set per series
    LineMarker,
}

impl ScatterStyle {
    /// Returns the XML value for this scatter style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::LineMarker => "lineMarker",
        }
    }
}

/// Radar chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarStyle {
    /// Lines with markers
    Marker,
    /// Filled radar
    Filled,
}

impl RadarStyle {
    /// Returns the XML value for this radar style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::Filled => "filled",
        }
    }
}

/// Display blanks mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBlanks {
    /// Gaps where there are blank cells
    Gap,
    /// Treat blank cells as zero
    Zero,
    /// Connect data points across blank cells
    Span,
}

impl DisplayBlanks {
    /// Returns the XML value for this display mode.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Gap => "gap",
            Self::Zero => "zero",
            Self::Span => "span",
        }
    }
}

/// Line dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    RoundDot,
    SquareDot,
    Dash,
    DashDot,
    LongDash,
    LongDashDot,
    LongDashDotDot,
}

impl LineDash {
    /// Returns the XML value for this dash style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::RoundDot => "sysDot",
            Self::SquareDot => "sysDash",
            Self::Dash => "dash",
            Self::DashDot => "dashDot",
            Self::LongDash => "lgDash",
            Self::LongDashDot => "lgDashDot",
            Self::LongDashDotDot => "lgDashDotDot",
        }
    }
}
