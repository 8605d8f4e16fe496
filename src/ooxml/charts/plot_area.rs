//! Plot area type-group dispatch.
//!
//! A chart's plot area holds one type group (`<c:barChart>`, `<c:lineChart>`,
//! ...) per axis group in use. Every [`ChartType`] maps onto a fixed
//! [`TypeGroupSpec`] that tells the writer which element to open and which
//! group-level and series-level defaults apply. The same spec is used for the
//! primary and the secondary group.

use crate::ooxml::charts::axis::AxisKind;
use crate::ooxml::charts::types::{
    BarDirection, ChartType, CrossBetween, Grouping, RadarStyle, ScatterStyle,
};

/// Gap between bar clusters, as a percentage of bar width.
pub const DEFAULT_GAP_WIDTH: u16 = 150;

/// Overlap used by stacked bar and column charts.
pub const STACKED_OVERLAP: i8 = 100;

/// Hole size for doughnut charts, as a percentage of the diameter.
pub const DEFAULT_HOLE_SIZE: u8 = 50;

/// Static description of one chart type's plot area group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeGroupSpec {
    /// Type group element without namespace prefix
    pub element: &'static str,
    /// `barDir` for bar/column charts
    pub bar_direction: Option<BarDirection>,
    /// `grouping`, absent for scatter, radar and the pie family
    pub grouping: Option<Grouping>,
    /// `scatterStyle` for scatter charts
    pub scatter_style: Option<ScatterStyle>,
    /// `radarStyle` for radar charts
    pub radar_style: Option<RadarStyle>,
    /// Kind of the X axes in both axis groups
    pub x_axis_kind: AxisKind,
    /// `crossBetween` written on the value axes
    pub cross_between: CrossBetween,
    /// Whether the group references axes at all
    pub has_axes: bool,
    /// Whether series may be bound to the secondary group
    pub supports_secondary_axis: bool,
    /// `varyColors`
    pub vary_colors: bool,
    /// `overlap` for stacked bars
    pub overlap: Option<i8>,
    /// `gapWidth` for bars
    pub gap_width: Option<u16>,
    /// `<c:marker val="1"/>` after the axis ids of a line group
    pub group_marker: bool,
    /// `firstSliceAng` for the pie family
    pub first_slice_angle: Option<u16>,
    /// `holeSize` for doughnuts
    pub hole_size: Option<u8>,
    /// Default series line is hidden (plain scatter)
    pub hide_series_line: bool,
    /// Default series marker is `none`
    pub hide_series_marker: bool,
    /// Default series `smooth` value, for types that write one
    pub smooth: Option<bool>,
    /// Series accept `invertIfNegative`
    pub supports_invert_if_negative: bool,
    /// Series accept markers
    pub supports_markers: bool,
    /// Series accept X error bars in addition to Y
    pub supports_x_error_bars: bool,
    /// Series accept trendlines
    pub supports_trendline: bool,
}

impl TypeGroupSpec {
    const BASE: Self = Self {
        element: "",
        bar_direction: None,
        grouping: None,
        scatter_style: None,
        radar_style: None,
        x_axis_kind: AxisKind::Category,
        cross_between: CrossBetween::Between,
        has_axes: true,
        supports_secondary_axis: true,
        vary_colors: false,
        overlap: None,
        gap_width: None,
        group_marker: false,
        first_slice_angle: None,
        hole_size: None,
        hide_series_line: false,
        hide_series_marker: false,
        smooth: None,
        supports_invert_if_negative: false,
        supports_markers: false,
        supports_x_error_bars: false,
        supports_trendline: true,
    };

    const fn area(grouping: Grouping) -> Self {
        Self {
            grouping: Some(grouping),
            cross_between: CrossBetween::MidCategory,
            ..Self::BASE
        }
    }

    const fn bar(direction: BarDirection, grouping: Grouping) -> Self {
        Self {
            bar_direction: Some(direction),
            grouping: Some(grouping),
            overlap: if grouping.is_stacked() {
                Some(STACKED_OVERLAP)
            } else {
                None
            },
            gap_width: Some(DEFAULT_GAP_WIDTH),
            supports_invert_if_negative: true,
            ..Self::BASE
        }
    }

    const fn line(grouping: Grouping) -> Self {
        Self {
            grouping: Some(grouping),
            group_marker: true,
            supports_markers: true,
            smooth: Some(false),
            ..Self::BASE
        }
    }

    const fn scatter(hide_line: bool, hide_marker: bool, smooth: bool) -> Self {
        Self {
            scatter_style: Some(ScatterStyle::LineMarker),
            x_axis_kind: AxisKind::Value,
            cross_between: CrossBetween::MidCategory,
            hide_series_line: hide_line,
            hide_series_marker: hide_marker,
            smooth: Some(smooth),
            supports_markers: true,
            supports_x_error_bars: true,
            ..Self::BASE
        }
    }

    const fn radar(style: RadarStyle, hide_marker: bool) -> Self {
        Self {
            radar_style: Some(style),
            hide_series_marker: hide_marker,
            supports_markers: true,
            supports_trendline: false,
            ..Self::BASE
        }
    }

    const fn pie(hole_size: Option<u8>) -> Self {
        Self {
            has_axes: false,
            supports_secondary_axis: false,
            vary_colors: true,
            first_slice_angle: Some(0),
            hole_size,
            supports_trendline: false,
            ..Self::BASE
        }
    }
}

impl ChartType {
    /// Look up the type group description for this chart type.
    pub const fn type_group_spec(&self) -> TypeGroupSpec {
        use BarDirection::{Bar, Column};
        use Grouping::{Clustered, PercentStacked, Stacked, Standard};

        let spec = match self {
            Self::Area => TypeGroupSpec::area(Standard),
            Self::AreaStacked => TypeGroupSpec::area(Stacked),
            Self::AreaStackedPercent => TypeGroupSpec::area(PercentStacked),
            Self::Bar => TypeGroupSpec::bar(Bar, Clustered),
            Self::BarStacked => TypeGroupSpec::bar(Bar, Stacked),
            Self::BarStackedPercent => TypeGroupSpec::bar(Bar, PercentStacked),
            Self::Column => TypeGroupSpec::bar(Column, Clustered),
            Self::ColumnStacked => TypeGroupSpec::bar(Column, Stacked),
            Self::ColumnStackedPercent => TypeGroupSpec::bar(Column, PercentStacked),
            Self::Doughnut => TypeGroupSpec::pie(Some(DEFAULT_HOLE_SIZE)),
            Self::Line => TypeGroupSpec::line(Standard),
            Self::LineStacked => TypeGroupSpec::line(Stacked),
            Self::LineStackedPercent => TypeGroupSpec::line(PercentStacked),
            Self::Pie => TypeGroupSpec::pie(None),
            Self::Scatter => TypeGroupSpec::scatter(true, false, false),
            Self::ScatterStraight => TypeGroupSpec::scatter(false, true, false),
            Self::ScatterStraightWithMarkers => TypeGroupSpec::scatter(false, false, false),
            Self::ScatterSmooth => TypeGroupSpec::scatter(false, true, true),
            Self::ScatterSmoothWithMarkers => TypeGroupSpec::scatter(false, false, true),
            Self::Radar => TypeGroupSpec::radar(RadarStyle::Marker, true),
            Self::RadarWithMarkers => TypeGroupSpec::radar(RadarStyle::Marker, false),
            Self::RadarFilled => TypeGroupSpec::radar(RadarStyle::Filled, false),
        };

        TypeGroupSpec {
            element: self.xml_element_name(),
            ..spec
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_names() {
        for (chart_type, element) in [
            (ChartType::AreaStacked, "areaChart"),
            (ChartType::BarStackedPercent, "barChart"),
            (ChartType::Column, "barChart"),
            (ChartType::LineStacked, "lineChart"),
            (ChartType::Pie, "pieChart"),
            (ChartType::Doughnut, "doughnutChart"),
            (ChartType::ScatterSmoothWithMarkers, "scatterChart"),
            (ChartType::RadarFilled, "radarChart"),
        ] {
            assert_eq!(chart_type.type_group_spec().element, element, "{chart_type}");
        }
    }

    #[test]
    fn test_bar_family() {
        let spec = ChartType::BarStacked.type_group_spec();
        assert_eq!(spec.bar_direction, Some(BarDirection::Bar));
        assert_eq!(spec.grouping, Some(Grouping::Stacked));
        assert_eq!(spec.overlap, Some(100));
        assert_eq!(spec.gap_width, Some(150));

        let spec = ChartType::Column.type_group_spec();
        assert_eq!(spec.bar_direction, Some(BarDirection::Column));
        assert_eq!(spec.grouping, Some(Grouping::Clustered));
        assert_eq!(spec.overlap, None);
        assert!(spec.supports_invert_if_negative);
    }

    #[test]
    fn test_scatter_uses_value_x_axis() {
        let spec = ChartType::Scatter.type_group_spec();
        assert_eq!(spec.x_axis_kind, AxisKind::Value);
        assert_eq!(spec.scatter_style, Some(ScatterStyle::LineMarker));
        assert_eq!(spec.cross_between, CrossBetween::MidCategory);
        assert!(spec.hide_series_line);

        let smooth = ChartType::ScatterSmooth.type_group_spec();
        assert_eq!(smooth.smooth, Some(true));
        assert!(smooth.hide_series_marker);
        assert!(!smooth.hide_series_line);
    }

    #[test]
    fn test_pie_family_has_no_axes() {
        for chart_type in [ChartType::Pie, ChartType::Doughnut] {
            let spec = chart_type.type_group_spec();
            assert!(!spec.has_axes);
            assert!(!spec.supports_secondary_axis);
            assert!(spec.vary_colors);
            assert_eq!(spec.first_slice_angle, Some(0));
        }
        assert_eq!(ChartType::Doughnut.type_group_spec().hole_size, Some(50));
        assert_eq!(ChartType::Pie.type_group_spec().hole_size, None);
    }

    #[test]
    fn test_radar_styles() {
        assert!(ChartType::Radar.type_group_spec().hide_series_marker);
        assert_eq!(
            ChartType::RadarFilled.type_group_spec().radar_style,
            Some(RadarStyle::Filled)
        );
    }
}
