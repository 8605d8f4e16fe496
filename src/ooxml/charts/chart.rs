//! Main chart structure.
//!
//! [`Chart`] owns the series list and the four axis slots. [`Chart::assemble`]
//! is the axis-pair resolver: it decides which type groups and axes are
//! written and fills in every derived axis attribute.

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::common::error::{Error, Result};
use crate::common::id::{AxisIdAllocator, AxisIds};
use crate::ooxml::charts::axis::{Axis, AxisGroup, AxisKind, AxisSlot, ResolvedAxis};
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{
    ChartFill, ChartLine, DataSourceRef, Layout, ShapeProperties, Title, TitleText,
};
use crate::ooxml::charts::series::{Series, SeriesId};
use crate::ooxml::charts::types::{ChartType, DisplayBlanks, LegendPosition};
use crate::ooxml::charts::writer;
use crate::ooxml::xlsx::reference::cell_formula;

/// Default chart style id, the one Excel applies to new charts.
pub const DEFAULT_STYLE: u8 = 2;

/// The main chart structure.
#[derive(Debug, Clone)]
pub struct Chart {
    chart_type: ChartType,
    series: Vec<Series>,
    axes: [Axis; 4],
    /// Chart title
    pub title: Option<Title>,
    /// Whether the automatic title is suppressed
    pub title_deleted: bool,
    pub legend: Legend,
    /// Chart area line and fill
    pub chart_area: ShapeProperties,
    /// Plot area line and fill
    pub plot_area: ShapeProperties,
    /// Manual plot area layout
    pub plot_area_layout: Option<Layout>,
    /// Chart style index (1-48)
    pub style: u8,
    /// How to display blank values
    pub display_blanks_as: DisplayBlanks,
    /// Plot data in hidden rows and columns
    pub show_hidden_data: bool,
}

impl Chart {
    /// Create a chart with axis ids from a fresh allocator.
    ///
    /// Charts added through a workbook get document-unique ids instead.
    pub fn new(chart_type: ChartType) -> Self {
        Self::with_axis_ids(chart_type, AxisIdAllocator::new().next_chart())
    }

    /// Create a chart with explicit axis ids.
    pub fn with_axis_ids(chart_type: ChartType, ids: AxisIds) -> Self {
        let x_kind = chart_type.type_group_spec().x_axis_kind;
        let axes = AxisSlot::ALL.map(|slot| {
            let kind = if slot.is_x() { x_kind } else { AxisKind::Value };
            Axis::new(kind, slot, ids.get(slot.index()))
        });

        debug!(%chart_type, ids = ?ids.0, "created chart");

        Self {
            chart_type,
            series: Vec::new(),
            axes,
            title: None,
            title_deleted: false,
            legend: Legend::default(),
            chart_area: ShapeProperties::default(),
            plot_area: ShapeProperties::default(),
            plot_area_layout: None,
            style: DEFAULT_STYLE,
            display_blanks_as: DisplayBlanks::Gap,
            show_hidden_data: false,
        }
    }

    /// Replace the axis ids, e.g. to reproduce a reference file.
    pub fn set_axis_ids(&mut self, ids: AxisIds) -> &mut Self {
        for axis in &mut self.axes {
            axis.set_id(ids.get(axis.slot().index()));
        }
        self
    }

    #[inline]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Add a series plotted against the primary axes.
    pub fn add_series(&mut self, categories: Option<&str>, values: Option<&str>) -> Result<SeriesId> {
        self.add_series_on_axis(categories, values, AxisGroup::Primary)
    }

    /// Add a series plotted against the given axis group.
    ///
    /// Empty references are rejected; `None` leaves the source unset. The
    /// pie family has no secondary axes.
    pub fn add_series_on_axis(
        &mut self,
        categories: Option<&str>,
        values: Option<&str>,
        group: AxisGroup,
    ) -> Result<SeriesId> {
        if categories == Some("") {
            return Err(Error::EmptyString("categories"));
        }
        if values == Some("") {
            return Err(Error::EmptyString("values"));
        }
        if group == AxisGroup::Secondary && !self.chart_type.type_group_spec().supports_secondary_axis {
            return Err(Error::FeatureNotSupported(format!(
                "secondary axis on {} chart",
                self.chart_type
            )));
        }

        let id = SeriesId(self.series.len());
        self.series.push(Series::new(
            self.chart_type,
            group,
            categories.map(DataSourceRef::new),
            values.map(DataSourceRef::new),
        ));

        trace!(index = id.0, ?group, "added series");
        Ok(id)
    }

    /// Look up a series.
    pub fn series(&self, id: SeriesId) -> Result<&Series> {
        self.series
            .get(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("series {}", id.0)))
    }

    /// Look up a series for modification.
    pub fn series_mut(&mut self, id: SeriesId) -> Result<&mut Series> {
        self.series
            .get_mut(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("series {}", id.0)))
    }

    /// All series in insertion order.
    #[inline]
    pub fn series_list(&self) -> &[Series] {
        &self.series
    }

    #[inline]
    pub fn axis(&self, slot: AxisSlot) -> &Axis {
        &self.axes[slot.index()]
    }

    #[inline]
    pub fn axis_mut(&mut self, slot: AxisSlot) -> &mut Axis {
        &mut self.axes[slot.index()]
    }

    #[inline]
    pub fn x_axis_mut(&mut self) -> &mut Axis {
        self.axis_mut(AxisSlot::PrimaryX)
    }

    #[inline]
    pub fn y_axis_mut(&mut self) -> &mut Axis {
        self.axis_mut(AxisSlot::PrimaryY)
    }

    #[inline]
    pub fn x2_axis_mut(&mut self) -> &mut Axis {
        self.axis_mut(AxisSlot::SecondaryX)
    }

    #[inline]
    pub fn y2_axis_mut(&mut self) -> &mut Axis {
        self.axis_mut(AxisSlot::SecondaryY)
    }

    /// Set the chart title. A leading `=` makes it a cell reference.
    pub fn title_set_name(&mut self, name: &str) -> &mut Self {
        self.title_mut().text = Some(TitleText::parse(name));
        self
    }

    /// Set the chart title from a worksheet cell.
    pub fn title_set_name_range(&mut self, sheet: &str, row: u32, col: u32) -> &mut Self {
        self.title_mut().text = Some(TitleText::from_ref(cell_formula(sheet, row, col)));
        self
    }

    /// Suppress the automatic title Excel shows for single-series charts.
    pub fn title_off(&mut self) -> &mut Self {
        self.title_deleted = true;
        self
    }

    pub fn title_set_overlay(&mut self, overlay: bool) -> &mut Self {
        self.title_mut().overlay = overlay;
        self
    }

    pub fn title_set_layout(&mut self, layout: Layout) -> &mut Self {
        self.title_mut().layout = Some(layout);
        self
    }

    pub fn legend_set_position(&mut self, position: LegendPosition) -> &mut Self {
        self.legend.position = position;
        self
    }

    pub fn legend_set_layout(&mut self, layout: Layout) -> &mut Self {
        self.legend.layout = Some(layout);
        self
    }

    /// Remove legend entries by series index.
    pub fn legend_delete_series(&mut self, indices: &[u16]) -> &mut Self {
        self.legend.delete_entries(indices);
        self
    }

    pub fn chartarea_set_line(&mut self, line: ChartLine) -> &mut Self {
        self.chart_area.line = Some(line);
        self
    }

    pub fn chartarea_set_fill(&mut self, fill: ChartFill) -> &mut Self {
        self.chart_area.fill = Some(fill);
        self
    }

    pub fn plotarea_set_line(&mut self, line: ChartLine) -> &mut Self {
        self.plot_area.line = Some(line);
        self
    }

    pub fn plotarea_set_fill(&mut self, fill: ChartFill) -> &mut Self {
        self.plot_area.fill = Some(fill);
        self
    }

    pub fn plotarea_set_layout(&mut self, layout: Layout) -> &mut Self {
        self.plot_area_layout = Some(layout);
        self
    }

    /// Set one of Excel's 48 built-in styles. Out of range ids fall back to
    /// the default style.
    pub fn set_style(&mut self, style: u8) -> &mut Self {
        if (1..=48).contains(&style) {
            self.style = style;
        } else {
            warn!(style, "chart style out of range, using default");
            self.style = DEFAULT_STYLE;
        }
        self
    }

    pub fn show_blanks_as(&mut self, mode: DisplayBlanks) -> &mut Self {
        self.display_blanks_as = mode;
        self
    }

    pub fn show_hidden_data(&mut self) -> &mut Self {
        self.show_hidden_data = true;
        self
    }

    /// True when at least one series is bound to the secondary axis group.
    pub fn has_secondary_axis(&self) -> bool {
        self.series
            .iter()
            .any(|s| s.axis_group() == AxisGroup::Secondary)
    }

    /// Resolve the plot area layout: type groups in [primary, secondary]
    /// order and axes in [X, Y, X2, Y2] order, with all derived axis
    /// attributes filled in. Does not modify the chart.
    pub fn assemble(&self) -> Assembly {
        let spec = self.chart_type.type_group_spec();
        let has_secondary_axis = self.has_secondary_axis();

        let mut groups: SmallVec<[TypeGroupPlan; 2]> = SmallVec::new();
        let mut axes: SmallVec<[ResolvedAxis; 4]> = SmallVec::new();

        let used_groups: &[AxisGroup] = if has_secondary_axis {
            &[AxisGroup::Primary, AxisGroup::Secondary]
        } else {
            &[AxisGroup::Primary]
        };

        for &group in used_groups {
            let (x_slot, y_slot) = AxisSlot::pair(group);
            let series = self
                .series
                .iter()
                .enumerate()
                .filter(|(_, s)| s.axis_group() == group)
                .map(|(i, _)| i)
                .collect();
            let axis_ids = spec
                .has_axes
                .then(|| (self.axis(x_slot).id(), self.axis(y_slot).id()));
            groups.push(TypeGroupPlan {
                group,
                series,
                axis_ids,
            });

            if spec.has_axes {
                for slot in [x_slot, y_slot] {
                    let cross_axis_id = self.axis(slot.perpendicular()).id();
                    axes.push(self.axis(slot).resolve(has_secondary_axis, cross_axis_id));
                }
            }
        }

        debug_assert_eq!(
            axes.iter().any(|a| a.slot == AxisSlot::SecondaryY),
            axes.iter().any(|a| a.slot == AxisSlot::SecondaryX),
            "secondary Y-axis must be emitted with its X partner"
        );

        debug!(
            chart_type = %self.chart_type,
            series = self.series.len(),
            has_secondary_axis,
            type_groups = groups.len(),
            axes = axes.len(),
            "assembled chart"
        );

        Assembly {
            has_secondary_axis,
            groups,
            axes,
        }
    }

    /// Assemble and serialize the chart part.
    pub fn assemble_xml(&self) -> Result<String> {
        writer::assemble_xml(self)
    }

    fn title_mut(&mut self) -> &mut Title {
        self.title.get_or_insert_with(Title::default)
    }
}

/// One type group to write: its series, in insertion order, and the ids of
/// the axis pair it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroupPlan {
    pub group: AxisGroup,
    /// Indices into [`Chart::series_list`]
    pub series: SmallVec<[usize; 8]>,
    /// (X id, Y id), `None` for chart types without axes
    pub axis_ids: Option<(u32, u32)>,
}

/// Result of [`Chart::assemble`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub has_secondary_axis: bool,
    pub groups: SmallVec<[TypeGroupPlan; 2]>,
    pub axes: SmallVec<[ResolvedAxis; 4]>,
}

impl Assembly {
    /// Series indices of one group, empty if the group is not written.
    pub fn series_in(&self, group: AxisGroup) -> &[usize] {
        self.groups
            .iter()
            .find(|g| g.group == group)
            .map(|g| g.series.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::types::{AxisPosition, TickLabelPosition};

    #[test]
    fn test_single_axis_assembly() {
        let mut chart = Chart::new(ChartType::Line);
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart.add_series(None, Some("Sheet1!$B$1:$B$5")).unwrap();

        let assembly = chart.assemble();
        assert!(!assembly.has_secondary_axis);
        assert_eq!(assembly.groups.len(), 1);
        assert_eq!(assembly.axes.len(), 2);
        assert_eq!(assembly.series_in(AxisGroup::Primary), &[0, 1]);
        assert_eq!(assembly.axes[1].label_position, TickLabelPosition::NextTo);
    }

    #[test]
    fn test_secondary_assembly_order() {
        let mut chart = Chart::with_axis_ids(ChartType::Column, AxisIds::new(1, 2, 3, 4));
        chart.add_series(None, Some("=S!$A$1:$A$3")).unwrap();
        chart
            .add_series_on_axis(None, Some("=S!$B$1:$B$3"), AxisGroup::Secondary)
            .unwrap();
        chart.add_series(None, Some("=S!$C$1:$C$3")).unwrap();

        let assembly = chart.assemble();
        assert!(assembly.has_secondary_axis);
        assert_eq!(assembly.series_in(AxisGroup::Primary), &[0, 2]);
        assert_eq!(assembly.series_in(AxisGroup::Secondary), &[1]);
        assert_eq!(assembly.groups[0].axis_ids, Some((1, 2)));
        assert_eq!(assembly.groups[1].axis_ids, Some((3, 4)));

        let slots: Vec<_> = assembly.axes.iter().map(|a| a.slot).collect();
        assert_eq!(slots, AxisSlot::ALL.to_vec());
        let crosses: Vec<_> = assembly.axes.iter().map(|a| a.cross_axis_id).collect();
        assert_eq!(crosses, vec![2, 1, 4, 3]);
        assert_eq!(assembly.axes[3].position, AxisPosition::Right);
        assert!(assembly.axes[2].deleted);
    }

    #[test]
    fn test_zero_series_emits_primary_only() {
        let chart = Chart::new(ChartType::Area);
        let assembly = chart.assemble();
        assert_eq!(assembly.groups.len(), 1);
        assert!(assembly.groups[0].series.is_empty());
        assert_eq!(assembly.axes.len(), 2);
    }

    #[test]
    fn test_configured_but_unused_secondary_not_emitted() {
        let mut chart = Chart::new(ChartType::Line);
        chart.y2_axis_mut().set_name("Unused");
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        assert_eq!(chart.assemble().axes.len(), 2);
    }

    #[test]
    fn test_pie_rejects_secondary() {
        for chart_type in [ChartType::Pie, ChartType::Doughnut] {
            let mut chart = Chart::new(chart_type);
            chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
            let err = chart
                .add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), AxisGroup::Secondary)
                .unwrap_err();
            assert!(matches!(err, Error::FeatureNotSupported(_)));
            assert_eq!(chart.series_list().len(), 1);
        }
    }

    #[test]
    fn test_pie_has_no_axes() {
        let mut chart = Chart::new(ChartType::Pie);
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        let assembly = chart.assemble();
        assert!(assembly.axes.is_empty());
        assert_eq!(assembly.groups[0].axis_ids, None);
    }

    #[test]
    fn test_empty_reference_rejected() {
        let mut chart = Chart::new(ChartType::Column);
        assert!(matches!(
            chart.add_series(Some(""), Some("Sheet1!$A$1:$A$5")),
            Err(Error::EmptyString("categories"))
        ));
        assert!(matches!(chart.add_series(None, Some("")), Err(Error::EmptyString("values"))));
        assert!(chart.series_list().is_empty());
    }

    #[test]
    fn test_invalid_series_handle() {
        let mut chart = Chart::new(ChartType::Column);
        assert!(matches!(chart.series_mut(SeriesId(3)), Err(Error::InvalidHandle(_))));
    }

    #[test]
    fn test_scatter_x_axes_are_value_axes() {
        let chart = Chart::new(ChartType::Scatter);
        assert_eq!(chart.axis(AxisSlot::PrimaryX).kind(), AxisKind::Value);
        assert_eq!(chart.axis(AxisSlot::SecondaryX).kind(), AxisKind::Value);
        let chart = Chart::new(ChartType::Bar);
        assert_eq!(chart.axis(AxisSlot::PrimaryX).kind(), AxisKind::Category);
    }

    #[test]
    fn test_set_axis_ids() {
        let mut chart = Chart::new(ChartType::Line);
        chart.set_axis_ids(AxisIds::new(40262272, 40260352, 40263296, 40264320));
        assert_eq!(chart.axis(AxisSlot::SecondaryY).id(), 40264320);
    }

    #[test]
    fn test_style_range() {
        let mut chart = Chart::new(ChartType::Line);
        chart.set_style(37);
        assert_eq!(chart.style, 37);
        chart.set_style(49);
        assert_eq!(chart.style, DEFAULT_STYLE);
    }
}
