//! Chart axis models.
//!
//! A chart always owns four axes, addressed by [`AxisSlot`]: the primary X/Y
//! pair and the secondary X/Y pair. Each axis stores only what the caller set;
//! position, label position, crossing and visibility left unset are derived
//! when the chart is assembled, because the right defaults depend on whether
//! any series uses the secondary group.

use tracing::warn;

use crate::ooxml::charts::models::{
    ChartFill, ChartLine, Layout, NumberFormat, ShapeProperties, Title, TitleText,
};
use crate::ooxml::charts::types::{
    AxisLabelAlign, AxisPosition, DisplayUnits, TickLabelPosition, TickMark,
};
use crate::ooxml::xlsx::reference::cell_formula;

/// Whether an axis plots categories or numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// `<c:catAx>`
    Category,
    /// `<c:valAx>`
    Value,
}

impl AxisKind {
    /// Returns the XML element name for this axis kind.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Category => "catAx",
            Self::Value => "valAx",
        }
    }
}

/// The Y-axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisGroup {
    /// Left-hand axis pair
    #[default]
    Primary,
    /// Right-hand axis pair
    Secondary,
}

/// One of the four axis positions of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSlot {
    PrimaryX,
    PrimaryY,
    SecondaryX,
    SecondaryY,
}

impl AxisSlot {
    /// All slots in emission order.
    pub const ALL: [AxisSlot; 4] = [
        Self::PrimaryX,
        Self::PrimaryY,
        Self::SecondaryX,
        Self::SecondaryY,
    ];

    /// Index into a chart's axis array.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Self::PrimaryX => 0,
            Self::PrimaryY => 1,
            Self::SecondaryX => 2,
            Self::SecondaryY => 3,
        }
    }

    /// Axis group this slot belongs to.
    #[inline]
    pub const fn group(&self) -> AxisGroup {
        match self {
            Self::PrimaryX | Self::PrimaryY => AxisGroup::Primary,
            Self::SecondaryX | Self::SecondaryY => AxisGroup::Secondary,
        }
    }

    #[inline]
    pub const fn is_x(&self) -> bool {
        matches!(self, Self::PrimaryX | Self::SecondaryX)
    }

    /// The axis this one crosses: the other direction in the same group.
    #[inline]
    pub const fn perpendicular(&self) -> AxisSlot {
        match self {
            Self::PrimaryX => Self::PrimaryY,
            Self::PrimaryY => Self::PrimaryX,
            Self::SecondaryX => Self::SecondaryY,
            Self::SecondaryY => Self::SecondaryX,
        }
    }

    /// X and Y slots of a group.
    #[inline]
    pub const fn pair(group: AxisGroup) -> (AxisSlot, AxisSlot) {
        match group {
            AxisGroup::Primary => (Self::PrimaryX, Self::PrimaryY),
            AxisGroup::Secondary => (Self::SecondaryX, Self::SecondaryY),
        }
    }
}

/// Where an axis crosses its perpendicular axis.
///
/// A single value, so "at", "min" and "max" can never be set together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisCrossing {
    /// `<c:crosses val="autoZero"/>`
    Auto,
    /// `<c:crosses val="min"/>`
    Min,
    /// `<c:crosses val="max"/>`
    Max,
    /// `<c:crossesAt val="..."/>`
    At(f64),
}

impl AxisCrossing {
    /// The `crosses` value, or `None` for [`AxisCrossing::At`].
    #[inline]
    pub const fn xml_value(&self) -> Option<&'static str> {
        match self {
            Self::Auto => Some("autoZero"),
            Self::Min => Some("min"),
            Self::Max => Some("max"),
            Self::At(_) => None,
        }
    }
}

/// Major or minor gridline settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gridlines {
    pub visible: bool,
    pub line: Option<ChartLine>,
}

/// Axis configuration as set by the caller.
#[derive(Debug, Clone)]
pub struct Axis {
    kind: AxisKind,
    slot: AxisSlot,
    id: u32,
    /// Axis title
    pub title: Option<Title>,
    /// Tick label number format
    pub num_format: Option<NumberFormat>,
    /// Axis line and fill
    pub shape: ShapeProperties,
    pub major_gridlines: Gridlines,
    pub minor_gridlines: Gridlines,
    pub major_tick_mark: Option<TickMark>,
    pub minor_tick_mark: Option<TickMark>,
    /// Category label alignment
    pub label_align: Option<AxisLabelAlign>,
    /// Plot in reverse order
    pub reverse: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub log_base: Option<u16>,
    pub major_unit: Option<f64>,
    pub minor_unit: Option<f64>,
    pub display_units: Option<DisplayUnits>,
    /// Category label interval (`tickLblSkip`)
    pub interval_unit: Option<u16>,
    /// Category tick mark interval (`tickMarkSkip`)
    pub interval_tick: Option<u16>,
    position: Option<AxisPosition>,
    label_position: Option<TickLabelPosition>,
    crossing: Option<AxisCrossing>,
    deleted: Option<bool>,
}

impl Axis {
    /// Create an axis for a slot with no caller overrides.
    ///
    /// The primary Y-axis shows major gridlines by default.
    pub fn new(kind: AxisKind, slot: AxisSlot, id: u32) -> Self {
        Self {
            kind,
            slot,
            id,
            title: None,
            num_format: None,
            shape: ShapeProperties::default(),
            major_gridlines: Gridlines {
                visible: slot == AxisSlot::PrimaryY,
                line: None,
            },
            minor_gridlines: Gridlines::default(),
            major_tick_mark: None,
            minor_tick_mark: None,
            label_align: None,
            reverse: false,
            min: None,
            max: None,
            log_base: None,
            major_unit: None,
            minor_unit: None,
            display_units: None,
            interval_unit: None,
            interval_tick: None,
            position: None,
            label_position: None,
            crossing: None,
            deleted: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[inline]
    pub fn slot(&self) -> AxisSlot {
        self.slot
    }

    /// Document-unique axis id, fixed at chart construction.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Set the axis title. A leading `=` makes it a cell reference.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.title_mut().text = Some(TitleText::parse(name));
        self
    }

    /// Set the axis title from a worksheet cell.
    pub fn set_name_range(&mut self, sheet: &str, row: u32, col: u32) -> &mut Self {
        self.title_mut().text = Some(TitleText::from_ref(cell_formula(sheet, row, col)));
        self
    }

    /// Place the axis title manually.
    pub fn set_name_layout(&mut self, layout: Layout) -> &mut Self {
        self.title_mut().layout = Some(layout);
        self
    }

    pub fn set_num_format(&mut self, format_code: &str) -> &mut Self {
        self.num_format = Some(NumberFormat::new(format_code));
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

    pub fn set_reverse(&mut self) -> &mut Self {
        self.reverse = true;
        self
    }

    /// Cross the perpendicular axis at a value.
    pub fn set_crossing(&mut self, value: f64) -> &mut Self {
        if self.is_finite("set_crossing", value) {
            self.crossing = Some(AxisCrossing::At(value));
        }
        self
    }

    /// Cross the perpendicular axis at its maximum.
    pub fn set_crossing_max(&mut self) -> &mut Self {
        self.crossing = Some(AxisCrossing::Max);
        self
    }

    /// Cross the perpendicular axis at its minimum.
    pub fn set_crossing_min(&mut self) -> &mut Self {
        self.crossing = Some(AxisCrossing::Min);
        self
    }

    /// Hide the axis.
    pub fn off(&mut self) -> &mut Self {
        self.deleted = Some(true);
        self
    }

    /// Show the axis, including a secondary X-axis that is hidden by default.
    pub fn on(&mut self) -> &mut Self {
        self.deleted = Some(false);
        self
    }

    pub fn set_position(&mut self, position: AxisPosition) -> &mut Self {
        self.position = Some(position);
        self
    }

    pub fn set_label_position(&mut self, position: TickLabelPosition) -> &mut Self {
        self.label_position = Some(position);
        self
    }

    pub fn set_label_align(&mut self, align: AxisLabelAlign) -> &mut Self {
        if self.kind == AxisKind::Category {
            self.label_align = Some(align);
        } else {
            self.ignore("set_label_align");
        }
        self
    }

    pub fn set_min(&mut self, min: f64) -> &mut Self {
        if self.accepts_scale("set_min") && self.is_finite("set_min", min) {
            self.min = Some(min);
        }
        self
    }

    pub fn set_max(&mut self, max: f64) -> &mut Self {
        if self.accepts_scale("set_max") && self.is_finite("set_max", max) {
            self.max = Some(max);
        }
        self
    }

    /// Logarithmic scale. Bases below 2 are ignored.
    pub fn set_log_base(&mut self, base: u16) -> &mut Self {
        if !self.accepts_scale("set_log_base") {
            return self;
        }
        if base < 2 {
            warn!(slot = ?self.slot, base, "ignoring log base below 2");
            return self;
        }
        self.log_base = Some(base);
        self
    }

    pub fn set_major_unit(&mut self, unit: f64) -> &mut Self {
        if self.accepts_scale("set_major_unit") && self.is_finite("set_major_unit", unit) {
            self.major_unit = Some(unit);
        }
        self
    }

    pub fn set_minor_unit(&mut self, unit: f64) -> &mut Self {
        if self.accepts_scale("set_minor_unit") && self.is_finite("set_minor_unit", unit) {
            self.minor_unit = Some(unit);
        }
        self
    }

    pub fn set_display_units(&mut self, units: DisplayUnits) -> &mut Self {
        if self.accepts_scale("set_display_units") {
            self.display_units = Some(units);
        }
        self
    }

    pub fn set_interval_unit(&mut self, unit: u16) -> &mut Self {
        if self.kind == AxisKind::Category {
            self.interval_unit = Some(unit);
        } else {
            self.ignore("set_interval_unit");
        }
        self
    }

    pub fn set_interval_tick(&mut self, tick: u16) -> &mut Self {
        if self.kind == AxisKind::Category {
            self.interval_tick = Some(tick);
        } else {
            self.ignore("set_interval_tick");
        }
        self
    }

    pub fn set_major_tick_mark(&mut self, mark: TickMark) -> &mut Self {
        self.major_tick_mark = Some(mark);
        self
    }

    pub fn set_minor_tick_mark(&mut self, mark: TickMark) -> &mut Self {
        self.minor_tick_mark = Some(mark);
        self
    }

    pub fn major_gridlines_set_visible(&mut self, visible: bool) -> &mut Self {
        self.major_gridlines.visible = visible;
        self
    }

    pub fn major_gridlines_set_line(&mut self, line: ChartLine) -> &mut Self {
        self.major_gridlines.line = Some(line);
        self
    }

    pub fn minor_gridlines_set_visible(&mut self, visible: bool) -> &mut Self {
        self.minor_gridlines.visible = visible;
        self
    }

    pub fn minor_gridlines_set_line(&mut self, line: ChartLine) -> &mut Self {
        self.minor_gridlines.line = Some(line);
        self
    }

    /// Resolve position, label position, crossing and visibility for
    /// assembly. Caller overrides win attribute by attribute.
    pub fn resolve(&self, has_secondary_axis: bool, cross_axis_id: u32) -> ResolvedAxis {
        let defaults = AxisDefaults::derive(self.slot, has_secondary_axis);
        ResolvedAxis {
            slot: self.slot,
            kind: self.kind,
            id: self.id,
            cross_axis_id,
            position: self.position.unwrap_or(defaults.position),
            label_position: self.label_position.unwrap_or(defaults.label_position),
            crossing: self.crossing.unwrap_or(defaults.crossing),
            deleted: self.deleted.unwrap_or(defaults.deleted),
        }
    }

    fn title_mut(&mut self) -> &mut Title {
        self.title.get_or_insert_with(Title::default)
    }

    fn accepts_scale(&self, setter: &'static str) -> bool {
        if self.kind == AxisKind::Value {
            true
        } else {
            self.ignore(setter);
            false
        }
    }

    /// NaN and infinities have no `xsd:double` form in the part.
    fn is_finite(&self, setter: &'static str, value: f64) -> bool {
        if !value.is_finite() {
            warn!(slot = ?self.slot, setter, value, "ignoring non-finite axis value");
        }
        value.is_finite()
    }

    fn ignore(&self, setter: &'static str) {
        warn!(slot = ?self.slot, kind = ?self.kind, setter, "setter does not apply to this axis kind, ignored");
    }
}

/// Derived defaults for one axis slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDefaults {
    pub position: AxisPosition,
    pub label_position: TickLabelPosition,
    pub crossing: AxisCrossing,
    pub deleted: bool,
}

impl AxisDefaults {
    /// Defaults for `slot` given whether the secondary group is in use.
    pub const fn derive(slot: AxisSlot, has_secondary_axis: bool) -> Self {
        match slot {
            AxisSlot::PrimaryX => Self {
                position: AxisPosition::Bottom,
                label_position: TickLabelPosition::NextTo,
                crossing: AxisCrossing::Auto,
                deleted: false,
            },
            AxisSlot::PrimaryY => Self {
                position: AxisPosition::Left,
                label_position: if has_secondary_axis {
                    TickLabelPosition::Low
                } else {
                    TickLabelPosition::NextTo
                },
                crossing: AxisCrossing::Auto,
                deleted: false,
            },
            AxisSlot::SecondaryX => Self {
                position: AxisPosition::Bottom,
                label_position: TickLabelPosition::NextTo,
                crossing: AxisCrossing::Max,
                deleted: true,
            },
            AxisSlot::SecondaryY => Self {
                position: AxisPosition::Right,
                label_position: TickLabelPosition::High,
                crossing: AxisCrossing::Max,
                deleted: false,
            },
        }
    }
}

/// An axis with every derived attribute filled in, ready to write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAxis {
    pub slot: AxisSlot,
    pub kind: AxisKind,
    pub id: u32,
    /// Id of the perpendicular axis of the same group
    pub cross_axis_id: u32,
    pub position: AxisPosition,
    pub label_position: TickLabelPosition,
    pub crossing: AxisCrossing,
    pub deleted: bool,
}
