//! Shared chart data models.
//!
//! Source references, titles, manual layouts, number formats and the
//! line/fill shape properties used by axes, series and chart areas.

use crate::ooxml::charts::types::LineDash;

/// Reference to a cell range holding chart data.
///
/// The formula is stored without a leading `=`; it is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceRef {
    /// Formula reference (e.g., "Sheet1!$A$1:$A$10")
    pub formula: String,
}

impl DataSourceRef {
    /// Create a new data source reference, dropping a leading `=`.
    #[inline]
    pub fn new(formula: impl Into<String>) -> Self {
        let formula = formula.into();
        let formula = match formula.strip_prefix('=') {
            Some(stripped) => stripped.to_string(),
            None => formula,
        };
        Self { formula }
    }
}

/// Title text source (can be from formula or literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleText {
    /// Literal text
    Literal(String),
    /// Reference to a cell
    Reference(DataSourceRef),
}

impl TitleText {
    /// Interpret a user-supplied name. Names starting with `=` are cell
    /// references, everything else is literal text.
    pub fn parse(name: &str) -> Self {
        if name.starts_with('=') {
            Self::Reference(DataSourceRef::new(name))
        } else {
            Self::Literal(name.to_string())
        }
    }

    /// Create from a formula reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self::Reference(DataSourceRef::new(formula))
    }
}

/// Manual layout of a chart element, in fractions of the chart area.
///
/// Titles and legends only use the position. The plot area additionally
/// uses the size and targets the inner plot rectangle when `inner` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// X position (0.0 to 1.0)
    pub x: f64,
    /// Y position (0.0 to 1.0)
    pub y: f64,
    /// Width (0.0 to 1.0), zero means automatic
    pub width: f64,
    /// Height (0.0 to 1.0), zero means automatic
    pub height: f64,
    /// Lay out the inner plot rectangle instead of the outer one
    pub inner: bool,
}

impl Layout {
    /// Position-only layout.
    #[inline]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Set size.
    #[inline]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Target the inner plot rectangle.
    #[inline]
    pub fn with_inner(mut self, inner: bool) -> Self {
        self.inner = inner;
        self
    }

    /// True when width and height are both given.
    #[inline]
    pub fn has_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A chart title or axis name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    /// Text or reference; `None` lets Excel pick a default title
    pub text: Option<TitleText>,
    /// Manual position
    pub layout: Option<Layout>,
    /// Draw the title over the plot area
    pub overlay: bool,
}

impl Title {
    /// Title with the given text.
    #[inline]
    pub fn new(text: TitleText) -> Self {
        Self {
            text: Some(text),
            ..Self::default()
        }
    }
}

/// Number format for axis and data labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Format code (e.g., "0.00", "0%")
    pub format_code: String,
    /// Whether the format is linked to source data
    pub source_linked: bool,
}

impl NumberFormat {
    /// Create a new number format, not linked to the source.
    #[inline]
    pub fn new(format_code: impl Into<String>) -> Self {
        Self {
            format_code: format_code.into(),
            source_linked: false,
        }
    }

    /// General format, linked to the source data.
    #[inline]
    pub fn general() -> Self {
        Self {
            format_code: "General".to_string(),
            source_linked: true,
        }
    }
}

impl Default for NumberFormat {
    #[inline]
    fn default() -> Self {
        Self::general()
    }
}

/// Line formatting for series, axes, gridlines and chart areas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartLine {
    /// RGB color, e.g. `0xFF0000`
    pub color: Option<u32>,
    /// Hide the line
    pub none: bool,
    /// Width in points
    pub width: Option<f64>,
    /// Dash style
    pub dash: Option<LineDash>,
    /// Transparency in percent (0-100)
    pub transparency: u8,
}

impl ChartLine {
    /// A hidden line.
    #[inline]
    pub fn hidden() -> Self {
        Self {
            none: true,
            ..Self::default()
        }
    }

    /// A solid line of the given color.
    #[inline]
    pub fn solid(color: u32) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Set the width in points.
    #[inline]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the dash style.
    #[inline]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Solid fill formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartFill {
    /// RGB color
    pub color: Option<u32>,
    /// No fill
    pub none: bool,
    /// Transparency in percent (0-100)
    pub transparency: u8,
}

impl ChartFill {
    /// A solid fill of the given color.
    #[inline]
    pub fn solid(color: u32) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// No fill.
    #[inline]
    pub fn hidden() -> Self {
        Self {
            none: true,
            ..Self::default()
        }
    }
}

/// Shape properties (`<c:spPr>`) of a chart element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeProperties {
    pub line: Option<ChartLine>,
    pub fill: Option<ChartFill>,
}

impl ShapeProperties {
    /// True when nothing would be written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.fill.is_none()
    }
}
