//! Chart placement and drawing parts.
//!
//! Charts are embedded through a drawing part: worksheets anchor each chart
//! to a cell range, chartsheets place their single chart at a fixed absolute
//! size. This module computes anchors and writes `xl/drawings/drawingN.xml`
//! along with its relationships.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};
use crate::common::xml::XmlWriter;
use crate::ooxml::xlsx::reference::{MAX_COLS, MAX_ROWS, check_cell};

/// Default chart width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 480;
/// Default chart height in pixels.
pub const DEFAULT_CHART_HEIGHT: u32 = 288;
/// Default column width in pixels.
pub const DEFAULT_COLUMN_WIDTH: u32 = 64;
/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: u32 = 20;
/// EMUs per pixel at 96 dpi.
pub const EMU_PER_PIXEL: i64 = 9525;

/// Extent of a chart on a chartsheet, in EMUs.
pub const CHARTSHEET_EXTENT: (i64, i64) = (9_308_969, 6_078_325);

const NS_SPREADSHEET_DRAWING: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

/// Relationship type of a drawing's chart target.
pub const REL_TYPE_CHART: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
/// Relationship type of a sheet's drawing target.
pub const REL_TYPE_DRAWING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing";

/// Placement options for a chart inserted into a worksheet.
///
/// Loadable from YAML:
///
/// ```rust
/// use xlsxchart::ooxml::xlsx::chart::ChartOptions;
///
/// let options = ChartOptions::from_yaml("x_offset: 25\ny_scale: 1.5\n")?;
/// assert_eq!(options.x_offset, 25);
/// assert_eq!(options.x_scale, 1.0);
/// # Ok::<(), xlsxchart::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Horizontal offset from the anchor cell, in pixels
    pub x_offset: u32,
    /// Vertical offset from the anchor cell, in pixels
    pub y_offset: u32,
    /// Horizontal scale of the default width
    pub x_scale: f64,
    /// Vertical scale of the default height
    pub y_scale: f64,
    /// Alternative text for the chart
    pub description: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            x_scale: 1.0,
            y_scale: 1.0,
            description: None,
        }
    }
}

impl ChartOptions {
    /// Parse options from a YAML document. Missing fields take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse chart options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize options to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize chart options: {}", e)))
    }

    /// Reject scales that would produce an empty or inverted chart.
    pub fn validate(&self) -> Result<()> {
        if !(self.x_scale > 0.0 && self.x_scale.is_finite())
            || !(self.y_scale > 0.0 && self.y_scale.is_finite())
        {
            return Err(Error::Config(format!(
                "chart scale must be positive, got {} x {}",
                self.x_scale, self.y_scale
            )));
        }
        Ok(())
    }

    /// Scaled size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (
            (f64::from(DEFAULT_CHART_WIDTH) * self.x_scale).round() as u32,
            (f64::from(DEFAULT_CHART_HEIGHT) * self.y_scale).round() as u32,
        )
    }
}

/// Two-cell anchor of a chart in a worksheet.
///
/// Cells are zero-based; offsets are EMUs from the cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartAnchor {
    /// Starting column (0-based)
    pub from_col: u32,
    /// Offset from the left edge of from_col (in EMUs)
    pub from_col_offset: i64,
    /// Starting row (0-based)
    pub from_row: u32,
    /// Offset from the top edge of from_row (in EMUs)
    pub from_row_offset: i64,
    /// Ending column (0-based)
    pub to_col: u32,
    /// Offset from the left edge of to_col (in EMUs)
    pub to_col_offset: i64,
    /// Ending row (0-based)
    pub to_row: u32,
    /// Offset from the top edge of to_row (in EMUs)
    pub to_row_offset: i64,
}

impl ChartAnchor {
    /// Compute the anchor of a chart inserted at (row, col), assuming default
    /// column widths and row heights.
    ///
    /// The insertion cell must lie inside the worksheet, and the whole chart
    /// must end inside it too.
    pub fn from_position(row: u32, col: u32, options: &ChartOptions) -> Result<Self> {
        check_cell(row, col)?;
        let (width, height) = options.size();
        let (col_width, row_height) = (u64::from(DEFAULT_COLUMN_WIDTH), u64::from(DEFAULT_ROW_HEIGHT));

        let x_offset = u64::from(options.x_offset);
        let y_offset = u64::from(options.y_offset);
        let from_col = u64::from(col) + x_offset / col_width;
        let x1 = x_offset % col_width;
        let from_row = u64::from(row) + y_offset / row_height;
        let y1 = y_offset % row_height;

        let right = x1 + u64::from(width);
        let bottom = y1 + u64::from(height);
        let to_col = from_col + right / col_width;
        let to_row = from_row + bottom / row_height;

        if to_col >= u64::from(MAX_COLS) || to_row >= u64::from(MAX_ROWS) {
            return Err(Error::Config(format!(
                "chart at row {} col {} with size {}x{} extends past the worksheet",
                row, col, width, height
            )));
        }

        // Every value below is bounded by the grid check or the cell size.
        Ok(Self {
            from_col: from_col as u32,
            from_col_offset: x1 as i64 * EMU_PER_PIXEL,
            from_row: from_row as u32,
            from_row_offset: y1 as i64 * EMU_PER_PIXEL,
            to_col: to_col as u32,
            to_col_offset: (right % col_width) as i64 * EMU_PER_PIXEL,
            to_row: to_row as u32,
            to_row_offset: (bottom % row_height) as i64 * EMU_PER_PIXEL,
        })
    }
}

/// How a chart is placed within its drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingAnchor {
    /// Worksheet chart, moves with its cells
    TwoCell(ChartAnchor),
    /// Chartsheet chart, fixed size
    Absolute { cx: i64, cy: i64 },
}

/// One chart frame in a drawing part.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingFrame {
    pub anchor: DrawingAnchor,
    /// Relationship id of the chart target, e.g. `rId1`
    pub rel_id: String,
    pub description: Option<String>,
}

/// Write a drawing part holding chart frames.
pub fn write_drawing<W: Write>(w: &mut XmlWriter<W>, frames: &[DrawingFrame]) -> Result<()> {
    w.declaration()?;
    w.start_with_attrs(
        "xdr:wsDr",
        &[("xmlns:xdr", NS_SPREADSHEET_DRAWING), ("xmlns:a", NS_DRAWING)],
    )?;

    for (idx, frame) in frames.iter().enumerate() {
        match frame.anchor {
            DrawingAnchor::TwoCell(anchor) => {
                w.start_with_attrs("xdr:twoCellAnchor", &[("editAs", "oneCell")])?;
                write_marker(
                    w,
                    "xdr:from",
                    (anchor.from_col, anchor.from_col_offset),
                    (anchor.from_row, anchor.from_row_offset),
                )?;
                write_marker(
                    w,
                    "xdr:to",
                    (anchor.to_col, anchor.to_col_offset),
                    (anchor.to_row, anchor.to_row_offset),
                )?;
                write_graphic_frame(w, idx + 1, frame)?;
                w.empty("xdr:clientData")?;
                w.end("xdr:twoCellAnchor")?;
            },
            DrawingAnchor::Absolute { cx, cy } => {
                w.start("xdr:absoluteAnchor")?;
                w.empty_with_attrs("xdr:pos", &[("x", "0"), ("y", "0")])?;
                let (cx, cy) = (cx.to_string(), cy.to_string());
                w.empty_with_attrs("xdr:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
                write_graphic_frame(w, idx + 1, frame)?;
                w.empty("xdr:clientData")?;
                w.end("xdr:absoluteAnchor")?;
            },
        }
    }

    w.end("xdr:wsDr")?;
    Ok(())
}

fn write_marker<W: Write>(
    w: &mut XmlWriter<W>,
    tag: &str,
    (col, col_offset): (u32, i64),
    (row, row_offset): (u32, i64),
) -> Result<()> {
    w.start(tag)?;
    w.text_element("xdr:col", itoa::Buffer::new().format(col))?;
    w.text_element("xdr:colOff", itoa::Buffer::new().format(col_offset))?;
    w.text_element("xdr:row", itoa::Buffer::new().format(row))?;
    w.text_element("xdr:rowOff", itoa::Buffer::new().format(row_offset))?;
    w.end(tag)?;
    Ok(())
}

fn write_graphic_frame<W: Write>(
    w: &mut XmlWriter<W>,
    number: usize,
    frame: &DrawingFrame,
) -> Result<()> {
    let id = (number + 1).to_string();
    let name = format!("Chart {}", number);

    w.start_with_attrs("xdr:graphicFrame", &[("macro", "")])?;
    w.start("xdr:nvGraphicFramePr")?;
    match &frame.description {
        Some(description) => w.empty_with_attrs(
            "xdr:cNvPr",
            &[("id", id.as_str()), ("name", name.as_str()), ("descr", description.as_str())],
        )?,
        None => w.empty_with_attrs("xdr:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?,
    }
    w.empty("xdr:cNvGraphicFramePr")?;
    w.end("xdr:nvGraphicFramePr")?;

    w.start("xdr:xfrm")?;
    w.empty_with_attrs("a:off", &[("x", "0"), ("y", "0")])?;
    w.empty_with_attrs("a:ext", &[("cx", "0"), ("cy", "0")])?;
    w.end("xdr:xfrm")?;

    w.start("a:graphic")?;
    w.start_with_attrs("a:graphicData", &[("uri", NS_CHART)])?;
    w.empty_with_attrs(
        "c:chart",
        &[
            ("xmlns:c", NS_CHART),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("r:id", frame.rel_id.as_str()),
        ],
    )?;
    w.end("a:graphicData")?;
    w.end("a:graphic")?;
    w.end("xdr:graphicFrame")?;
    Ok(())
}

/// Write a relationships part whose targets all share one type.
pub fn write_relationships<W: Write>(
    w: &mut XmlWriter<W>,
    rel_type: &str,
    targets: &[String],
) -> Result<()> {
    w.declaration()?;
    w.start_with_attrs("Relationships", &[("xmlns", NS_PACKAGE_RELATIONSHIPS)])?;
    for (idx, target) in targets.iter().enumerate() {
        let id = format!("rId{}", idx + 1);
        w.empty_with_attrs(
            "Relationship",
            &[("Id", id.as_str()), ("Type", rel_type), ("Target", target.as_str())],
        )?;
    }
    w.end("Relationships")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> Result<()>) -> String {
        let mut writer = XmlWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_default_anchor_at_e9() {
        let anchor = ChartAnchor::from_position(8, 4, &ChartOptions::default()).unwrap();
        assert_eq!((anchor.from_col, anchor.from_row), (4, 8));
        assert_eq!((anchor.from_col_offset, anchor.from_row_offset), (0, 0));
        // 480 / 64 = 7.5 columns, 288 / 20 = 14.4 rows
        assert_eq!((anchor.to_col, anchor.to_col_offset), (11, 32 * EMU_PER_PIXEL));
        assert_eq!((anchor.to_row, anchor.to_row_offset), (22, 8 * EMU_PER_PIXEL));
    }

    #[test]
    fn test_anchor_with_offsets_and_scale() {
        let options = ChartOptions {
            x_offset: 70,
            y_offset: 25,
            x_scale: 0.5,
            y_scale: 0.5,
            description: None,
        };
        let anchor = ChartAnchor::from_position(0, 0, &options).unwrap();
        assert_eq!((anchor.from_col, anchor.from_col_offset), (1, 6 * EMU_PER_PIXEL));
        assert_eq!((anchor.from_row, anchor.from_row_offset), (1, 5 * EMU_PER_PIXEL));
        // 6 + 240 = 246 px -> 3 columns + 54 px; 5 + 144 = 149 px -> 7 rows + 9 px
        assert_eq!((anchor.to_col, anchor.to_col_offset), (4, 54 * EMU_PER_PIXEL));
        assert_eq!((anchor.to_row, anchor.to_row_offset), (8, 9 * EMU_PER_PIXEL));
    }

    #[test]
    fn test_anchor_past_worksheet_is_rejected() {
        let huge = ChartOptions {
            x_offset: 1,
            x_scale: 1e10,
            ..ChartOptions::default()
        };
        assert!(matches!(ChartAnchor::from_position(0, 0, &huge), Err(Error::Config(_))));

        let offset = ChartOptions {
            y_offset: u32::MAX,
            ..ChartOptions::default()
        };
        assert!(matches!(ChartAnchor::from_position(0, 0, &offset), Err(Error::Config(_))));

        // Inserted in the last column, the default chart runs off the grid.
        assert!(matches!(
            ChartAnchor::from_position(0, MAX_COLS - 1, &ChartOptions::default()),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ChartAnchor::from_position(MAX_ROWS, 0, &ChartOptions::default()),
            Err(Error::InvalidCellReference(_))
        ));
    }

    #[test]
    fn test_options_from_yaml() {
        let options = ChartOptions::from_yaml("x_scale: 2.0\ndescription: Budget chart\n").unwrap();
        assert_eq!(options.x_scale, 2.0);
        assert_eq!(options.y_scale, 1.0);
        assert_eq!(options.description.as_deref(), Some("Budget chart"));

        assert!(matches!(ChartOptions::from_yaml("x_scale: 0\n"), Err(Error::Config(_))));
        assert!(matches!(ChartOptions::from_yaml("x_offset: [1, 2]\n"), Err(Error::Config(_))));
    }

    #[test]
    fn test_options_yaml_round_trip() {
        let options = ChartOptions {
            x_offset: 10,
            ..ChartOptions::default()
        };
        let yaml = options.to_yaml().unwrap();
        assert_eq!(ChartOptions::from_yaml(&yaml).unwrap(), options);
    }

    #[test]
    fn test_two_cell_drawing() {
        let frame = DrawingFrame {
            anchor: DrawingAnchor::TwoCell(ChartAnchor::from_position(1, 4, &ChartOptions::default()).unwrap()),
            rel_id: "rId1".to_string(),
            description: None,
        };
        let xml = render(|w| write_drawing(w, &[frame]));
        assert!(xml.contains(r#"<xdr:twoCellAnchor editAs="oneCell">"#));
        assert!(xml.contains("<xdr:from><xdr:col>4</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>1</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from>"));
        assert!(xml.contains(r#"<xdr:cNvPr id="2" name="Chart 1"/>"#));
        assert!(xml.contains(r#"r:id="rId1"/>"#));
    }

    #[test]
    fn test_absolute_drawing() {
        let frame = DrawingFrame {
            anchor: DrawingAnchor::Absolute {
                cx: CHARTSHEET_EXTENT.0,
                cy: CHARTSHEET_EXTENT.1,
            },
            rel_id: "rId1".to_string(),
            description: Some("Scatter".to_string()),
        };
        let xml = render(|w| write_drawing(w, &[frame]));
        assert!(xml.contains(r#"<xdr:absoluteAnchor><xdr:pos x="0" y="0"/><xdr:ext cx="9308969" cy="6078325"/>"#));
        assert!(xml.contains(r#"descr="Scatter""#));
    }

    #[test]
    fn test_relationships() {
        let xml = render(|w| {
            let targets = ["../charts/chart1.xml".to_string(), "../charts/chart2.xml".to_string()];
            write_relationships(w, REL_TYPE_CHART, &targets)
        });
        assert!(xml.contains(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart" Target="../charts/chart2.xml"/>"#));
    }
}
