//! Workbook-level chart management and package output.
//!
//! The workbook owns every chart, hands out document-unique axis ids, records
//! where each chart is placed, and at [`Workbook::close`] writes every placed
//! chart exactly once together with the drawing and chartsheet parts that
//! embed it.

use std::path::Path;

use tracing::{debug, warn};

use crate::common::error::{Error, Result};
use crate::common::id::AxisIdAllocator;
use crate::common::xml::XmlWriter;
use crate::ooxml::charts::chart::Chart;
use crate::ooxml::charts::types::ChartType;
use crate::ooxml::charts::writer::write_chart;
use crate::ooxml::xlsx::chart::{
    CHARTSHEET_EXTENT, ChartAnchor, ChartOptions, DrawingAnchor, DrawingFrame, REL_TYPE_CHART,
    REL_TYPE_DRAWING, write_drawing, write_relationships,
};
use crate::ooxml::xlsx::reference::parse_cell_reference;

use super::chartsheet::write_chartsheet;

/// Maximum sheet name length accepted by Excel.
const MAX_SHEET_NAME_LEN: usize = 31;
const INVALID_SHEET_NAME_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Handle to a sheet of a [`Workbook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(usize);

/// Handle to a chart of a [`Workbook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(usize);

impl ChartId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Sheet flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Worksheet,
    Chartsheet,
}

#[derive(Debug)]
struct Placement {
    chart: ChartId,
    anchor: DrawingAnchor,
    description: Option<String>,
}

#[derive(Debug)]
struct Sheet {
    name: String,
    kind: SheetKind,
    placements: Vec<Placement>,
}

#[derive(Debug)]
struct ChartEntry {
    chart: Chart,
    placed: bool,
}

/// A workbook's chart content.
#[derive(Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    charts: Vec<ChartEntry>,
    axis_ids: AxisIdAllocator,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worksheet. `None` picks the next free `SheetN` name.
    pub fn add_worksheet(&mut self, name: Option<&str>) -> Result<SheetId> {
        self.add_sheet(name, SheetKind::Worksheet)
    }

    /// Add a chartsheet. `None` picks the next free `ChartN` name.
    pub fn add_chartsheet(&mut self, name: Option<&str>) -> Result<SheetId> {
        self.add_sheet(name, SheetKind::Chartsheet)
    }

    /// Name of a sheet.
    pub fn sheet_name(&self, sheet: SheetId) -> Result<&str> {
        Ok(self.sheet(sheet)?.name.as_str())
    }

    /// Create a chart owned by this workbook.
    pub fn add_chart(&mut self, chart_type: ChartType) -> ChartId {
        let chart = Chart::with_axis_ids(chart_type, self.axis_ids.next_chart());
        self.charts.push(ChartEntry {
            chart,
            placed: false,
        });
        ChartId(self.charts.len() - 1)
    }

    pub fn chart(&self, chart: ChartId) -> Result<&Chart> {
        self.charts
            .get(chart.0)
            .map(|entry| &entry.chart)
            .ok_or_else(|| Error::InvalidHandle(format!("chart {}", chart.0)))
    }

    pub fn chart_mut(&mut self, chart: ChartId) -> Result<&mut Chart> {
        self.charts
            .get_mut(chart.0)
            .map(|entry| &mut entry.chart)
            .ok_or_else(|| Error::InvalidHandle(format!("chart {}", chart.0)))
    }

    /// Insert a chart into a worksheet with its top-left corner at (row, col).
    pub fn insert_chart(&mut self, sheet: SheetId, row: u32, col: u32, chart: ChartId) -> Result<()> {
        self.insert_chart_opt(sheet, row, col, chart, &ChartOptions::default())
    }

    /// Insert a chart at an A1-style cell such as `"E9"`.
    pub fn insert_chart_at(&mut self, sheet: SheetId, cell: &str, chart: ChartId) -> Result<()> {
        let (row, col) = parse_cell_reference(cell)?;
        self.insert_chart(sheet, row, col, chart)
    }

    /// Insert a chart with placement options.
    pub fn insert_chart_opt(
        &mut self,
        sheet: SheetId,
        row: u32,
        col: u32,
        chart: ChartId,
        options: &ChartOptions,
    ) -> Result<()> {
        options.validate()?;
        if self.sheet(sheet)?.kind != SheetKind::Worksheet {
            return Err(Error::FeatureNotSupported(
                "charts are inserted into chartsheets with set_chartsheet_chart".to_string(),
            ));
        }
        let anchor = ChartAnchor::from_position(row, col, options)?;
        self.mark_placed(chart)?;

        self.sheets[sheet.0].placements.push(Placement {
            chart,
            anchor: DrawingAnchor::TwoCell(anchor),
            description: options.description.clone(),
        });
        debug!(sheet = sheet.0, chart = chart.0, row, col, "inserted chart");
        Ok(())
    }

    /// Make a chart the content of a chartsheet.
    pub fn set_chartsheet_chart(&mut self, sheet: SheetId, chart: ChartId) -> Result<()> {
        let target = self.sheet(sheet)?;
        if target.kind != SheetKind::Chartsheet {
            return Err(Error::FeatureNotSupported(
                "set_chartsheet_chart requires a chartsheet".to_string(),
            ));
        }
        if !target.placements.is_empty() {
            return Err(Error::FeatureNotSupported(format!(
                "chartsheet {} already holds a chart",
                target.name
            )));
        }
        self.mark_placed(chart)?;

        let (cx, cy) = CHARTSHEET_EXTENT;
        self.sheets[sheet.0].placements.push(Placement {
            chart,
            anchor: DrawingAnchor::Absolute { cx, cy },
            description: None,
        });
        debug!(sheet = sheet.0, chart = chart.0, "set chartsheet chart");
        Ok(())
    }

    /// Assemble every placed chart and the parts embedding it.
    ///
    /// Charts are numbered in sheet order, then placement order. Charts that
    /// were never placed are skipped.
    pub fn close(self) -> Result<Package> {
        for (idx, entry) in self.charts.iter().enumerate() {
            if !entry.placed {
                warn!(chart = idx, chart_type = %entry.chart.chart_type(), "chart was never placed, skipping");
            }
        }

        let mut package = Package::default();
        let mut chart_number = 0usize;
        let mut drawing_number = 0usize;
        let mut worksheet_number = 0usize;
        let mut chartsheet_number = 0usize;

        for (sheet_idx, sheet) in self.sheets.iter().enumerate() {
            let sheet_number = match sheet.kind {
                SheetKind::Worksheet => {
                    worksheet_number += 1;
                    worksheet_number
                },
                SheetKind::Chartsheet => {
                    chartsheet_number += 1;
                    chartsheet_number
                },
            };
            if sheet.placements.is_empty() {
                continue;
            }
            drawing_number += 1;

            let mut frames = Vec::with_capacity(sheet.placements.len());
            let mut chart_targets = Vec::with_capacity(sheet.placements.len());
            for (idx, placement) in sheet.placements.iter().enumerate() {
                chart_number += 1;
                let chart = &self.charts[placement.chart.0].chart;
                package.push(format!("xl/charts/chart{}.xml", chart_number), |w| write_chart(w, chart))?;

                chart_targets.push(format!("../charts/chart{}.xml", chart_number));
                frames.push(DrawingFrame {
                    anchor: placement.anchor,
                    rel_id: format!("rId{}", idx + 1),
                    description: placement.description.clone(),
                });
            }

            package.push(format!("xl/drawings/drawing{}.xml", drawing_number), |w| {
                write_drawing(w, &frames)
            })?;
            package.push(
                format!("xl/drawings/_rels/drawing{}.xml.rels", drawing_number),
                |w| write_relationships(w, REL_TYPE_CHART, &chart_targets),
            )?;

            let drawing_target = vec![format!("../drawings/drawing{}.xml", drawing_number)];
            match sheet.kind {
                SheetKind::Worksheet => {
                    package.push(
                        format!("xl/worksheets/_rels/sheet{}.xml.rels", sheet_number),
                        |w| write_relationships(w, REL_TYPE_DRAWING, &drawing_target),
                    )?;
                },
                SheetKind::Chartsheet => {
                    package.push(format!("xl/chartsheets/sheet{}.xml", sheet_number), |w| {
                        write_chartsheet(w, "rId1", sheet_idx == 0)
                    })?;
                    package.push(
                        format!("xl/chartsheets/_rels/sheet{}.xml.rels", sheet_number),
                        |w| write_relationships(w, REL_TYPE_DRAWING, &drawing_target),
                    )?;
                },
            }
        }

        debug!(
            sheets = self.sheets.len(),
            charts = chart_number,
            parts = package.parts.len(),
            "closed workbook"
        );
        Ok(package)
    }

    fn add_sheet(&mut self, name: Option<&str>, kind: SheetKind) -> Result<SheetId> {
        let name = match name {
            Some(name) => {
                validate_sheet_name(name)?;
                name.to_string()
            },
            None => self.default_sheet_name(kind),
        };
        if self
            .sheets
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(&name))
        {
            return Err(Error::DuplicateSheetName(name));
        }

        self.sheets.push(Sheet {
            name,
            kind,
            placements: Vec::new(),
        });
        Ok(SheetId(self.sheets.len() - 1))
    }

    fn default_sheet_name(&self, kind: SheetKind) -> String {
        let prefix = match kind {
            SheetKind::Worksheet => "Sheet",
            SheetKind::Chartsheet => "Chart",
        };
        let count = self.sheets.iter().filter(|s| s.kind == kind).count();
        format!("{}{}", prefix, count + 1)
    }

    fn sheet(&self, sheet: SheetId) -> Result<&Sheet> {
        self.sheets
            .get(sheet.0)
            .ok_or_else(|| Error::InvalidHandle(format!("sheet {}", sheet.0)))
    }

    fn mark_placed(&mut self, chart: ChartId) -> Result<()> {
        let entry = self
            .charts
            .get_mut(chart.0)
            .ok_or_else(|| Error::InvalidHandle(format!("chart {}", chart.0)))?;
        if entry.placed {
            return Err(Error::ChartAlreadyPlaced(chart.0));
        }
        entry.placed = true;
        Ok(())
    }
}

fn validate_sheet_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidSheetName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("name is empty");
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return invalid("name is longer than 31 characters");
    }
    if name.contains(INVALID_SHEET_NAME_CHARS) {
        return invalid("name contains one of []:*?/\\");
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return invalid("name starts or ends with an apostrophe");
    }
    Ok(())
}

/// One generated part of the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    /// Part name inside the package, e.g. `xl/charts/chart1.xml`
    pub name: String,
    pub content: String,
}

/// The parts produced by [`Workbook::close`], in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    parts: Vec<PackagePart>,
}

impl Package {
    #[inline]
    pub fn parts(&self) -> &[PackagePart] {
        &self.parts
    }

    /// Content of a part by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.content.as_str())
    }

    pub fn into_parts(self) -> Vec<PackagePart> {
        self.parts
    }

    /// Write every part below `dir`, creating directories as needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        for part in &self.parts {
            let path = dir.join(&part.name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, part.content.as_bytes())?;
        }
        Ok(())
    }

    fn push(
        &mut self,
        name: String,
        write: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> Result<()>,
    ) -> Result<()> {
        let mut writer = XmlWriter::new(Vec::with_capacity(2048));
        write(&mut writer)?;
        let content = String::from_utf8(writer.into_inner())?;
        self.parts.push(PackagePart { name, content });
        Ok(())
    }
}
