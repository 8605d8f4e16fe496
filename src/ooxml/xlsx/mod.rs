//! Excel (.xlsx) chart embedding.
//!
//! This module places chart parts into a workbook package:
//!
//! - `chart`: placement options, drawing anchors, drawing and relationship parts
//! - `reference`: A1-style cell references and sheet-qualified formulas
//! - `writer`: the [`Workbook`] that owns charts and produces the [`Package`]

pub mod chart;
pub mod reference;
pub mod writer;

pub use chart::{ChartAnchor, ChartOptions, DrawingAnchor, DrawingFrame};
pub use writer::{ChartId, Package, PackagePart, SheetId, SheetKind, Workbook};
