//! Workbook-level writer components for XLSX chart output.

pub mod chartsheet;
pub mod workbook;

// Re-export main types
pub use chartsheet::write_chartsheet;
pub use workbook::{ChartId, Package, PackagePart, SheetId, SheetKind, Workbook};
