//! Chartsheet part generation.

use std::io::Write;

use crate::common::error::Result;
use crate::common::xml::XmlWriter;

const NS_SPREADSHEET: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Write `xl/chartsheets/sheetN.xml`. The sheet's only content is the
/// drawing referenced by `drawing_rel_id`.
pub fn write_chartsheet<W: Write>(
    w: &mut XmlWriter<W>,
    drawing_rel_id: &str,
    selected: bool,
) -> Result<()> {
    w.declaration()?;
    w.start_with_attrs(
        "chartsheet",
        &[("xmlns", NS_SPREADSHEET), ("xmlns:r", NS_RELATIONSHIPS)],
    )?;
    w.empty("sheetPr")?;
    w.start("sheetViews")?;
    if selected {
        w.empty_with_attrs(
            "sheetView",
            &[("tabSelected", "1"), ("zoomToFit", "1"), ("workbookViewId", "0")],
        )?;
    } else {
        w.empty_with_attrs("sheetView", &[("zoomToFit", "1"), ("workbookViewId", "0")])?;
    }
    w.end("sheetViews")?;
    w.empty_with_attrs(
        "pageMargins",
        &[
            ("left", "0.7"),
            ("right", "0.7"),
            ("top", "0.75"),
            ("bottom", "0.75"),
            ("header", "0.3"),
            ("footer", "0.3"),
        ],
    )?;
    w.empty_with_attrs("drawing", &[("r:id", drawing_rel_id)])?;
    w.end("chartsheet")?;
    Ok(())
}
