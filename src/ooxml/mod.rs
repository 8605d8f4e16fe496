//! Office Open XML (OOXML) chart output.
//!
//! - `charts`: DrawingML chart model and chart part writer
//! - `xlsx`: workbook placement of charts and the parts that embed them
pub mod charts;
pub mod xlsx;
