//! XML text helpers shared by all part generators.

pub mod escape;
pub mod writer;

pub use escape::escape_xml;
pub use writer::{XmlWriter, format_number};
