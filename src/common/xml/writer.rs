//! Minimal streaming XML writer used by every part generator.
//!
//! The writer does no buffering or validation of its own. Element nesting is
//! the caller's responsibility; text and attribute values are escaped here.

use std::io::{self, Write};

use super::escape::{escape_xml, is_xml_safe};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Streaming XML emitter over any [`Write`] sink.
#[derive(Debug)]
pub struct XmlWriter<W: Write> {
    inner: W,
}

impl<W: Write> XmlWriter<W> {
    /// Wrap a sink.
    #[inline]
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the standalone UTF-8 XML declaration.
    pub fn declaration(&mut self) -> io::Result<()> {
        self.inner.write_all(XML_DECLARATION.as_bytes())
    }

    /// `<tag>`
    pub fn start(&mut self, tag: &str) -> io::Result<()> {
        write!(self.inner, "<{}>", tag)
    }

    /// `<tag a="1" b="2">`
    pub fn start_with_attrs(&mut self, tag: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        write!(self.inner, "<{}", tag)?;
        self.write_attrs(attrs)?;
        self.inner.write_all(b">")
    }

    /// `</tag>`
    pub fn end(&mut self, tag: &str) -> io::Result<()> {
        write!(self.inner, "</{}>", tag)
    }

    /// `<tag/>`
    pub fn empty(&mut self, tag: &str) -> io::Result<()> {
        write!(self.inner, "<{}/>", tag)
    }

    /// `<tag a="1" b="2"/>`
    pub fn empty_with_attrs(&mut self, tag: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        write!(self.inner, "<{}", tag)?;
        self.write_attrs(attrs)?;
        self.inner.write_all(b"/>")
    }

    /// `<tag val="value"/>`, the shape of most DrawingML chart properties.
    pub fn val(&mut self, tag: &str, value: &str) -> io::Result<()> {
        self.empty_with_attrs(tag, &[("val", value)])
    }

    /// `<tag val="1"/>` or `<tag val="0"/>`
    pub fn val_bool(&mut self, tag: &str, value: bool) -> io::Result<()> {
        self.val(tag, if value { "1" } else { "0" })
    }

    /// Integer-valued `val` element.
    pub fn val_int(&mut self, tag: &str, value: impl itoa::Integer) -> io::Result<()> {
        let mut buffer = itoa::Buffer::new();
        let formatted = buffer.format(value);
        self.val(tag, formatted)
    }

    /// Float-valued `val` element, formatted without trailing zeros.
    pub fn val_num(&mut self, tag: &str, value: f64) -> io::Result<()> {
        self.val(tag, &format_number(value))
    }

    /// `<tag>escaped text</tag>`
    pub fn text_element(&mut self, tag: &str, text: &str) -> io::Result<()> {
        self.start(tag)?;
        self.text(text)?;
        self.end(tag)
    }

    /// Escaped character data.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        if is_xml_safe(text) {
            self.inner.write_all(text.as_bytes())
        } else {
            self.inner.write_all(escape_xml(text).as_bytes())
        }
    }

    /// Consume the writer and return the sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) -> io::Result<()> {
        for (name, value) in attrs {
            if is_xml_safe(value) {
                write!(self.inner, r#" {}="{}""#, name, value)?;
            } else {
                write!(self.inner, r#" {}="{}""#, name, escape_xml(value))?;
            }
        }
        Ok(())
    }
}

/// Format a number the way spreadsheet XML expects it: integers without a
/// decimal point, everything else in shortest round-trip form.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        let mut buffer = itoa::Buffer::new();
        return buffer.format(n as i64).to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let s = buffer.format(n);
    if s.contains('.') && !s.contains('e') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
