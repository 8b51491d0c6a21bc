//! XML writer used by the generated element encoders.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::options::EncodeOptions;
use crate::error::Ead3Error;
use crate::model::Markup;

/// Thin wrapper over `quick_xml::Writer` with leaf helpers that never
/// let indentation leak into text content.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(sink: W, options: &EncodeOptions) -> Self {
        let writer = match options.indent() {
            Some((indent_char, indent_size)) => Writer::new_with_indent(sink, indent_char, indent_size),
            None => Writer::new(sink),
        };
        Self { writer }
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), Ead3Error> {
        self.writer
            .write_event(event)
            .map_err(|e| Ead3Error::write(format!("{e}")))
    }

    pub fn declaration(&mut self) -> Result<(), Ead3Error> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub fn start_element(&mut self, start: BytesStart<'_>) -> Result<(), Ead3Error> {
        self.emit(Event::Start(start))
    }

    pub fn end_element(&mut self, tag: &str) -> Result<(), Ead3Error> {
        self.emit(Event::End(BytesEnd::new(tag)))
    }

    /// Write `<tag ...>text</tag>`, escaping the text.
    pub fn text_element(&mut self, start: BytesStart<'_>, text: &str) -> Result<(), Ead3Error> {
        let end = start.to_end().into_owned();
        self.emit(Event::Start(start))?;
        // Always emit the text event, even when empty, so the end tag stays inline.
        self.emit(Event::Text(BytesText::new(text)))?;
        self.emit(Event::End(end))
    }

    /// Write `<tag ...>markup</tag>`, copying the markup unchanged.
    pub fn markup_element(&mut self, start: BytesStart<'_>, markup: &Markup) -> Result<(), Ead3Error> {
        let end = start.to_end().into_owned();
        self.emit(Event::Start(start))?;
        self.emit(Event::Text(BytesText::from_escaped(markup.as_str())))?;
        self.emit(Event::End(end))
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
