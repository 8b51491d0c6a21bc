//! Pull-based XML cursor used by the generated element decoders.
//!
//! The cursor wraps a `quick_xml` slice reader. Element decoders ask it for
//! their next child, for the character data of a text leaf, or for the raw
//! inner span of a markup leaf. Depth is tracked so every path that consumes
//! an end tag keeps the counter balanced.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::name::QName;
use tracing::{debug, trace, warn};

use super::options::DecodeOptions;
use crate::error::{DecodeWarning, Ead3Error};
use crate::model::Markup;
use crate::schema::ChildSchema;

/// Decodes one child element into its parent node.
pub type ChildHandler<T> =
    for<'a> fn(&mut T, &mut XmlCursor<'a>, ElementStart) -> Result<(), Ead3Error>;

/// Pins a closure to the [`ChildHandler`] signature.
pub fn handler<T>(f: ChildHandler<T>) -> ChildHandler<T> {
    f
}

/// An opened element: its name, attributes, and whether it was self-closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStart {
    qname: String,
    local_name: String,
    attributes: Vec<(String, String)>,
    empty: bool,
}

impl ElementStart {
    /// The qualified name as written, prefix included.
    pub fn name(&self) -> &str {
        &self.qname
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// True for `<tag/>`.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Attributes in document order, values entity-decoded.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn take_attributes(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.attributes)
    }
}

/// Cursor over a borrowed XML document.
pub struct XmlCursor<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    depth: usize,
    max_depth: usize,
    warnings: Vec<DecodeWarning>,
}

impl<'a> XmlCursor<'a> {
    pub fn new(source: &'a str, options: &DecodeOptions) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = true;
        Self {
            source,
            reader,
            depth: 0,
            max_depth: options.max_depth,
            warnings: Vec::new(),
        }
    }

    /// Byte offset of the reader in the source.
    pub fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    /// Warnings collected so far.
    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<DecodeWarning> {
        self.warnings
    }

    fn malformed(&self, message: impl Into<String>) -> Ead3Error {
        Ead3Error::malformed(self.position(), message)
    }

    fn read(&mut self) -> Result<Event<'a>, Ead3Error> {
        self.reader
            .read_event()
            .map_err(|e| Ead3Error::malformed(self.reader.error_position() as u64, e.to_string()))
    }

    fn enter(&mut self) -> Result<(), Ead3Error> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.malformed(format!(
                "elements nested deeper than {} levels",
                self.max_depth
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn element_start(&self, e: &BytesStart<'_>, empty: bool) -> Result<ElementStart, Ead3Error> {
        let qname = std::str::from_utf8(e.name().as_ref())
            .map_err(|err| self.malformed(format!("invalid tag name: {err}")))?
            .to_string();
        let local_name = std::str::from_utf8(e.local_name().as_ref())
            .map_err(|err| self.malformed(format!("invalid tag name: {err}")))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.malformed(format!("attribute error: {err}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|err| self.malformed(format!("attribute key error: {err}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| self.malformed(format!("attribute value error: {err}")))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(ElementStart {
            qname,
            local_name,
            attributes,
            empty,
        })
    }

    fn opened(&mut self, e: &BytesStart<'_>) -> Result<ElementStart, Ead3Error> {
        let start = self.element_start(e, false)?;
        self.enter()?;
        Ok(start)
    }

    /// Skip the prolog and open the root element.
    pub fn root(&mut self) -> Result<ElementStart, Ead3Error> {
        loop {
            match self.read()? {
                Event::Start(e) => return self.opened(&e),
                Event::Empty(e) => return self.element_start(&e, true),
                Event::Text(t) if is_blank(&t) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.malformed("text before the root element"));
                }
                Event::End(_) => return Err(self.malformed("end tag before the root element")),
                Event::Eof => return Err(self.malformed("document has no root element")),
                _ => {}
            }
        }
    }

    /// Consume everything after the root element, rejecting a second root.
    pub fn finish(&mut self) -> Result<(), Ead3Error> {
        loop {
            match self.read()? {
                Event::Eof => return Ok(()),
                Event::Start(_) | Event::Empty(_) | Event::End(_) | Event::CData(_) => {
                    return Err(self.malformed("content after the root element"));
                }
                Event::Text(t) if !is_blank(&t) => {
                    return Err(self.malformed("text after the root element"));
                }
                _ => {}
            }
        }
    }

    /// Open the next child of the current element, or consume the
    /// current element's end tag and return `None`.
    pub fn next_child(&mut self, parent: &str) -> Result<Option<ElementStart>, Ead3Error> {
        loop {
            match self.read()? {
                Event::Start(e) => return self.opened(&e).map(Some),
                Event::Empty(e) => return self.element_start(&e, true).map(Some),
                Event::End(_) => {
                    self.leave();
                    return Ok(None);
                }
                Event::Eof => {
                    return Err(self.malformed(format!("unexpected end of input inside <{parent}>")));
                }
                Event::Text(t) if !is_blank(&t) => self.unexpected_text(parent),
                Event::CData(_) => self.unexpected_text(parent),
                _ => {}
            }
        }
    }

    /// Walk the children of an opened element, dispatching each by tag to
    /// the handler of the slot accepting it. `handlers` runs parallel to
    /// `slots`. Tags no slot accepts are skipped together with their subtree.
    ///
    /// Tags are matched as written: EAD3 elements live in the default
    /// namespace, so a prefixed `<ead:did>` is an unknown element.
    pub fn read_children<T>(
        &mut self,
        node: &mut T,
        parent: &'static str,
        slots: &[ChildSchema],
        handlers: &[ChildHandler<T>],
    ) -> Result<(), Ead3Error> {
        while let Some(child) = self.next_child(parent)? {
            let handle = slots
                .iter()
                .position(|slot| slot.accepts(child.name()))
                .and_then(|index| handlers.get(index));
            match handle {
                Some(handle) => handle(node, self, child)?,
                None => self.skip_unknown(parent, child)?,
            }
        }
        Ok(())
    }

    /// Character data of a text leaf, entity-decoded, whitespace kept.
    pub fn read_text(&mut self, start: &ElementStart) -> Result<String, Ead3Error> {
        let mut text = String::new();
        if start.empty {
            return Ok(text);
        }
        loop {
            match self.read()? {
                Event::Text(t) => {
                    let chunk = t
                        .unescape()
                        .map_err(|e| self.malformed(format!("text error: {e}")))?;
                    text.push_str(&chunk);
                }
                Event::CData(c) => {
                    let chunk = std::str::from_utf8(&c)
                        .map_err(|e| self.malformed(format!("CDATA error: {e}")))?;
                    text.push_str(chunk);
                }
                Event::Start(e) => {
                    let nested = self.opened(&e)?;
                    self.skip_unknown(start.name(), nested)?;
                }
                Event::Empty(e) => {
                    let nested = self.element_start(&e, true)?;
                    self.skip_unknown(start.name(), nested)?;
                }
                Event::End(_) => {
                    self.leave();
                    return Ok(text);
                }
                Event::Eof => {
                    return Err(self.malformed(format!(
                        "unexpected end of input inside <{}>",
                        start.name()
                    )));
                }
                _ => {}
            }
        }
    }

    /// Raw inner markup of a free-text leaf, byte-for-byte.
    pub fn read_markup(&mut self, start: &ElementStart) -> Result<Markup, Ead3Error> {
        if start.empty {
            return Ok(Markup::default());
        }
        let span = self
            .reader
            .read_to_end(QName(start.qname.as_bytes()))
            .map_err(|e| Ead3Error::malformed(self.reader.error_position() as u64, e.to_string()))?;
        self.leave();
        let raw = self
            .source
            .get(span.start as usize..span.end as usize)
            .ok_or_else(|| self.malformed(format!("invalid content span in <{}>", start.name())))?;
        Ok(Markup::new(raw))
    }

    /// Skip an element the parent does not declare, recording a warning.
    pub fn skip_unknown(&mut self, parent: &str, element: ElementStart) -> Result<(), Ead3Error> {
        let position = self.position();
        warn!(parent, element = element.name(), position, "skipping unknown element");
        if !element.empty {
            self.reader
                .read_to_end(QName(element.qname.as_bytes()))
                .map_err(|e| Ead3Error::malformed(self.reader.error_position() as u64, e.to_string()))?;
            self.leave();
        }
        self.warnings.push(DecodeWarning::UnknownElement {
            parent: parent.to_string(),
            name: element.qname,
            position,
        });
        Ok(())
    }

    /// Record an attribute the element does not declare.
    pub fn unknown_attribute(&mut self, element: &str, name: &str, value: &str) {
        if name == "xmlns" || name.starts_with("xmlns:") {
            trace!(element, name, "ignoring namespace declaration");
            return;
        }
        debug!(element, attribute = name, "dropping unknown attribute");
        self.warnings.push(DecodeWarning::UnknownAttribute {
            element: element.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Record a second occurrence of a non-repeatable child.
    pub fn repeated_element(&mut self, parent: &str, name: &str) {
        debug!(parent, element = name, "non-repeatable element repeated");
        self.warnings.push(DecodeWarning::RepeatedElement {
            parent: parent.to_string(),
            name: name.to_string(),
        });
    }

    fn unexpected_text(&mut self, element: &str) {
        trace!(element, "ignoring text in element-only content");
        self.warnings.push(DecodeWarning::UnexpectedText {
            element: element.to_string(),
        });
    }
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}
