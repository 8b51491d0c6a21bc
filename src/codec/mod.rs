//! Decoding and encoding between XML bytes and the typed [`Document`] tree.
//!
//! ```text
//! ┌──────────────┐   Decoder    ┌──────────────────────────────────┐
//! │  EAD3 bytes  │ ───────────▶ │ Document                         │
//! │  (UTF-8 XML) │              │  ├─ Control                      │
//! │              │ ◀─────────── │  └─ ArchDesc ─ Did, ..., Dsc      │
//! └──────────────┘   Encoder    └──────────────────────────────────┘
//! ```
//!
//! Every node type implements [`EadElement`]. The implementations are
//! generated from the schema declarations in [`crate::model`]: decoding is a
//! per-type dispatch table from child tag to handler with a skip-and-warn
//! default, encoding walks the fields in schema order. Children that EAD3
//! lets interleave freely are held as one [`EadChoice`] list.

mod format;
mod options;
mod reader;
mod writer;

use std::io::Write;

use rayon::prelude::*;
use tracing::debug;

pub use format::{DocumentFormat, Xml};
#[cfg(feature = "json")]
pub use format::Json;
pub use options::{DecodeOptions, EncodeOptions};
pub use reader::{ChildHandler, ElementStart, XmlCursor, handler};
pub use writer::XmlWriter;

use crate::error::{DecodeWarning, Ead3Error};
use crate::model::Document;
use crate::schema::ElementSchema;

/// A node type of the EAD3 tree with its XML mapping.
pub trait EadElement: Sized {
    /// Element tag.
    const TAG: &'static str;

    /// Schema declaration of this element.
    const SCHEMA: ElementSchema;

    /// Decode the element whose start tag has just been read.
    fn decode(cursor: &mut XmlCursor<'_>, start: ElementStart) -> Result<Self, Ead3Error>;

    /// Encode the element, start tag to end tag.
    fn encode<W: Write>(&self, writer: &mut XmlWriter<W>) -> Result<(), Ead3Error>;
}

/// A repeatable choice between element types, such as the block content of
/// a narrative section. Alternatives stay in document order.
pub trait EadChoice: Sized {
    /// Tags of the alternatives.
    const TAGS: &'static [&'static str];

    /// Decode the alternative whose start tag has just been read.
    fn decode(cursor: &mut XmlCursor<'_>, start: ElementStart) -> Result<Self, Ead3Error>;

    /// Encode the alternative held.
    fn encode<W: Write>(&self, writer: &mut XmlWriter<W>) -> Result<(), Ead3Error>;
}

/// A decoded document together with the non-fatal findings of the decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub document: Document,
    pub warnings: Vec<DecodeWarning>,
}

/// Decodes EAD3 documents.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a document, discarding warnings.
    pub fn decode(&self, input: &[u8]) -> Result<Document, Ead3Error> {
        self.decode_with_warnings(input).map(|decoded| decoded.document)
    }

    /// Decode a document and report skipped elements and dropped attributes.
    pub fn decode_with_warnings(&self, input: &[u8]) -> Result<Decoded, Ead3Error> {
        let source = std::str::from_utf8(input).map_err(|e| {
            Ead3Error::malformed(e.valid_up_to() as u64, format!("invalid UTF-8: {e}"))
        })?;
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);

        let mut cursor = XmlCursor::new(source, &self.options);
        let root = cursor.root()?;
        if root.name() != Document::TAG {
            return Err(Ead3Error::UnexpectedRoot {
                found: root.name().to_string(),
            });
        }
        let document = Document::decode(&mut cursor, root)?;
        cursor.finish()?;

        let warnings = cursor.into_warnings();
        debug!(bytes = input.len(), warnings = warnings.len(), "decoded EAD3 document");
        Ok(Decoded { document, warnings })
    }

    /// Decode independent documents in parallel. Results keep the input order.
    pub fn decode_batch<I>(&self, inputs: &[I]) -> Vec<Result<Decoded, Ead3Error>>
    where
        I: AsRef<[u8]> + Sync,
    {
        let results: Vec<_> = inputs
            .par_iter()
            .map(|input| self.decode_with_warnings(input.as_ref()))
            .collect();
        debug!(
            documents = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "decoded batch"
        );
        results
    }
}

/// Encodes EAD3 documents.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode a document into a fresh buffer.
    pub fn encode(&self, document: &Document) -> Result<Vec<u8>, Ead3Error> {
        let mut buffer = Vec::new();
        self.encode_into(document, &mut buffer)?;
        Ok(buffer)
    }

    pub fn encode_to_string(&self, document: &Document) -> Result<String, Ead3Error> {
        let bytes = self.encode(document)?;
        String::from_utf8(bytes).map_err(|e| Ead3Error::write(format!("invalid UTF-8 output: {e}")))
    }

    /// Encode a document into any sink.
    pub fn encode_into<W: Write>(&self, document: &Document, sink: W) -> Result<(), Ead3Error> {
        let mut writer = XmlWriter::new(sink, &self.options);
        if self.options.xml_declaration {
            writer.declaration()?;
        }
        document.encode(&mut writer)?;
        let mut sink = writer.into_inner();
        if self.options.indent().is_some() {
            sink.write_all(b"\n")
                .map_err(|e| Ead3Error::write(format!("{e}")))?;
        }
        debug!("encoded EAD3 document");
        Ok(())
    }
}

/// Decode a document with default options.
pub fn decode(input: &[u8]) -> Result<Document, Ead3Error> {
    Decoder::new().decode(input)
}

/// Encode a document with default options.
pub fn encode(document: &Document) -> Result<Vec<u8>, Ead3Error> {
    Encoder::new().encode(document)
}
