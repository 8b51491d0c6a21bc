//! Common trait for document serialization formats.

use super::{Decoder, Encoder};
use crate::error::Ead3Error;
use crate::model::Document;

/// Trait for formats a [`Document`] can be read from and written to.
///
/// The XML format is the canonical one and round-trips losslessly.
pub trait DocumentFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Read a document from bytes.
    fn read(&self, input: &[u8]) -> Result<Document, Ead3Error>;

    /// Write a document to bytes.
    fn write(&self, document: &Document) -> Result<Vec<u8>, Ead3Error>;

    /// Check that the input decodes.
    fn validate(&self, input: &[u8]) -> Result<(), Ead3Error> {
        self.read(input).map(|_| ())
    }
}

/// EAD3 XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xml;

impl DocumentFormat for Xml {
    fn name(&self) -> &'static str {
        "EAD3 XML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["xml", "ead"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn read(&self, input: &[u8]) -> Result<Document, Ead3Error> {
        Decoder::new().decode(input)
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, Ead3Error> {
        Encoder::new().encode(document)
    }
}

/// JSON view of the object model.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

#[cfg(feature = "json")]
impl DocumentFormat for Json {
    fn name(&self) -> &'static str {
        "EAD3 JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn read(&self, input: &[u8]) -> Result<Document, Ead3Error> {
        serde_json::from_slice(input).map_err(|e| Ead3Error::json(e.to_string()))
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, Ead3Error> {
        serde_json::to_vec_pretty(document).map_err(|e| Ead3Error::json(e.to_string()))
    }
}
