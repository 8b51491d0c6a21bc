//! Error and warning types for decoding and encoding.

use thiserror::Error;

/// Errors that can occur while decoding or encoding an EAD3 document.
#[derive(Debug, Error)]
pub enum Ead3Error {
    /// The input is not well-formed XML.
    #[error("malformed input at byte {position}: {message}")]
    MalformedInput { position: u64, message: String },

    /// The document root is not `<ead>`.
    #[error("unexpected root element <{found}>, expected <ead>")]
    UnexpectedRoot { found: String },

    /// A required child element is absent from its parent.
    #[error("<{parent}> is missing required child <{child}>")]
    SchemaMismatch {
        parent: &'static str,
        child: &'static str,
    },

    /// A required child was left unset before encoding.
    #[error("cannot encode <{parent}>: required child <{child}> is unset")]
    EncodeInvariant {
        parent: &'static str,
        child: &'static str,
    },

    /// The output sink failed.
    #[error("write error: {0}")]
    Write(String),

    /// JSON serialization error.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(String),
}

impl Ead3Error {
    /// Create a malformed input error.
    pub fn malformed(position: u64, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            position,
            message: message.into(),
        }
    }

    /// Create a missing child error.
    pub fn missing_child(parent: &'static str, child: &'static str) -> Self {
        Self::SchemaMismatch { parent, child }
    }

    /// Create an encode invariant error.
    pub fn unset_child(parent: &'static str, child: &'static str) -> Self {
        Self::EncodeInvariant { parent, child }
    }

    /// Create a write error.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }

    /// Create a JSON error.
    #[cfg(feature = "json")]
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// True for errors caused by input that is well-formed but does not fit the schema.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. } | Self::UnexpectedRoot { .. }
        )
    }
}

/// Non-fatal findings collected while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeWarning {
    /// An element the schema does not declare under its parent; skipped with its subtree.
    #[error("skipped unknown element <{name}> inside <{parent}> at byte {position}")]
    UnknownElement {
        parent: String,
        name: String,
        position: u64,
    },

    /// An attribute the schema does not declare on its element; dropped.
    #[error("dropped unknown attribute {name}=\"{value}\" on <{element}>")]
    UnknownAttribute {
        element: String,
        name: String,
        value: String,
    },

    /// A second occurrence of a non-repeatable child; the last one wins.
    #[error("<{parent}> repeats non-repeatable child <{name}>, keeping the last one")]
    RepeatedElement { parent: String, name: String },

    /// Character data inside an element that only holds child elements.
    #[error("ignored text inside <{element}>")]
    UnexpectedText { element: String },
}
