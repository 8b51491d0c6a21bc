//! # ead3-base
//!
//! Typed object model and round-trip XML codec for EAD3 (Encoded Archival
//! Description, version 3) finding aids.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! codec   → Decoder / Encoder, XML cursor and writer, options, formats
//!   ↓
//! model   → Document and one type per EAD3 element
//!   ↓
//! schema  → Static element metadata: attributes, children, cardinality
//!   ↓
//! error   → Ead3Error, DecodeWarning
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let document = ead3::decode(&std::fs::read("finding-aid.xml")?)?;
//! assert_eq!(document.record_id(), Some("us-x-1"));
//! let bytes = ead3::encode(&document)?;
//! ```

// ============================================================================
// MODULES (dependency order: error → schema → model → codec)
// ============================================================================

/// Error and warning types
pub mod error;

/// Static schema metadata and the element registry
pub mod schema;

/// Typed EAD3 object model
pub mod model;

/// XML decoding and encoding
pub mod codec;

// Re-export the entry points
pub use codec::{Decoded, Decoder, DecodeOptions, Encoder, EncodeOptions, decode, encode};
pub use error::{DecodeWarning, Ead3Error};
pub use model::{Document, Markup, NAMESPACE};
